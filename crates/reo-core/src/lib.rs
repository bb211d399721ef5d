pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, GeneralConfig, PhraseConfig, SpeechConfig};
pub use error::{ConfigError, SpeechError};
pub use types::{PronunciationResult, RecognitionEvent, SpeechOptions, Transcript, TtsOptions};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pronunciation_result_fields() {
        let result = PronunciationResult {
            transcript: "ia ora na".to_string(),
            confidence: 0.92,
            accuracy: 100,
            feedback: "Excellent pronunciation!".to_string(),
            suggestions: vec![],
        };
        assert_eq!(result.transcript, "ia ora na");
        assert_eq!(result.confidence, 0.92);
        assert_eq!(result.accuracy, 100);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_transcript_fields() {
        let transcript = Transcript {
            text: "mauruuru".to_string(),
            confidence: 0.7,
            is_final: true,
        };
        assert_eq!(transcript.text, "mauruuru");
        assert!(transcript.is_final);
    }

    #[test]
    fn test_recognition_event_variants() {
        let end = RecognitionEvent::End;
        assert_eq!(end, RecognitionEvent::End);
        let err = RecognitionEvent::Error("no-speech".to_string());
        assert_ne!(err, end);
    }
}

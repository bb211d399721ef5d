use serde::Deserialize;

/// Outcome of one completed pronunciation attempt. Immutable; a new attempt
/// produces a new value.
#[derive(Debug, Clone, PartialEq)]
pub struct PronunciationResult {
    pub transcript: String,
    /// Recognizer confidence in the transcript, in [0, 1].
    pub confidence: f32,
    /// Similarity to the target phrase as an integer percent, in [0, 100].
    pub accuracy: u8,
    pub feedback: String,
    pub suggestions: Vec<String>,
}

/// Recognition settings, mirrored as the `[speech.recognition]` config section.
#[derive(Debug, Deserialize, Clone)]
pub struct SpeechOptions {
    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default)]
    pub continuous: bool,

    #[serde(default)]
    pub interim_results: bool,

    #[serde(default = "default_max_alternatives")]
    pub max_alternatives: u32,
}

impl Default for SpeechOptions {
    fn default() -> Self {
        Self {
            language: default_language(),
            continuous: false,
            interim_results: false,
            max_alternatives: default_max_alternatives(),
        }
    }
}

/// Synthesis settings, mirrored as the `[speech.synthesis]` config section.
#[derive(Debug, Deserialize, Clone)]
pub struct TtsOptions {
    #[serde(default)]
    pub voice: Option<String>,

    #[serde(default = "default_unit")]
    pub rate: f32,

    #[serde(default = "default_unit")]
    pub pitch: f32,

    #[serde(default = "default_unit")]
    pub volume: f32,

    #[serde(default = "default_language")]
    pub lang: String,
}

impl Default for TtsOptions {
    fn default() -> Self {
        Self {
            voice: None,
            rate: default_unit(),
            pitch: default_unit(),
            volume: default_unit(),
            lang: default_language(),
        }
    }
}

/// A single hypothesis emitted by a recognition session.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    pub text: String,
    pub confidence: f32,
    pub is_final: bool,
}

/// Events a provider delivers while a recognition session is live.
///
/// `Error` carries the platform error code (e.g. `"no-speech"`), mapped to a
/// user-facing [`SpeechError`](crate::SpeechError) by the adapter. `End` marks
/// the session closing, with or without a transcript having been produced.
#[derive(Debug, Clone, PartialEq)]
pub enum RecognitionEvent {
    Transcript(Transcript),
    Error(String),
    End,
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_max_alternatives() -> u32 {
    1
}

fn default_unit() -> f32 {
    1.0
}

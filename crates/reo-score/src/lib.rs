pub mod feedback;
pub mod similarity;

pub use feedback::{feedback_for, Feedback, FeedbackTier};
pub use similarity::{accuracy, levenshtein, normalize, similarity};

use reo_core::PronunciationResult;

/// Score a recognized transcript against the target phrase and attach tiered
/// feedback. Both strings are normalized (trimmed, lowercased) before
/// comparison; the returned transcript keeps the recognizer's original casing.
pub fn assess(transcript: &str, confidence: f32, target: &str) -> PronunciationResult {
    let accuracy = accuracy(&normalize(transcript), &normalize(target));
    let feedback = feedback_for(accuracy);
    PronunciationResult {
        transcript: transcript.to_string(),
        confidence,
        accuracy,
        feedback: feedback.message.to_string(),
        suggestions: feedback
            .suggestions
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}

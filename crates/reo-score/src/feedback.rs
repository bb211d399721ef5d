/// Feedback tier for an accuracy percent. Boundaries are inclusive lower
/// bounds: 90, 75 and 50.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTier {
    Excellent,
    Good,
    GettingThere,
    KeepPracticing,
}

impl FeedbackTier {
    pub fn for_accuracy(accuracy: u8) -> Self {
        match accuracy {
            90..=u8::MAX => FeedbackTier::Excellent,
            75..=89 => FeedbackTier::Good,
            50..=74 => FeedbackTier::GettingThere,
            _ => FeedbackTier::KeepPracticing,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            FeedbackTier::Excellent => "Excellent pronunciation! You sound great.",
            FeedbackTier::Good => "Good job! Your pronunciation is quite clear.",
            FeedbackTier::GettingThere => "You're getting there. Keep it up!",
            FeedbackTier::KeepPracticing => "Keep practicing, every attempt helps.",
        }
    }

    pub fn suggestions(&self) -> &'static [&'static str] {
        match self {
            FeedbackTier::Excellent => &[],
            FeedbackTier::Good => &["Try to pronounce each syllable more clearly"],
            FeedbackTier::GettingThere => &[
                "Listen to the target phrase again before repeating",
                "Try breaking the phrase into syllables",
            ],
            FeedbackTier::KeepPracticing => &[
                "Listen to the native audio first",
                "Practice the phrase slowly",
                "Record yourself and compare with the original",
            ],
        }
    }
}

/// Tiered feedback for an accuracy percent: a message plus ordered suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub tier: FeedbackTier,
    pub message: &'static str,
    pub suggestions: &'static [&'static str],
}

pub fn feedback_for(accuracy: u8) -> Feedback {
    let tier = FeedbackTier::for_accuracy(accuracy);
    Feedback {
        tier,
        message: tier.message(),
        suggestions: tier.suggestions(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries_exact() {
        assert_eq!(FeedbackTier::for_accuracy(100), FeedbackTier::Excellent);
        assert_eq!(FeedbackTier::for_accuracy(90), FeedbackTier::Excellent);
        assert_eq!(FeedbackTier::for_accuracy(89), FeedbackTier::Good);
        assert_eq!(FeedbackTier::for_accuracy(75), FeedbackTier::Good);
        assert_eq!(FeedbackTier::for_accuracy(74), FeedbackTier::GettingThere);
        assert_eq!(FeedbackTier::for_accuracy(50), FeedbackTier::GettingThere);
        assert_eq!(FeedbackTier::for_accuracy(49), FeedbackTier::KeepPracticing);
        assert_eq!(FeedbackTier::for_accuracy(0), FeedbackTier::KeepPracticing);
    }

    #[test]
    fn test_suggestion_counts_per_tier() {
        assert_eq!(feedback_for(95).suggestions.len(), 0);
        assert_eq!(feedback_for(80).suggestions.len(), 1);
        assert_eq!(feedback_for(60).suggestions.len(), 2);
        assert_eq!(feedback_for(10).suggestions.len(), 3);
    }

    #[test]
    fn test_messages_nonempty_and_distinct() {
        let tiers = [
            FeedbackTier::Excellent,
            FeedbackTier::Good,
            FeedbackTier::GettingThere,
            FeedbackTier::KeepPracticing,
        ];
        for (i, a) in tiers.iter().enumerate() {
            assert!(!a.message().is_empty());
            for b in &tiers[i + 1..] {
                assert_ne!(a.message(), b.message());
            }
        }
    }

    #[test]
    fn test_suggestions_ordered_and_stable() {
        let f = feedback_for(0);
        assert_eq!(f.suggestions[0], "Listen to the native audio first");
        assert_eq!(f.suggestions[1], "Practice the phrase slowly");
        assert_eq!(
            f.suggestions[2],
            "Record yourself and compare with the original"
        );
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("environment variable not found: {0}")]
    EnvVarNotFound(String),
}

/// Errors surfaced to the caller of a speech adapter operation.
///
/// Messages are user-facing; every failure leaves the adapter idle and ready
/// for the next attempt.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpeechError {
    #[error("speech recognition is not supported by this provider")]
    RecognitionUnsupported,

    #[error("speech synthesis is not supported by this provider")]
    SynthesisUnsupported,

    #[error("microphone access was denied, please allow microphone access and try again")]
    PermissionDenied,

    #[error("no speech was detected, please try again")]
    NoSpeech,

    #[error("no microphone was found, please check your audio settings")]
    AudioCapture,

    #[error("a network error interrupted recognition, please check your connection")]
    Network,

    #[error("speech recognition failed: {0}")]
    RecognitionFailed(String),

    #[error("a recognition session is already active")]
    SessionActive,

    #[error("speech synthesis failed: {0}")]
    SynthesisFailed(String),

    #[error("provider initialization failed: {0}")]
    InitializationFailed(String),

    #[error("speech provider not found: {0}")]
    ProviderNotFound(String),
}

impl SpeechError {
    /// Map a platform recognition error code to a user-facing error.
    pub fn from_platform_code(code: &str) -> Self {
        match code {
            "no-speech" => SpeechError::NoSpeech,
            "audio-capture" => SpeechError::AudioCapture,
            "not-allowed" | "service-not-allowed" => SpeechError::PermissionDenied,
            "network" => SpeechError::Network,
            other => SpeechError::RecognitionFailed(other.to_string()),
        }
    }
}

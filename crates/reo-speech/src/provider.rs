use async_trait::async_trait;
use reo_core::{RecognitionEvent, SpeechError, SpeechOptions, TtsOptions};
use tokio::sync::mpsc;

/// A platform speech capability, injected into
/// [`SpeechAdapter`](crate::SpeechAdapter).
///
/// Implementations are registered via
/// [`ProviderRegistry`](crate::ProviderRegistry). Recognition is
/// session-based: [`start_recognition`](Self::start_recognition) opens a
/// session and delivers [`RecognitionEvent`]s on the returned channel until
/// `End` arrives or the receiver is dropped.
#[async_trait]
pub trait SpeechProvider: Send + Sync {
    /// Returns the provider name (e.g. `"scripted"`).
    fn name(&self) -> &str;

    /// Whether this provider can recognize speech.
    fn supports_recognition(&self) -> bool;

    /// Whether this provider can synthesize speech.
    fn supports_synthesis(&self) -> bool;

    /// One-time initialisation with provider-specific TOML configuration.
    async fn initialize(&mut self, config: toml::Value) -> Result<(), SpeechError>;

    /// Request microphone access. Must resolve before a recognition session
    /// is opened.
    async fn request_permission(&self) -> Result<(), SpeechError>;

    /// Open a recognition session and return its event channel.
    fn start_recognition(
        &self,
        options: &SpeechOptions,
    ) -> Result<mpsc::UnboundedReceiver<RecognitionEvent>, SpeechError>;

    /// Stop the active recognition session, if any. Idempotent.
    fn stop_recognition(&self);

    /// Speak `text`, resolving once the utterance finishes.
    async fn synthesize(&self, text: &str, options: &TtsOptions) -> Result<(), SpeechError>;

    /// Cancel the in-flight utterance, if any. Idempotent.
    fn cancel_synthesis(&self);
}

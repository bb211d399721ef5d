use crate::provider::SpeechProvider;
use reo_core::{PronunciationResult, RecognitionEvent, SpeechError, SpeechOptions, TtsOptions};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;

/// A recognition session with no result by this deadline is force-stopped.
const WATCHDOG: Duration = Duration::from_secs(10);

/// Bridges the scorer and feedback policy to a [`SpeechProvider`], managing
/// permission, session lifecycle and the recognition watchdog.
///
/// At most one recognition session and one utterance are in flight per
/// adapter: a second [`start_listening`](Self::start_listening) is rejected
/// with [`SpeechError::SessionActive`], while [`speak`](Self::speak) cancels
/// the previous utterance before starting the next. Every failure leaves the
/// adapter idle.
pub struct SpeechAdapter {
    provider: Arc<dyn SpeechProvider>,
    listening: AtomicBool,
    stop_tx: Mutex<Option<mpsc::UnboundedSender<()>>>,
}

/// Resets the session flag when a listening attempt exits by any path.
struct SessionGuard<'a> {
    adapter: &'a SpeechAdapter,
}

impl Drop for SessionGuard<'_> {
    fn drop(&mut self) {
        *self.adapter.stop_tx.lock().unwrap() = None;
        self.adapter.listening.store(false, Ordering::Release);
    }
}

impl SpeechAdapter {
    pub fn new(provider: Arc<dyn SpeechProvider>) -> Self {
        Self {
            provider,
            listening: AtomicBool::new(false),
            stop_tx: Mutex::new(None),
        }
    }

    pub fn is_listening(&self) -> bool {
        self.listening.load(Ordering::Acquire)
    }

    /// Request microphone access without opening a session.
    pub async fn request_permission(&self) -> Result<(), SpeechError> {
        self.provider.request_permission().await
    }

    /// Listen for one attempt at `target` and score the result.
    ///
    /// Fails fast when the provider lacks recognition or a session is already
    /// active. Otherwise acquires permission, opens a provider session and
    /// waits for the first final transcript; interim hypotheses and anything
    /// after the first final transcript are ignored. A session ending without
    /// a transcript, whether naturally, via [`stop_listening`](Self::stop_listening)
    /// or through the watchdog, surfaces as [`SpeechError::NoSpeech`].
    pub async fn start_listening(
        &self,
        target: &str,
        options: &SpeechOptions,
    ) -> Result<PronunciationResult, SpeechError> {
        if !self.provider.supports_recognition() {
            return Err(SpeechError::RecognitionUnsupported);
        }
        if self
            .listening
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(SpeechError::SessionActive);
        }
        let _guard = SessionGuard { adapter: self };

        self.provider.request_permission().await?;

        let (stop_tx, mut stop_rx) = mpsc::unbounded_channel();
        *self.stop_tx.lock().unwrap() = Some(stop_tx);

        let mut events = self.provider.start_recognition(options)?;
        tracing::debug!(target_phrase = %target, language = %options.language, "listening");

        let watchdog = tokio::time::sleep(WATCHDOG);
        tokio::pin!(watchdog);

        let transcript = loop {
            tokio::select! {
                event = events.recv() => match event {
                    Some(RecognitionEvent::Transcript(t)) if t.is_final => {
                        // First final transcript wins
                        self.provider.stop_recognition();
                        break Some(t);
                    }
                    Some(RecognitionEvent::Transcript(_)) => {}
                    Some(RecognitionEvent::Error(code)) => {
                        self.provider.stop_recognition();
                        return Err(SpeechError::from_platform_code(&code));
                    }
                    Some(RecognitionEvent::End) | None => break None,
                },
                _ = stop_rx.recv() => {
                    self.provider.stop_recognition();
                    break None;
                }
                _ = &mut watchdog => {
                    tracing::debug!("recognition watchdog fired, stopping session");
                    self.provider.stop_recognition();
                    break None;
                }
            }
        };

        match transcript {
            Some(t) => Ok(reo_score::assess(&t.text, t.confidence, target)),
            None => Err(SpeechError::NoSpeech),
        }
    }

    /// Stop the active recognition session, if any. Safe to call when idle.
    pub fn stop_listening(&self) {
        if let Some(tx) = self.stop_tx.lock().unwrap().take() {
            let _ = tx.send(());
        }
    }

    /// Speak `text`, cancelling any in-flight utterance first.
    pub async fn speak(&self, text: &str, options: &TtsOptions) -> Result<(), SpeechError> {
        if !self.provider.supports_synthesis() {
            return Err(SpeechError::SynthesisUnsupported);
        }
        self.provider.cancel_synthesis();
        self.provider.synthesize(text, options).await
    }

    /// Stop listening and speaking; for component teardown.
    pub fn cleanup(&self) {
        self.stop_listening();
        self.provider.cancel_synthesis();
    }
}

use crate::provider::SpeechProvider;
use async_trait::async_trait;
use reo_core::{RecognitionEvent, SpeechError, SpeechOptions, Transcript, TtsOptions};
use serde::Deserialize;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

/// What the scripted provider does next within a recognition session.
#[derive(Debug, Clone)]
pub enum ScriptedReply {
    /// Emit an interim (non-final) transcript and keep the session open.
    Partial(String),
    /// Emit a final transcript, then end the session.
    Final { text: String, confidence: f32 },
    /// Emit a platform error code, ending the session.
    Error(String),
    /// End the session without any transcript.
    Silence,
    /// Never reply; the session only ends when stopped.
    Hang,
}

#[derive(Debug, Deserialize)]
struct ScriptedConfig {
    #[serde(default)]
    transcripts: Vec<String>,

    #[serde(default = "default_confidence")]
    confidence: f32,

    #[serde(default)]
    delay_ms: u64,
}

fn default_confidence() -> f32 {
    1.0
}

/// A deterministic in-process provider: recognition sessions consume a queue
/// of [`ScriptedReply`]s and synthesis is a cancellable timed wait. Serves
/// tests and the demo binary in place of a real platform capability.
pub struct ScriptedProvider {
    replies: Arc<Mutex<VecDeque<ScriptedReply>>>,
    delay: Duration,
    grant_permission: bool,
    recognition: bool,
    synthesis: bool,
    session_count: AtomicUsize,
    utterance_count: AtomicUsize,
    stop_tx: Mutex<Option<mpsc::UnboundedSender<()>>>,
    cancel_tx: Mutex<Option<oneshot::Sender<()>>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            delay: Duration::ZERO,
            grant_permission: true,
            recognition: true,
            synthesis: true,
            session_count: AtomicUsize::new(0),
            utterance_count: AtomicUsize::new(0),
            stop_tx: Mutex::new(None),
            cancel_tx: Mutex::new(None),
        }
    }

    pub fn with_reply(self, reply: ScriptedReply) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn with_replies(self, replies: impl IntoIterator<Item = ScriptedReply>) -> Self {
        self.replies.lock().unwrap().extend(replies);
        self
    }

    /// Delay before each reply and the duration of each utterance.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn deny_permission(mut self) -> Self {
        self.grant_permission = false;
        self
    }

    pub fn without_recognition(mut self) -> Self {
        self.recognition = false;
        self
    }

    pub fn without_synthesis(mut self) -> Self {
        self.synthesis = false;
        self
    }

    /// Number of recognition sessions opened so far.
    pub fn session_count(&self) -> usize {
        self.session_count.load(Ordering::Relaxed)
    }

    /// Number of utterances started so far.
    pub fn utterance_count(&self) -> usize {
        self.utterance_count.load(Ordering::Relaxed)
    }
}

impl Default for ScriptedProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn supports_recognition(&self) -> bool {
        self.recognition
    }

    fn supports_synthesis(&self) -> bool {
        self.synthesis
    }

    async fn initialize(&mut self, config: toml::Value) -> Result<(), SpeechError> {
        let config: ScriptedConfig = config
            .try_into()
            .map_err(|e| SpeechError::InitializationFailed(e.to_string()))?;
        self.delay = Duration::from_millis(config.delay_ms);
        let mut replies = self.replies.lock().unwrap();
        for text in config.transcripts {
            replies.push_back(ScriptedReply::Final {
                text,
                confidence: config.confidence,
            });
        }
        Ok(())
    }

    async fn request_permission(&self) -> Result<(), SpeechError> {
        if self.grant_permission {
            Ok(())
        } else {
            Err(SpeechError::PermissionDenied)
        }
    }

    fn start_recognition(
        &self,
        _options: &SpeechOptions,
    ) -> Result<mpsc::UnboundedReceiver<RecognitionEvent>, SpeechError> {
        if !self.recognition {
            return Err(SpeechError::RecognitionUnsupported);
        }
        self.session_count.fetch_add(1, Ordering::Relaxed);

        let (tx, rx) = mpsc::unbounded_channel();
        let (stop_tx, mut stop_rx) = mpsc::unbounded_channel();
        *self.stop_tx.lock().unwrap() = Some(stop_tx);

        let replies = Arc::clone(&self.replies);
        let delay = self.delay;
        tokio::spawn(async move {
            loop {
                let reply = replies
                    .lock()
                    .unwrap()
                    .pop_front()
                    .unwrap_or(ScriptedReply::Silence);

                if let ScriptedReply::Hang = reply {
                    let _ = stop_rx.recv().await;
                    let _ = tx.send(RecognitionEvent::End);
                    break;
                }

                tokio::select! {
                    _ = tokio::time::sleep(delay) => {}
                    _ = stop_rx.recv() => {
                        let _ = tx.send(RecognitionEvent::End);
                        break;
                    }
                }

                match reply {
                    ScriptedReply::Partial(text) => {
                        let _ = tx.send(RecognitionEvent::Transcript(Transcript {
                            text,
                            confidence: 0.0,
                            is_final: false,
                        }));
                        // Session stays open for the next reply
                    }
                    ScriptedReply::Final { text, confidence } => {
                        let _ = tx.send(RecognitionEvent::Transcript(Transcript {
                            text,
                            confidence,
                            is_final: true,
                        }));
                        let _ = tx.send(RecognitionEvent::End);
                        break;
                    }
                    ScriptedReply::Error(code) => {
                        let _ = tx.send(RecognitionEvent::Error(code));
                        break;
                    }
                    ScriptedReply::Silence => {
                        let _ = tx.send(RecognitionEvent::End);
                        break;
                    }
                    ScriptedReply::Hang => unreachable!(),
                }
            }
        });

        Ok(rx)
    }

    fn stop_recognition(&self) {
        if let Some(tx) = self.stop_tx.lock().unwrap().take() {
            let _ = tx.send(());
        }
    }

    async fn synthesize(&self, text: &str, _options: &TtsOptions) -> Result<(), SpeechError> {
        if !self.synthesis {
            return Err(SpeechError::SynthesisUnsupported);
        }
        self.utterance_count.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(text = %text, "scripted utterance started");

        let (cancel_tx, cancel_rx) = oneshot::channel();
        *self.cancel_tx.lock().unwrap() = Some(cancel_tx);

        tokio::select! {
            _ = tokio::time::sleep(self.delay) => Ok(()),
            _ = cancel_rx => Err(SpeechError::SynthesisFailed("interrupted".to_string())),
        }
    }

    fn cancel_synthesis(&self) {
        if let Some(tx) = self.cancel_tx.lock().unwrap().take() {
            let _ = tx.send(());
        }
    }
}

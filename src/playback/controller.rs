use std::sync::Arc;

use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use super::engine::{SpeechEngine, Utterance};

/// Lifecycle state of the playback slot.
#[derive(Debug, Clone, Default)]
pub struct PlaybackState {
    /// True between the utterance's start and its end/error/cancel
    pub is_speaking: bool,

    /// Text of the active utterance, empty when idle
    pub current_text: String,

    /// User-visible message from the last synthesis error
    pub error: Option<String>,
}

/// An utterance task plus the signal that cancels it. The signal is owned by
/// the controller so a cancel reaches the utterance even before its task has
/// invoked the engine.
struct ActiveUtterance {
    task: JoinHandle<()>,
    cancel_tx: oneshot::Sender<()>,
}

/// Owns the single playback utterance slot.
///
/// At most one utterance is active at a time: `speak` cancels and joins any
/// active utterance before starting the new one, so two speaking states are
/// never simultaneously true.
pub struct PlaybackController {
    engine: Arc<dyn SpeechEngine>,
    state: Arc<Mutex<PlaybackState>>,
    active: Mutex<Option<ActiveUtterance>>,
}

impl PlaybackController {
    pub fn new(engine: Arc<dyn SpeechEngine>) -> Self {
        Self {
            engine,
            state: Arc::new(Mutex::new(PlaybackState::default())),
            active: Mutex::new(None),
        }
    }

    /// Speak `text` in the voice configured for `language`.
    ///
    /// No-op if the text is empty after trimming. Any active utterance is
    /// cancelled first.
    pub async fn speak(&self, text: &str, language: &str) {
        if text.trim().is_empty() {
            debug!("Ignoring empty playback request");
            return;
        }

        self.cancel_active().await;

        info!("Speaking {} chars ({})", text.len(), language);

        {
            let mut state = self.state.lock().await;
            state.is_speaking = true;
            state.current_text = text.to_string();
            state.error = None;
        }

        let engine = Arc::clone(&self.engine);
        let state = Arc::clone(&self.state);
        let utterance = Utterance::new(text, language);
        let (cancel_tx, cancel_rx) = oneshot::channel();

        let task = tokio::spawn(async move {
            tokio::select! {
                result = engine.speak(utterance) => match result {
                    Ok(outcome) => {
                        debug!("Utterance finished: {:?}", outcome);
                        let mut state = state.lock().await;
                        state.is_speaking = false;
                        state.current_text.clear();
                    }
                    Err(e) => {
                        error!("Synthesis failed: {}", e);
                        let mut state = state.lock().await;
                        state.is_speaking = false;
                        state.current_text.clear();
                        state.error = Some(e.to_string());
                    }
                },
                _ = cancel_rx => {
                    // The cancel may arrive before the engine was invoked;
                    // stop the engine in case the utterance already started.
                    engine.cancel();
                    let mut state = state.lock().await;
                    state.is_speaking = false;
                    state.current_text.clear();
                }
            }
        });

        let mut active = self.active.lock().await;
        *active = Some(ActiveUtterance { task, cancel_tx });
    }

    /// Cancel the active utterance unconditionally and clear the speaking
    /// state.
    pub async fn stop(&self) {
        self.cancel_active().await;
    }

    /// Current playback state.
    pub async fn state(&self) -> PlaybackState {
        self.state.lock().await.clone()
    }

    pub async fn is_speaking(&self) -> bool {
        self.state.lock().await.is_speaking
    }

    async fn cancel_active(&self) {
        let active = {
            let mut slot = self.active.lock().await;
            slot.take()
        };

        if let Some(active) = active {
            // Send fails harmlessly once the task has already finished
            let _ = active.cancel_tx.send(());
            if let Err(e) = active.task.await {
                error!("Utterance task panicked: {}", e);
            }
        }

        let mut state = self.state.lock().await;
        state.is_speaking = false;
        state.current_text.clear();
    }
}

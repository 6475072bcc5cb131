use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, Mutex, Notify};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tracing::{error, info, warn};

use super::microphone::MicrophoneBackend;
use super::session::{CapturePhase, CaptureSession, Tick};
use crate::error::CaptureError;
use crate::providers::{Transcript, TranscriptionProvider};

/// Event emitted to the orchestrator when a capture cycle finishes.
#[derive(Debug, Clone)]
pub enum RecorderEvent {
    /// Transcription succeeded
    Transcript(Transcript),
    /// The attempt failed; carries the user-visible, retry-eligible message
    Failed(String),
}

/// Snapshot of recorder state for status display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureStats {
    /// Session identifier
    pub session_id: String,

    /// Whether the microphone is currently capturing
    pub is_recording: bool,

    /// Whether a transcription request is in flight
    pub is_transcribing: bool,

    /// Seconds recorded so far (bounded by the cap)
    pub elapsed_secs: u32,

    /// Number of audio chunks accumulated
    pub chunks_count: usize,

    /// When the recorder was created
    pub started_at: DateTime<Utc>,
}

/// A recorder that manages one capture slot: microphone lifecycle, the
/// 1-second timer with its 10-second cap, and transcription submission.
///
/// Only one capture may be active at a time; `start` while active is
/// rejected. On stop (explicit or automatic at the cap) the device is
/// released, the accumulated audio is submitted to the transcription
/// provider, and the result is emitted on the event channel.
pub struct Recorder {
    session_id: String,
    session: Arc<Mutex<CaptureSession>>,
    backend: Arc<Mutex<Box<dyn MicrophoneBackend>>>,
    provider: Arc<dyn TranscriptionProvider>,
    event_tx: mpsc::Sender<RecorderEvent>,
    started_at: DateTime<Utc>,
    is_active: Arc<AtomicBool>,
    stop_signal: Arc<Notify>,
    capture_task: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl Recorder {
    pub fn new(
        backend: Box<dyn MicrophoneBackend>,
        provider: Arc<dyn TranscriptionProvider>,
        event_tx: mpsc::Sender<RecorderEvent>,
    ) -> Self {
        Self {
            session_id: format!("capture-{}", uuid::Uuid::new_v4()),
            session: Arc::new(Mutex::new(CaptureSession::new())),
            backend: Arc::new(Mutex::new(backend)),
            provider,
            event_tx,
            started_at: Utc::now(),
            is_active: Arc::new(AtomicBool::new(false)),
            stop_signal: Arc::new(Notify::new()),
            capture_task: Arc::new(Mutex::new(None)),
        }
    }

    /// Start a capture cycle: request microphone access, begin accumulating
    /// chunks, and start the 1-second tick timer.
    ///
    /// Fails with `PermissionDenied` (recorded in session error state) if
    /// the device refuses access; capture state reverts to idle.
    pub async fn start(&self) -> Result<(), CaptureError> {
        if self.is_active.load(Ordering::SeqCst) {
            warn!("Capture already in progress: {}", self.session_id);
            return Ok(());
        }

        {
            let mut session = self.session.lock().await;
            if !session.begin() {
                warn!("Capture session not idle, ignoring start: {}", self.session_id);
                return Ok(());
            }
        }

        let chunk_rx = {
            let mut backend = self.backend.lock().await;
            info!(
                "Starting capture session: {} (backend: {})",
                self.session_id,
                backend.name()
            );
            match backend.open().await {
                Ok(rx) => rx,
                Err(e) => {
                    let mut session = self.session.lock().await;
                    session.fail(e.to_string());
                    error!("Microphone access failed: {}", e);
                    return Err(e);
                }
            }
        };

        self.is_active.store(true, Ordering::SeqCst);

        let session = Arc::clone(&self.session);
        let backend = Arc::clone(&self.backend);
        let provider = Arc::clone(&self.provider);
        let event_tx = self.event_tx.clone();
        let stop_signal = Arc::clone(&self.stop_signal);
        let is_active = Arc::clone(&self.is_active);
        let session_id = self.session_id.clone();

        let task = tokio::spawn(async move {
            info!("Capture task started: {}", session_id);

            let tick_period = Duration::from_secs(1);
            let mut timer = interval_at(Instant::now() + tick_period, tick_period);
            let mut chunk_rx = chunk_rx;

            loop {
                tokio::select! {
                    chunk = chunk_rx.recv() => {
                        match chunk {
                            Some(data) => {
                                session.lock().await.append_chunk(data);
                            }
                            None => {
                                // Device stream ended on its own
                                break;
                            }
                        }
                    }
                    _ = timer.tick() => {
                        let outcome = session.lock().await.tick();
                        if outcome == Tick::CapReached {
                            info!("Recording cap reached, stopping capture: {}", session_id);
                            break;
                        }
                    }
                    _ = stop_signal.notified() => {
                        break;
                    }
                }
            }

            // Release the microphone before submitting audio
            if let Err(e) = backend.lock().await.close().await {
                error!("Failed to close microphone backend: {}", e);
            }

            // Chunks the device delivered before the stop are still queued
            // in the channel; fold them into the session so none of the
            // captured audio is lost.
            {
                let mut session = session.lock().await;
                while let Ok(data) = chunk_rx.try_recv() {
                    session.append_chunk(data);
                }
            }

            Self::submit(&session, provider.as_ref(), &event_tx).await;

            is_active.store(false, Ordering::SeqCst);
            info!("Capture task stopped: {}", session_id);
        });

        {
            let mut handle = self.capture_task.lock().await;
            *handle = Some(task);
        }

        Ok(())
    }

    /// Stop the capture explicitly and wait for the cycle (including
    /// transcription submission) to finish.
    pub async fn stop(&self) {
        if !self.is_active.load(Ordering::SeqCst) {
            warn!("Capture not active: {}", self.session_id);
            return;
        }

        info!("Stopping capture session: {}", self.session_id);
        self.stop_signal.notify_one();
        self.join_capture_task().await;
    }

    /// Wait for an auto-stopped capture cycle to finish. Used after the
    /// 10-second cap forces a stop from inside the capture task.
    pub async fn wait_until_idle(&self) {
        self.join_capture_task().await;
    }

    async fn join_capture_task(&self) {
        let task = {
            let mut handle = self.capture_task.lock().await;
            handle.take()
        };
        if let Some(task) = task {
            if let Err(e) = task.await {
                error!("Capture task panicked: {}", e);
            }
        }
    }

    /// Clear all session state. Ignored while a capture or transcription is
    /// in flight; returns whether the reset was applied.
    pub async fn reset(&self) -> bool {
        let mut session = self.session.lock().await;
        let applied = session.reset();
        if !applied {
            warn!("Reset ignored, capture in flight: {}", self.session_id);
        }
        applied
    }

    /// Current recorder statistics.
    pub async fn snapshot(&self) -> CaptureStats {
        let session = self.session.lock().await;
        CaptureStats {
            session_id: self.session_id.clone(),
            is_recording: session.phase() == CapturePhase::Recording,
            is_transcribing: session.phase() == CapturePhase::Transcribing,
            elapsed_secs: session.elapsed_secs(),
            chunks_count: session.chunk_count(),
            started_at: self.started_at,
        }
    }

    /// Transcript from the last completed cycle, if any.
    pub async fn transcript(&self) -> Option<Transcript> {
        self.session.lock().await.transcript().cloned()
    }

    /// User-visible error from the last failed attempt, if any.
    pub async fn error(&self) -> Option<String> {
        self.session.lock().await.error().map(str::to_string)
    }

    /// Concatenate the accumulated audio and submit it for transcription.
    /// With zero chunks no network call is made.
    async fn submit(
        session: &Arc<Mutex<CaptureSession>>,
        provider: &dyn TranscriptionProvider,
        event_tx: &mpsc::Sender<RecorderEvent>,
    ) {
        let payload = {
            let mut session = session.lock().await;
            session.take_payload()
        };

        let payload = match payload {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Skipping transcription: {}", e);
                let _ = event_tx.send(RecorderEvent::Failed(e.to_string())).await;
                return;
            }
        };

        match provider.transcribe(payload).await {
            Ok(transcript) => {
                {
                    let mut session = session.lock().await;
                    session.complete(transcript.clone());
                }
                let _ = event_tx.send(RecorderEvent::Transcript(transcript)).await;
            }
            Err(e) => {
                error!("Transcription failed: {}", e);
                let message = CaptureError::TranscriptionFailed(e).to_string();
                {
                    let mut session = session.lock().await;
                    session.fail(message.clone());
                }
                let _ = event_tx.send(RecorderEvent::Failed(message)).await;
            }
        }
    }
}

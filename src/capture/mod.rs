//! Microphone capture and transcription submission
//!
//! This module provides one capture cycle as an explicit state machine:
//! - `CaptureSession`: Idle -> Recording -> Transcribing -> Idle transitions,
//!   chunk accumulation, and the 10-second cap
//! - `MicrophoneBackend`: the device seam (mocked in tests)
//! - `Recorder`: wires a backend and a transcription provider around the
//!   session and emits the transcript to the orchestrator

mod microphone;
mod recorder;
mod session;

pub use microphone::MicrophoneBackend;
pub use recorder::{CaptureStats, Recorder, RecorderEvent};
pub use session::{CapturePhase, CaptureSession, Tick, MAX_RECORDING_SECS};

pub mod capture;
pub mod config;
pub mod error;
pub mod http;
pub mod language;
pub mod orchestrator;
pub mod playback;
pub mod providers;

pub use capture::{
    CapturePhase, CaptureSession, CaptureStats, MicrophoneBackend, Recorder, RecorderEvent,
    MAX_RECORDING_SECS,
};
pub use config::Config;
pub use error::{CaptureError, SynthesisError, TranscriptionError, TranslationError};
pub use http::{create_router, AppState};
pub use language::{Language, SUPPORTED_LANGUAGES};
pub use orchestrator::Orchestrator;
pub use playback::{PlaybackController, PlaybackState, SpeechEngine, Utterance, UtteranceOutcome};
pub use providers::{
    ChatTranslationClient, Transcript, TranscriptionProvider, TranslationProvider,
    TranslationRequest, WhisperApiClient,
};

//! Clients for the two hosted AI services
//!
//! Both are single-shot request/response wrappers: no retries, no streaming.
//! The traits are the seams mocked in tests and by the HTTP handlers.

pub mod transcription;
pub mod translation;

pub use transcription::{Transcript, TranscriptionProvider, WhisperApiClient};
pub use translation::{ChatTranslationClient, TranslationProvider, TranslationRequest};

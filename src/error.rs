use thiserror::Error;

/// Errors raised during microphone capture and transcription submission.
///
/// Every variant maps to a short user-visible message; errors are terminal
/// for the attempt and never retried automatically.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Failed to access microphone. Please check permissions.")]
    PermissionDenied,

    #[error("No audio recorded.")]
    NoAudioRecorded,

    #[error("Failed to transcribe audio. Please try again.")]
    TranscriptionFailed(#[source] TranscriptionError),
}

/// Provider-level errors from the hosted speech-to-text model.
#[derive(Debug, Error)]
pub enum TranscriptionError {
    #[error("Transcription request failed: {0}")]
    Http(String),

    #[error("Transcription service returned status {0}")]
    Status(u16),

    #[error("Failed to decode transcription response: {0}")]
    Decode(String),
}

/// Errors from the translation pipeline.
#[derive(Debug, Error)]
pub enum TranslationError {
    /// Missing or empty required field (400-equivalent).
    #[error("Missing required fields")]
    InvalidRequest,

    /// Upstream text-generation failure (500-equivalent).
    #[error("Translation service error")]
    Service(String),
}

/// Speech-engine runtime errors during playback.
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("Speech synthesis error: {0}")]
    Engine(String),
}

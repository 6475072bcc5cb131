use std::sync::Arc;

use crate::providers::{TranscriptionProvider, TranslationProvider};

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Hosted speech-to-text client
    pub transcription: Arc<dyn TranscriptionProvider>,

    /// Hosted translation client
    pub translation: Arc<dyn TranslationProvider>,
}

impl AppState {
    pub fn new(
        transcription: Arc<dyn TranscriptionProvider>,
        translation: Arc<dyn TranslationProvider>,
    ) -> Self {
        Self {
            transcription,
            translation,
        }
    }
}

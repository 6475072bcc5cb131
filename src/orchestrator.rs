use tracing::{debug, info, warn};

use crate::language::{DEFAULT_DETECTED_LANGUAGE, DEFAULT_OUTPUT_LANGUAGE};
use crate::providers::{TranslationProvider, TranslationRequest};

/// Session-scoped state tying the pipeline together: the current transcript
/// and detected language, the translated text, and the selected output
/// language.
///
/// Translation is never automatic: a new transcript discards any previous
/// translation, and the user must trigger `generate_translation` explicitly.
#[derive(Debug)]
pub struct Orchestrator {
    transcript: String,
    detected_language: String,
    translated_text: String,
    output_language: String,
    is_translating: bool,
    error: Option<String>,
}

impl Orchestrator {
    pub fn new() -> Self {
        Self {
            transcript: String::new(),
            detected_language: DEFAULT_DETECTED_LANGUAGE.to_string(),
            translated_text: String::new(),
            output_language: DEFAULT_OUTPUT_LANGUAGE.to_string(),
            is_translating: false,
            error: None,
        }
    }

    /// Store a newly transcribed utterance. Any previously translated text
    /// is discarded.
    pub fn apply_transcript(&mut self, text: impl Into<String>, language: impl Into<String>) {
        self.transcript = text.into();
        let language = language.into();
        self.detected_language = if language.is_empty() {
            DEFAULT_DETECTED_LANGUAGE.to_string()
        } else {
            language
        };
        self.translated_text.clear();
        info!("Transcript updated ({} chars, language: {})", self.transcript.len(), self.detected_language);
    }

    pub fn set_output_language(&mut self, tag: impl Into<String>) {
        self.output_language = tag.into();
    }

    /// Translate the current transcript into the selected output language.
    ///
    /// No-op (returns false) if the transcript is empty after trimming or a
    /// translation is already in flight. On failure the previous translated
    /// text is left unchanged and a retry-eligible error is recorded.
    pub async fn generate_translation(&mut self, provider: &dyn TranslationProvider) -> bool {
        if self.transcript.trim().is_empty() {
            debug!("Ignoring translation request for empty transcript");
            return false;
        }
        if self.is_translating {
            warn!("Translation already in flight, ignoring request");
            return false;
        }

        self.is_translating = true;

        let request = TranslationRequest {
            text: self.transcript.clone(),
            source_language: self.detected_language.clone(),
            target_language: self.output_language.clone(),
        };

        match provider.translate(&request).await {
            Ok(translated) => {
                self.translated_text = translated.trim().to_string();
                self.error = None;
            }
            Err(e) => {
                warn!("Translation failed: {}", e);
                self.error = Some("Translation failed. Please try again.".to_string());
            }
        }

        self.is_translating = false;
        true
    }

    /// Restore all fields to their initial values.
    pub fn reset(&mut self) {
        self.transcript.clear();
        self.detected_language = DEFAULT_DETECTED_LANGUAGE.to_string();
        self.translated_text.clear();
        self.output_language = DEFAULT_OUTPUT_LANGUAGE.to_string();
        self.is_translating = false;
        self.error = None;
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn detected_language(&self) -> &str {
        &self.detected_language
    }

    pub fn translated_text(&self) -> &str {
        &self.translated_text
    }

    pub fn output_language(&self) -> &str {
        &self.output_language
    }

    pub fn is_translating(&self) -> bool {
        self.is_translating
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}

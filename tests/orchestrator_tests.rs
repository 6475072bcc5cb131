// Tests for the translation orchestrator
//
// These tests verify the transcript/translation state flow against a mock
// translation provider: the empty-transcript no-op, trimming of upstream
// output, failure handling, and reset.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;
use medbridge::error::TranslationError;
use medbridge::providers::{TranslationProvider, TranslationRequest};
use medbridge::Orchestrator;
use tokio::sync::Mutex;

/// Translation provider returning a fixed response and recording requests.
struct MockTranslator {
    response: std::result::Result<String, String>,
    calls: AtomicUsize,
    last_request: Mutex<Option<TranslationRequest>>,
}

impl MockTranslator {
    fn ok(response: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(response.to_string()),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            response: Err("upstream down".to_string()),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl TranslationProvider for MockTranslator {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().await = Some(request.clone());
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(msg) => Err(TranslationError::Service(msg.clone())),
        }
    }
}

#[test]
fn orchestrator_starts_with_defaults() {
    let orchestrator = Orchestrator::new();
    assert_eq!(orchestrator.transcript(), "");
    assert_eq!(orchestrator.detected_language(), "en");
    assert_eq!(orchestrator.translated_text(), "");
    assert_eq!(orchestrator.output_language(), "es-ES");
    assert!(!orchestrator.is_translating());
    assert!(orchestrator.error().is_none());
}

#[tokio::test]
async fn empty_transcript_translation_is_a_no_op() -> Result<()> {
    let translator = MockTranslator::ok("unused");
    let mut orchestrator = Orchestrator::new();

    assert!(!orchestrator.generate_translation(translator.as_ref()).await);

    orchestrator.apply_transcript("   ", "en");
    assert!(!orchestrator.generate_translation(translator.as_ref()).await);

    assert_eq!(translator.call_count(), 0, "no network call for empty text");
    assert_eq!(orchestrator.translated_text(), "");
    assert!(orchestrator.error().is_none());

    Ok(())
}

#[tokio::test]
async fn translation_result_is_stored_trimmed() -> Result<()> {
    // Upstream padding must not survive into stored state
    let translator = MockTranslator::ok("  ¿Cómo se siente?  ");
    let mut orchestrator = Orchestrator::new();

    orchestrator.apply_transcript("How are you feeling", "en");
    orchestrator.set_output_language("es-ES");

    assert!(orchestrator.generate_translation(translator.as_ref()).await);

    assert_eq!(orchestrator.translated_text(), "¿Cómo se siente?");
    assert!(!orchestrator.is_translating());
    assert!(orchestrator.error().is_none());

    let request = translator.last_request.lock().await.clone().unwrap();
    assert_eq!(request.text, "How are you feeling");
    assert_eq!(request.source_language, "en");
    assert_eq!(request.target_language, "es-ES");

    Ok(())
}

#[tokio::test]
async fn failed_translation_keeps_previous_result() -> Result<()> {
    let translator = MockTranslator::ok("¿Cómo se siente?");
    let mut orchestrator = Orchestrator::new();

    orchestrator.apply_transcript("How are you feeling", "en");
    orchestrator.generate_translation(translator.as_ref()).await;
    assert_eq!(orchestrator.translated_text(), "¿Cómo se siente?");

    let failing = MockTranslator::failing();
    orchestrator.generate_translation(failing.as_ref()).await;

    assert_eq!(
        orchestrator.error(),
        Some("Translation failed. Please try again."),
        "failure must surface a retry-eligible message"
    );
    assert_eq!(
        orchestrator.translated_text(),
        "¿Cómo se siente?",
        "failure must not alter the translated text"
    );
    assert!(!orchestrator.is_translating());

    Ok(())
}

#[tokio::test]
async fn new_transcript_discards_previous_translation() -> Result<()> {
    let translator = MockTranslator::ok("¿Dónde le duele?");
    let mut orchestrator = Orchestrator::new();

    orchestrator.apply_transcript("Where does it hurt", "en");
    orchestrator.generate_translation(translator.as_ref()).await;
    assert_eq!(orchestrator.translated_text(), "¿Dónde le duele?");

    orchestrator.apply_transcript("Take this medication", "en");
    assert_eq!(
        orchestrator.translated_text(),
        "",
        "translation is never carried across transcripts"
    );

    Ok(())
}

#[tokio::test]
async fn empty_detected_language_falls_back_to_default() -> Result<()> {
    let mut orchestrator = Orchestrator::new();
    orchestrator.apply_transcript("Hello", "");
    assert_eq!(orchestrator.detected_language(), "en");

    orchestrator.apply_transcript("Hello", "unknown");
    assert_eq!(orchestrator.detected_language(), "unknown");

    Ok(())
}

#[tokio::test]
async fn reset_restores_initial_values() -> Result<()> {
    let translator = MockTranslator::ok("Hola");
    let mut orchestrator = Orchestrator::new();

    orchestrator.apply_transcript("Hello", "fr");
    orchestrator.set_output_language("de-DE");
    orchestrator.generate_translation(translator.as_ref()).await;

    orchestrator.reset();

    assert_eq!(orchestrator.transcript(), "");
    assert_eq!(orchestrator.detected_language(), "en");
    assert_eq!(orchestrator.translated_text(), "");
    assert_eq!(orchestrator.output_language(), "es-ES");
    assert!(!orchestrator.is_translating());
    assert!(orchestrator.error().is_none());

    Ok(())
}

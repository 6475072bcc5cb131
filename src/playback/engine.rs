use crate::error::SynthesisError;

/// Speaking rate for synthesized speech. Slightly below natural, a
/// deliberate slow-down for comprehension in a clinical, cross-language
/// setting.
pub const PLAYBACK_RATE: f32 = 0.85;

/// One unit of synthesized speech output.
#[derive(Debug, Clone)]
pub struct Utterance {
    pub text: String,
    /// Locale tag configuring the synthesis voice, e.g. "es-ES"
    pub language: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Utterance {
    /// Build an utterance with the fixed voice parameters: slowed rate,
    /// default pitch, full volume.
    pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
            rate: PLAYBACK_RATE,
            pitch: 1.0,
            volume: 1.0,
        }
    }
}

/// How an utterance ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtteranceOutcome {
    /// Spoken to completion
    Completed,
    /// Cancelled before completion
    Cancelled,
}

/// Speech-synthesis engine seam.
///
/// Implementations wrap a native synthesis facility. `speak` resolves when
/// the utterance ends or is cancelled, so the controller can model the
/// lifecycle as awaited completions rather than ad-hoc event handlers.
#[async_trait::async_trait]
pub trait SpeechEngine: Send + Sync {
    /// Speak one utterance to completion or cancellation.
    async fn speak(&self, utterance: Utterance) -> Result<UtteranceOutcome, SynthesisError>;

    /// Cancel the active utterance, if any. Safe to call when idle.
    fn cancel(&self);
}

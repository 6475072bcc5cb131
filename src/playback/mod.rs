//! Speech-synthesis playback
//!
//! `SpeechEngine` is the native-engine seam; `PlaybackController` owns the
//! single utterance slot and its lifecycle state.

mod controller;
mod engine;

pub use controller::{PlaybackController, PlaybackState};
pub use engine::{SpeechEngine, Utterance, UtteranceOutcome, PLAYBACK_RATE};

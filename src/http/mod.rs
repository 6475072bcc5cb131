//! HTTP API server for the browser front end
//!
//! This module provides the two pipeline endpoints:
//! - POST /api/transcribe - Submit recorded audio for speech-to-text
//! - POST /api/translate - Translate a transcript into a target language
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;

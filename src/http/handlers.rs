use super::state::AppState;
use crate::error::TranslationError;
use crate::providers::TranslationRequest;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct TranscribeResponse {
    pub text: String,

    /// Detected language code, "unknown" if the engine supplied none
    pub language: String,
}

#[derive(Debug, Deserialize)]
pub struct TranslateRequestBody {
    #[serde(default)]
    pub text: Option<String>,

    #[serde(default, rename = "sourceLanguage")]
    pub source_language: Option<String>,

    #[serde(default, rename = "targetLanguage")]
    pub target_language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/transcribe
/// Submit recorded audio (multipart, single "audio" field) for transcription
pub async fn transcribe(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut audio: Option<Vec<u8>> = None;

    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("audio") {
            match field.bytes().await {
                Ok(bytes) => audio = Some(bytes.to_vec()),
                Err(e) => {
                    error!("Failed to read audio field: {}", e);
                    break;
                }
            }
        }
    }

    let audio = match audio {
        Some(bytes) if !bytes.is_empty() => bytes,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No audio file provided".to_string(),
                }),
            )
                .into_response();
        }
    };

    info!("Transcribing {} bytes of audio", audio.len());

    match state.transcription.transcribe(audio).await {
        Ok(transcript) => (
            StatusCode::OK,
            Json(TranscribeResponse {
                text: transcript.text,
                language: transcript.language,
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Transcription failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Server error".to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// POST /api/translate
/// Translate text between a source and target language
pub async fn translate(
    State(state): State<AppState>,
    Json(body): Json<TranslateRequestBody>,
) -> impl IntoResponse {
    let request = TranslationRequest {
        text: body.text.unwrap_or_default(),
        source_language: body.source_language.unwrap_or_default(),
        target_language: body.target_language.unwrap_or_default(),
    };

    if request.validate().is_err() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Missing required fields".to_string(),
            }),
        )
            .into_response();
    }

    info!(
        "Translating {} chars: {} -> {}",
        request.text.len(),
        request.source_language,
        request.target_language
    );

    match state.translation.translate(&request).await {
        Ok(translated) => (
            StatusCode::OK,
            Json(TranslateResponse {
                translated_text: translated.trim().to_string(),
            }),
        )
            .into_response(),
        Err(TranslationError::InvalidRequest) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Missing required fields".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Translation failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Translation service error".to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

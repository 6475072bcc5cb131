use std::time::Duration;

use reqwest::multipart;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::TranscriptionError;

/// Result of one transcription call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    /// Transcribed text
    pub text: String,

    /// Detected language code (e.g. "en"), "unknown" if the engine
    /// supplied none
    pub language: String,
}

/// Speech-to-text provider seam.
///
/// Takes an opaque audio payload (the capture component's native encoding)
/// and returns text plus a detected language tag.
#[async_trait::async_trait]
pub trait TranscriptionProvider: Send + Sync {
    async fn transcribe(&self, audio: Vec<u8>) -> Result<Transcript, TranscriptionError>;
}

/// Wire format of the hosted transcription response.
#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
    #[serde(default)]
    language: Option<String>,
}

/// Client for a Whisper-style hosted transcription endpoint
/// (OpenAI-compatible `audio/transcriptions` contract).
pub struct WhisperApiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl WhisperApiClient {
    pub fn new(endpoint: String, api_key: String, model: String) -> Result<Self, TranscriptionError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| TranscriptionError::Http(e.to_string()))?;

        Ok(Self {
            http,
            endpoint,
            api_key,
            model,
        })
    }
}

#[async_trait::async_trait]
impl TranscriptionProvider for WhisperApiClient {
    async fn transcribe(&self, audio: Vec<u8>) -> Result<Transcript, TranscriptionError> {
        debug!("Submitting {} bytes of audio for transcription", audio.len());

        let file_part = multipart::Part::bytes(audio)
            .file_name("audio.webm")
            .mime_str("audio/webm")
            .map_err(|e| TranscriptionError::Http(e.to_string()))?;

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .part("file", file_part);

        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::Http(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(TranscriptionError::Status(resp.status().as_u16()));
        }

        let body: TranscriptionResponse = resp
            .json()
            .await
            .map_err(|e| TranscriptionError::Decode(e.to_string()))?;

        let language = body.language.unwrap_or_else(|| "unknown".to_string());

        info!("Transcription complete ({} chars, language: {})", body.text.len(), language);

        Ok(Transcript {
            text: body.text,
            language,
        })
    }
}

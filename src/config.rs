use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub transcription: TranscriptionConfig,
    pub translation: TranslationConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

/// Hosted speech-to-text credentials and endpoint. The API key is an opaque
/// secret, normally supplied via environment.
#[derive(Debug, Deserialize)]
pub struct TranscriptionConfig {
    pub api_key: String,
    pub endpoint: String,
    pub model: String,
}

/// Hosted text-generation credentials and deployment identifiers.
#[derive(Debug, Deserialize)]
pub struct TranslationConfig {
    pub api_key: String,
    pub endpoint: String,
    pub deployment: String,
    pub api_version: String,
}

impl Config {
    /// Load configuration from an optional file, with environment variables
    /// (prefix `MEDBRIDGE`, `__` separator) taking precedence. Credentials
    /// default to empty strings so the service starts without them; calls
    /// to the hosted models then fail upstream.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("service.name", "medbridge")?
            .set_default("service.http.bind", "127.0.0.1")?
            .set_default("service.http.port", 8080)?
            .set_default("transcription.api_key", "")?
            .set_default(
                "transcription.endpoint",
                "https://api.groq.com/openai/v1/audio/transcriptions",
            )?
            .set_default("transcription.model", "whisper-large-v3")?
            .set_default("translation.api_key", "")?
            .set_default("translation.endpoint", "")?
            .set_default("translation.deployment", "")?
            .set_default("translation.api_version", "2025-04-01-preview")?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path));
        }

        let settings = builder
            .add_source(config::Environment::with_prefix("MEDBRIDGE").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

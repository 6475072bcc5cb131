use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};

use crate::error::TranslationError;
use crate::language::display_name;

/// Sampling temperature for translation calls. Kept low to bias toward
/// deterministic, literal output over creative paraphrase.
const TRANSLATION_TEMPERATURE: f32 = 0.3;

/// One translation request: source text plus the language pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    /// Source language (locale tag or bare code)
    pub source_language: String,
    /// Target language (locale tag or bare code)
    pub target_language: String,
}

impl TranslationRequest {
    /// Reject requests with any missing-after-trim field.
    pub fn validate(&self) -> Result<(), TranslationError> {
        if self.text.trim().is_empty()
            || self.source_language.trim().is_empty()
            || self.target_language.trim().is_empty()
        {
            return Err(TranslationError::InvalidRequest);
        }
        Ok(())
    }
}

/// Translation provider seam. Returns the translated text only, trimmed.
#[async_trait::async_trait]
pub trait TranslationProvider: Send + Sync {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslationError>;
}

/// System instruction fixing the translator persona to strict medical-domain
/// accuracy. The output contract is translated text only, no wrapper prose.
pub fn medical_system_prompt(source_language: &str, target_language: &str) -> String {
    let source_name = display_name(source_language);
    let target_name = display_name(target_language);

    format!(
        "You are an expert medical translator specializing in healthcare communication between patients and providers.\n\
         \n\
         CRITICAL REQUIREMENTS:\n\
         1. MEDICAL ACCURACY: Use only standard medical terminology approved in both source and target languages\n\
         2. CLARITY: Translate for clarity and understanding in healthcare context\n\
         3. SENSITIVITY: Maintain professional tone appropriate for healthcare settings\n\
         4. PRECISION: Never sacrifice accuracy for brevity\n\
         5. MEDICAL CONTEXT: If it's a symptom or diagnosis, ensure proper medical terminology\n\
         \n\
         Translate from {source_name} to {target_name}.\n\
         \n\
         RESPOND ONLY WITH THE TRANSLATED TEXT. NO EXPLANATIONS, NO ADDITIONAL TEXT."
    )
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

/// Client for an Azure-OpenAI-style chat-completions deployment.
pub struct ChatTranslationClient {
    http: reqwest::Client,
    endpoint: String,
    deployment: String,
    api_version: String,
    api_key: String,
}

impl ChatTranslationClient {
    pub fn new(
        endpoint: String,
        deployment: String,
        api_version: String,
        api_key: String,
    ) -> Result<Self, TranslationError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| TranslationError::Service(e.to_string()))?;

        Ok(Self {
            http,
            endpoint,
            deployment,
            api_version,
            api_key,
        })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions",
            self.endpoint.trim_end_matches('/'),
            self.deployment
        )
    }
}

#[async_trait::async_trait]
impl TranslationProvider for ChatTranslationClient {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslationError> {
        request.validate()?;

        debug!(
            "Translating {} chars: {} -> {}",
            request.text.len(),
            request.source_language,
            request.target_language
        );

        let body = json!({
            "messages": [
                {
                    "role": "system",
                    "content": medical_system_prompt(&request.source_language, &request.target_language),
                },
                {
                    "role": "user",
                    "content": request.text,
                },
            ],
            "temperature": TRANSLATION_TEMPERATURE,
        });

        let resp = self
            .http
            .post(self.completions_url())
            .query(&[("api-version", self.api_version.as_str())])
            .header("api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| TranslationError::Service(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(TranslationError::Service(format!(
                "upstream returned status {}",
                resp.status().as_u16()
            )));
        }

        let completion: ChatCompletionResponse = resp
            .json()
            .await
            .map_err(|e| TranslationError::Service(e.to_string()))?;

        let translated = completion
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| TranslationError::Service("empty completion".to_string()))?;

        info!("Translation complete ({} chars)", translated.len());

        Ok(translated)
    }
}

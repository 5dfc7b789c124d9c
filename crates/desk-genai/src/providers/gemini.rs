//! Google Generative Language (Gemini) provider implementation
//!
//! This module implements the TextGenerator trait for Gemini models.
//! See: https://ai.google.dev/api/generate-content

use crate::{
    FinishReason, GenAiError, GenerationRequest, GenerationResponse, Result, TextGenerator,
    TokenUsage,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Google Generative Language provider
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider with the default model
    ///
    /// # Arguments
    ///
    /// * `api_key` - Generative Language API key
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_model(api_key, DEFAULT_MODEL)
    }

    /// Create a new Gemini provider for a specific model
    pub fn with_model(api_key: String, model: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()?;

        Ok(Self {
            client,
            api_key,
            model: model.into(),
        })
    }

    /// Create a provider from environment variables
    ///
    /// Reads the API key from `API_KEY` and an optional model override from
    /// `GENAI_MODEL`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("API_KEY").map_err(|_| {
            GenAiError::ConfigurationError("API_KEY environment variable not set".to_string())
        })?;
        match std::env::var("GENAI_MODEL") {
            Ok(model) => Self::with_model(api_key, model),
            Err(_) => Self::new(api_key),
        }
    }

    /// The configured model identifier
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextGenerator for GeminiProvider {
    #[instrument(skip(self, request), fields(model = %self.model))]
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        debug!("Sending request to Generative Language API");

        // Build Gemini-specific request
        let gemini_request = GeminiRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: request.prompt,
                }],
            }],
            generation_config: match (request.temperature, request.max_output_tokens) {
                (None, None) => None,
                (temperature, max_output_tokens) => Some(GenerationConfig {
                    temperature,
                    max_output_tokens,
                }),
            },
        };

        // Send request
        let response = self
            .client
            .post(format!(
                "{GEMINI_API_BASE}/models/{}:generateContent",
                self.model
            ))
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&gemini_request)
            .send()
            .await?;

        // Handle errors
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;

            return Err(match status.as_u16() {
                401 | 403 => GenAiError::AuthenticationFailed,
                429 => GenAiError::RateLimitExceeded(error_text),
                400 => GenAiError::InvalidRequest(error_text),
                404 => GenAiError::ModelNotFound(self.model.clone()),
                _ => GenAiError::RequestFailed(format!("HTTP {status}: {error_text}")),
            });
        }

        // Parse response
        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            GenAiError::UnexpectedResponse(format!("Failed to parse response: {e}"))
        })?;

        let candidate = gemini_response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| {
                GenAiError::UnexpectedResponse("response contained no candidates".to_string())
            })?;

        let text = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        let finish_reason = parse_finish_reason(candidate.finish_reason.as_deref());
        let usage = gemini_response
            .usage_metadata
            .map(|usage| TokenUsage {
                prompt_tokens: usage.prompt_token_count,
                output_tokens: usage.candidates_token_count,
            })
            .unwrap_or_default();

        debug!(
            "Received response - finish_reason: {:?}, tokens: {}/{}",
            finish_reason, usage.prompt_tokens, usage.output_tokens
        );

        Ok(GenerationResponse {
            text,
            finish_reason,
            usage,
        })
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

fn parse_finish_reason(reason: Option<&str>) -> FinishReason {
    match reason {
        Some("STOP") | None => FinishReason::Stop,
        Some("MAX_TOKENS") => FinishReason::MaxTokens,
        Some("SAFETY") => FinishReason::Safety,
        Some(other) => {
            debug!("Unknown finish reason: {}", other);
            FinishReason::Other
        }
    }
}

// Gemini-specific request/response types
// These match the Generative Language API format exactly

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: usize,
    #[serde(default)]
    candidates_token_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_creation() {
        let provider = GeminiProvider::new("test-key".to_string());
        assert!(provider.is_ok());
        let provider = provider.unwrap();
        assert_eq!(provider.name(), "gemini");
        assert_eq!(provider.model(), DEFAULT_MODEL);
    }

    #[test]
    fn test_with_model_override() {
        let provider = GeminiProvider::with_model("test-key".to_string(), "gemini-2.5-pro");
        assert_eq!(provider.unwrap().model(), "gemini-2.5-pro");
    }

    #[test]
    fn test_from_env_without_key() {
        // SAFETY: This is a test that modifies env vars, which is safe in single-threaded test context
        unsafe {
            std::env::remove_var("API_KEY");
        }
        let result = GeminiProvider::from_env();
        assert!(result.is_err());
    }

    #[test]
    fn test_response_parsing() {
        let raw = r#"{
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Nifty closed "}, {"text": "higher."}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 6, "totalTokenCount": 18}
        }"#;

        let parsed: GeminiResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.candidates.len(), 1);
        let usage = parsed.usage_metadata.unwrap();
        assert_eq!(usage.prompt_token_count, 12);
        assert_eq!(usage.candidates_token_count, 6);
    }

    #[test]
    fn test_finish_reason_mapping() {
        assert_eq!(parse_finish_reason(Some("STOP")), FinishReason::Stop);
        assert_eq!(parse_finish_reason(Some("MAX_TOKENS")), FinishReason::MaxTokens);
        assert_eq!(parse_finish_reason(Some("SAFETY")), FinishReason::Safety);
        assert_eq!(parse_finish_reason(Some("RECITATION")), FinishReason::Other);
        assert_eq!(parse_finish_reason(None), FinishReason::Stop);
    }

    #[test]
    fn test_request_serialization_omits_empty_config() {
        let request = GeminiRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: "hello".to_string(),
                }],
            }],
            generation_config: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("generationConfig").is_none());
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
    }
}

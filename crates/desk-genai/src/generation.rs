//! Generation request and response types

use serde::{Deserialize, Serialize};

/// Request for a single non-streamed text generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// The user prompt
    pub prompt: String,

    /// Sampling temperature (0.0-2.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<usize>,
}

impl GenerationRequest {
    /// Create a request with just a prompt
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: None,
            max_output_tokens: None,
        }
    }

    /// Set the sampling temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the maximum output tokens
    pub fn max_output_tokens(mut self, max_output_tokens: usize) -> Self {
        self.max_output_tokens = Some(max_output_tokens);
        self
    }
}

/// Response from a text generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// Generated text
    pub text: String,

    /// Why generation stopped
    pub finish_reason: FinishReason,

    /// Token usage statistics
    pub usage: TokenUsage,
}

/// Reason the model stopped generating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural completion
    Stop,

    /// Hit max tokens limit
    MaxTokens,

    /// Content was filtered
    Safety,

    /// Provider reported something else
    Other,
}

/// Token usage statistics
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Number of prompt tokens
    pub prompt_tokens: usize,

    /// Number of generated tokens
    pub output_tokens: usize,
}

impl TokenUsage {
    /// Total tokens used (prompt + output)
    pub fn total(&self) -> usize {
        self.prompt_tokens + self.output_tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = GenerationRequest::new("Analyze Nifty 50")
            .temperature(0.4)
            .max_output_tokens(2048);

        assert_eq!(request.prompt, "Analyze Nifty 50");
        assert_eq!(request.temperature, Some(0.4));
        assert_eq!(request.max_output_tokens, Some(2048));
    }

    #[test]
    fn test_token_usage() {
        let usage = TokenUsage {
            prompt_tokens: 120,
            output_tokens: 80,
        };
        assert_eq!(usage.total(), 200);
    }
}

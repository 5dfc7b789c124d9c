//! Text-generator trait definition

use crate::{GenerationRequest, GenerationResponse, Result};
use async_trait::async_trait;

/// Trait for text-generation providers
///
/// Implementations of this trait provide access to hosted generative-text
/// services. [`crate::GeminiProvider`] is the production implementation;
/// the gateway's tests use mocks.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a single non-streamed completion
    ///
    /// # Arguments
    ///
    /// * `request` - The generation request with prompt and sampling parameters
    ///
    /// # Returns
    ///
    /// The generated text with finish reason and token usage
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse>;

    /// Get the provider name (e.g., "gemini")
    fn name(&self) -> &str;
}

//! Generative-text provider abstraction for marketdesk
//!
//! This crate provides a provider-agnostic abstraction for single-shot text
//! generation. It includes:
//!
//! - Generation request/response types
//! - Provider trait for text-generation implementations
//! - A concrete Google Generative Language (Gemini) provider

pub mod error;
pub mod generation;
pub mod provider;
pub mod providers;

// Re-export main types
pub use error::{GenAiError, Result};
pub use generation::{FinishReason, GenerationRequest, GenerationResponse, TokenUsage};
pub use provider::TextGenerator;
pub use providers::GeminiProvider;

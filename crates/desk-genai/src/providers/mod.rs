//! Concrete text-generation provider implementations

pub mod gemini;

pub use gemini::GeminiProvider;

//! Trait definitions for external interactions
//!
//! The generation service is infrastructure. Implementations live in
//! `predictx-llm`; the engine only sees this trait.

use async_trait::async_trait;

/// Trait for text-generation providers
///
/// Implemented by the infrastructure layer (predictx-llm). A call is the
/// single suspension point of a prediction request.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Error type for generation failures
    type Error: std::error::Error + Send + Sync + 'static;

    /// Model identifier sent with every call
    fn model_name(&self) -> &str;

    /// Generate one completion for `prompt`
    async fn generate(&self, prompt: &str) -> Result<String, Self::Error>;
}

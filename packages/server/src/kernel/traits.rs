// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "assess this asking price") lives in domain functions
// that consume these traits.

use anyhow::Result;
use async_trait::async_trait;

// =============================================================================
// AI Trait (Infrastructure - Generic LLM capabilities)
// =============================================================================

#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Complete a prompt with an LLM (returns raw text response)
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Complete a prompt expecting JSON response (returns raw JSON string)
    /// Parse with serde_json::from_str in calling code
    async fn complete_json(&self, prompt: &str) -> Result<String> {
        self.complete(prompt).await
    }

    /// Complete a prompt with a specific model (returns raw text response)
    /// If model is None, uses the default model
    async fn complete_with_model(&self, prompt: &str, model: Option<&str>) -> Result<String> {
        let _ = model;
        self.complete(prompt).await
    }
}

#[async_trait]
impl<T: BaseAI + ?Sized> BaseAI for std::sync::Arc<T> {
    async fn complete(&self, prompt: &str) -> Result<String> {
        (**self).complete(prompt).await
    }

    async fn complete_json(&self, prompt: &str) -> Result<String> {
        (**self).complete_json(prompt).await
    }

    async fn complete_with_model(&self, prompt: &str, model: Option<&str>) -> Result<String> {
        (**self).complete_with_model(prompt, model).await
    }
}

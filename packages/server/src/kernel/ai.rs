// AI implementation using OpenAI (via rig.rs)
//
// This is the infrastructure implementation of BaseAI.
// Business logic (what to prompt for) lives in domain layers.

use anyhow::{Context, Result};
use async_trait::async_trait;
use rig::completion::Prompt;
use rig::providers::openai;

use super::BaseAI;

/// OpenAI implementation of AI capabilities
#[derive(Clone)]
pub struct OpenAIClient {
    client: openai::Client,
}

impl OpenAIClient {
    pub fn new(api_key: &str) -> Self {
        let client = openai::Client::new(api_key);
        Self { client }
    }
}

#[async_trait]
impl BaseAI for OpenAIClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.complete_with_model(prompt, None).await
    }

    async fn complete_json(&self, prompt: &str) -> Result<String> {
        // Low temperature would be ideal here; rig agents default is fine
        // for the strict "respond only with JSON" prompts we send.
        self.complete_with_model(prompt, Some(openai::GPT_4O)).await
    }

    async fn complete_with_model(&self, prompt: &str, model: Option<&str>) -> Result<String> {
        let model_id = model.unwrap_or(openai::GPT_4O);

        tracing::debug!(
            prompt_length = prompt.len(),
            model = model_id,
            "Building OpenAI agent for completion"
        );

        let agent = self
            .client
            .agent(model_id)
            .preamble("You are a helpful assistant.")
            .max_tokens(4096)
            .build();

        let response = agent
            .prompt(prompt)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    model = model_id,
                    prompt_preview = %&prompt[..prompt.len().min(200)],
                    "OpenAI API call failed"
                );
                e
            })
            .context("Failed to call OpenAI API")?;

        tracing::debug!(
            response_length = response.len(),
            model = model_id,
            "OpenAI API response received"
        );

        Ok(response)
    }
}

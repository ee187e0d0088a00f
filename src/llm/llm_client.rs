use crate::config::LlmConfig;
use crate::llm::providers::{lm_studio::LmStudioProvider, openai::OpenAiProvider, LlmProvider};
use crate::llm::ChatMessage;
use std::error::Error;
use tracing::debug;

/// Generic LLM client that delegates work to a concrete provider.
#[derive(Debug)]
pub struct LlmClient {
    provider: Box<dyn LlmProvider>,
}

impl LlmClient {
    /// Creates a new LLM client for the backend named in the configuration.
    ///
    /// # Arguments
    /// * `config` - LLM section of the application configuration
    ///
    /// # Returns
    /// * `Result<LlmClient, Box<dyn Error>>` - New LLM client instance, or an
    ///   error when the provider name is unknown or the backend cannot be set up
    pub fn new(config: &LlmConfig) -> Result<Self, Box<dyn Error>> {
        let provider: Box<dyn LlmProvider> = match config.provider.as_str() {
            "openai" => Box::new(OpenAiProvider::new(
                &config.openai.model,
                config.openai.api_key.as_deref(),
            )?),
            "lm_studio" => Box::new(LmStudioProvider::new(
                &config.lm_studio.base_url,
                &config.lm_studio.model,
            )?),
            _ => return Err(format!("Unknown LLM provider '{}'", config.provider).into()),
        };

        Ok(LlmClient { provider })
    }

    /// Sends one prompt to the backend and returns the raw response text.
    ///
    /// # Arguments
    /// * `system_prompt` - Optional system message to set context/behavior
    /// * `user_prompt` - User's input prompt
    ///
    /// # Returns
    /// * `Result<String, Box<dyn Error>>` - LLM response text or error
    pub async fn complete(
        &self,
        system_prompt: Option<&str>,
        user_prompt: &str,
    ) -> Result<String, Box<dyn Error>> {
        let mut messages = Vec::new();
        if let Some(system) = system_prompt {
            messages.push(ChatMessage::system(system));
        }
        messages.push(ChatMessage::user(user_prompt));
        debug!("Sending {} message(s) to the LLM backend", messages.len());
        self.provider.call_llm_api(messages).await
    }
}

use super::LlmProvider;
use crate::llm::ChatMessage;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::error::Error;
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Provider implementation for a local LM Studio server.
///
/// LM Studio exposes an OpenAI-compatible chat completions endpoint, so the
/// request and response shapes match the OpenAI provider; only the base URL
/// differs and no API key is required.
#[derive(Debug)]
pub struct LmStudioProvider {
    /// Base URL of the server (e.g. "http://localhost:1234/v1")
    base_url: String,
    /// Model identifier the server should route to
    model: String,
}

impl LmStudioProvider {
    /// Creates a new LM Studio provider instance
    ///
    /// # Arguments
    /// * `base_url` - Server base URL; a trailing slash is tolerated
    /// * `model` - The model identifier to use
    ///
    /// # Returns
    /// * `Result<Self, Box<dyn Error>>` - Provider instance
    pub fn new(base_url: &str, model: &str) -> Result<Self, Box<dyn Error>> {
        Ok(LmStudioProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }
}

#[async_trait]
impl LlmProvider for LmStudioProvider {
    /// Calls the server's chat completions API
    ///
    /// # Arguments
    /// * `messages` - Conversation to send, system message first
    ///
    /// # Returns
    /// * `Result<String, Box<dyn Error>>` - Generated response text or error
    async fn call_llm_api(&self, messages: Vec<ChatMessage>) -> Result<String, Box<dyn Error>> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        let request_body = json!({
            "model": self.model,
            "messages": messages,
            "temperature": 0.7,
            "max_tokens": 1500
        });

        let res = client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&request_body)
            .send()
            .await?;

        if !res.status().is_success() {
            let text = res.text().await?;
            return Err(format!("LM Studio API error: {}", text).into());
        }

        let json_resp: serde_json::Value = res.json().await?;
        if let Some(content) = json_resp["choices"][0]["message"]["content"].as_str() {
            Ok(content.trim().to_string())
        } else {
            Err("No content in LM Studio response".into())
        }
    }
}

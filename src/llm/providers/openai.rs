use super::LlmProvider;
use crate::llm::ChatMessage;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::error::Error;

/// Provider implementation for OpenAI's API
#[derive(Debug)]
pub struct OpenAiProvider {
    /// API key from the configuration, or the OPENAI_API_KEY environment variable
    api_key: String,
    /// Model identifier to use (e.g. "gpt-4", "gpt-3.5-turbo")
    model: String,
}

impl OpenAiProvider {
    /// Creates a new OpenAI provider instance
    ///
    /// # Arguments
    /// * `model` - The model identifier to use
    /// * `api_key` - Key from the configuration; when absent the
    ///   OPENAI_API_KEY environment variable is consulted
    ///
    /// # Returns
    /// * `Result<Self, Box<dyn Error>>` - Provider instance or error if no API key is available
    pub fn new(model: &str, api_key: Option<&str>) -> Result<Self, Box<dyn Error>> {
        let api_key = match api_key {
            Some(key) if !key.trim().is_empty() => key.to_string(),
            _ => std::env::var("OPENAI_API_KEY")
                .map_err(|_| "OpenAI API key not configured and OPENAI_API_KEY not set")?,
        };
        Ok(OpenAiProvider {
            api_key,
            model: model.to_string(),
        })
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    /// Calls OpenAI's chat completions API
    ///
    /// # Arguments
    /// * `messages` - Conversation to send, system message first
    ///
    /// # Returns
    /// * `Result<String, Box<dyn Error>>` - Generated response text or error
    async fn call_llm_api(&self, messages: Vec<ChatMessage>) -> Result<String, Box<dyn Error>> {
        let client = Client::new();
        let request_body = json!({
          "model": self.model,
          "messages": messages,
          "temperature": 0.7,
          "max_tokens": 1500
        });

        let res = client
            .post("https://api.openai.com/v1/chat/completions")
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        if !res.status().is_success() {
            let text = res.text().await?;
            return Err(format!("OpenAI API error: {}", text).into());
        }

        let json_resp: serde_json::Value = res.json().await?;
        if let Some(content) = json_resp["choices"][0]["message"]["content"].as_str() {
            Ok(content.trim().to_string())
        } else {
            Err("No content in OpenAI LLM response".into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn configured_key_wins_over_environment() {
        std::env::set_var("OPENAI_API_KEY", "env-key");
        let provider = OpenAiProvider::new("gpt-3.5-turbo", Some("config-key")).unwrap();
        assert_eq!(provider.api_key, "config-key");
        std::env::remove_var("OPENAI_API_KEY");
    }

    #[test]
    #[serial]
    fn falls_back_to_environment_key() {
        std::env::set_var("OPENAI_API_KEY", "env-key");
        let provider = OpenAiProvider::new("gpt-3.5-turbo", None).unwrap();
        assert_eq!(provider.api_key, "env-key");
        std::env::remove_var("OPENAI_API_KEY");
    }

    #[test]
    #[serial]
    fn missing_key_is_an_error() {
        std::env::remove_var("OPENAI_API_KEY");
        let err = OpenAiProvider::new("gpt-3.5-turbo", Some("   ")).unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }
}

use crate::llm::ChatMessage;
use async_trait::async_trait;
use std::error::Error;
use std::fmt::Debug;

pub mod lm_studio;
pub mod openai;

#[async_trait]
pub trait LlmProvider: Debug + Send + Sync {
    async fn call_llm_api(&self, messages: Vec<ChatMessage>) -> Result<String, Box<dyn Error>>;
}

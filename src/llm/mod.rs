mod llm_client;
mod message;
mod providers;

pub use llm_client::*;
pub use message::*;

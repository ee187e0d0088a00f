/// Represents a chat message with a role and content
#[derive(serde::Serialize, Debug, Clone)]
pub struct ChatMessage {
    /// Role of the message sender (e.g. "system", "user")
    pub role: String,
    /// Content/text of the message
    pub content: String,
}

impl ChatMessage {
    /// Creates a message with the "system" role
    pub fn system(content: &str) -> Self {
        ChatMessage {
            role: "system".to_string(),
            content: content.to_string(),
        }
    }

    /// Creates a message with the "user" role
    pub fn user(content: &str) -> Self {
        ChatMessage {
            role: "user".to_string(),
            content: content.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_to_the_wire_shape() {
        let message = ChatMessage::user("hello");
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value, json!({"role": "user", "content": "hello"}));
    }
}

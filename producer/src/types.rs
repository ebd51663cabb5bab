//! Producer-specific data types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identity reported by a provider session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
}

impl SessionUser {
    pub fn new(username: impl Into<String>) -> Self {
        Self { username: username.into() }
    }
}

/// Raw reply of a chat call, checked at the provider boundary
#[derive(Debug, Clone, PartialEq)]
pub enum ChatReply {
    /// Plain text content
    Text(String),
    /// Any structured payload the provider returned instead of a string
    Structured(Value),
}

impl ChatReply {
    /// Normalize the reply to text: structured payloads use their `text`
    /// field when it is a string, otherwise the JSON is stringified
    pub fn into_text(self) -> String {
        match self {
            ChatReply::Text(text) => text,
            ChatReply::Structured(value) => match value.get("text").and_then(Value::as_str) {
                Some(text) => text.to_string(),
                None => value.to_string(),
            },
        }
    }
}

impl From<String> for ChatReply {
    fn from(text: String) -> Self {
        ChatReply::Text(text)
    }
}

impl From<&str> for ChatReply {
    fn from(text: &str) -> Self {
        ChatReply::Text(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_reply_is_unchanged() {
        assert_eq!(ChatReply::from("Apply sparingly.").into_text(), "Apply sparingly.");
    }

    #[test]
    fn test_structured_reply_uses_text_field() {
        let reply = ChatReply::Structured(json!({ "text": "from field", "usage": 3 }));
        assert_eq!(reply.into_text(), "from field");
    }

    #[test]
    fn test_structured_reply_without_text_is_stringified() {
        let reply = ChatReply::Structured(json!([{ "type": "output_text" }]));
        assert_eq!(reply.into_text(), r#"[{"type":"output_text"}]"#);

        let reply = ChatReply::Structured(json!({ "text": 42 }));
        assert_eq!(reply.into_text(), r#"{"text":42}"#);
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    /// Gemini calls this role `model`; both spellings are accepted on input.
    #[serde(alias = "model")]
    Assistant,
}

/// One message of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatTurn {
    pub role: ChatRole,
    #[serde(default)]
    pub content: String,
}

impl ChatTurn {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_role_alias() {
        let turn: ChatTurn =
            serde_json::from_str(r#"{"role": "model", "content": "Hello"}"#).unwrap();
        assert_eq!(turn, ChatTurn::assistant("Hello"));
        assert_eq!(
            serde_json::to_value(&turn).unwrap(),
            serde_json::json!({"role": "assistant", "content": "Hello"})
        );
    }

    #[test]
    fn test_missing_content_defaults_to_empty() {
        let turn: ChatTurn = serde_json::from_str(r#"{"role": "user"}"#).unwrap();
        assert_eq!(turn.content, "");
    }
}

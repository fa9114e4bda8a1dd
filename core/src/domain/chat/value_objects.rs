use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::chat::entities::ChatTurn;

#[derive(Debug, Clone)]
pub struct ChatInput {
    pub message: String,
    pub history: Vec<ChatTurn>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChatOutput {
    pub response: String,
    /// Cleaned history followed by the new user message and the reply.
    pub history: Vec<ChatTurn>,
}

/// Sampling and safety knobs sent along with a chat request.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatSettings {
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub top_p: Option<f32>,
    pub top_k: Option<u32>,
    pub block_harmful_content: bool,
}

impl ChatSettings {
    /// Settings of the public chat endpoint.
    pub fn conversation() -> Self {
        Self {
            temperature: 0.7,
            max_output_tokens: 1000,
            top_p: Some(0.9),
            top_k: Some(40),
            block_harmful_content: true,
        }
    }

    /// Settings of the lenient assistant helper.
    pub fn assistant() -> Self {
        Self {
            temperature: 0.7,
            max_output_tokens: 1000,
            top_p: None,
            top_k: None,
            block_harmful_content: false,
        }
    }
}

use std::future::Future;

use crate::domain::{
    chat::{entities::ChatTurn, value_objects::ChatSettings},
    common::entities::app_errors::CoreError,
    plant::value_objects::ImagePayload,
};

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_image(
        &self,
        prompt: String,
        image: ImagePayload,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Continues a conversation. `history` must already satisfy the alternating
    /// role rules of the model; `message` is sent as the next user turn.
    fn chat(
        &self,
        history: Vec<ChatTurn>,
        message: String,
        settings: ChatSettings,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

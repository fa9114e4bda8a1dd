use std::future::Future;

use crate::domain::{
    chat::value_objects::{ChatInput, ChatOutput},
    common::entities::app_errors::CoreError,
};

/// Service trait for conversations with the plant assistant
#[cfg_attr(test, mockall::automock)]
pub trait ChatService: Send + Sync {
    /// Strict conversation: a history that does not open with a user turn is
    /// rejected.
    fn chat(&self, input: ChatInput) -> impl Future<Output = Result<ChatOutput, CoreError>> + Send;

    /// Lenient helper: a missing leading user turn is synthesized instead.
    fn chat_with_ai(
        &self,
        input: ChatInput,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

use tracing::{debug, error, instrument};

use crate::domain::{
    chat::{
        entities::ChatTurn,
        history::{LeadingTurnPolicy, merge_pending_user_turn, prepare_history},
        ports::ChatService,
        value_objects::{ChatInput, ChatOutput, ChatSettings},
    },
    common::{
        entities::app_errors::CoreError,
        ports::LLMClient,
        services::{Service, ensure_not_blank},
    },
};

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    async fn converse(
        &self,
        input: ChatInput,
        policy: LeadingTurnPolicy,
        settings: ChatSettings,
    ) -> Result<(String, Vec<ChatTurn>, String), CoreError> {
        let message = input.message.trim().to_string();
        if message.is_empty() {
            return Err(CoreError::Validation("Message cannot be empty".to_string()));
        }

        let mut history = prepare_history(input.history, policy)?;
        let message = merge_pending_user_turn(&mut history, message);
        debug!(turns = history.len(), "Prepared chat history");

        let response = self
            .llm_client
            .chat(history.clone(), message.clone(), settings)
            .await
            .map_err(|e| {
                error!("Chat failed: {}", e);
                e
            })?;
        let response = ensure_not_blank(response)?;

        Ok((message, history, response))
    }
}

impl<LLM> ChatService for Service<LLM>
where
    LLM: LLMClient,
{
    #[instrument(skip_all, fields(history_len = input.history.len()))]
    async fn chat(&self, input: ChatInput) -> Result<ChatOutput, CoreError> {
        let (message, mut history, response) = self
            .converse(input, LeadingTurnPolicy::Reject, ChatSettings::conversation())
            .await?;

        history.push(ChatTurn::user(message));
        history.push(ChatTurn::assistant(response.clone()));

        Ok(ChatOutput { response, history })
    }

    #[instrument(skip_all, fields(history_len = input.history.len()))]
    async fn chat_with_ai(&self, input: ChatInput) -> Result<String, CoreError> {
        let (_, _, response) = self
            .converse(input, LeadingTurnPolicy::Synthesize, ChatSettings::assistant())
            .await?;

        Ok(response)
    }
}

use axum::extract::State;
use leafdoc_core::domain::chat::{ports::ChatService, value_objects::ChatInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::chat_error;
use crate::application::http::{
    chat::validators::ChatRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ErrorBody, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AssistantChatResponse {
    pub response: String,
}

#[utoipa::path(
    post,
    path = "/assistant/chat",
    tag = "chat",
    summary = "Lenient assistant chat",
    description = "Like `/chat`, but a history opening with an assistant turn gets a synthetic user turn instead of being rejected.",
    responses(
        (status = 200, body = AssistantChatResponse),
        (status = 400, body = ErrorBody),
        (status = 429, body = ErrorBody),
        (status = 500, body = ErrorBody)
    ),
    request_body = ChatRequest
)]
pub async fn assistant_chat(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ChatRequest>,
) -> Result<Response<AssistantChatResponse>, ApiError> {
    let response = state
        .service
        .chat_with_ai(ChatInput {
            message: payload.message,
            history: payload.history,
        })
        .await
        .map_err(chat_error)?;

    Ok(Response::OK(AssistantChatResponse { response }))
}

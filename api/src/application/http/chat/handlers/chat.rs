use axum::extract::State;
use leafdoc_core::domain::chat::{
    ports::ChatService,
    value_objects::{ChatInput, ChatOutput},
};

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

#[utoipa::path(
    post,
    path = "/chat",
    tag = "chat",
    summary = "Chat with the gardening assistant",
    description = "Sends the message with the cleaned history. The history must open with a user turn.",
    responses(
        (status = 200, body = ChatOutput),
        (status = 400, body = ErrorBody, description = "Empty message or invalid history"),
        (status = 405, body = ErrorBody),
        (status = 429, body = ErrorBody),
        (status = 500, body = ErrorBody)
    ),
    request_body = ChatRequest
)]
pub async fn chat(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ChatRequest>,
) -> Result<Response<ChatOutput>, ApiError> {
    let output = state
        .service
        .chat(ChatInput {
            message: payload.message,
            history: payload.history,
        })
        .await
        .map_err(chat_error)?;

    Ok(Response::OK(output))
}

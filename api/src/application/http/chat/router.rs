use super::handlers::{
    assistant_chat::{__path_assistant_chat, assistant_chat},
    chat::{__path_chat, chat},
    method_not_allowed::method_not_allowed,
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(chat, assistant_chat))]
pub struct ChatApiDoc;

pub fn chat_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/chat", state.args.server.root_path),
            post(chat).fallback(method_not_allowed),
        )
        .route(
            &format!("{}/assistant/chat", state.args.server.root_path),
            post(assistant_chat),
        )
}

use leafdoc_core::domain::common::entities::app_errors::CoreError;

use crate::application::http::server::api_entities::api_error::{ApiError, RATE_LIMIT_MESSAGE};

pub mod assistant_chat;
pub mod chat;
pub mod method_not_allowed;

fn chat_error(error: CoreError) -> ApiError {
    match error {
        CoreError::Validation(message) | CoreError::InvalidHistory(message) => {
            ApiError::BadRequest(message)
        }
        CoreError::RateLimited(_) => ApiError::TooManyRequests(RATE_LIMIT_MESSAGE.to_string()),
        CoreError::EmptyResponse => ApiError::InternalServerError(error.to_string()),
        other => ApiError::InternalServerError(format!("Chat failed: {}", other)),
    }
}

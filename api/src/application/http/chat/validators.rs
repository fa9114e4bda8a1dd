use leafdoc_core::domain::chat::entities::ChatTurn;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ChatRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Message cannot be empty"))]
    pub message: String,

    /// Earlier turns, oldest first. Blank turns are dropped and consecutive
    /// turns of the same role are collapsed before use.
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

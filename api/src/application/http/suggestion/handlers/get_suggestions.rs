use axum::extract::{Query, State};
use leafdoc_core::domain::{
    common::entities::app_errors::CoreError,
    suggestion::{entities::PlantSuggestion, ports::SuggestionService},
};

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ErrorBody},
            response::Response,
        },
        app_state::AppState,
    },
    suggestion::validators::SuggestionsQuery,
};

#[utoipa::path(
    get,
    path = "/suggestions",
    tag = "suggestion",
    summary = "Suggest plants for a region",
    params(SuggestionsQuery),
    responses(
        (status = 200, body = Vec<PlantSuggestion>),
        (status = 400, body = ErrorBody, description = "Region is required"),
        (status = 500, body = ErrorBody)
    )
)]
pub async fn get_suggestions(
    State(state): State<AppState>,
    Query(query): Query<SuggestionsQuery>,
) -> Result<Response<Vec<PlantSuggestion>>, ApiError> {
    let set = state
        .service
        .suggest_plants(query.region.unwrap_or_default())
        .await
        .map_err(|e| match e {
            CoreError::Validation(message) => ApiError::BadRequest(message),
            other => ApiError::Failed {
                error: "Failed to fetch plant suggestions".to_string(),
                details: other.to_string(),
            },
        })?;

    Ok(Response::OK(set.suggestions))
}

use axum::extract::State;
use leafdoc_core::domain::{
    common::entities::app_errors::CoreError,
    plant::{entities::DiseaseDiagnosis, ports::PlantService, value_objects::ImagePayload},
};

use crate::application::http::{
    plant::validators::PlantImageRequest,
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
    path = "/disease",
    tag = "plant",
    summary = "Detect plant disease from a photo",
    responses(
        (status = 200, body = DiseaseDiagnosis),
        (status = 400, body = ErrorBody),
        (status = 500, body = ErrorBody, description = "Detection failed")
    ),
    request_body = PlantImageRequest
)]
pub async fn detect_disease(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<PlantImageRequest>,
) -> Result<Response<DiseaseDiagnosis>, ApiError> {
    let image = ImagePayload::parse(&payload.image).map_err(ApiError::from)?;

    let diagnosis = state
        .service
        .detect_disease(image)
        .await
        .map_err(|e| match e {
            CoreError::Validation(message) => ApiError::BadRequest(message),
            other => ApiError::Failed {
                error: "Detection failed".to_string(),
                details: other.to_string(),
            },
        })?;

    Ok(Response::OK(diagnosis))
}

use axum::extract::State;
use leafdoc_core::domain::plant::{
    entities::Diagnosis, ports::PlantService, value_objects::ImagePayload,
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
    path = "/diagnose",
    tag = "plant",
    summary = "Identify a plant and check it for disease",
    description = "Runs identification and disease detection concurrently. Both must succeed within the configured timeout.",
    responses(
        (status = 200, body = Diagnosis),
        (status = 400, body = ErrorBody),
        (status = 429, body = ErrorBody),
        (status = 500, body = ErrorBody),
        (status = 504, body = ErrorBody, description = "AI service did not answer in time")
    ),
    request_body = PlantImageRequest
)]
pub async fn diagnose_plant(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<PlantImageRequest>,
) -> Result<Response<Diagnosis>, ApiError> {
    let image = ImagePayload::parse(&payload.image).map_err(ApiError::from)?;

    let diagnosis = state
        .service
        .diagnose(image)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(diagnosis))
}

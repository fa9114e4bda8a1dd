use axum::extract::State;
use leafdoc_core::domain::{
    common::entities::app_errors::CoreError,
    plant::{entities::PlantIdentification, ports::PlantService, value_objects::ImagePayload},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    plant::validators::PlantImageRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

pub const IDENTIFY_FAILED_MESSAGE: &str = "Failed to identify plant";

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IdentifyPlantResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<PlantIdentification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IdentifyPlantResponse {
    fn identified(data: PlantIdentification) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            details: None,
        }
    }

    fn failed(error: impl Into<String>, details: Option<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            details,
        }
    }
}

#[utoipa::path(
    post,
    path = "/identify",
    tag = "plant",
    summary = "Identify a plant from a photo",
    description = "Identifies the plant in the image. Upstream and parsing failures are reported with status 200 and `success: false`.",
    responses(
        (status = 200, body = IdentifyPlantResponse),
        (status = 400, body = IdentifyPlantResponse, description = "Image missing or unreadable")
    ),
    request_body = PlantImageRequest
)]
pub async fn identify_plant(
    State(state): State<AppState>,
    payload: Result<ValidateJson<PlantImageRequest>, ApiError>,
) -> Result<Response<IdentifyPlantResponse>, ApiError> {
    let ValidateJson(payload) = match payload {
        Ok(payload) => payload,
        Err(ApiError::BadRequest(message)) => {
            return Ok(Response::BadRequest(IdentifyPlantResponse::failed(
                message, None,
            )));
        }
        Err(e) => return Err(e),
    };

    let image = match ImagePayload::parse(&payload.image) {
        Ok(image) => image,
        Err(CoreError::Validation(message)) => {
            return Ok(Response::BadRequest(IdentifyPlantResponse::failed(
                message, None,
            )));
        }
        Err(e) => return Err(ApiError::from(e)),
    };

    match state.service.identify_plant(image).await {
        Ok(identification) => Ok(Response::OK(IdentifyPlantResponse::identified(
            identification,
        ))),
        Err(e) => {
            tracing::error!("Plant identification failed: {}", e);
            let details = state
                .args
                .server
                .expose_error_details
                .then(|| e.to_string());

            Ok(Response::OK(IdentifyPlantResponse::failed(
                IDENTIFY_FAILED_MESSAGE,
                details,
            )))
        }
    }
}

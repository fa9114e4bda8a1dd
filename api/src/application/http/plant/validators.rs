use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Body shared by every image endpoint.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct PlantImageRequest {
    /// `data:<mime>;base64,<payload>` or bare base64 (assumed `image/jpeg`).
    #[serde(default)]
    #[validate(length(min = 1, message = "Image is required"))]
    pub image: String,
}

use leafdoc_core::domain::suggestion::entities::Region;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RegionOption {
    pub value: String,
    pub label: String,
}

#[utoipa::path(
    get,
    path = "/regions",
    tag = "suggestion",
    summary = "List known regions",
    responses(
        (status = 200, body = Vec<RegionOption>)
    )
)]
pub async fn get_regions() -> Result<Response<Vec<RegionOption>>, ApiError> {
    let regions = Region::ALL
        .into_iter()
        .map(|region| RegionOption {
            value: region.value().to_string(),
            label: region.label().to_string(),
        })
        .collect();

    Ok(Response::OK(regions))
}

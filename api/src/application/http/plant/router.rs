use super::handlers::{
    detect_disease::{__path_detect_disease, detect_disease},
    diagnose_plant::{__path_diagnose_plant, diagnose_plant},
    identify_plant::{__path_identify_plant, identify_plant},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(identify_plant, detect_disease, diagnose_plant))]
pub struct PlantApiDoc;

/// Room for a 10 MiB image once base64 encoded, plus the JSON wrapper.
pub const MAX_IMAGE_BODY_SIZE: usize = 16 * 1024 * 1024;

pub fn plant_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/identify", state.args.server.root_path),
            post(identify_plant),
        )
        .route(
            &format!("{}/disease", state.args.server.root_path),
            post(detect_disease),
        )
        .route(
            &format!("{}/diagnose", state.args.server.root_path),
            post(diagnose_plant),
        )
        .layer(DefaultBodyLimit::max(MAX_IMAGE_BODY_SIZE))
}

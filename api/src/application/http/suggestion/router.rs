use super::handlers::{
    get_regions::{__path_get_regions, get_regions},
    get_suggestions::{__path_get_suggestions, get_suggestions},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_suggestions, get_regions))]
pub struct SuggestionApiDoc;

pub fn suggestion_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/suggestions", state.args.server.root_path),
            get(get_suggestions),
        )
        .route(
            &format!("{}/regions", state.args.server.root_path),
            get(get_regions),
        )
}

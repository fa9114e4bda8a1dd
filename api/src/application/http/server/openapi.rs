use crate::application::http::{
    chat::router::ChatApiDoc, health::HealthApiDoc, plant::router::PlantApiDoc,
    suggestion::router::SuggestionApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leafdoc API",
        description = "Plant identification, disease detection and gardening assistant"
    ),
    tags(
        (name = "plant", description = "Image based identification and diagnosis"),
        (name = "chat", description = "Gardening conversations"),
        (name = "suggestion", description = "Regional plant suggestions"),
        (name = "health", description = "Liveness"),
    )
)]
pub struct ApiDoc;

/// Full document with every feature's paths merged in.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.merge(PlantApiDoc::openapi());
    openapi.merge(ChatApiDoc::openapi());
    openapi.merge(SuggestionApiDoc::openapi());
    openapi.merge(HealthApiDoc::openapi());
    openapi
}

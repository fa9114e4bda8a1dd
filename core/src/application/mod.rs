use crate::{
    domain::common::{LeafdocConfig, services::Service},
    infrastructure::llm::GeminiLLMClient,
};

pub type LeafdocService = Service<GeminiLLMClient>;

pub fn create_service(config: LeafdocConfig) -> Result<LeafdocService, anyhow::Error> {
    let llm_client = GeminiLLMClient::new(&config.llm)?;

    tracing::info!(model = %config.llm.gemini_model, "Gemini client ready");

    Ok(Service::new(llm_client, config.service))
}

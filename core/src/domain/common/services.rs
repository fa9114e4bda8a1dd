use crate::domain::common::{ServiceConfig, entities::app_errors::CoreError, ports::LLMClient};

#[derive(Clone)]
pub struct Service<LLM>
where
    LLM: LLMClient,
{
    pub(crate) llm_client: LLM,
    pub(crate) config: ServiceConfig,
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    pub fn new(llm_client: LLM, config: ServiceConfig) -> Self {
        Self { llm_client, config }
    }
}

/// Rejects blank model output before any parsing is attempted.
pub(crate) fn ensure_not_blank(raw: String) -> Result<String, CoreError> {
    if raw.trim().is_empty() {
        tracing::error!("LLM returned an empty response");
        return Err(CoreError::EmptyResponse);
    }

    Ok(raw)
}

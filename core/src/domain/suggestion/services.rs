use tracing::{error, instrument};

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        ports::LLMClient,
        services::{Service, ensure_not_blank},
    },
    suggestion::{
        entities::{Region, RegionSuggestionSet},
        normalizer::normalize_suggestions,
        ports::SuggestionService,
        prompts::suggestion_prompt,
        schema::get_suggestions_schema,
    },
};

impl<LLM> SuggestionService for Service<LLM>
where
    LLM: LLMClient,
{
    #[instrument(skip(self))]
    async fn suggest_plants(&self, region: String) -> Result<RegionSuggestionSet, CoreError> {
        let region = region.trim().to_string();
        if region.is_empty() {
            return Err(CoreError::Validation("Region is required".to_string()));
        }

        // Unknown regions are forwarded verbatim so free-text places still work.
        let label = Region::from_value(&region)
            .map(|known| known.label().to_string())
            .unwrap_or_else(|| region.clone());

        let raw = self
            .llm_client
            .generate_with_text(
                suggestion_prompt(&label, self.config.max_suggestions),
                get_suggestions_schema(),
            )
            .await?;
        let raw = ensure_not_blank(raw)?;

        let mut suggestions = normalize_suggestions(&raw).map_err(|e| {
            error!(raw = e.raw(), "Failed to parse suggestions: {}", e);
            e.into_core("Invalid suggestions format")
        })?;
        suggestions.truncate(self.config.max_suggestions);

        Ok(RegionSuggestionSet {
            region,
            suggestions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{ServiceConfig, ports::MockLLMClient};

    #[tokio::test]
    async fn test_known_region_uses_label_and_caps_results() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .withf(|prompt, _| prompt.contains("Northern India"))
            .times(1)
            .returning(|_, _| {
                Box::pin(async {
                    Ok(r#"[{"name":"Tulsi"},{"name":"Neem"},{"name":"Peepal"}]"#.to_string())
                })
            });

        let config = ServiceConfig {
            max_suggestions: 2,
            ..ServiceConfig::default()
        };
        let service = Service::new(llm, config);
        let set = service.suggest_plants("northern".to_string()).await.unwrap();

        assert_eq!(set.region, "northern");
        assert_eq!(set.suggestions.len(), 2);
        assert_eq!(set.suggestions[1].name, "Neem");
    }

    #[tokio::test]
    async fn test_unknown_region_is_forwarded_verbatim() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .withf(|prompt, _| prompt.contains("grow well in Konkan coast."))
            .returning(|_, _| Box::pin(async { Ok("[]".to_string()) }));

        let service = Service::new(llm, ServiceConfig::default());
        let set = service
            .suggest_plants(" Konkan coast ".to_string())
            .await
            .unwrap();

        assert_eq!(set.region, "Konkan coast");
        assert!(set.suggestions.is_empty());
    }

    #[tokio::test]
    async fn test_blank_region_is_rejected_without_calling_llm() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().never();

        let service = Service::new(llm, ServiceConfig::default());
        assert_eq!(
            service.suggest_plants("  ".to_string()).await,
            Err(CoreError::Validation("Region is required".to_string()))
        );
    }

    #[tokio::test]
    async fn test_non_array_reply_is_shape_error() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .returning(|_, _| Box::pin(async { Ok(r#"{"name":"Tulsi"}"#.to_string()) }));

        let service = Service::new(llm, ServiceConfig::default());
        assert_eq!(
            service.suggest_plants("western".to_string()).await,
            Err(CoreError::ShapeError("Invalid suggestions format".to_string()))
        );
    }
}

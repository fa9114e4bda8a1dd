use futures::future::try_join;
use tracing::{error, instrument};

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        ports::LLMClient,
        services::{Service, ensure_not_blank},
    },
    plant::{
        entities::{Diagnosis, DiseaseDiagnosis, PlantIdentification},
        normalizer::{normalize_disease, normalize_identification},
        ports::PlantService,
        prompts::{DISEASE_PROMPT, IDENTIFY_PROMPT},
        schema::{get_disease_schema, get_identification_schema},
        value_objects::ImagePayload,
    },
};

impl<LLM> PlantService for Service<LLM>
where
    LLM: LLMClient,
{
    #[instrument(skip_all, fields(mime_type = %image.mime_type, bytes = image.data.len()))]
    async fn identify_plant(&self, image: ImagePayload) -> Result<PlantIdentification, CoreError> {
        let raw = self
            .llm_client
            .generate_with_image(
                IDENTIFY_PROMPT.to_string(),
                image,
                get_identification_schema(),
            )
            .await
            .map_err(|e| {
                error!("Plant identification failed: {}", e);
                e
            })?;
        let raw = ensure_not_blank(raw)?;

        normalize_identification(&raw).map_err(|e| {
            error!(raw = e.raw(), "Failed to parse plant response: {}", e);
            e.into_core("Invalid plant response format")
        })
    }

    #[instrument(skip_all, fields(mime_type = %image.mime_type, bytes = image.data.len()))]
    async fn detect_disease(&self, image: ImagePayload) -> Result<DiseaseDiagnosis, CoreError> {
        let raw = self
            .llm_client
            .generate_with_image(DISEASE_PROMPT.to_string(), image, get_disease_schema())
            .await
            .map_err(|e| {
                error!("Disease detection failed: {}", e);
                e
            })?;
        let raw = ensure_not_blank(raw)?;

        normalize_disease(&raw).map_err(|e| {
            error!(raw = e.raw(), "Failed to parse disease response: {}", e);
            e.into_core("Invalid disease response format")
        })
    }

    async fn diagnose(&self, image: ImagePayload) -> Result<Diagnosis, CoreError> {
        let pair = try_join(
            self.identify_plant(image.clone()),
            self.detect_disease(image),
        );

        let (identification, disease) = tokio::time::timeout(self.config.diagnose_timeout, pair)
            .await
            .map_err(|_| {
                error!(
                    timeout_ms = self.config.diagnose_timeout.as_millis() as u64,
                    "Diagnosis timed out"
                );
                CoreError::Timeout
            })??;

        Ok(Diagnosis {
            identification,
            disease,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use mockall::predicate::*;

    use super::*;
    use crate::domain::common::{ServiceConfig, ports::MockLLMClient};

    fn png() -> ImagePayload {
        ImagePayload::parse("data:image/png;base64,iVBORw0KGgo=").unwrap()
    }

    fn reply(text: &'static str) -> Result<String, CoreError> {
        Ok(text.to_string())
    }

    #[tokio::test]
    async fn test_identify_plant_normalizes_fenced_reply() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image()
            .withf(|prompt, image, _| prompt == IDENTIFY_PROMPT && image.mime_type == "image/png")
            .times(1)
            .returning(|_, _, _| {
                Box::pin(async { reply("```json\n{\"name\":\"Neem\",\"confidence\":0.8}\n```") })
            });

        let service = Service::new(llm, ServiceConfig::default());
        let plant = service.identify_plant(png()).await.unwrap();

        assert_eq!(plant.name, "Neem");
        assert_eq!(plant.scientific_name, "");
        assert_eq!(plant.confidence, 0.8);
    }

    #[tokio::test]
    async fn test_identify_plant_parse_error_hides_raw_text() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image()
            .returning(|_, _, _| Box::pin(async { reply("I think this is a rose.") }));

        let service = Service::new(llm, ServiceConfig::default());
        let err = service.identify_plant(png()).await.unwrap_err();

        assert_eq!(
            err,
            CoreError::ParseError("Invalid plant response format".to_string())
        );
    }

    #[tokio::test]
    async fn test_identify_plant_blank_reply() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image()
            .returning(|_, _, _| Box::pin(async { reply("  \n ") }));

        let service = Service::new(llm, ServiceConfig::default());
        assert_eq!(
            service.identify_plant(png()).await,
            Err(CoreError::EmptyResponse)
        );
    }

    #[tokio::test]
    async fn test_detect_disease_passes_upstream_error_through() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image()
            .with(eq(DISEASE_PROMPT.to_string()), always(), always())
            .returning(|_, _, _| {
                Box::pin(async { Err(CoreError::RateLimited("429 Too Many Requests".to_string())) })
            });

        let service = Service::new(llm, ServiceConfig::default());
        assert!(matches!(
            service.detect_disease(png()).await,
            Err(CoreError::RateLimited(_))
        ));
    }

    #[tokio::test]
    async fn test_diagnose_combines_both_results() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image()
            .times(2)
            .returning(|prompt, _, _| {
                Box::pin(async move {
                    if prompt == IDENTIFY_PROMPT {
                        reply(r#"{"name":"Tulsi","scientificName":"Ocimum tenuiflorum"}"#)
                    } else {
                        reply(r#"{"name":"Leaf spot","treatment":["Remove affected leaves"]}"#)
                    }
                })
            });

        let service = Service::new(llm, ServiceConfig::default());
        let diagnosis = service.diagnose(png()).await.unwrap();

        assert_eq!(diagnosis.identification.name, "Tulsi");
        assert_eq!(diagnosis.disease.name, "Leaf spot");
        assert_eq!(diagnosis.disease.treatment, vec!["Remove affected leaves"]);
    }

    #[tokio::test]
    async fn test_diagnose_fails_when_either_call_fails() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image().returning(|prompt, _, _| {
            Box::pin(async move {
                if prompt == IDENTIFY_PROMPT {
                    reply(r#"{"name":"Tulsi"}"#)
                } else {
                    Err(CoreError::ExternalServiceError("LLM API error".to_string()))
                }
            })
        });

        let service = Service::new(llm, ServiceConfig::default());
        assert_eq!(
            service.diagnose(png()).await,
            Err(CoreError::ExternalServiceError("LLM API error".to_string()))
        );
    }

    #[tokio::test]
    async fn test_diagnose_times_out() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image().returning(|_, _, _| {
            Box::pin(async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                reply("{}")
            })
        });

        let config = ServiceConfig {
            diagnose_timeout: Duration::from_millis(20),
            ..ServiceConfig::default()
        };
        let service = Service::new(llm, config);

        assert_eq!(service.diagnose(png()).await, Err(CoreError::Timeout));
    }
}

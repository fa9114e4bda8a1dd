use base64::{Engine as _, engine::general_purpose};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::{
    chat::{
        entities::{ChatRole, ChatTurn},
        value_objects::ChatSettings,
    },
    common::{LLMConfig, entities::app_errors::CoreError, ports::LLMClient},
    plant::value_objects::ImagePayload,
};

const SAFETY_THRESHOLD: &str = "BLOCK_MEDIUM_AND_ABOVE";
const FILTERED_CATEGORIES: [&str; 2] = ["HARM_CATEGORY_HARASSMENT", "HARM_CATEGORY_HATE_SPEECH"];

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    safety_settings: Vec<SafetySetting>,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part>,
}

impl Content {
    fn turn(role: ChatRole, text: String) -> Self {
        let role = match role {
            ChatRole::User => "user",
            ChatRole::Assistant => "model",
        };

        Self {
            role: Some(role),
            parts: vec![Part::Text { text }],
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Default, Serialize)]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_k: Option<u32>,
}

impl GenerationConfig {
    fn json(response_schema: serde_json::Value) -> Self {
        Self {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(response_schema),
            ..Self::default()
        }
    }

    fn sampling(settings: &ChatSettings) -> Self {
        Self {
            temperature: Some(settings.temperature),
            max_output_tokens: Some(settings.max_output_tokens),
            top_p: settings.top_p,
            top_k: settings.top_k,
            ..Self::default()
        }
    }
}

#[derive(Debug, Serialize)]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    #[serde(default)]
    text: String,
}

impl GeminiResponse {
    /// Concatenated text of the first candidate. Blank text is left for the
    /// caller to judge.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        Some(content.parts.into_iter().map(|p| p.text).collect())
    }
}

impl GeminiLLMClient {
    pub fn new(config: &LLMConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build Gemini HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            api_key: config.gemini_api_key.clone(),
            model_name: config.gemini_model.clone(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model_name
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);

            if status == StatusCode::TOO_MANY_REQUESTS {
                return Err(CoreError::RateLimited(format!(
                    "LLM API returned error: {} - {}",
                    status, error_text
                )));
            }

            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        gemini_response.into_text().ok_or_else(|| {
            tracing::warn!("Gemini returned no candidates");
            CoreError::EmptyResponse
        })
    }
}

fn chat_request(history: Vec<ChatTurn>, message: String, settings: &ChatSettings) -> GeminiRequest {
    let mut contents: Vec<Content> = history
        .into_iter()
        .map(|turn| Content::turn(turn.role, turn.content))
        .collect();
    contents.push(Content::turn(ChatRole::User, message));

    let safety_settings = if settings.block_harmful_content {
        FILTERED_CATEGORIES
            .into_iter()
            .map(|category| SafetySetting {
                category,
                threshold: SAFETY_THRESHOLD,
            })
            .collect()
    } else {
        Vec::new()
    };

    GeminiRequest {
        contents,
        generation_config: Some(GenerationConfig::sampling(settings)),
        safety_settings,
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate_with_image(
        &self,
        prompt: String,
        image: ImagePayload,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let base64_image = general_purpose::STANDARD.encode(&image.data);

        let request = GeminiRequest {
            contents: vec![Content {
                role: None,
                parts: vec![
                    Part::Text { text: prompt },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: image.mime_type,
                            data: base64_image,
                        },
                    },
                ],
            }],
            generation_config: Some(GenerationConfig::json(response_schema)),
            safety_settings: Vec::new(),
        };

        self.call_gemini_api(request).await
    }

    async fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                role: None,
                parts: vec![Part::Text { text: prompt }],
            }],
            generation_config: Some(GenerationConfig::json(response_schema)),
            safety_settings: Vec::new(),
        };

        self.call_gemini_api(request).await
    }

    async fn chat(
        &self,
        history: Vec<ChatTurn>,
        message: String,
        settings: ChatSettings,
    ) -> Result<String, CoreError> {
        self.call_gemini_api(chat_request(history, message, &settings))
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_chat_request_maps_roles_and_settings() {
        let request = chat_request(
            vec![ChatTurn::user("hi"), ChatTurn::assistant("hello")],
            "Is neem good for aphids?".to_string(),
            &ChatSettings::conversation(),
        );

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body["contents"],
            json!([
                { "role": "user", "parts": [{ "text": "hi" }] },
                { "role": "model", "parts": [{ "text": "hello" }] },
                { "role": "user", "parts": [{ "text": "Is neem good for aphids?" }] }
            ])
        );
        assert_eq!(body["generation_config"]["max_output_tokens"], json!(1000));
        assert_eq!(body["generation_config"]["top_k"], json!(40));
        assert!(body["generation_config"].get("response_schema").is_none());
        assert_eq!(body["safety_settings"].as_array().unwrap().len(), 2);
        assert_eq!(
            body["safety_settings"][0]["threshold"],
            json!("BLOCK_MEDIUM_AND_ABOVE")
        );
    }

    #[test]
    fn test_assistant_chat_request_has_no_safety_settings() {
        let request = chat_request(vec![], "hello".to_string(), &ChatSettings::assistant());

        let body = serde_json::to_value(&request).unwrap();
        assert!(body.get("safety_settings").is_none());
        assert!(body["generation_config"].get("top_p").is_none());
    }

    #[test]
    fn test_image_part_serialization() {
        let part = Part::InlineData {
            inline_data: InlineData {
                mime_type: "image/png".to_string(),
                data: "iVBORw0KGgo=".to_string(),
            },
        };

        assert_eq!(
            serde_json::to_value(&part).unwrap(),
            json!({ "inline_data": { "mime_type": "image/png", "data": "iVBORw0KGgo=" } })
        );
    }

    #[test]
    fn test_response_text_joins_parts() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "```json\n" }, { "text": "{}\n```" }] },
                "finishReason": "STOP"
            }]
        }))
        .unwrap();

        assert_eq!(response.into_text().as_deref(), Some("```json\n{}\n```"));
    }

    #[test]
    fn test_response_without_candidates() {
        let response: GeminiResponse =
            serde_json::from_value(json!({ "promptFeedback": { "blockReason": "SAFETY" } }))
                .unwrap();

        assert_eq!(response.into_text(), None);
    }
}

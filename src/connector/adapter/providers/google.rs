use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ProviderConnector;
use crate::domain::{ConnectorError, Model, ProviderKey, ProviderReply};

use super::upstream::{missing_field, send_json};
use super::{require_chat, MAX_TOKENS};

const CONTEXT: &str = "GoogleConnector";
const REQUEST_FAILED: &str = "Failed to process Google request";
/// Gemini keys are far longer; anything shorter is certainly malformed.
const MIN_KEY_LEN: usize = 10;

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, PartialEq)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize, PartialEq)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
}

impl<'a> GenerateContentRequest<'a> {
    pub fn user_prompt(prompt: &'a str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: MAX_TOKENS,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// `candidates[0].content.parts[0].text`, if present.
    pub fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
    }
}

/// Connector for the Gemini API.
///
/// Gemini has no cheap endpoint that validates a key without generating
/// content, so the connection test only checks the key's length locally.
pub struct GoogleConnector {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleConnector {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        Self {
            client,
            base_url: base.trim_end_matches('/').to_string(),
        }
    }

    fn generate_url(&self, model_id: &str) -> String {
        format!("{}/v1/models/{}:generateContent", self.base_url, model_id)
    }
}

#[async_trait]
impl ProviderConnector for GoogleConnector {
    fn provider(&self) -> ProviderKey {
        ProviderKey::Google
    }

    async fn test_connection(&self, api_key: &str, _model: &Model) -> Result<(), ConnectorError> {
        if api_key.len() < MIN_KEY_LEN {
            return Err(ConnectorError::invalid_credential("Invalid API key format"));
        }
        Ok(())
    }

    async fn send_request(
        &self,
        api_key: &str,
        model: &Model,
        prompt: &str,
    ) -> Result<ProviderReply, ConnectorError> {
        require_chat(ProviderKey::Google, model)?;

        let request = GenerateContentRequest::user_prompt(prompt);
        let response: GenerateContentResponse = send_json(
            self.client
                .post(self.generate_url(model.model_id()))
                .query(&[("key", api_key)])
                .json(&request),
            CONTEXT,
            REQUEST_FAILED,
        )
        .await?;

        response
            .first_text()
            .map(ProviderReply::Text)
            .ok_or_else(|| {
                missing_field(CONTEXT, REQUEST_FAILED, "candidates[0].content.parts[0].text")
            })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::ModelCategory;

    fn gemini() -> Model {
        Model::new(
            "gemini-pro",
            "Gemini Pro",
            ModelCategory::Chat,
            "google",
            "gemini-1.5-pro",
            "google",
        )
    }

    fn connector() -> GoogleConnector {
        GoogleConnector::new(reqwest::Client::new(), "http://127.0.0.1:9")
    }

    #[test]
    fn request_matches_wire_shape() {
        let body = serde_json::to_value(GenerateContentRequest::user_prompt("hello")).unwrap();
        assert_eq!(
            body,
            json!({
                "contents": [{ "parts": [{ "text": "hello" }] }],
                "generationConfig": { "maxOutputTokens": 1000 }
            })
        );
    }

    #[test]
    fn response_yields_first_part_text() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "Hi from Gemini" }] }
            }]
        }))
        .unwrap();
        assert_eq!(response.first_text().as_deref(), Some("Hi from Gemini"));
    }

    #[test]
    fn blocked_response_has_no_text() {
        let blocked = json!({ "promptFeedback": { "blockReason": "SAFETY" } });
        let response: GenerateContentResponse = serde_json::from_value(blocked).unwrap();
        assert!(response.first_text().is_none());
    }

    #[tokio::test]
    async fn short_key_is_rejected_locally() {
        let err = connector().test_connection("short", &gemini()).await.unwrap_err();
        assert_eq!(err.status_hint(), 401);
        assert_eq!(err.message(), "Invalid API key format");

        let err = connector().test_connection("", &gemini()).await.unwrap_err();
        assert_eq!(err.status_hint(), 401);
    }

    #[tokio::test]
    async fn ten_char_key_passes_format_check() {
        connector()
            .test_connection("AIzaSy1234", &gemini())
            .await
            .expect("format check should pass");
    }

    #[test]
    fn url_embeds_model_id() {
        assert_eq!(
            connector().generate_url("gemini-1.5-pro"),
            "http://127.0.0.1:9/v1/models/gemini-1.5-pro:generateContent"
        );
    }
}

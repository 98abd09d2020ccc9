use async_trait::async_trait;
use tracing::debug;

use crate::application::ProviderConnector;
use crate::domain::{ConnectorError, Model, ModelCategory, ProviderKey, ProviderReply};

use super::openai_compat::{
    ChatCompletionRequest, ChatCompletionResponse, ImageGenerationRequest, ImageGenerationResponse,
    CHAT_COMPLETIONS_PATH, IMAGE_GENERATIONS_PATH,
};
use super::upstream::{missing_field, send_json, send_probe};

const MODELS_PATH: &str = "/v1/models";
const CONTEXT: &str = "OpenAiConnector";
const CONNECT_FAILED: &str = "Failed to connect to OpenAI API";
const REQUEST_FAILED: &str = "Failed to process OpenAI request";

/// Connector for the OpenAI platform (chat completions and DALL-E images).
///
/// The connection test lists models with the caller's bearer token, which
/// validates the key without spending tokens.
pub struct OpenAiConnector {
    client: reqwest::Client,
    base_url: String,
}

impl OpenAiConnector {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        Self {
            client,
            base_url: base.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn complete_chat(
        &self,
        api_key: &str,
        model: &Model,
        prompt: &str,
    ) -> Result<ProviderReply, ConnectorError> {
        let request = ChatCompletionRequest::user_prompt(model.model_id(), prompt);
        let response: ChatCompletionResponse = send_json(
            self.client
                .post(self.url(CHAT_COMPLETIONS_PATH))
                .bearer_auth(api_key)
                .json(&request),
            CONTEXT,
            REQUEST_FAILED,
        )
        .await?;

        response
            .first_content()
            .map(ProviderReply::Text)
            .ok_or_else(|| missing_field(CONTEXT, REQUEST_FAILED, "choices[0].message.content"))
    }

    async fn generate_image(
        &self,
        api_key: &str,
        prompt: &str,
    ) -> Result<ProviderReply, ConnectorError> {
        let request = ImageGenerationRequest::single(prompt);
        let response: ImageGenerationResponse = send_json(
            self.client
                .post(self.url(IMAGE_GENERATIONS_PATH))
                .bearer_auth(api_key)
                .json(&request),
            CONTEXT,
            REQUEST_FAILED,
        )
        .await?;

        response
            .first_url()
            .map(ProviderReply::ImageUrl)
            .ok_or_else(|| missing_field(CONTEXT, REQUEST_FAILED, "data[0].url"))
    }
}

#[async_trait]
impl ProviderConnector for OpenAiConnector {
    fn provider(&self) -> ProviderKey {
        ProviderKey::OpenAi
    }

    async fn test_connection(&self, api_key: &str, _model: &Model) -> Result<(), ConnectorError> {
        debug!("{CONTEXT}: probing {}", self.url(MODELS_PATH));
        send_probe(
            self.client.get(self.url(MODELS_PATH)).bearer_auth(api_key),
            CONTEXT,
            CONNECT_FAILED,
        )
        .await
    }

    async fn send_request(
        &self,
        api_key: &str,
        model: &Model,
        prompt: &str,
    ) -> Result<ProviderReply, ConnectorError> {
        match model.category() {
            ModelCategory::Chat => self.complete_chat(api_key, model, prompt).await,
            ModelCategory::Image => self.generate_image(api_key, prompt).await,
            ModelCategory::Other(raw) => Err(ConnectorError::unsupported_category(
                ProviderKey::OpenAi.display_name(),
                raw.as_str(),
            )),
        }
    }
}

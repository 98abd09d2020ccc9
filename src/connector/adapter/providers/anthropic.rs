use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ProviderConnector;
use crate::domain::{ConnectorError, Model, ProviderKey, ProviderReply};

use super::upstream::{missing_field, send_json};
use super::{require_chat, MAX_TOKENS};

const MESSAGES_PATH: &str = "/v1/messages";
const ANTHROPIC_API_VERSION: &str = "2023-06-01";
const KEY_PREFIX: &str = "sk-ant-";
const CONTEXT: &str = "AnthropicConnector";
const REQUEST_FAILED: &str = "Failed to process Anthropic request";

/// Anthropic Messages API request payload.
#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Serialize, PartialEq)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

impl<'a> ApiRequest<'a> {
    pub fn user_prompt(model: &'a str, prompt: &'a str) -> Self {
        Self {
            model,
            messages: vec![ApiMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: MAX_TOKENS,
        }
    }
}

/// Minimal subset of the Messages API response we care about.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    text: Option<String>,
}

impl ApiResponse {
    /// `content[0].text`, if present.
    pub fn first_text(self) -> Option<String> {
        self.content.into_iter().next().and_then(|b| b.text)
    }
}

/// Connector for the Anthropic Messages API (Claude).
///
/// The connection test is local: keys must carry the `sk-ant-` prefix.
/// Requests authenticate with `x-api-key` plus a pinned `anthropic-version`.
pub struct AnthropicConnector {
    client: reqwest::Client,
    /// Full endpoint URL (base + MESSAGES_PATH).
    url: String,
}

impl AnthropicConnector {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), MESSAGES_PATH);
        Self { client, url }
    }
}

#[async_trait]
impl ProviderConnector for AnthropicConnector {
    fn provider(&self) -> ProviderKey {
        ProviderKey::Anthropic
    }

    async fn test_connection(&self, api_key: &str, _model: &Model) -> Result<(), ConnectorError> {
        if !api_key.starts_with(KEY_PREFIX) {
            return Err(ConnectorError::invalid_credential(
                "Invalid Anthropic API key format",
            ));
        }
        Ok(())
    }

    async fn send_request(
        &self,
        api_key: &str,
        model: &Model,
        prompt: &str,
    ) -> Result<ProviderReply, ConnectorError> {
        require_chat(ProviderKey::Anthropic, model)?;

        let request = ApiRequest::user_prompt(model.model_id(), prompt);
        let response: ApiResponse = send_json(
            self.client
                .post(&self.url)
                .header("x-api-key", api_key)
                .header("anthropic-version", ANTHROPIC_API_VERSION)
                .json(&request),
            CONTEXT,
            REQUEST_FAILED,
        )
        .await?;

        response
            .first_text()
            .map(ProviderReply::Text)
            .ok_or_else(|| missing_field(CONTEXT, REQUEST_FAILED, "content[0].text"))
    }
}

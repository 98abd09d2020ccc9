use async_trait::async_trait;

use crate::application::ProviderConnector;
use crate::domain::{ConnectorError, Model, ProviderKey, ProviderReply};

use super::openai_compat::{ChatCompletionRequest, ChatCompletionResponse, CHAT_COMPLETIONS_PATH};
use super::require_chat;
use super::upstream::{missing_field, send_json};

const CONTEXT: &str = "DeepSeekConnector";
const REQUEST_FAILED: &str = "Failed to process DeepSeek request";
const MIN_KEY_LEN: usize = 30;

/// Connector for DeepSeek's OpenAI-compatible chat API.
///
/// The connection test only checks the key length locally.
pub struct DeepSeekConnector {
    client: reqwest::Client,
    base_url: String,
}

impl DeepSeekConnector {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        Self {
            client,
            base_url: base.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ProviderConnector for DeepSeekConnector {
    fn provider(&self) -> ProviderKey {
        ProviderKey::DeepSeek
    }

    async fn test_connection(&self, api_key: &str, _model: &Model) -> Result<(), ConnectorError> {
        if api_key.len() < MIN_KEY_LEN {
            return Err(ConnectorError::invalid_credential(
                "Invalid DeepSeek API key format",
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
        require_chat(ProviderKey::DeepSeek, model)?;

        let request = ChatCompletionRequest::user_prompt(model.model_id(), prompt);
        let response: ChatCompletionResponse = send_json(
            self.client
                .post(format!("{}{}", self.base_url, CHAT_COMPLETIONS_PATH))
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ModelCategory;

    fn deepseek_chat() -> Model {
        Model::new(
            "deepseek-chat",
            "DeepSeek Chat",
            ModelCategory::Chat,
            "deepseek",
            "deepseek-chat",
            "deepseek",
        )
    }

    fn connector() -> DeepSeekConnector {
        DeepSeekConnector::new(reqwest::Client::new(), "http://127.0.0.1:9")
    }

    #[tokio::test]
    async fn undersized_key_is_rejected_locally() {
        let err = connector()
            .test_connection("sk-123", &deepseek_chat())
            .await
            .unwrap_err();
        assert_eq!(err.status_hint(), 401);
        assert_eq!(err.message(), "Invalid DeepSeek API key format");
    }

    #[tokio::test]
    async fn thirty_char_key_passes_format_check() {
        let key = format!("sk-{}", "a".repeat(27));
        assert_eq!(key.len(), 30);
        connector()
            .test_connection(&key, &deepseek_chat())
            .await
            .expect("format check should pass");
    }

    #[tokio::test]
    async fn image_models_are_rejected_before_dispatch() {
        let model = Model::new(
            "ds-img",
            "DS Image",
            ModelCategory::Image,
            "deepseek",
            "ds-img",
            "deepseek",
        );
        let err = connector()
            .send_request(&"k".repeat(40), &model, "draw")
            .await
            .unwrap_err();
        assert!(matches!(err, ConnectorError::UnsupportedCategory { .. }));
        assert_eq!(err.status_hint(), 500);
    }
}

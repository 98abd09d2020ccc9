//! Wire types for the OpenAI chat-completions and image-generation APIs.
//!
//! DeepSeek speaks the same chat-completions dialect, so both connectors
//! build and parse through this module.

use serde::{Deserialize, Serialize};

use super::MAX_TOKENS;

pub(crate) const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";
pub(crate) const IMAGE_GENERATIONS_PATH: &str = "/v1/images/generations";
pub(crate) const IMAGE_SIZE: &str = "1024x1024";

#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub max_tokens: u32,
}

impl<'a> ChatCompletionRequest<'a> {
    pub fn user_prompt(model: &'a str, prompt: &'a str) -> Self {
        Self {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: MAX_TOKENS,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<AssistantMessage>,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

impl ChatCompletionResponse {
    /// `choices[0].message.content`, if present.
    pub fn first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct ImageGenerationRequest<'a> {
    pub prompt: &'a str,
    pub n: u32,
    pub size: &'a str,
}

impl<'a> ImageGenerationRequest<'a> {
    pub fn single(prompt: &'a str) -> Self {
        Self {
            prompt,
            n: 1,
            size: IMAGE_SIZE,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ImageGenerationResponse {
    #[serde(default)]
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    url: Option<String>,
}

impl ImageGenerationResponse {
    /// `data[0].url`, if present.
    pub fn first_url(self) -> Option<String> {
        self.data.into_iter().next().and_then(|d| d.url)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn chat_request_matches_wire_shape() {
        let request = ChatCompletionRequest::user_prompt("gpt-4o", "hello");
        let body = serde_json::to_value(request).unwrap();
        assert_eq!(
            body,
            json!({
                "model": "gpt-4o",
                "messages": [{ "role": "user", "content": "hello" }],
                "max_tokens": 1000
            })
        );
    }

    #[test]
    fn image_request_matches_wire_shape() {
        let body = serde_json::to_value(ImageGenerationRequest::single("a red fox")).unwrap();
        assert_eq!(body, json!({ "prompt": "a red fox", "n": 1, "size": "1024x1024" }));
    }

    #[test]
    fn chat_response_yields_first_choice() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "id": "chatcmpl-1",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "hi there" } },
                { "index": 1, "message": { "role": "assistant", "content": "ignored" } }
            ]
        }))
        .unwrap();
        assert_eq!(response.first_content().as_deref(), Some("hi there"));
    }

    #[test]
    fn chat_response_without_choices_is_empty() {
        let response: ChatCompletionResponse =
            serde_json::from_value(json!({ "id": "x" })).unwrap();
        assert!(response.first_content().is_none());
    }

    #[test]
    fn image_response_yields_first_url() {
        let response: ImageGenerationResponse = serde_json::from_value(json!({
            "created": 1,
            "data": [{ "url": "https://images.example/1.png" }]
        }))
        .unwrap();
        assert_eq!(
            response.first_url().as_deref(),
            Some("https://images.example/1.png")
        );
    }
}

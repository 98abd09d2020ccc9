use serde::{Deserialize, Serialize};

/// Normalized payload extracted from a provider response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderReply {
    /// Assistant text from a chat-category model.
    Text(String),
    /// Resource URL from an image-category model.
    ImageUrl(String),
}

impl ProviderReply {
    pub fn payload(&self) -> &str {
        match self {
            ProviderReply::Text(text) => text,
            ProviderReply::ImageUrl(url) => url,
        }
    }

    pub fn into_payload(self) -> String {
        match self {
            ProviderReply::Text(text) => text,
            ProviderReply::ImageUrl(url) => url,
        }
    }
}

/// Result of a successful connection test. `time` is wall-clock milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionOutcome {
    pub success: bool,
    pub message: String,
    pub time: u64,
}

impl ConnectionOutcome {
    pub fn succeeded(time: u64) -> Self {
        Self {
            success: true,
            message: "Connection successful".to_string(),
            time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualTestOutcome {
    pub success: bool,
    pub response: String,
}

impl ManualTestOutcome {
    pub fn succeeded(reply: ProviderReply) -> Self {
        Self {
            success: true,
            response: reply.into_payload(),
        }
    }
}

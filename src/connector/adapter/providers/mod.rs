//! Per-provider connectors.
//!
//! | Provider  | Connection test                  | Auth                          |
//! |-----------|----------------------------------|-------------------------------|
//! | openai    | live `GET /v1/models`            | `Authorization: Bearer <key>` |
//! | google    | local: key at least 10 chars     | `?key=<key>`                  |
//! | anthropic | local: key starts with `sk-ant-` | `x-api-key` + version header  |
//! | deepseek  | local: key at least 30 chars     | `Authorization: Bearer <key>` |

mod anthropic;
mod deepseek;
mod google;
mod openai;
mod openai_compat;
mod settings;
mod upstream;

pub use anthropic::*;
pub use deepseek::*;
pub use google::*;
pub use openai::*;
pub use settings::*;

use crate::domain::{ConnectorError, Model, ModelCategory, ProviderKey};

/// Output token cap sent with every chat-style request.
pub(crate) const MAX_TOKENS: u32 = 1000;

/// Chat-only providers refuse other categories instead of sending a chat
/// request for, say, an image model.
pub(crate) fn require_chat(provider: ProviderKey, model: &Model) -> Result<(), ConnectorError> {
    match model.category() {
        ModelCategory::Chat => Ok(()),
        other => Err(ConnectorError::unsupported_category(
            provider.display_name(),
            other.as_str(),
        )),
    }
}

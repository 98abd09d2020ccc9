use async_trait::async_trait;

use crate::domain::{ConnectorError, Model, ProviderKey, ProviderReply};

/// Adapter translating generic test calls into one provider's wire protocol.
///
/// Implementors are stateless apart from their HTTP client and endpoint, so a
/// single instance serves every request for the lifetime of the process.
/// There are no default bodies: each provider states its own validation
/// policy and request shape.
#[async_trait]
pub trait ProviderConnector: Send + Sync {
    /// The provider key this connector was built for.
    fn provider(&self) -> ProviderKey;

    /// Cheapest check that plausibly validates `api_key` without spending
    /// the caller's token budget. Depending on the provider this is either a
    /// live metadata call or a local format check.
    async fn test_connection(&self, api_key: &str, model: &Model) -> Result<(), ConnectorError>;

    /// Send exactly one upstream request for `prompt` and normalize the reply
    /// according to the model's category.
    async fn send_request(
        &self,
        api_key: &str,
        model: &Model,
        prompt: &str,
    ) -> Result<ProviderReply, ConnectorError>;
}

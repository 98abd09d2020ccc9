use std::sync::Arc;

use super::ProviderConnector;

/// Lookup from a catalog provider key to the connector serving it.
///
/// `None` means no connector is registered for the key. Callers treat that as
/// a configuration error, never as a bad credential or a missing model.
pub trait ConnectorResolver: Send + Sync {
    fn resolve(&self, provider: &str) -> Option<Arc<dyn ProviderConnector>>;
}

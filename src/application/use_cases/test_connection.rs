use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use crate::application::{CatalogRepository, ConnectorResolver};
use crate::domain::{ConnectionOutcome, DomainError};

use super::dispatch::resolve_target;

/// Verifies an API key against the provider behind a catalog model.
pub struct TestConnectionUseCase {
    catalog: Arc<dyn CatalogRepository>,
    connectors: Arc<dyn ConnectorResolver>,
}

impl TestConnectionUseCase {
    pub fn new(
        catalog: Arc<dyn CatalogRepository>,
        connectors: Arc<dyn ConnectorResolver>,
    ) -> Self {
        Self {
            catalog,
            connectors,
        }
    }

    pub async fn execute(
        &self,
        model_id: &str,
        api_key: &str,
    ) -> Result<ConnectionOutcome, DomainError> {
        if model_id.is_empty() || api_key.is_empty() {
            return Err(DomainError::invalid_input("Model ID and API key are required"));
        }

        let (model, connector) =
            resolve_target(self.catalog.as_ref(), self.connectors.as_ref(), model_id).await?;

        info!("Testing {} connection for model {}", connector.provider(), model.id());

        let started = Instant::now();
        if let Err(e) = connector.test_connection(api_key, &model).await {
            warn!(
                "Connection test for {} failed ({}): {}",
                model.id(),
                e.status_hint(),
                e
            );
            return Err(e.into());
        }
        let elapsed = started.elapsed().as_millis() as u64;

        info!("Connection test for {} succeeded in {}ms", model.id(), elapsed);
        Ok(ConnectionOutcome::succeeded(elapsed))
    }
}

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::{CatalogRepository, ConnectorResolver};
use crate::domain::{DomainError, ManualTestOutcome};

use super::dispatch::resolve_target;

/// Sends one user-supplied prompt to the provider behind a catalog model.
pub struct ManualTestUseCase {
    catalog: Arc<dyn CatalogRepository>,
    connectors: Arc<dyn ConnectorResolver>,
}

impl ManualTestUseCase {
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
        prompt: &str,
    ) -> Result<ManualTestOutcome, DomainError> {
        if model_id.is_empty() || api_key.is_empty() || prompt.is_empty() {
            return Err(DomainError::invalid_input(
                "Model ID, API key, and prompt are required",
            ));
        }

        let (model, connector) =
            resolve_target(self.catalog.as_ref(), self.connectors.as_ref(), model_id).await?;

        info!(
            "Sending manual {} request to {} ({})",
            model.category(),
            connector.provider(),
            model.model_id()
        );
        debug!("Prompt length: {} chars", prompt.chars().count());

        let reply = connector
            .send_request(api_key, &model, prompt)
            .await
            .map_err(|e| {
                warn!("Manual test for {} failed ({}): {}", model.id(), e.status_hint(), e);
                DomainError::from(e)
            })?;

        Ok(ManualTestOutcome::succeeded(reply))
    }
}

use std::sync::Arc;

use crate::application::{CatalogRepository, ConnectorResolver, ProviderConnector};
use crate::domain::{DomainError, Model};

/// Look up a model and the connector for its provider.
///
/// An unknown model id is `NotFound`; a model whose provider has no connector
/// is a `Configuration` error.
pub(super) async fn resolve_target(
    catalog: &dyn CatalogRepository,
    connectors: &dyn ConnectorResolver,
    model_id: &str,
) -> Result<(Model, Arc<dyn ProviderConnector>), DomainError> {
    let model = catalog
        .find_model(model_id)
        .await?
        .ok_or_else(|| DomainError::not_found("Model not found"))?;

    let connector = connectors.resolve(model.provider()).ok_or_else(|| {
        DomainError::configuration(format!("No connector available for {}", model.provider()))
    })?;

    Ok((model, connector))
}

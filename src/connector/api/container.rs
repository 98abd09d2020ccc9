use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::application::{CatalogRepository, ConnectorResolver};
use crate::{
    BrowseCatalogUseCase, ConnectorRegistry, JsonCatalog, ManualTestUseCase, ProviderSettings,
    TestConnectionUseCase,
};

pub struct ContainerConfig {
    /// Catalog JSON to load; the bundled catalog when `None`.
    pub catalog_path: Option<PathBuf>,
    /// Provider endpoints and outbound HTTP timeout.
    pub settings: ProviderSettings,
}

/// Composition root: owns the catalog and the connector registry and hands
/// out use cases wired to them.
pub struct Container {
    catalog: Arc<dyn CatalogRepository>,
    registry: Arc<ConnectorRegistry>,
    catalog_source: String,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let (catalog, catalog_source) = match config.catalog_path.as_deref() {
            Some(path) => (JsonCatalog::from_path(path)?, path.display().to_string()),
            None => (JsonCatalog::bundled()?, "bundled".to_string()),
        };

        let registry = ConnectorRegistry::new(&config.settings);
        debug!(
            "Connectors registered: {} (timeout {:?})",
            registry.providers().join(", "),
            config.settings.timeout()
        );

        // Unroutable models stay browsable; the warning is emitted here once.
        catalog.unroutable_models(&registry);

        Ok(Self {
            catalog: Arc::new(catalog),
            registry: Arc::new(registry),
            catalog_source,
        })
    }

    /// Assemble from pre-built parts (tests inject stub connectors this way).
    pub fn from_parts(catalog: Arc<dyn CatalogRepository>, registry: ConnectorRegistry) -> Self {
        Self {
            catalog,
            registry: Arc::new(registry),
            catalog_source: "custom".to_string(),
        }
    }

    pub fn browse_use_case(&self) -> BrowseCatalogUseCase {
        BrowseCatalogUseCase::new(self.catalog.clone())
    }

    pub fn test_connection_use_case(&self) -> TestConnectionUseCase {
        TestConnectionUseCase::new(self.catalog.clone(), self.resolver())
    }

    pub fn manual_test_use_case(&self) -> ManualTestUseCase {
        ManualTestUseCase::new(self.catalog.clone(), self.resolver())
    }

    pub fn registry(&self) -> &ConnectorRegistry {
        &self.registry
    }

    pub fn catalog_source(&self) -> &str {
        &self.catalog_source
    }

    fn resolver(&self) -> Arc<dyn ConnectorResolver> {
        self.registry.clone()
    }
}

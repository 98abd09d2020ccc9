use std::collections::BTreeMap;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::{CatalogRepository, ConnectorResolver};
use crate::domain::{Company, DomainError, Model};

/// Catalog shipped with the binary.
const BUNDLED_CATALOG: &str = include_str!("../../../data/catalog.json");

#[derive(Deserialize)]
struct CatalogFile {
    companies: BTreeMap<String, Company>,
    models: BTreeMap<String, Model>,
}

/// Read-only catalog loaded from a `{companies: {...}, models: {...}}` JSON
/// document. Listings come back ordered by id.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    companies: BTreeMap<String, Company>,
    models: BTreeMap<String, Model>,
}

impl JsonCatalog {
    pub fn bundled() -> Result<Self, DomainError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn from_path(path: &Path) -> Result<Self, DomainError> {
        debug!("Loading catalog from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let file: CatalogFile = serde_json::from_str(json)
            .map_err(|e| DomainError::catalog(format!("invalid catalog JSON: {e}")))?;
        let catalog = Self {
            companies: file.companies,
            models: file.models,
        };
        catalog.validate()?;
        debug!(
            "Catalog loaded: {} companies, {} models",
            catalog.companies.len(),
            catalog.models.len()
        );
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), DomainError> {
        for (key, company) in &self.companies {
            if key != company.id() {
                return Err(DomainError::catalog(format!(
                    "company entry '{key}' has id '{}'",
                    company.id()
                )));
            }
            let missing = company
                .model_ids()
                .iter()
                .find(|id| !self.models.contains_key(*id));
            if let Some(missing) = missing {
                return Err(DomainError::catalog(format!(
                    "company '{key}' lists unknown model '{missing}'"
                )));
            }
        }

        for (key, model) in &self.models {
            if key != model.id() {
                return Err(DomainError::catalog(format!(
                    "model entry '{key}' has id '{}'",
                    model.id()
                )));
            }
            if !self.companies.contains_key(model.company_id()) {
                return Err(DomainError::catalog(format!(
                    "model '{key}' references unknown company '{}'",
                    model.company_id()
                )));
            }
        }

        Ok(())
    }

    /// Ids of models whose provider has no registered connector.
    ///
    /// These still load so the catalog stays browsable; testing them yields a
    /// configuration error.
    pub fn unroutable_models(&self, connectors: &dyn ConnectorResolver) -> Vec<String> {
        let unroutable: Vec<String> = self
            .models
            .values()
            .filter(|m| connectors.resolve(m.provider()).is_none())
            .map(|m| m.id().to_string())
            .collect();

        for id in &unroutable {
            if let Some(model) = self.models.get(id) {
                warn!(
                    "Model {} uses provider '{}' which has no connector",
                    id,
                    model.provider()
                );
            }
        }

        unroutable
    }

    pub fn company_count(&self) -> usize {
        self.companies.len()
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }
}

#[async_trait]
impl CatalogRepository for JsonCatalog {
    async fn list_companies(&self) -> Result<Vec<Company>, DomainError> {
        Ok(self.companies.values().cloned().collect())
    }

    async fn find_company(&self, id: &str) -> Result<Option<Company>, DomainError> {
        Ok(self.companies.get(id).cloned())
    }

    async fn list_models(&self) -> Result<Vec<Model>, DomainError> {
        Ok(self.models.values().cloned().collect())
    }

    async fn find_model(&self, id: &str) -> Result<Option<Model>, DomainError> {
        Ok(self.models.get(id).cloned())
    }
}

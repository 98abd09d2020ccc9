use async_trait::async_trait;

use crate::domain::{Company, DomainError, Model};

/// Read-only access to the company/model catalog.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn list_companies(&self) -> Result<Vec<Company>, DomainError>;

    async fn find_company(&self, id: &str) -> Result<Option<Company>, DomainError>;

    async fn list_models(&self) -> Result<Vec<Model>, DomainError>;

    async fn find_model(&self, id: &str) -> Result<Option<Model>, DomainError>;
}

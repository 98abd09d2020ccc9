use std::sync::Arc;

use crate::application::CatalogRepository;
use crate::domain::{
    Company, CompanyDetails, CompanySummary, DomainError, Model, ModelDetails, ModelListing,
    ModelSummary,
};

/// Read-side queries over the catalog.
pub struct BrowseCatalogUseCase {
    catalog: Arc<dyn CatalogRepository>,
}

impl BrowseCatalogUseCase {
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    pub async fn companies(&self) -> Result<Vec<CompanySummary>, DomainError> {
        let companies = self.catalog.list_companies().await?;
        let mut summaries = Vec::with_capacity(companies.len());

        for company in companies {
            let models = self.models_of(&company).await?;
            summaries.push(CompanySummary {
                id: company.id().to_string(),
                name: company.name().to_string(),
                description: company.description().to_string(),
                logo: company.logo().to_string(),
                models: models.iter().map(ModelSummary::from).collect(),
            });
        }

        Ok(summaries)
    }

    /// Companies whose name, or any model's name, contains `term`
    /// (case-insensitive). A blank term matches everything.
    pub async fn search_companies(&self, term: &str) -> Result<Vec<CompanySummary>, DomainError> {
        let companies = self.companies().await?;
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(companies);
        }

        Ok(companies
            .into_iter()
            .filter(|company| {
                company.name.to_lowercase().contains(&needle)
                    || company
                        .models
                        .iter()
                        .any(|model| model.name.to_lowercase().contains(&needle))
            })
            .collect())
    }

    pub async fn company(&self, company_id: &str) -> Result<CompanyDetails, DomainError> {
        let company = self
            .catalog
            .find_company(company_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Company not found"))?;
        let models = self.models_of(&company).await?;
        Ok(CompanyDetails::new(&company, models))
    }

    pub async fn models(&self) -> Result<Vec<ModelListing>, DomainError> {
        let models = self.catalog.list_models().await?;
        let mut listings = Vec::with_capacity(models.len());

        for model in models {
            let company_name = self.company_name(&model).await?;
            listings.push(ModelListing {
                id: model.id().to_string(),
                name: model.name().to_string(),
                category: model.category().clone(),
                version: model.version().to_string(),
                company_id: model.company_id().to_string(),
                company_name,
            });
        }

        Ok(listings)
    }

    pub async fn model(&self, model_id: &str) -> Result<ModelDetails, DomainError> {
        let model = self
            .catalog
            .find_model(model_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Model not found"))?;
        let company_name = self.company_name(&model).await?;
        Ok(ModelDetails {
            model,
            company_name,
        })
    }

    async fn models_of(&self, company: &Company) -> Result<Vec<Model>, DomainError> {
        let mut models = Vec::with_capacity(company.model_ids().len());
        for id in company.model_ids() {
            let model = self.catalog.find_model(id).await?.ok_or_else(|| {
                DomainError::catalog(format!("Company {} lists unknown model {}", company.id(), id))
            })?;
            models.push(model);
        }
        Ok(models)
    }

    async fn company_name(&self, model: &Model) -> Result<String, DomainError> {
        self.catalog
            .find_company(model.company_id())
            .await?
            .map(|c| c.name().to_string())
            .ok_or_else(|| {
                DomainError::catalog(format!(
                    "Model {} references unknown company {}",
                    model.id(),
                    model.company_id()
                ))
            })
    }
}

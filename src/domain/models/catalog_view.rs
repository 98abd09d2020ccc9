use serde::Serialize;

use super::{Company, Model, ModelCategory};

/// Compact model entry nested in a company listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSummary {
    pub id: String,
    pub name: String,
    pub category: ModelCategory,
    pub version: String,
    pub short_description: String,
}

impl From<&Model> for ModelSummary {
    fn from(model: &Model) -> Self {
        Self {
            id: model.id().to_string(),
            name: model.name().to_string(),
            category: model.category().clone(),
            version: model.version().to_string(),
            short_description: model.short_description_or_excerpt(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanySummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub logo: String,
    pub models: Vec<ModelSummary>,
}

/// A company with its full model records, in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyDetails {
    pub id: String,
    pub name: String,
    pub description: String,
    pub logo: String,
    pub models: Vec<Model>,
}

impl CompanyDetails {
    pub fn new(company: &Company, models: Vec<Model>) -> Self {
        Self {
            id: company.id().to_string(),
            name: company.name().to_string(),
            description: company.description().to_string(),
            logo: company.logo().to_string(),
            models,
        }
    }
}

/// Flat model entry used by the all-models listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelListing {
    pub id: String,
    pub name: String,
    pub category: ModelCategory,
    pub version: String,
    pub company_id: String,
    pub company_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDetails {
    #[serde(flatten)]
    pub model: Model,
    pub company_name: String,
}

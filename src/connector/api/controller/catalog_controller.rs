use anyhow::Result;

use crate::domain::{CompanyDetails, CompanySummary, ModelDetails, ModelListing};

use super::super::Container;

pub struct CatalogController<'a> {
    container: &'a Container,
}

impl<'a> CatalogController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn companies(&self, search: Option<&str>) -> Result<String> {
        let browse = self.container.browse_use_case();
        let companies = match search {
            Some(term) => browse.search_companies(term).await?,
            None => browse.companies().await?,
        };
        Ok(format_companies(&companies))
    }

    pub async fn company(&self, company_id: &str) -> Result<String> {
        let company = self.container.browse_use_case().company(company_id).await?;
        Ok(format_company(&company))
    }

    pub async fn models(&self) -> Result<String> {
        let models = self.container.browse_use_case().models().await?;
        Ok(format_models(&models))
    }

    pub async fn model(&self, model_id: &str) -> Result<String> {
        let details = self.container.browse_use_case().model(model_id).await?;
        Ok(format_model(&details))
    }

    pub fn providers(&self) -> String {
        let mut output = String::from("Registered connectors:\n");
        for provider in self.container.registry().providers() {
            output.push_str(&format!("  {}\n", provider));
        }
        output.push_str(&format!("\nCatalog: {}", self.container.catalog_source()));
        output
    }
}

fn format_companies(companies: &[CompanySummary]) -> String {
    if companies.is_empty() {
        return "No companies in catalog.".to_string();
    }

    let mut output = String::new();
    for company in companies {
        output.push_str(&format!("{} ({})\n", company.name, company.id));
        for model in &company.models {
            output.push_str(&format!(
                "  - {} [{}] v{}: {}\n",
                model.name, model.category, model.version, model.short_description
            ));
        }
        output.push('\n');
    }
    output.trim_end().to_string()
}

fn format_company(company: &CompanyDetails) -> String {
    let mut output = format!(
        "{} ({})\n{}\n\nModels:\n",
        company.name, company.id, company.description
    );
    for model in &company.models {
        output.push_str(&format!(
            "  {} ({}) [{}] provider={} model_id={}\n",
            model.name(),
            model.id(),
            model.category(),
            model.provider(),
            model.model_id()
        ));
    }
    output.trim_end().to_string()
}

fn format_models(models: &[ModelListing]) -> String {
    if models.is_empty() {
        return "No models in catalog.".to_string();
    }

    let mut output = format!("Found {} models:\n\n", models.len());
    for model in models {
        output.push_str(&format!(
            "  {} ({}) [{}] by {}\n",
            model.name, model.id, model.category, model.company_name
        ));
    }
    output.trim_end().to_string()
}

fn format_model(details: &ModelDetails) -> String {
    let model = &details.model;
    let mut output = format!(
        "{}\n=====================\nCompany:  {}\nCategory: {}\nVersion:  {}\nProvider: {} ({})\n\n{}",
        model.name(),
        details.company_name,
        model.category(),
        model.version(),
        model.provider(),
        model.model_id(),
        model.description()
    );

    if let Some(snippets) = model.code_snippets() {
        let sections = [
            ("API Request", snippets.request.as_deref()),
            ("API Response", snippets.response.as_deref()),
            ("cURL Example", snippets.curl.as_deref()),
            ("Python Example", snippets.python.as_deref()),
        ];
        for (title, code) in sections {
            if let Some(code) = code {
                let body: String = code
                    .lines()
                    .map(|l| format!("   | {}", l))
                    .collect::<Vec<_>>()
                    .join("\n");
                output.push_str(&format!("\n\n{}:\n{}", title, body));
            }
        }
    }

    output
}

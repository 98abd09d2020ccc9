use serde::{Deserialize, Serialize};

/// A model vendor as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    logo: String,
    /// Model ids in display order.
    #[serde(default)]
    models: Vec<String>,
}

impl Company {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn logo(&self) -> &str {
        &self.logo
    }

    pub fn model_ids(&self) -> &[String] {
        &self.models
    }
}

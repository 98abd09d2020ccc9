use serde::{Deserialize, Serialize};

use super::ProviderKey;

const EXCERPT_CHARS: usize = 100;

/// What kind of output a model produces, which decides how replies are parsed.
///
/// Serialized as the catalog's plain string; unknown values keep their text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModelCategory {
    Chat,
    Image,
    /// A category no connector understands, as written in the catalog.
    Other(String),
}

impl ModelCategory {
    pub fn as_str(&self) -> &str {
        match self {
            ModelCategory::Chat => "chat",
            ModelCategory::Image => "image",
            ModelCategory::Other(raw) => raw,
        }
    }
}

impl From<String> for ModelCategory {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "chat" => ModelCategory::Chat,
            "image" => ModelCategory::Image,
            _ => ModelCategory::Other(raw),
        }
    }
}

impl From<ModelCategory> for String {
    fn from(category: ModelCategory) -> Self {
        match category {
            ModelCategory::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ModelCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Integration examples shown alongside a model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSnippets {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curl: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub python: Option<String>,
}

/// A catalog entry. Immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    id: String,
    name: String,
    category: ModelCategory,
    #[serde(default)]
    version: String,
    /// Raw provider key; resolved against the connector registry at dispatch.
    provider: String,
    model_id: String,
    #[serde(default)]
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    short_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    code_snippets: Option<CodeSnippets>,
    company_id: String,
}

impl Model {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: ModelCategory,
        provider: impl Into<String>,
        model_id: impl Into<String>,
        company_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            version: String::new(),
            provider: provider.into(),
            model_id: model_id.into(),
            description: String::new(),
            short_description: None,
            code_snippets: None,
            company_id: company_id.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_short_description(mut self, short: impl Into<String>) -> Self {
        self.short_description = Some(short.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &ModelCategory {
        &self.category
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// The provider key, if the catalog names a provider this build knows.
    pub fn provider_key(&self) -> Option<ProviderKey> {
        ProviderKey::parse(&self.provider)
    }

    /// Identifier sent upstream (e.g. `gpt-4o`, `gemini-1.5-pro`).
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn short_description(&self) -> Option<&str> {
        self.short_description.as_deref()
    }

    pub fn code_snippets(&self) -> Option<&CodeSnippets> {
        self.code_snippets.as_ref()
    }

    pub fn company_id(&self) -> &str {
        &self.company_id
    }

    /// Short description, or the first 100 characters of the description
    /// followed by an ellipsis.
    pub fn short_description_or_excerpt(&self) -> String {
        if let Some(short) = &self.short_description {
            return short.clone();
        }
        let excerpt: String = self.description.chars().take(EXCERPT_CHARS).collect();
        format!("{excerpt}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_catalog_shape() {
        let json = r#"{
            "id": "gpt-4o",
            "name": "GPT-4o",
            "category": "chat",
            "version": "2024-05",
            "provider": "openai",
            "modelId": "gpt-4o",
            "description": "Flagship model",
            "codeSnippets": { "curl": "curl https://api.openai.com" },
            "companyId": "openai"
        }"#;
        let model: Model = serde_json::from_str(json).unwrap();
        assert_eq!(model.category(), &ModelCategory::Chat);
        assert_eq!(model.provider_key(), Some(ProviderKey::OpenAi));
        assert_eq!(model.model_id(), "gpt-4o");
        assert_eq!(
            model.code_snippets().and_then(|s| s.curl.as_deref()),
            Some("curl https://api.openai.com")
        );
        assert!(model.short_description().is_none());
    }

    #[test]
    fn unknown_category_keeps_catalog_text() {
        let json = r#"{"id":"w","name":"W","category":"audio","provider":"openai",
            "modelId":"whisper-1","companyId":"openai"}"#;
        let model: Model = serde_json::from_str(json).unwrap();
        assert_eq!(model.category(), &ModelCategory::Other("audio".to_string()));
        assert_eq!(model.category().as_str(), "audio");

        let value = serde_json::to_value(&model).unwrap();
        assert_eq!(value["category"], "audio");
    }

    #[test]
    fn known_categories_serialize_lowercase() {
        assert_eq!(serde_json::to_value(ModelCategory::Image).unwrap(), "image");
        let parsed: ModelCategory = serde_json::from_str(r#""chat""#).unwrap();
        assert_eq!(parsed, ModelCategory::Chat);
    }

    #[test]
    fn excerpt_truncates_long_descriptions() {
        let model = Model::new("m", "M", ModelCategory::Chat, "openai", "m", "c")
            .with_description("x".repeat(150));
        let excerpt = model.short_description_or_excerpt();
        assert_eq!(excerpt.len(), 103);
        assert!(excerpt.ends_with("..."));

        let model = model.with_short_description("Short");
        assert_eq!(model.short_description_or_excerpt(), "Short");
    }

    #[test]
    fn unregistered_provider_is_representable() {
        let model = Model::new("m", "M", ModelCategory::Chat, "mistral", "m", "c");
        assert_eq!(model.provider(), "mistral");
        assert!(model.provider_key().is_none());
    }
}

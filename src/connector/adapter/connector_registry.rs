use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::application::{ConnectorResolver, ProviderConnector};
use crate::domain::ProviderKey;

use super::providers::{
    AnthropicConnector, DeepSeekConnector, GoogleConnector, OpenAiConnector, ProviderSettings,
};

/// Immutable map from provider key to connector, built once at startup and
/// shared by reference.
#[derive(Clone)]
pub struct ConnectorRegistry {
    connectors: HashMap<String, Arc<dyn ProviderConnector>>,
}

impl ConnectorRegistry {
    /// One connector per known provider, all sharing a single HTTP client.
    pub fn new(settings: &ProviderSettings) -> Self {
        let client = settings.http_client();
        let connectors = ProviderKey::ALL
            .into_iter()
            .map(|key| {
                let base_url = settings.base_url(key).to_string();
                let connector: Arc<dyn ProviderConnector> = match key {
                    ProviderKey::OpenAi => Arc::new(OpenAiConnector::new(client.clone(), base_url)),
                    ProviderKey::Google => Arc::new(GoogleConnector::new(client.clone(), base_url)),
                    ProviderKey::Anthropic => {
                        Arc::new(AnthropicConnector::new(client.clone(), base_url))
                    }
                    ProviderKey::DeepSeek => {
                        Arc::new(DeepSeekConnector::new(client.clone(), base_url))
                    }
                };
                debug!("Registered {} connector at {}", key, settings.base_url(key));
                (key.as_str().to_string(), connector)
            })
            .collect();

        Self { connectors }
    }

    /// A registry with no connectors; populate with [`Self::with_connector`].
    pub fn empty() -> Self {
        Self {
            connectors: HashMap::new(),
        }
    }

    /// Register `connector` under its own provider key, replacing any entry.
    pub fn with_connector(mut self, connector: Arc<dyn ProviderConnector>) -> Self {
        self.connectors
            .insert(connector.provider().as_str().to_string(), connector);
        self
    }

    pub fn get(&self, provider: &str) -> Option<Arc<dyn ProviderConnector>> {
        self.connectors.get(provider).cloned()
    }

    pub fn contains(&self, provider: &str) -> bool {
        self.connectors.contains_key(provider)
    }

    /// Registered provider keys, sorted.
    pub fn providers(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.connectors.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl ConnectorResolver for ConnectorRegistry {
    fn resolve(&self, provider: &str) -> Option<Arc<dyn ProviderConnector>> {
        self.get(provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_every_known_provider() {
        let registry = ConnectorRegistry::new(&ProviderSettings::default());
        assert_eq!(
            registry.providers(),
            vec!["anthropic", "deepseek", "google", "openai"]
        );
        for key in ProviderKey::ALL {
            let connector = registry.get(key.as_str()).expect("registered");
            assert_eq!(connector.provider(), key);
        }
    }

    #[test]
    fn unknown_provider_is_absent() {
        let registry = ConnectorRegistry::new(&ProviderSettings::default());
        assert!(registry.get("mistral").is_none());
        assert!(registry.resolve("").is_none());
        assert!(!registry.contains("OpenAI"));
    }

    #[test]
    fn with_connector_adds_single_provider() {
        let settings = ProviderSettings::default();
        let registry = ConnectorRegistry::empty().with_connector(Arc::new(GoogleConnector::new(
            settings.http_client(),
            settings.base_url(ProviderKey::Google),
        )));
        assert_eq!(registry.providers(), vec!["google"]);
        assert!(registry.get("openai").is_none());
    }
}

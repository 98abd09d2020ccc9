use std::time::Duration;

use crate::domain::ProviderKey;

pub const OPENAI_BASE_URL: &str = "https://api.openai.com";
pub const GOOGLE_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
pub const DEEPSEEK_BASE_URL: &str = "https://api.deepseek.com";

/// Outbound calls are bounded so a hung provider cannot pin a request forever.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Endpoint roots and HTTP limits shared by every connector.
///
/// Base URLs can be overridden per provider, which is how tests point the
/// connectors at a local mock server:
///
/// | Variable             | Default                                     |
/// |----------------------|---------------------------------------------|
/// | `OPENAI_BASE_URL`    | `https://api.openai.com`                    |
/// | `GOOGLE_BASE_URL`    | `https://generativelanguage.googleapis.com` |
/// | `ANTHROPIC_BASE_URL` | `https://api.anthropic.com`                 |
/// | `DEEPSEEK_BASE_URL`  | `https://api.deepseek.com`                  |
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    openai_base_url: String,
    google_base_url: String,
    anthropic_base_url: String,
    deepseek_base_url: String,
    timeout: Duration,
    connect_timeout: Duration,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            openai_base_url: OPENAI_BASE_URL.to_string(),
            google_base_url: GOOGLE_BASE_URL.to_string(),
            anthropic_base_url: ANTHROPIC_BASE_URL.to_string(),
            deepseek_base_url: DEEPSEEK_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(CONNECT_TIMEOUT_SECS),
        }
    }
}

impl ProviderSettings {
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        for key in ProviderKey::ALL {
            let var = format!("{}_BASE_URL", key.as_str().to_uppercase());
            if let Ok(url) = std::env::var(&var) {
                settings = settings.with_base_url(key, url);
            }
        }
        settings
    }

    pub fn with_base_url(mut self, key: ProviderKey, url: impl Into<String>) -> Self {
        let url = url.into().trim_end_matches('/').to_string();
        match key {
            ProviderKey::OpenAi => self.openai_base_url = url,
            ProviderKey::Google => self.google_base_url = url,
            ProviderKey::Anthropic => self.anthropic_base_url = url,
            ProviderKey::DeepSeek => self.deepseek_base_url = url,
        }
        self
    }

    /// Point every provider at the same root (used with a single mock server).
    pub fn with_all_base_urls(self, url: impl Into<String>) -> Self {
        let url = url.into();
        ProviderKey::ALL
            .into_iter()
            .fold(self, |settings, key| settings.with_base_url(key, url.clone()))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self, key: ProviderKey) -> &str {
        match key {
            ProviderKey::OpenAi => &self.openai_base_url,
            ProviderKey::Google => &self.google_base_url,
            ProviderKey::Anthropic => &self.anthropic_base_url,
            ProviderKey::DeepSeek => &self.deepseek_base_url,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn http_client(&self) -> reqwest::Client {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .build()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_endpoints() {
        let settings = ProviderSettings::default();
        assert_eq!(settings.base_url(ProviderKey::OpenAi), OPENAI_BASE_URL);
        assert_eq!(settings.base_url(ProviderKey::DeepSeek), DEEPSEEK_BASE_URL);
        assert_eq!(settings.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn overrides_strip_trailing_slash() {
        let settings = ProviderSettings::default()
            .with_base_url(ProviderKey::Google, "http://127.0.0.1:9000/");
        assert_eq!(settings.base_url(ProviderKey::Google), "http://127.0.0.1:9000");
        assert_eq!(settings.base_url(ProviderKey::Anthropic), ANTHROPIC_BASE_URL);
    }

    #[test]
    fn all_base_urls_share_one_root() {
        let settings = ProviderSettings::default().with_all_base_urls("http://mock");
        for key in ProviderKey::ALL {
            assert_eq!(settings.base_url(key), "http://mock");
        }
    }
}

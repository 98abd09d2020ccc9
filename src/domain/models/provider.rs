use serde::{Deserialize, Serialize};

/// Identifies which connector serves a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKey {
    #[serde(rename = "openai")]
    OpenAi,
    Google,
    Anthropic,
    #[serde(rename = "deepseek")]
    DeepSeek,
}

impl ProviderKey {
    pub const ALL: [ProviderKey; 4] = [
        ProviderKey::OpenAi,
        ProviderKey::Google,
        ProviderKey::Anthropic,
        ProviderKey::DeepSeek,
    ];

    /// Strict lookup: unknown keys are `None`, never a fallback provider.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "openai" => Some(ProviderKey::OpenAi),
            "google" => Some(ProviderKey::Google),
            "anthropic" => Some(ProviderKey::Anthropic),
            "deepseek" => Some(ProviderKey::DeepSeek),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKey::OpenAi => "openai",
            ProviderKey::Google => "google",
            ProviderKey::Anthropic => "anthropic",
            ProviderKey::DeepSeek => "deepseek",
        }
    }

    /// Vendor name used in user-facing messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKey::OpenAi => "OpenAI",
            ProviderKey::Google => "Google",
            ProviderKey::Anthropic => "Anthropic",
            ProviderKey::DeepSeek => "DeepSeek",
        }
    }
}

impl std::fmt::Display for ProviderKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_known_keys_only() {
        for key in ProviderKey::ALL {
            assert_eq!(ProviderKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(ProviderKey::parse("mistral"), None);
        assert_eq!(ProviderKey::parse("OpenAI"), None);
        assert_eq!(ProviderKey::parse(""), None);
    }

    #[test]
    fn serde_uses_wire_keys() {
        let json = serde_json::to_string(&ProviderKey::DeepSeek).unwrap();
        assert_eq!(json, "\"deepseek\"");
        let key: ProviderKey = serde_json::from_str("\"openai\"").unwrap();
        assert_eq!(key, ProviderKey::OpenAi);
    }
}

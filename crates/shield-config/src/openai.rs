//! OpenAI configuration (secondary remote analysis provider).

use serde::{Deserialize, Serialize};

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenAiConfig {
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Sampling temperature. `None` leaves the provider default.
    #[serde(default)]
    pub temperature: Option<f32>,

    #[serde(default)]
    pub max_tokens: Option<u32>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: default_base_url(),
            temperature: None,
            max_tokens: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl OpenAiConfig {
    /// Check if a usable key is present. Scaffolded deployments ship a
    /// `placeholder` key, which is treated as absent.
    pub fn is_configured(&self) -> bool {
        let key = self.api_key.trim();
        !key.is_empty() && !key.contains("placeholder")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        assert!(!OpenAiConfig::default().is_configured());
    }

    #[test]
    fn placeholder_key_is_not_configured() {
        let config = OpenAiConfig {
            api_key: "sk-placeholder-key".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }

    #[test]
    fn real_key_is_configured() {
        let config = OpenAiConfig {
            api_key: "sk-proj-123".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
    }
}

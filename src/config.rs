//! Environment-sourced configuration.
//!
//! Everything optional degrades gracefully: without `API_KEY` the assistant
//! answers with its fixed "not configured" reply, and without
//! `MERCHANT_PASSCODE` the merchant panel cannot be entered at all.

use serde::Deserialize;

fn default_assistant_model() -> String {
    "gemini-3-flash-preview".to_string()
}

/// Process configuration, deserialized from the environment.
///
/// Recognized variables:
/// - `API_KEY` — credential for the text-generation service (optional)
/// - `ASSISTANT_MODEL` — model name for generation requests
/// - `MERCHANT_PASSCODE` — secret for the merchant gate (optional)
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api_key: Option<String>,
    #[serde(default = "default_assistant_model")]
    pub assistant_model: String,
    pub merchant_passcode: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            assistant_model: default_assistant_model(),
            merchant_passcode: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_model_but_no_secrets() {
        let config = Config::default();
        assert_eq!(config.assistant_model, "gemini-3-flash-preview");
        assert!(config.api_key.is_none());
        assert!(config.merchant_passcode.is_none());
    }
}

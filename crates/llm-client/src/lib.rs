pub mod chat;
pub mod error;
pub mod provider;

pub use chat::{ChatClient, FINANCIAL_ADVISOR_PROMPT};
pub use error::{LlmError, LlmResult};
pub use provider::ChatProvider;

use std::time::Duration;

/// Configuration for the chat-completion API.
///
/// The API key has no default and must come from the environment.
#[derive(Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout: Duration,
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl LlmConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            max_tokens: 300,
            temperature: 0.7,
            timeout: Duration::from_secs(30),
        }
    }

    /// Read `OPENAI_API_KEY` (required), `OPENAI_BASE_URL`, `OPENAI_MODEL`,
    /// `LLM_MAX_TOKENS`, `LLM_TEMPERATURE` and `LLM_TIMEOUT_SECS`.
    pub fn from_env() -> LlmResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> LlmResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENAI_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(LlmError::MissingApiKey)?;

        let mut config = Self::new(api_key);
        if let Some(url) = lookup("OPENAI_BASE_URL") {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(model) = lookup("OPENAI_MODEL") {
            config.model = model;
        }
        if let Some(v) = lookup("LLM_MAX_TOKENS") {
            config.max_tokens = parse_var("LLM_MAX_TOKENS", &v)?;
        }
        if let Some(v) = lookup("LLM_TEMPERATURE") {
            config.temperature = parse_var("LLM_TEMPERATURE", &v)?;
        }
        if let Some(v) = lookup("LLM_TIMEOUT_SECS") {
            config.timeout = Duration::from_secs(parse_var("LLM_TIMEOUT_SECS", &v)?);
        }
        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, value: &str) -> LlmResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| LlmError::InvalidConfig(format!("{} has invalid value '{}'", name, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_api_key() {
        let result = LlmConfig::from_lookup(lookup(&[]));
        assert!(matches!(result, Err(LlmError::MissingApiKey)));

        let blank = LlmConfig::from_lookup(lookup(&[("OPENAI_API_KEY", "  ")]));
        assert!(matches!(blank, Err(LlmError::MissingApiKey)));
    }

    #[test]
    fn test_defaults() {
        let config = LlmConfig::from_lookup(lookup(&[("OPENAI_API_KEY", "sk-test")])).unwrap();
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.max_tokens, 300);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_overrides() {
        let config = LlmConfig::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_BASE_URL", "http://localhost:9000/v1/"),
            ("OPENAI_MODEL", "gpt-4o-mini"),
            ("LLM_MAX_TOKENS", "512"),
            ("LLM_TEMPERATURE", "0.2"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:9000/v1");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.max_tokens, 512);
        assert!((config.temperature - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn test_invalid_number() {
        let result = LlmConfig::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("LLM_MAX_TOKENS", "lots"),
        ]));
        assert!(matches!(result, Err(LlmError::InvalidConfig(_))));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = LlmConfig::new("sk-secret");
        assert!(!format!("{:?}", config).contains("sk-secret"));
    }
}

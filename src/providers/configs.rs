use std::env;

use crate::errors::{AdapterError, AdapterResult};

pub const UNIFY_API_URL: &str = "https://api.unify.ai/v0/inference";
pub const DEFAULT_MODEL: &str = "mistral-7b-instruct-v0.2@fireworks-ai";

/// Connection settings for the Unify inference API.
#[derive(Debug, Clone)]
pub struct UnifyProviderConfig {
    pub api_key: String,
    /// `model@provider` identifier used when a request names no model
    pub model: String,
    pub host: String,
}

impl UnifyProviderConfig {
    pub fn new<S: Into<String>>(api_key: S) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            host: UNIFY_API_URL.to_string(),
        }
    }

    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_host<S: Into<String>>(mut self, host: S) -> Self {
        self.host = host.into();
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> AdapterResult<Self> {
        let api_key = env::var("UNIFY_API_KEY").map_err(|_| {
            AdapterError::Configuration(
                "Environment variable 'UNIFY_API_KEY' is required but not set.".to_string(),
            )
        })?;

        let mut config = Self::new(api_key);
        if let Ok(model) = env::var("UNIFY_MODEL") {
            config.model = model;
        }
        if let Ok(host) = env::var("UNIFY_HOST") {
            config.host = host;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UnifyProviderConfig::new("key");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.host, UNIFY_API_URL);
    }

    #[test]
    fn test_overrides() {
        let config = UnifyProviderConfig::new("key")
            .with_model("llama-3-8b-chat@together-ai")
            .with_host("http://localhost:9000");
        assert_eq!(config.model, "llama-3-8b-chat@together-ai");
        assert_eq!(config.host, "http://localhost:9000");
    }
}

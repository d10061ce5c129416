use crate::errors::{AdvisorError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default knowledge-base directory, relative to the working directory
pub const DEFAULT_KNOWLEDGE_DIR: &str = "knowledge_base";

/// Runtime configuration for the advisor.
///
/// Built once in `main` and passed into the clients explicitly so tests can
/// substitute fixed values without touching the process environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Long-lived IBM Cloud API key, exchanged for a short-lived bearer token
    pub api_key: String,

    /// Completion endpoint URL (the deployed watsonx AI service stream endpoint)
    pub endpoint_url: String,

    /// Directory holding the knowledge-base text files
    pub knowledge_dir: PathBuf,
}

impl Config {
    /// Create a configuration from explicit values
    pub fn new(
        api_key: impl Into<String>,
        endpoint_url: impl Into<String>,
        knowledge_dir: impl Into<PathBuf>,
    ) -> Self {
        Config {
            api_key: api_key.into(),
            endpoint_url: endpoint_url.into(),
            knowledge_dir: knowledge_dir.into(),
        }
    }

    /// Load configuration from the process environment.
    ///
    /// `API_KEY` and `ENDPOINT_URL` are required; `KNOWLEDGE_BASE_DIR` falls
    /// back to `knowledge_base/`. Callers load `.env` beforehand if they want
    /// dotfile support.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_overrides(None, None)
    }

    /// Load from the environment, letting explicit values (CLI flags) take
    /// precedence over their environment counterparts.
    pub fn from_env_with_overrides(
        endpoint_url: Option<String>,
        knowledge_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let api_key = require_env("API_KEY")?;
        let endpoint_url = match endpoint_url {
            Some(url) => url,
            None => require_env("ENDPOINT_URL")?,
        };
        let knowledge_dir = knowledge_dir
            .or_else(|| std::env::var("KNOWLEDGE_BASE_DIR").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_KNOWLEDGE_DIR));

        Ok(Config {
            api_key,
            endpoint_url,
            knowledge_dir,
        })
    }
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| AdvisorError::Config(format!("environment variable {} is not set", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = Config::new("key-123", "https://example.com/stream", "kb");
        assert_eq!(config.api_key, "key-123");
        assert_eq!(config.endpoint_url, "https://example.com/stream");
        assert_eq!(config.knowledge_dir, PathBuf::from("kb"));
    }

    #[test]
    fn test_require_env_missing() {
        let result = require_env("FINADVISOR_TEST_UNSET_VAR");
        assert!(matches!(result, Err(AdvisorError::Config(_))));
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("FINADVISOR_TEST_UNSET_VAR"));
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::new("key", "https://example.com", "kb");
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.endpoint_url, "https://example.com");
    }
}

// Copyright 2025 DnsChat Contributors
// Licensed under GPL-3.0

//! Server configuration resolved at startup

use crate::constants::{DEFAULT_CHUNK_SIZE, DEFAULT_TIMEOUT_SECS, ENV_API_KEY, MAX_CHUNK_SIZE};
use anyhow::{bail, Context, Result};

/// Resolved configuration, read-only once the server is running.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenAI-compatible chat completions URL
    pub endpoint: String,
    /// Model identifier sent with every upstream request
    pub model: String,
    /// Maximum bytes per TXT chunk
    pub chunk_size: usize,
    /// Upstream request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            model: String::new(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Check the configuration before the server starts.
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            bail!("endpoint is required");
        }
        if self.model.is_empty() {
            bail!("model is required");
        }
        if self.chunk_size == 0 || self.chunk_size > MAX_CHUNK_SIZE {
            bail!("chunk_size must be between 1 and {}", MAX_CHUNK_SIZE);
        }
        if self.timeout_secs == 0 {
            bail!("timeout must be a positive number of seconds");
        }
        Ok(())
    }
}

/// Read the upstream API key from the environment.
pub fn api_key_from_env() -> Result<String> {
    std::env::var(ENV_API_KEY)
        .with_context(|| format!("Environment variable {} is not set", ENV_API_KEY))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            endpoint: "http://localhost:11434/v1/chat/completions".to_string(),
            model: "llama3".to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.chunk_size, 200);
        assert_eq!(config.timeout_secs, 15);
    }

    #[test]
    fn validate_accepts_complete_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn validate_requires_endpoint_and_model() {
        let mut config = valid_config();
        config.endpoint.clear();
        assert!(config.validate().is_err());

        let mut config = valid_config();
        config.model.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_bounds_chunk_size() {
        let mut config = valid_config();
        config.chunk_size = 0;
        assert!(config.validate().is_err());
        config.chunk_size = 256;
        assert!(config.validate().is_err());
        config.chunk_size = 255;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = valid_config();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}

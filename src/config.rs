// Copyright (c) 2025 - Cowboy AI, Inc.
//! Wallet service configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable for the conflict retry budget
pub const ENV_MAX_RETRIES: &str = "WALLET_MAX_RETRIES";

/// Environment variable for the pause between retries, in milliseconds
pub const ENV_RETRY_BACKOFF_MS: &str = "WALLET_RETRY_BACKOFF_MS";

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Variable present but not parseable
    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },
}

/// Wallet service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletServiceConfig {
    /// Extra attempts after a version conflict (0 disables retrying)
    pub max_retries: u32,

    /// Pause before each retry
    pub retry_backoff: Duration,
}

impl WalletServiceConfig {
    /// Create a configuration with explicit values
    pub fn new(max_retries: u32, retry_backoff: Duration) -> Self {
        Self {
            max_retries,
            retry_backoff,
        }
    }

    /// Set the retry budget
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the pause between retries
    pub fn with_retry_backoff(mut self, retry_backoff: Duration) -> Self {
        self.retry_backoff = retry_backoff;
        self
    }

    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let max_retries = match lookup(ENV_MAX_RETRIES) {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                var: ENV_MAX_RETRIES,
                value,
            })?,
            None => defaults.max_retries,
        };

        let retry_backoff = match lookup(ENV_RETRY_BACKOFF_MS) {
            Some(value) => value
                .trim()
                .parse()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidValue {
                    var: ENV_RETRY_BACKOFF_MS,
                    value,
                })?,
            None => defaults.retry_backoff,
        };

        Ok(Self {
            max_retries,
            retry_backoff,
        })
    }
}

impl Default for WalletServiceConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            retry_backoff: Duration::from_millis(10),
        }
    }
}

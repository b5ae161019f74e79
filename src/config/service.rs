//! Field-service API configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Remote field-service API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the field-service API
    pub base_url: String,

    /// Credential sent as `x-jwt-token` on every outbound call
    pub jwt_token: Secret<String>,

    /// Per-attempt timeout for the beat write, in seconds
    #[serde(default = "default_write_timeout")]
    pub write_timeout_secs: u64,

    /// Timeout for the cache invalidation call, in seconds
    #[serde(default = "default_cache_timeout")]
    pub cache_timeout_secs: u64,

    /// Backoff time unit between transport-failed attempts, in milliseconds
    #[serde(default = "default_retry_backoff")]
    pub retry_backoff_ms: u64,
}

impl ServiceConfig {
    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Exposes the token (for making requests).
    pub fn jwt_token(&self) -> &str {
        self.jwt_token.expose_secret()
    }

    pub fn write_timeout(&self) -> Duration {
        Duration::from_secs(self.write_timeout_secs)
    }

    pub fn cache_timeout(&self) -> Duration {
        Duration::from_secs(self.cache_timeout_secs)
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }

    /// Validate service configuration
    ///
    /// In production, requires HTTPS for the base URL.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.base_url.trim().is_empty() {
            return Err(ValidationError::MissingRequired("SERVICE__BASE_URL"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if *environment == Environment::Production && !self.base_url.starts_with("https://") {
            return Err(ValidationError::BaseUrlMustBeHttps);
        }
        if self.jwt_token().trim().is_empty() {
            return Err(ValidationError::MissingRequired("SERVICE__JWT_TOKEN"));
        }
        if self.write_timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout("write_timeout_secs"));
        }
        if self.cache_timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout("cache_timeout_secs"));
        }
        Ok(())
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            jwt_token: Secret::new(String::new()),
            write_timeout_secs: default_write_timeout(),
            cache_timeout_secs: default_cache_timeout(),
            retry_backoff_ms: default_retry_backoff(),
        }
    }
}

fn default_write_timeout() -> u64 {
    30
}

fn default_cache_timeout() -> u64 {
    20
}

fn default_retry_backoff() -> u64 {
    1000
}

//! Database configuration
//!
//! Credentials have no fallback values: a missing or empty host, user,
//! password or database name stops the service from starting.

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// MySQL connection parameters
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database server host
    pub host: String,

    /// Database server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Database user
    pub user: String,

    /// Database password
    pub password: Secret<String>,

    /// Schema name
    pub name: String,

    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

impl DatabaseConfig {
    /// Get connect timeout as Duration
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Exposes the password (for opening connections).
    pub fn password(&self) -> &str {
        self.password.expose_secret()
    }

    /// Validate database configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.host.trim().is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE__HOST"));
        }
        if self.user.trim().is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE__USER"));
        }
        if self.password().is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE__PASSWORD"));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE__NAME"));
        }
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if self.connect_timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout("connect_timeout_secs"));
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: default_port(),
            user: String::new(),
            password: Secret::new(String::new()),
            name: String::new(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

fn default_port() -> u16 {
    3306
}

fn default_connect_timeout() -> u64 {
    10
}

//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `FSM_QA` prefix and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use fsm_qa_tools::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Serving tools on {}:{}", config.server.host, config.server.port);
//! ```

mod database;
mod error;
mod server;
mod service;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, LogFormat, ServerConfig};
pub use service::ServiceConfig;

use serde::Deserialize;
use std::time::Duration;

use crate::application::MAX_WRITE_ATTEMPTS;
use crate::domain::beat::BeatTemplate;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (bind address, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (MySQL connection parameters)
    pub database: DatabaseConfig,

    /// Field-service API configuration (base URL, credential, timeouts)
    pub service: ServiceConfig,

    /// Overrides for the static parts of the beat payload
    #[serde(default)]
    pub beat: BeatTemplate,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FSM_QA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `FSM_QA__SERVER__PORT=8100` -> `server.port = 8100`
    /// - `FSM_QA__DATABASE__PASSWORD=...` -> `database.password = ...`
    /// - `FSM_QA__SERVICE__JWT_TOKEN=...` -> `service.jwt_token = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FSM_QA")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.service.validate(&self.server.environment)?;

        let required = self.workflow_ceiling();
        if self.server.request_timeout() < required {
            return Err(ValidationError::RequestTimeoutTooShort {
                request_secs: self.server.request_timeout_secs,
                required_secs: required.as_secs_f64().ceil() as u64,
            });
        }
        Ok(())
    }

    /// Longest a single tool call can run before its own timeouts stop it.
    ///
    /// A beat opens one connection and makes up to `MAX_WRITE_ATTEMPTS`
    /// writes with a linear backoff between them. A check-in opens one
    /// connection and makes one cache call.
    pub fn workflow_ceiling(&self) -> Duration {
        let connect = self.database.connect_timeout();
        let writes = self.service.write_timeout() * MAX_WRITE_ATTEMPTS;
        let backoff_units = MAX_WRITE_ATTEMPTS * (MAX_WRITE_ATTEMPTS - 1) / 2;
        let backoff = self.service.retry_backoff() * backoff_units;

        let beat = connect + writes + backoff;
        let checkin = connect + self.service.cache_timeout();
        beat.max(checkin)
    }
}

//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidHost(String),

    #[error("Invalid timeout: {0}")]
    InvalidTimeout(&'static str),

    #[error("Service base URL must start with http:// or https://")]
    InvalidBaseUrl,

    #[error("Service base URL must use HTTPS in production")]
    BaseUrlMustBeHttps,

    #[error("Request timeout of {request_secs}s is shorter than a full tool call ({required_secs}s)")]
    RequestTimeoutTooShort { request_secs: u64, required_secs: u64 },
}

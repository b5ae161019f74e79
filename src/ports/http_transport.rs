//! HttpTransport port - Interface for outbound HTTP calls to the field-service API.
//!
//! The transport performs exactly one request per call. Retrying, status
//! classification and body parsing belong to the caller; a transport only
//! distinguishes "a response arrived" from "no response arrived".
//!
//! # Example
//!
//! ```ignore
//! let request = OutboundRequest::post(format!("{}/service-flow/service-beat", base_url))
//!     .with_header("x-jwt-token", token)
//!     .with_json(payload);
//!
//! match transport.send(&request).await {
//!     Ok(response) if response.is_server_error() => { /* retry */ }
//!     Ok(response) => { /* terminal */ }
//!     Err(err) => { /* transport failure */ }
//! }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Port for sending a single outbound HTTP POST.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends the request once.
    ///
    /// # Returns
    ///
    /// * `Ok(OutboundResponse)` - a response arrived, whatever its status
    /// * `Err(TransportError)` - the request never produced a response
    async fn send(&self, request: &OutboundRequest) -> Result<OutboundResponse, TransportError>;
}

/// A fully constructed outbound POST.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
    /// Overrides the transport's default timeout when set.
    pub timeout: Option<Duration>,
}

impl OutboundRequest {
    /// Creates a bodyless POST to `url`.
    pub fn post(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
            timeout: None,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    pub fn with_json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Looks up a header value, ignoring name case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A response as received: status code and raw body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundResponse {
    pub status: u16,
    pub body: String,
}

impl OutboundResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// 5xx and above; the only statuses worth retrying.
    pub fn is_server_error(&self) -> bool {
        self.status >= 500
    }
}

/// Failures where no HTTP response was received.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request failed: {0}")]
    Request(String),
}

//! reqwest implementation of HttpTransport.
//!
//! Sends exactly one request per call. Any status code counts as a
//! response; only failures that produce no response become errors.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::ports::{HttpTransport, OutboundRequest, OutboundResponse, TransportError};

/// HTTP transport backed by a shared reqwest client.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
    default_timeout: Duration,
}

impl ReqwestTransport {
    /// Creates a transport whose requests time out after `default_timeout`
    /// unless they carry their own timeout.
    pub fn new(default_timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(default_timeout)
            .build()
            .map_err(|e| TransportError::Request(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            default_timeout,
        })
    }

    fn classify(&self, error: reqwest::Error, timeout: Duration) -> TransportError {
        if error.is_timeout() {
            TransportError::Timeout {
                timeout_secs: timeout.as_secs(),
            }
        } else if error.is_connect() {
            TransportError::Connect(error.to_string())
        } else {
            TransportError::Request(error.to_string())
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: &OutboundRequest) -> Result<OutboundResponse, TransportError> {
        let timeout = request.timeout.unwrap_or(self.default_timeout);

        let mut builder = self.client.post(&request.url).timeout(timeout);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| self.classify(e, timeout))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| self.classify(e, timeout))?;

        Ok(OutboundResponse::new(status, body))
    }
}

//! Data transfer objects for tools HTTP endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::ToolDescriptor;

/// Response listing the available tools.
#[derive(Debug, Clone, Serialize)]
pub struct ListToolsResponse {
    pub count: usize,
    pub tools: Vec<ToolDescriptor>,
}

impl ListToolsResponse {
    pub fn new(tools: &[ToolDescriptor]) -> Self {
        Self {
            count: tools.len(),
            tools: tools.to_vec(),
        }
    }
}

/// Error body: a message, or the full failed tool result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: Value,
}

impl ErrorResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            detail: Value::String(message.into()),
        }
    }

    pub fn result(result: Value) -> Self {
        Self { detail: result }
    }
}

/// Liveness probe body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

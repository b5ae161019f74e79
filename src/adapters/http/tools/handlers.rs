//! HTTP handlers for tools endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::application::{FieldTools, ToolDispatchError, BEAT_CREATE};

use super::dto::{ErrorResponse, HealthResponse, ListToolsResponse};

/// Application state for tools endpoints.
#[derive(Clone)]
pub struct ToolsAppState {
    /// Dispatcher for the field tools
    pub tools: Arc<FieldTools>,
}

impl ToolsAppState {
    pub fn new(tools: Arc<FieldTools>) -> Self {
        Self { tools }
    }
}

/// Runs the tool on its own task.
///
/// Dropping the request future (timeout or client disconnect) detaches the
/// task instead of cancelling the workflow between its write and cache steps.
async fn dispatch_detached(
    state: &ToolsAppState,
    name: String,
    input: Value,
) -> Result<Value, ToolDispatchError> {
    let tools = Arc::clone(&state.tools);
    tokio::spawn(async move { tools.dispatch(&name, input).await })
        .await
        .map_err(|e| ToolDispatchError::Interrupted(e.to_string()))?
}

/// List available tools.
///
/// GET /tools
pub async fn list_tools() -> impl IntoResponse {
    Json(ListToolsResponse::new(FieldTools::descriptors()))
}

/// Invoke a tool by name.
///
/// POST /tools/:name
///
/// Workflow failures are normal results and come back as 200 with
/// `ok: false`.
pub async fn invoke_tool(
    State(state): State<ToolsAppState>,
    Path(name): Path<String>,
    Json(input): Json<Value>,
) -> Response {
    match dispatch_detached(&state, name, input).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e @ ToolDispatchError::UnknownTool(_)) => {
            (StatusCode::NOT_FOUND, Json(ErrorResponse::message(e.to_string()))).into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::message(e.to_string())),
        )
            .into_response(),
    }
}

/// Create a beat, mapping the result onto HTTP status codes.
///
/// POST /fsm-qa-mcp-server
///
/// - 200 with the result when `ok` is true
/// - 400 with `{"detail": result}` when `ok` is false
/// - 500 with `{"detail": message}` for anything else
pub async fn create_beat(
    State(state): State<ToolsAppState>,
    Json(input): Json<Value>,
) -> Response {
    let result = match dispatch_detached(&state, BEAT_CREATE.to_string(), input).await {
        Ok(result) => result,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::message(e.to_string())),
            )
                .into_response()
        }
    };

    match result.get("ok").and_then(Value::as_bool) {
        Some(true) => (StatusCode::OK, Json(result)).into_response(),
        Some(false) => {
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::result(result))).into_response()
        }
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::message("Unexpected tool result")),
        )
            .into_response(),
    }
}

/// Liveness probe.
///
/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse::ok())
}

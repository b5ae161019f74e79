//! Axum router configuration for tools endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_beat, health, invoke_tool, list_tools, ToolsAppState};

/// Create the tools API router.
///
/// # Routes
///
/// - `GET /` - List available tools
/// - `POST /:name` - Invoke a tool with a JSON body
///
/// Suitable for mounting at `/tools`.
pub fn tools_router() -> Router<ToolsAppState> {
    Router::new()
        .route("/", get(list_tools))
        .route("/:name", post(invoke_tool))
}

/// Top-level routes outside the `/tools` prefix.
///
/// - `POST /fsm-qa-mcp-server` - Beat creation with HTTP status mapping
/// - `GET /health` - Liveness probe
pub fn beat_boundary_routes() -> Router<ToolsAppState> {
    Router::new()
        .route("/fsm-qa-mcp-server", post(create_beat))
        .route("/health", get(health))
}


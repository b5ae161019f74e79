//! HTTP adapters - REST API implementations.

pub mod tools;

use std::time::Duration;

use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use tools::tools_router;
pub use tools::ToolsAppState;

/// Builds the complete service router.
///
/// Mounts the tools API under `/tools` next to the beat boundary and the
/// health probe. Requests that outlive `request_timeout` get a 408; the
/// tool call behind them keeps running to its own ceiling.
pub fn app_router(state: ToolsAppState, request_timeout: Duration) -> Router {
    Router::new()
        .nest("/tools", tools_router())
        .merge(tools::beat_boundary_routes())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

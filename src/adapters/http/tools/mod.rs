//! Tools HTTP adapter - REST surface for the field tools.
//!
//! Provides endpoints for:
//! - Listing the available tools
//! - Invoking any tool by name
//! - The beat-create boundary with HTTP status mapping

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;

pub use handlers::ToolsAppState;
pub use routes::{beat_boundary_routes, tools_router};

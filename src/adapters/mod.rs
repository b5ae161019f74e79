//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the tool workflows to external systems:
//! - `http` - axum surface exposing the tools
//! - `http_client` - reqwest transport to the field-service API
//! - `mysql` - sqlx persistence against the field-service database

pub mod http;
pub mod http_client;
pub mod mysql;

pub use http::{app_router, ToolsAppState};
pub use http_client::ReqwestTransport;
pub use mysql::{MySqlBeatReader, MySqlCheckinRepository, MySqlConnector};

//! Tracing subscriber setup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{LogFormat, ServerConfig};

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over the configured `log_level` directive when set.
pub fn init_tracing(server: &ServerConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&server.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let result = match server.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json())
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer())
            .try_init(),
    };

    if let Err(err) = result {
        eprintln!("tracing init skipped: {err}");
    }
}

//! Per-invocation MySQL connections.
//!
//! There is no pool: every port call opens a connection, uses it and
//! closes it again, on success and on failure.

use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlConnection, MySqlRow};
use sqlx::{ConnectOptions, Connection, Row};
use tracing::warn;

use crate::config::DatabaseConfig;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Opens short-lived connections to the field-service database.
#[derive(Debug, Clone)]
pub struct MySqlConnector {
    options: MySqlConnectOptions,
    connect_timeout: Duration,
}

impl MySqlConnector {
    pub fn new(options: MySqlConnectOptions, connect_timeout: Duration) -> Self {
        Self {
            options,
            connect_timeout,
        }
    }

    pub fn from_config(config: &DatabaseConfig) -> Self {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(config.password())
            .database(&config.name)
            .disable_statement_logging();

        Self::new(options, config.connect_timeout())
    }

    /// Opens a fresh connection, bounded by the connect timeout.
    pub async fn open(&self) -> Result<MySqlConnection, DomainError> {
        match tokio::time::timeout(self.connect_timeout, self.options.connect()).await {
            Ok(Ok(conn)) => Ok(conn),
            Ok(Err(e)) => Err(DomainError::database(format!("Failed to connect: {}", e))),
            Err(_) => Err(DomainError::database(format!(
                "Failed to connect: timed out after {}s",
                self.connect_timeout.as_secs()
            ))),
        }
    }

    /// Closes `conn`. A failed close is logged, never surfaced.
    pub async fn release(&self, conn: MySqlConnection) {
        if let Err(e) = conn.close().await {
            warn!(error = %e, "Failed to close MySQL connection");
        }
    }
}

/// Maps a sqlx error into a database DomainError with context.
pub(crate) fn db_error(context: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e))
}

/// Reads an id column that may be declared signed or unsigned.
pub(crate) fn row_id(row: &MySqlRow, column: &str) -> Result<i64, DomainError> {
    if let Ok(id) = row.try_get::<i64, _>(column) {
        return Ok(id);
    }
    let id: u64 = row
        .try_get(column)
        .map_err(|e| DomainError::database(format!("Invalid {}: {}", column, e)))?;
    i64::try_from(id).map_err(|_| DomainError::database(format!("{} out of range: {}", column, id)))
}

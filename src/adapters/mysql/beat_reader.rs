//! MySQL implementation of BeatReader.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::mysql::{MySqlConnection, MySqlRow};
use sqlx::Row;

use super::connection::{db_error, row_id, MySqlConnector};
use crate::domain::beat::BeatRecord;
use crate::domain::foundation::{DomainError, MerchantId};
use crate::ports::BeatReader;

pub(crate) const LATEST_BEAT_SQL: &str = r#"
    SELECT id, created_at
    FROM fse_beat_mapping
    WHERE pg_mid = ?
    ORDER BY created_at DESC
    LIMIT 1
"#;

/// Looks up persisted beats in `fse_beat_mapping`.
#[derive(Clone)]
pub struct MySqlBeatReader {
    connector: MySqlConnector,
}

impl MySqlBeatReader {
    pub fn new(connector: MySqlConnector) -> Self {
        Self { connector }
    }

    async fn latest_on(
        conn: &mut MySqlConnection,
        mid: &MerchantId,
    ) -> Result<Option<BeatRecord>, DomainError> {
        let row = sqlx::query(LATEST_BEAT_SQL)
            .bind(mid.as_str())
            .fetch_optional(conn)
            .await
            .map_err(db_error("Failed to fetch beat"))?;

        row.as_ref().map(row_to_beat_record).transpose()
    }
}

#[async_trait]
impl BeatReader for MySqlBeatReader {
    async fn latest_for_mid(&self, mid: &MerchantId) -> Result<Option<BeatRecord>, DomainError> {
        let mut conn = self.connector.open().await?;
        let result = Self::latest_on(&mut conn, mid).await;
        self.connector.release(conn).await;
        result
    }
}

fn row_to_beat_record(row: &MySqlRow) -> Result<BeatRecord, DomainError> {
    let id = row_id(row, "id")?;
    let created_at: NaiveDateTime = row
        .try_get("created_at")
        .map_err(|e| DomainError::database(format!("Invalid created_at: {}", e)))?;

    Ok(BeatRecord { id, created_at })
}

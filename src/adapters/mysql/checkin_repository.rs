//! MySQL implementation of CheckinRepository.
//!
//! The clone is a single `INSERT ... SELECT` inside a transaction. Business
//! columns are copied verbatim; check-in, created and updated times become
//! `NOW()`, the date becomes `CURDATE()` and check-out is cleared.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::mysql::{MySqlConnection, MySqlRow};
use sqlx::{Connection, Row};
use tracing::debug;

use super::connection::{db_error, row_id, MySqlConnector};
use crate::domain::attendance::{CheckinRecord, CHECKIN_DONE};
use crate::domain::foundation::{DomainError, EmployeeId};
use crate::ports::{CheckinClone, CheckinRepository};

pub(crate) const CLONE_CHECKIN_SQL: &str = r#"
    INSERT INTO fse_checkin_checkout (
        status, fse_name, cust_id, emp_id, phone_number,
        check_in_time, check_out_time,
        reject_count, failure_reason, liveliness_failure_count,
        asm_id, asm_emp_id, selfie_dms_id, profile_dms_id,
        created_at, updated_at, date,
        meta_data, manual_checkin_reason
    )
    SELECT
        status, fse_name, cust_id, emp_id, phone_number,
        NOW(), NULL,
        reject_count, failure_reason, liveliness_failure_count,
        asm_id, asm_emp_id, selfie_dms_id, profile_dms_id,
        NOW(), NOW(), CURDATE(),
        meta_data, manual_checkin_reason
    FROM fse_checkin_checkout
    WHERE emp_id = ? AND status = ?
    ORDER BY check_in_time DESC
    LIMIT 1
"#;

pub(crate) const LATEST_CHECKIN_SQL: &str = r#"
    SELECT id, emp_id, check_in_time, check_out_time
    FROM fse_checkin_checkout
    WHERE emp_id = ?
    ORDER BY check_in_time DESC, id DESC
    LIMIT 1
"#;

/// Clones rows of `fse_checkin_checkout`.
#[derive(Clone)]
pub struct MySqlCheckinRepository {
    connector: MySqlConnector,
}

impl MySqlCheckinRepository {
    pub fn new(connector: MySqlConnector) -> Self {
        Self { connector }
    }

    async fn clone_on(
        conn: &mut MySqlConnection,
        emp_id: &EmployeeId,
    ) -> Result<CheckinClone, DomainError> {
        let mut tx = conn
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))?;

        // On error the transaction is dropped, which rolls it back.
        let inserted = sqlx::query(CLONE_CHECKIN_SQL)
            .bind(emp_id.as_str())
            .bind(CHECKIN_DONE)
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to clone check-in"))?;

        if inserted.rows_affected() == 0 {
            tx.rollback()
                .await
                .map_err(db_error("Failed to roll back"))?;
            return Ok(CheckinClone::NoSourceRow);
        }

        tx.commit().await.map_err(db_error("Failed to commit"))?;
        debug!(emp_id = %emp_id, "Check-in clone committed");

        let row = sqlx::query(LATEST_CHECKIN_SQL)
            .bind(emp_id.as_str())
            .fetch_optional(&mut *conn)
            .await
            .map_err(db_error("Failed to fetch cloned check-in"))?;

        row.as_ref()
            .map(row_to_checkin_record)
            .transpose()
            .map(CheckinClone::Inserted)
    }
}

#[async_trait]
impl CheckinRepository for MySqlCheckinRepository {
    async fn clone_latest_checkin(
        &self,
        emp_id: &EmployeeId,
    ) -> Result<CheckinClone, DomainError> {
        let mut conn = self.connector.open().await?;
        let result = Self::clone_on(&mut conn, emp_id).await;
        self.connector.release(conn).await;
        result
    }
}

fn row_to_checkin_record(row: &MySqlRow) -> Result<CheckinRecord, DomainError> {
    let id = row_id(row, "id")?;
    let emp_id: String = row
        .try_get("emp_id")
        .map_err(|e| DomainError::database(format!("Invalid emp_id: {}", e)))?;
    let check_in_time: NaiveDateTime = row
        .try_get("check_in_time")
        .map_err(|e| DomainError::database(format!("Invalid check_in_time: {}", e)))?;
    let check_out_time: Option<NaiveDateTime> = row
        .try_get("check_out_time")
        .map_err(|e| DomainError::database(format!("Invalid check_out_time: {}", e)))?;

    Ok(CheckinRecord {
        id,
        emp_id,
        check_in_time,
        check_out_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized(sql: &str) -> String {
        sql.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn clone_resets_times_and_clears_checkout() {
        let sql = normalized(CLONE_CHECKIN_SQL);
        assert!(sql.contains(
            "SELECT status, fse_name, cust_id, emp_id, phone_number, NOW(), NULL,"
        ));
        assert!(sql.contains("NOW(), NOW(), CURDATE(), meta_data, manual_checkin_reason"));
        assert!(sql.ends_with(
            "WHERE emp_id = ? AND status = ? ORDER BY check_in_time DESC LIMIT 1"
        ));
    }

    #[test]
    fn clone_binds_employee_then_status() {
        let placeholders = CLONE_CHECKIN_SQL.matches('?').count();
        assert_eq!(placeholders, 2);
        assert_eq!(CHECKIN_DONE, "CHECKIN_DONE");
    }

    #[test]
    fn clone_column_lists_line_up() {
        let sql = normalized(CLONE_CHECKIN_SQL);
        let insert_cols = sql
            .split_once('(')
            .and_then(|(_, rest)| rest.split_once(')'))
            .map(|(cols, _)| cols.split(',').count())
            .unwrap();
        let select_cols = sql
            .split_once(") SELECT ")
            .and_then(|(_, rest)| rest.split_once(" FROM "))
            .map(|(cols, _)| cols.split(',').count())
            .unwrap();
        assert_eq!(insert_cols, 19);
        assert_eq!(insert_cols, select_cols);
    }

    #[test]
    fn read_back_breaks_ties_by_id() {
        assert!(normalized(LATEST_CHECKIN_SQL).ends_with(
            "WHERE emp_id = ? ORDER BY check_in_time DESC, id DESC LIMIT 1"
        ));
    }
}

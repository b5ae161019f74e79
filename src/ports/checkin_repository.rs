//! CheckinRepository port - Interface for cloning check-in rows.
//!
//! ## Concurrency
//!
//! Two clones racing for the same employee may both read the same source
//! row and insert twice. That race is accepted; preventing it needs
//! row-level locking or a uniqueness constraint in the datastore.

use async_trait::async_trait;

use crate::domain::attendance::CheckinRecord;
use crate::domain::foundation::{DomainError, EmployeeId};

/// Port for duplicating an employee's latest completed check-in.
#[async_trait]
pub trait CheckinRepository: Send + Sync {
    /// Clones the employee's most recent `CHECKIN_DONE` row.
    ///
    /// The copy gets the current instant as check-in time and no check-out
    /// time. The insert is committed before the newest row for the employee
    /// is read back.
    ///
    /// # Returns
    ///
    /// * `Ok(CheckinClone::NoSourceRow)` - nothing to clone; nothing written
    /// * `Ok(CheckinClone::Inserted(row))` - committed; `row` is the read-back
    /// * `Err(DomainError)` - connection, query or transaction failure
    async fn clone_latest_checkin(&self, emp_id: &EmployeeId)
        -> Result<CheckinClone, DomainError>;
}

/// Result of a clone attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckinClone {
    /// No qualifying source row; the transaction was rolled back.
    NoSourceRow,
    /// The insert committed. `None` means the read-back found nothing.
    Inserted(Option<CheckinRecord>),
}

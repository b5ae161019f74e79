//! Tool outcomes - the flat result records returned to callers.
//!
//! Every tool invocation ends in exactly one [`ToolOutcome`]: a success
//! record or a [`ToolFailure`]. Both serialize as a flat JSON object whose
//! `ok` flag tells them apart.

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::domain::attendance::{AttendanceEvent, CheckinRecord};
use crate::domain::beat::BeatRecord;
use crate::domain::delivery::{AttemptLog, ResponseBody};
use crate::domain::foundation::{ErrorCode, ValidationError};

/// Error text for beat input that can't be normalized.
pub const INVALID_BEAT_INPUT: &str = "invalid input format";
pub const NO_BEAT_FOR_MID: &str = "no beat found in DB for MID";
pub const EMP_ID_REQUIRED: &str = "emp_id is required";
pub const NO_SOURCE_CHECKIN: &str = "no source CHECKIN_DONE row found for emp_id";
pub const INSERTED_ROW_MISSING: &str = "insert succeeded but no row was fetched";
pub const CHECKOUT_ACTION: &str = "fse.checkout";

/// Result of one tool invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutcome<T> {
    Success(T),
    Failure(ToolFailure),
}

impl<T> ToolOutcome<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, ToolOutcome::Success(_))
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            ToolOutcome::Success(value) => Some(value),
            ToolOutcome::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&ToolFailure> {
        match self {
            ToolOutcome::Success(_) => None,
            ToolOutcome::Failure(failure) => Some(failure),
        }
    }
}

impl<T> From<Result<T, ToolFailure>> for ToolOutcome<T> {
    fn from(result: Result<T, ToolFailure>) -> Self {
        match result {
            Ok(value) => ToolOutcome::Success(value),
            Err(failure) => ToolOutcome::Failure(failure),
        }
    }
}

impl<T: Serialize> Serialize for ToolOutcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ToolOutcome::Success(value) => value.serialize(serializer),
            ToolOutcome::Failure(failure) => failure.serialize(serializer),
        }
    }
}

pub type BeatOutcome = ToolOutcome<BeatCreated>;
pub type CheckinOutcome = ToolOutcome<CheckinCloned>;
pub type CheckoutOutcome = ToolOutcome<CheckoutAccepted>;

/// A failed invocation and whatever partial data was gathered first.
///
/// A remote rejection carries `response`; a consistency failure after a
/// successful write carries `http_response` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[error("[{code}] {error}")]
pub struct ToolFailure {
    ok: bool,
    pub code: ErrorCode,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<ResponseBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_response: Option<ResponseBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logs: Option<AttemptLog>,
}

impl ToolFailure {
    pub fn new(code: ErrorCode, error: impl Into<String>) -> Self {
        Self {
            ok: false,
            code,
            error: error.into(),
            detail: None,
            status: None,
            response: None,
            http_response: None,
            logs: None,
        }
    }

    /// Input rejected before any external call; the reason goes in `detail`.
    pub fn validation(error: impl Into<String>, reason: &ValidationError) -> Self {
        Self::new(ErrorCode::ValidationFailed, error).with_detail(reason.to_string())
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_response(mut self, body: ResponseBody) -> Self {
        self.response = Some(body);
        self
    }

    pub fn with_http_response(mut self, body: ResponseBody) -> Self {
        self.http_response = Some(body);
        self
    }

    pub fn with_logs(mut self, logs: AttemptLog) -> Self {
        self.logs = Some(logs);
        self
    }
}

/// A beat the remote API accepted and the database confirmed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeatCreated {
    ok: bool,
    pub beat_id: i64,
    pub created_at: String,
    pub http_response: ResponseBody,
    pub logs: AttemptLog,
}

impl BeatCreated {
    pub fn new(record: BeatRecord, http_response: ResponseBody, logs: AttemptLog) -> Self {
        Self {
            ok: true,
            beat_id: record.id,
            created_at: record.created_at.to_string(),
            http_response,
            logs,
        }
    }
}

/// Outcome of the best-effort cache invalidation after a clone.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheClearance {
    pub cleared: bool,
    pub response: ResponseBody,
}

/// A committed check-in clone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckinCloned {
    ok: bool,
    pub id: i64,
    pub emp_id: String,
    pub check_in_time: String,
    pub redis_key: String,
    pub redis_clear_ok: bool,
    pub redis_response: ResponseBody,
}

impl CheckinCloned {
    pub fn new(record: CheckinRecord, redis_key: String, clearance: CacheClearance) -> Self {
        Self {
            ok: true,
            id: record.id,
            emp_id: record.emp_id,
            check_in_time: record.check_in_time.to_string(),
            redis_key,
            redis_clear_ok: clearance.cleared,
            redis_response: clearance.response,
        }
    }
}

/// Echo of an accepted check-out event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutAccepted {
    ok: bool,
    pub action: &'static str,
    pub payload: AttendanceEvent,
}

impl CheckoutAccepted {
    pub fn new(payload: AttendanceEvent) -> Self {
        Self {
            ok: true,
            action: CHECKOUT_ACTION,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn record() -> BeatRecord {
        BeatRecord {
            id: 901,
            created_at: NaiveDate::from_ymd_opt(2025, 2, 3)
                .unwrap()
                .and_hms_opt(10, 11, 12)
                .unwrap(),
        }
    }

    #[test]
    fn success_serializes_flat_with_ok_true() {
        let mut logs = AttemptLog::new();
        logs.record_response(1, 200, 15);
        let outcome: BeatOutcome = ToolOutcome::Success(BeatCreated::new(
            record(),
            ResponseBody::parse(r#"{"status":"ok"}"#),
            logs,
        ));

        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({
                "ok": true,
                "beat_id": 901,
                "created_at": "2025-02-03 10:11:12",
                "http_response": {"status": "ok"},
                "logs": [{"attempt": 1, "status": 200, "latency_ms": 15}]
            })
        );
    }

    #[test]
    fn failure_omits_absent_fields() {
        let outcome: CheckinOutcome =
            ToolOutcome::Failure(ToolFailure::new(ErrorCode::ValidationFailed, EMP_ID_REQUIRED));
        assert!(!outcome.is_ok());
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"ok": false, "code": "VALIDATION_FAILED", "error": "emp_id is required"})
        );
    }

    #[test]
    fn rejection_and_consistency_failures_are_distinguishable() {
        let body = ResponseBody::Text("nope".into());
        let rejected = ToolFailure::new(ErrorCode::RemoteRejected, "rejected")
            .with_status(404)
            .with_response(body.clone());
        let unconfirmed =
            ToolFailure::new(ErrorCode::ConsistencyFailure, NO_BEAT_FOR_MID).with_http_response(body);

        let rejected = serde_json::to_value(&rejected).unwrap();
        let unconfirmed = serde_json::to_value(&unconfirmed).unwrap();
        assert!(rejected.get("response").is_some() && rejected.get("http_response").is_none());
        assert!(unconfirmed.get("http_response").is_some() && unconfirmed.get("response").is_none());
    }

    #[test]
    fn checkout_echo_has_action() {
        let event = AttendanceEvent::new(10.0, 20.0, "dev-9", Some("late".into())).unwrap();
        let value = serde_json::to_value(CheckoutAccepted::new(event)).unwrap();
        assert_eq!(value["ok"], json!(true));
        assert_eq!(value["action"], json!("fse.checkout"));
        assert_eq!(value["payload"]["notes"], json!("late"));
    }

    #[test]
    fn result_converts_into_outcome() {
        let result: Result<u8, ToolFailure> =
            Err(ToolFailure::new(ErrorCode::DatabaseError, "DB error: gone"));
        let outcome: ToolOutcome<u8> = result.into();
        assert_eq!(outcome.failure().map(|f| f.code), Some(ErrorCode::DatabaseError));
    }
}

//! Check-in cloning request and the rows it produces.

use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::Value;

use crate::domain::foundation::{EmployeeId, FromToolValue, Timestamp, ValidationError};

/// Field names an employee identifier may arrive under, in priority order.
pub const EMPLOYEE_ID_ALIASES: [&str; 3] = ["emp_id", "ecode", "empId"];

/// Status of a completed check-in that can be cloned.
pub const CHECKIN_DONE: &str = "CHECKIN_DONE";

/// Request to clone an employee's latest completed check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckinCloneRequest {
    emp_id: EmployeeId,
}

impl CheckinCloneRequest {
    pub fn new(emp_id: EmployeeId) -> Self {
        Self { emp_id }
    }

    pub fn emp_id(&self) -> &EmployeeId {
        &self.emp_id
    }
}

impl FromToolValue for CheckinCloneRequest {
    /// Takes the first alias that was supplied at all, then trims it.
    ///
    /// A whitespace-only `emp_id` is still selected and rejected; only
    /// missing, null, empty or zero values fall through to the next alias.
    fn from_tool_value(value: Value) -> Result<Self, ValidationError> {
        let Value::Object(fields) = value else {
            return Err(ValidationError::empty_field("emp_id"));
        };

        let selected = EMPLOYEE_ID_ALIASES
            .iter()
            .filter_map(|alias| fields.get(*alias))
            .find(|candidate| is_supplied(candidate));

        let raw = match selected {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => return Err(ValidationError::empty_field("emp_id")),
        };
        EmployeeId::new(raw).map(Self::new)
    }
}

fn is_supplied(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// A row of `fse_checkin_checkout` as read back after cloning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckinRecord {
    pub id: i64,
    pub emp_id: String,
    pub check_in_time: NaiveDateTime,
    pub check_out_time: Option<NaiveDateTime>,
}

/// Cache key holding an employee's check-in status for one day.
pub fn checkin_status_key(day: &Timestamp, emp_id: &EmployeeId) -> String {
    format!("checkInStatus::{}_{}", day.date_key(), emp_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use proptest::prelude::*;
    use serde_json::json;

    fn emp(value: Value) -> Result<String, ValidationError> {
        CheckinCloneRequest::from_tool_value(value).map(|r| r.emp_id().to_string())
    }

    #[test]
    fn reads_each_alias() {
        assert_eq!(emp(json!({"emp_id": "E1"})).unwrap(), "E1");
        assert_eq!(emp(json!({"ecode": "E2"})).unwrap(), "E2");
        assert_eq!(emp(json!({"empId": "E3"})).unwrap(), "E3");
    }

    #[test]
    fn emp_id_wins_over_other_aliases() {
        assert_eq!(emp(json!({"ecode": "B", "emp_id": "A"})).unwrap(), "A");
    }

    #[test]
    fn whitespace_emp_id_is_selected_and_rejected() {
        assert!(emp(json!({"emp_id": "   ", "ecode": "E9"})).is_err());
        assert!(emp(json!({"emp_id": "   ", "empId": "E9"})).is_err());
    }

    #[test]
    fn empty_or_zero_alias_falls_through_to_next() {
        assert_eq!(emp(json!({"emp_id": "", "empId": "E9"})).unwrap(), "E9");
        assert_eq!(emp(json!({"emp_id": null, "ecode": "E2"})).unwrap(), "E2");
        assert_eq!(emp(json!({"ecode": 0, "empId": "E3"})).unwrap(), "E3");
    }

    #[test]
    fn non_scalar_identifier_is_rejected() {
        assert!(emp(json!({"emp_id": ["E1"], "ecode": "E2"})).is_err());
    }

    #[test]
    fn numeric_identifier_is_accepted() {
        assert_eq!(emp(json!({"ecode": 40213})).unwrap(), "40213");
    }

    #[test]
    fn missing_identifier_is_rejected() {
        assert!(emp(json!({"name": "x"})).is_err());
        assert!(emp(json!({"emp_id": null})).is_err());
        assert!(emp(json!(["E1"])).is_err());
    }

    #[test]
    fn status_key_uses_local_date() {
        let day = Timestamp::from_datetime(
            DateTime::parse_from_rfc3339("2025-06-30T23:30:00+05:30").unwrap(),
        );
        let key = checkin_status_key(&day, &EmployeeId::new("E77").unwrap());
        assert_eq!(key, "checkInStatus::2025-06-30_E77");
    }

    proptest! {
        #[test]
        fn whitespace_only_identifiers_are_rejected(ws in "[ \t\r\n]{0,8}") {
            let value = json!({"emp_id": ws.clone(), "ecode": ws.clone(), "empId": ws});
            prop_assert!(emp(value).is_err());
        }

        #[test]
        fn surrounding_whitespace_is_trimmed(
            id in "[A-Za-z0-9]{1,12}",
            pre in "[ \t]{0,4}",
            post in "[ \t\n]{0,4}",
        ) {
            let padded = format!("{}{}{}", pre, id, post);
            prop_assert_eq!(emp(json!({"emp_id": padded})).unwrap(), id);
        }
    }
}

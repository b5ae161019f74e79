//! Attendance module - field employee check-in and check-out.

mod checkin;
mod checkout;

pub use checkin::{
    checkin_status_key, CheckinCloneRequest, CheckinRecord, CHECKIN_DONE, EMPLOYEE_ID_ALIASES,
};
pub use checkout::AttendanceEvent;

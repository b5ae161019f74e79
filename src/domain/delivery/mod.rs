//! Delivery module - what an outbound call leaves behind.
//!
//! The attempt history of a retried write and the remote's response body,
//! both of which are echoed to the caller in tool results.

mod attempt_log;
mod response_body;

pub use attempt_log::{AttemptLog, AttemptRecord};
pub use response_body::ResponseBody;

//! CheckoutHandler - Validates a check-out event and echoes it back.
//!
//! Nothing is persisted; the same input always yields the same result.

use crate::domain::attendance::AttendanceEvent;
use crate::domain::foundation::ToolInput;
use crate::domain::outcome::{CheckoutAccepted, CheckoutOutcome, ToolFailure};

/// Handler for the `fse_checkout` tool.
#[derive(Debug, Clone, Default)]
pub struct CheckoutHandler;

impl CheckoutHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, input: ToolInput<AttendanceEvent>) -> CheckoutOutcome {
        input
            .resolve()
            .map(CheckoutAccepted::new)
            .map_err(|e| ToolFailure::validation(format!("invalid input: {}", e), &e))
            .into()
    }
}

//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, input normalization and error types
//! shared by every tool workflow.

mod errors;
mod ids;
mod timestamp;
mod tool_input;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{EmployeeId, MerchantId};
pub(crate) use ids::non_blank;
pub use timestamp::Timestamp;
pub use tool_input::{FromToolValue, ToolInput};

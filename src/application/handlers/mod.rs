//! Application handlers.
//!
//! One handler per tool workflow, plus the dispatcher that routes named
//! tool calls to them.

pub mod attendance;
pub mod beat;
pub mod tools;

pub use attendance::{CheckinCloneHandler, CheckoutHandler};
pub use beat::{CreateBeatHandler, CreateBeatSettings};
pub use tools::{
    FieldTools, ToolDescriptor, ToolDispatchError, BEAT_CREATE, FSE_CHECKIN, FSE_CHECKOUT,
};

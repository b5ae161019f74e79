//! Tool dispatch.

mod field_tools;

pub use field_tools::{
    FieldTools, ToolDescriptor, ToolDispatchError, BEAT_CREATE, FSE_CHECKIN, FSE_CHECKOUT,
};

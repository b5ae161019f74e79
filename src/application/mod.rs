//! Application layer - Tool workflows and their shared plumbing.
//!
//! Handlers orchestrate domain types and ports. Each one catches every
//! failure at its own boundary and returns a flat outcome record.

pub mod field_service;
pub mod handlers;
pub mod retry_envelope;

#[cfg(test)]
pub(crate) mod test_support;

pub use field_service::{FieldServiceEndpoint, CACHE_DELETE_PATH, JWT_HEADER, SERVICE_BEAT_PATH};
pub use handlers::{
    CheckinCloneHandler, CheckoutHandler, CreateBeatHandler, CreateBeatSettings, FieldTools,
    ToolDescriptor, ToolDispatchError, BEAT_CREATE, FSE_CHECKIN, FSE_CHECKOUT,
};
pub use retry_envelope::{EnvelopeOutcome, RetryEnvelope, RetryPolicy, MAX_WRITE_ATTEMPTS};

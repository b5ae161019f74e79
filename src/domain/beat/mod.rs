//! Beat module - service beats raised against a merchant.
//!
//! A beat is owned by the external field-service API and database. This
//! crate builds the creation request and later observes the persisted row.

mod payload;
mod request;
mod template;

pub use payload::{random_digits, BeatPayload, PlaceholderTokens, TOKEN_DIGITS};
pub use request::BeatRequest;
pub use template::{BeatTemplate, ServiceAddress};

use chrono::NaiveDateTime;
use serde::Serialize;

/// Most recent `fse_beat_mapping` row for a merchant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BeatRecord {
    pub id: i64,
    pub created_at: NaiveDateTime,
}

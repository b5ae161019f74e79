//! BeatRequest - validated caller input for beat creation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::{non_blank, FromToolValue, MerchantId, ValidationError};

/// Request to raise a service beat for a merchant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BeatRequest {
    mid: MerchantId,
    tag: String,
    ecode: String,
}

impl BeatRequest {
    /// Creates a request, rejecting blank fields.
    pub fn new(
        mid: impl Into<String>,
        tag: impl Into<String>,
        ecode: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            mid: MerchantId::new(mid)?,
            tag: non_blank(tag.into(), "tag")?,
            ecode: non_blank(ecode.into(), "ecode")?,
        })
    }

    pub fn mid(&self) -> &MerchantId {
        &self.mid
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn ecode(&self) -> &str {
        &self.ecode
    }
}

#[derive(Deserialize)]
struct RawBeatRequest {
    mid: String,
    tag: String,
    ecode: String,
}

impl FromToolValue for BeatRequest {
    fn from_tool_value(value: Value) -> Result<Self, ValidationError> {
        let raw: RawBeatRequest = serde_json::from_value(value)
            .map_err(|e| ValidationError::invalid_format("input", e.to_string()))?;
        BeatRequest::new(raw.mid, raw.tag, raw.ecode)
    }
}

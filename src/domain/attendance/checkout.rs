//! AttendanceEvent - check-out payload.
//!
//! Validated fully but performs no side effect yet; the check-out tool
//! echoes it back.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::{non_blank, FromToolValue, ValidationError};

/// A check-out event reported from a field device.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceEvent {
    lat: f64,
    lon: f64,
    #[serde(rename = "deviceIdentifier")]
    device_identifier: String,
    notes: Option<String>,
}

impl AttendanceEvent {
    pub fn new(
        lat: f64,
        lon: f64,
        device_identifier: impl Into<String>,
        notes: Option<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            lat: coordinate("lat", lat, 90.0)?,
            lon: coordinate("lon", lon, 180.0)?,
            device_identifier: non_blank(device_identifier.into(), "deviceIdentifier")?,
            notes,
        })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn device_identifier(&self) -> &str {
        &self.device_identifier
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

fn coordinate(field: &str, value: f64, limit: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::invalid_format(field, "must be a finite number"));
    }
    if value < -limit || value > limit {
        return Err(ValidationError::out_of_range(field, -limit, limit, value));
    }
    Ok(value)
}

#[derive(Deserialize)]
struct RawAttendanceEvent {
    lat: f64,
    lon: f64,
    #[serde(rename = "deviceIdentifier")]
    device_identifier: String,
    #[serde(default)]
    notes: Option<String>,
}

impl FromToolValue for AttendanceEvent {
    fn from_tool_value(value: Value) -> Result<Self, ValidationError> {
        let raw: RawAttendanceEvent = serde_json::from_value(value)
            .map_err(|e| ValidationError::invalid_format("payload", e.to_string()))?;
        AttendanceEvent::new(raw.lat, raw.lon, raw.device_identifier, raw.notes)
    }
}

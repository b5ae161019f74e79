//! Static parts of the beat payload.
//!
//! The service description and address block are not supplied by callers.
//! They default to the placeholder values the QA environment has always
//! used and can be overridden through configuration.

use serde::{Deserialize, Serialize};

/// Fixed service-description fields sent with every beat.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BeatTemplate {
    pub reference_type: String,
    pub priority: String,
    pub tasks: String,
    pub reason_for_service: String,
    pub product: String,
    pub product_model: String,
    pub language: String,
    pub address: ServiceAddress,
}

impl Default for BeatTemplate {
    fn default() -> Self {
        Self {
            reference_type: "pgmid".to_string(),
            priority: "Regular".to_string(),
            tasks: "Testing Lead closure".to_string(),
            reason_for_service: "EDC device lost".to_string(),
            product: "Soundbox".to_string(),
            product_model: "Soundbox 3.0 4G".to_string(),
            language: "English".to_string(),
            address: ServiceAddress::default(),
        }
    }
}

/// Service address attached to a beat.
///
/// Known limitation: the default is a single static Delhi address, not the
/// merchant's real location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceAddress {
    pub country: String,
    pub city: String,
    pub pincode: String,
    pub locality: String,
    pub state: String,
    pub landmark: String,
    pub line1: String,
    // The remote API spells these keys this way.
    #[serde(rename(serialize = "latitute", deserialize = "latitude"))]
    pub latitude: String,
    #[serde(rename(serialize = "longitute", deserialize = "longitude"))]
    pub longitude: String,
}

impl Default for ServiceAddress {
    fn default() -> Self {
        Self {
            country: "India".to_string(),
            city: "Delhi".to_string(),
            pincode: "110059".to_string(),
            locality: "Uttam Nagar".to_string(),
            state: "New Delhi".to_string(),
            landmark: "near Gautam Nursing Home".to_string(),
            line1: "b-45".to_string(),
            latitude: "28.618799".to_string(),
            longitude: "77.073250".to_string(),
        }
    }
}

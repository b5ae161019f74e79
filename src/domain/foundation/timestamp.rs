//! Timestamp value object for points in local time.
//!
//! The field-service API and its cache keys both speak in the server's
//! local wall-clock time, so unlike most timestamps this one keeps its
//! offset instead of normalizing to UTC.

use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Serialize};

/// `YYYY-MM-DD HH:MM:SS ±HHMM`, the format the beat API expects.
const BEAT_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// `YYYY-MM-DD`, used for day-scoped cache keys.
const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Immutable point in time with its local offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<FixedOffset>);

impl Timestamp {
    /// Creates a timestamp for the current moment in local time.
    pub fn now() -> Self {
        Self(Local::now().fixed_offset())
    }

    /// Creates a timestamp from a DateTime with an explicit offset.
    pub fn from_datetime(dt: DateTime<FixedOffset>) -> Self {
        Self(dt)
    }

    /// Formats as `YYYY-MM-DD HH:MM:SS ±HHMM`.
    pub fn beat_format(&self) -> String {
        self.0.format(BEAT_FORMAT).to_string()
    }

    /// Formats the calendar date as `YYYY-MM-DD`.
    pub fn date_key(&self) -> String {
        self.0.format(DATE_KEY_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(s: &str) -> Timestamp {
        Timestamp::from_datetime(DateTime::parse_from_rfc3339(s).unwrap())
    }

    #[test]
    fn beat_format_includes_offset() {
        let ts = fixed("2025-03-07T09:05:01+05:30");
        assert_eq!(ts.beat_format(), "2025-03-07 09:05:01 +0530");
    }

    #[test]
    fn beat_format_negative_offset() {
        let ts = fixed("2024-12-31T23:59:59-08:00");
        assert_eq!(ts.beat_format(), "2024-12-31 23:59:59 -0800");
    }

    #[test]
    fn date_key_uses_local_date_not_utc() {
        // 01:00 IST on the 8th is still the 7th in UTC.
        let ts = fixed("2025-03-08T01:00:00+05:30");
        assert_eq!(ts.date_key(), "2025-03-08");
    }

    #[test]
    fn now_is_ordered() {
        let a = Timestamp::now();
        let b = Timestamp::now();
        assert!(a <= b);
    }
}

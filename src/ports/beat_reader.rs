//! BeatReader port - Read-only access to persisted beats.
//!
//! Used for read-after-write verification: after the remote API accepts a
//! beat, the reader confirms it actually landed in the database.

use async_trait::async_trait;

use crate::domain::beat::BeatRecord;
use crate::domain::foundation::{DomainError, MerchantId};

/// Port for reading beats from the field-service database.
#[async_trait]
pub trait BeatReader: Send + Sync {
    /// Finds the most recently created beat for a merchant.
    ///
    /// Returns `Ok(None)` when the merchant has no beat yet, which may simply
    /// mean the database has not caught up with the API.
    async fn latest_for_mid(&self, mid: &MerchantId) -> Result<Option<BeatRecord>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory implementation for testing
    struct InMemoryBeatReader {
        beats: Mutex<HashMap<String, Vec<BeatRecord>>>,
    }

    impl InMemoryBeatReader {
        fn new() -> Self {
            Self {
                beats: Mutex::new(HashMap::new()),
            }
        }

        fn insert(&self, mid: &str, record: BeatRecord) {
            self.beats
                .lock()
                .unwrap()
                .entry(mid.to_string())
                .or_default()
                .push(record);
        }
    }

    #[async_trait]
    impl BeatReader for InMemoryBeatReader {
        async fn latest_for_mid(
            &self,
            mid: &MerchantId,
        ) -> Result<Option<BeatRecord>, DomainError> {
            Ok(self
                .beats
                .lock()
                .unwrap()
                .get(mid.as_str())
                .and_then(|rows| rows.iter().max_by_key(|r| r.created_at).cloned()))
        }
    }

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn returns_none_for_unknown_merchant() {
        let reader = InMemoryBeatReader::new();
        let mid = MerchantId::new("MID-X").unwrap();
        assert!(reader.latest_for_mid(&mid).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn returns_most_recent_beat() {
        let reader = InMemoryBeatReader::new();
        reader.insert("MID-1", BeatRecord { id: 1, created_at: at(9) });
        reader.insert("MID-1", BeatRecord { id: 3, created_at: at(11) });
        reader.insert("MID-1", BeatRecord { id: 2, created_at: at(10) });

        let mid = MerchantId::new("MID-1").unwrap();
        let latest = reader.latest_for_mid(&mid).await.unwrap().unwrap();
        assert_eq!(latest.id, 3);
    }
}

//! Per-call record of outbound write attempts.

use serde::{Deserialize, Serialize};

/// One attempt at an outbound write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttemptRecord {
    /// The remote answered (any status).
    Response {
        attempt: u32,
        status: u16,
        latency_ms: u64,
    },
    /// The request never produced a response.
    Failed { attempt: u32, error: String },
}

impl AttemptRecord {
    /// 1-based attempt number.
    pub fn attempt(&self) -> u32 {
        match self {
            AttemptRecord::Response { attempt, .. } | AttemptRecord::Failed { attempt, .. } => {
                *attempt
            }
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            AttemptRecord::Response { status, .. } => Some(*status),
            AttemptRecord::Failed { .. } => None,
        }
    }

    pub fn latency_ms(&self) -> Option<u64> {
        match self {
            AttemptRecord::Response { latency_ms, .. } => Some(*latency_ms),
            AttemptRecord::Failed { .. } => None,
        }
    }
}

/// Ordered, append-only attempt history for a single envelope invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttemptLog(Vec<AttemptRecord>);

impl AttemptLog {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Records an attempt that received a response.
    pub fn record_response(&mut self, attempt: u32, status: u16, latency_ms: u64) {
        self.0.push(AttemptRecord::Response {
            attempt,
            status,
            latency_ms,
        });
    }

    /// Records an attempt that failed before a response arrived.
    pub fn record_failure(&mut self, attempt: u32, error: impl Into<String>) {
        self.0.push(AttemptRecord::Failed {
            attempt,
            error: error.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttemptRecord> {
        self.0.iter()
    }

    pub fn last(&self) -> Option<&AttemptRecord> {
        self.0.last()
    }
}

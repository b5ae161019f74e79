//! Retry envelope for outbound writes.
//!
//! Wraps a single [`HttpTransport`] call in a bounded retry loop:
//!
//! | Attempt result            | Action                                      |
//! |---------------------------|---------------------------------------------|
//! | status < 500              | stop, hand the response back                |
//! | status >= 500             | retry immediately                           |
//! | transport error           | sleep `attempt * backoff_unit`, then retry  |
//! | any failure on last try   | stop                                        |
//!
//! Every attempt lands in the returned [`AttemptLog`].

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{sleep, Instant};
use tracing::{debug, warn};

use crate::domain::delivery::AttemptLog;
use crate::ports::{HttpTransport, OutboundRequest, OutboundResponse, TransportError};

/// Attempt ceiling for outbound writes.
pub const MAX_WRITE_ATTEMPTS: u32 = 3;

/// Bounds and pacing of the retry loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff_unit: Duration,
}

impl RetryPolicy {
    /// Policy with at least one attempt.
    pub fn new(max_attempts: u32, backoff_unit: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff_unit,
        }
    }

    pub fn with_backoff_unit(mut self, backoff_unit: Duration) -> Self {
        self.backoff_unit = backoff_unit;
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay after a transport failure on `attempt` (1-based).
    pub fn backoff_after(&self, attempt: u32) -> Duration {
        self.backoff_unit * attempt
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(MAX_WRITE_ATTEMPTS, Duration::from_secs(1))
    }
}

/// How an envelope invocation ended.
#[derive(Debug, Clone, PartialEq)]
pub enum EnvelopeOutcome {
    /// A response to stop on: status < 500, or a 5xx on the final attempt.
    Responded {
        response: OutboundResponse,
        log: AttemptLog,
    },
    /// The final attempt produced no response.
    Exhausted {
        error: TransportError,
        log: AttemptLog,
    },
}

impl EnvelopeOutcome {
    pub fn log(&self) -> &AttemptLog {
        match self {
            EnvelopeOutcome::Responded { log, .. } | EnvelopeOutcome::Exhausted { log, .. } => log,
        }
    }
}

/// Bounded retry loop around an [`HttpTransport`].
#[derive(Clone)]
pub struct RetryEnvelope {
    transport: Arc<dyn HttpTransport>,
    policy: RetryPolicy,
}

impl RetryEnvelope {
    pub fn new(transport: Arc<dyn HttpTransport>, policy: RetryPolicy) -> Self {
        Self { transport, policy }
    }

    /// Sends `request` until a terminal response or the attempt ceiling.
    pub async fn execute(&self, request: &OutboundRequest) -> EnvelopeOutcome {
        let mut log = AttemptLog::new();
        let mut last_response = None;

        for attempt in 1..=self.policy.max_attempts {
            let started = Instant::now();
            match self.transport.send(request).await {
                Ok(response) => {
                    let latency_ms = started.elapsed().as_millis() as u64;
                    log.record_response(attempt, response.status, latency_ms);

                    if !response.is_server_error() {
                        debug!(
                            url = %request.url,
                            attempt,
                            status = response.status,
                            latency_ms,
                            "Outbound write answered"
                        );
                        return EnvelopeOutcome::Responded { response, log };
                    }

                    warn!(
                        url = %request.url,
                        attempt,
                        status = response.status,
                        "Server error from remote API"
                    );
                    last_response = Some(response);
                }
                Err(error) => {
                    log.record_failure(attempt, error.to_string());

                    if attempt == self.policy.max_attempts {
                        warn!(url = %request.url, attempt, error = %error, "Outbound write exhausted");
                        return EnvelopeOutcome::Exhausted { error, log };
                    }

                    let delay = self.policy.backoff_after(attempt);
                    warn!(
                        url = %request.url,
                        attempt,
                        error = %error,
                        backoff_ms = delay.as_millis() as u64,
                        "Transport failure, backing off"
                    );
                    sleep(delay).await;
                }
            }
        }

        match last_response {
            Some(response) => EnvelopeOutcome::Responded { response, log },
            // Unreachable with max_attempts >= 1: the last attempt always returns above.
            None => EnvelopeOutcome::Exhausted {
                error: TransportError::Request("no attempt was made".to_string()),
                log,
            },
        }
    }
}

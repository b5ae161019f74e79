//! CreateBeatHandler - Raises a service beat and confirms it landed.
//!
//! Flow:
//! 1. Normalize the tool input into a [`BeatRequest`]
//! 2. Assemble the payload from the template, fresh tokens and the current time
//! 3. POST it through the [`RetryEnvelope`]
//! 4. On 2xx, read the newest beat for the MID back from the database

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::application::field_service::{FieldServiceEndpoint, SERVICE_BEAT_PATH};
use crate::application::retry_envelope::{EnvelopeOutcome, RetryEnvelope};
use crate::config::ServiceConfig;
use crate::domain::beat::{BeatPayload, BeatRequest, BeatTemplate, PlaceholderTokens};
use crate::domain::delivery::ResponseBody;
use crate::domain::foundation::{ErrorCode, Timestamp, ToolInput};
use crate::domain::outcome::{
    BeatCreated, BeatOutcome, ToolFailure, INVALID_BEAT_INPUT, NO_BEAT_FOR_MID,
};
use crate::ports::{BeatReader, OutboundRequest};

/// Settings for the beat write.
#[derive(Debug, Clone)]
pub struct CreateBeatSettings {
    pub endpoint: FieldServiceEndpoint,
    pub template: BeatTemplate,
    pub write_timeout: std::time::Duration,
}

impl CreateBeatSettings {
    pub fn from_config(service: &ServiceConfig, template: BeatTemplate) -> Self {
        Self {
            endpoint: FieldServiceEndpoint::from_config(service),
            template,
            write_timeout: service.write_timeout(),
        }
    }
}

/// Handler for the `beat_create` tool.
pub struct CreateBeatHandler {
    envelope: RetryEnvelope,
    beats: Arc<dyn BeatReader>,
    settings: CreateBeatSettings,
}

impl CreateBeatHandler {
    pub fn new(
        envelope: RetryEnvelope,
        beats: Arc<dyn BeatReader>,
        settings: CreateBeatSettings,
    ) -> Self {
        Self {
            envelope,
            beats,
            settings,
        }
    }

    pub async fn handle(&self, input: ToolInput<BeatRequest>) -> BeatOutcome {
        self.create(input).await.into()
    }

    async fn create(&self, input: ToolInput<BeatRequest>) -> Result<BeatCreated, ToolFailure> {
        let request = input
            .resolve()
            .map_err(|e| ToolFailure::validation(INVALID_BEAT_INPUT, &e))?;

        let outbound = self.outbound_request(&request)?;

        let (response, logs) = match self.envelope.execute(&outbound).await {
            EnvelopeOutcome::Responded { response, log } => (response, log),
            EnvelopeOutcome::Exhausted { error, log } => {
                warn!(mid = %request.mid(), error = %error, "Beat write never reached the API");
                return Err(ToolFailure::new(
                    ErrorCode::TransportFailed,
                    format!("HTTP error: {}", error),
                )
                .with_logs(log));
            }
        };

        let body = ResponseBody::parse(&response.body);
        if !response.is_success() {
            warn!(mid = %request.mid(), status = response.status, "Beat write rejected");
            return Err(ToolFailure::new(
                ErrorCode::RemoteRejected,
                format!("beat creation failed with status {}", response.status),
            )
            .with_status(response.status)
            .with_response(body)
            .with_logs(logs));
        }

        info!(mid = %request.mid(), attempts = logs.len(), "Beat accepted, verifying in database");

        match self.beats.latest_for_mid(request.mid()).await {
            Ok(Some(record)) => {
                info!(mid = %request.mid(), beat_id = record.id, "Beat confirmed");
                Ok(BeatCreated::new(record, body, logs))
            }
            Ok(None) => {
                warn!(mid = %request.mid(), "Beat accepted but not found in database");
                Err(ToolFailure::new(ErrorCode::ConsistencyFailure, NO_BEAT_FOR_MID)
                    .with_http_response(body)
                    .with_logs(logs))
            }
            Err(e) => {
                error!(mid = %request.mid(), error = %e, "Beat verification query failed");
                Err(ToolFailure::new(
                    ErrorCode::DatabaseError,
                    format!("DB error: {}", e.message),
                )
                .with_http_response(body)
                .with_logs(logs))
            }
        }
    }

    fn outbound_request(&self, request: &BeatRequest) -> Result<OutboundRequest, ToolFailure> {
        let tokens = PlaceholderTokens::generate(&mut rand::thread_rng());
        let payload = BeatPayload::assemble(request, &self.settings.template, tokens, Timestamp::now());
        let body = serde_json::to_value(&payload).map_err(|e| {
            ToolFailure::new(
                ErrorCode::InternalError,
                format!("payload serialization failed: {}", e),
            )
        })?;

        Ok(self
            .settings
            .endpoint
            .post(SERVICE_BEAT_PATH)
            .with_header("cache-control", "no-cache")
            .with_header("content-type", "application/json")
            .with_json(body)
            .with_timeout(self.settings.write_timeout))
    }
}

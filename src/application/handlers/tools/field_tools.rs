//! FieldTools - Named-tool dispatcher.
//!
//! Every invocation gets a fresh invocation id and is logged on the way in
//! and on the way out. Workflow failures are ordinary `{ok:false}` results;
//! only an unknown tool name or an unserializable result is an error here.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tokio::time::Instant;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::application::handlers::attendance::{CheckinCloneHandler, CheckoutHandler};
use crate::application::handlers::beat::CreateBeatHandler;

pub const BEAT_CREATE: &str = "beat_create";
pub const FSE_CHECKIN: &str = "fse_checkin";
pub const FSE_CHECKOUT: &str = "fse_checkout";

/// Name and summary of a tool, as listed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
}

static DESCRIPTORS: [ToolDescriptor; 3] = [
    ToolDescriptor {
        name: BEAT_CREATE,
        description: "Raise a service beat for a merchant (mid, tag, ecode) and confirm it in the database",
    },
    ToolDescriptor {
        name: FSE_CHECKIN,
        description: "Clone an employee's latest CHECKIN_DONE row for today and clear the cached check-in status",
    },
    ToolDescriptor {
        name: FSE_CHECKOUT,
        description: "Validate a check-out event (lat, lon, deviceIdentifier, notes) and echo it back",
    },
];

/// Errors raised by the dispatcher itself.
#[derive(Debug, Error)]
pub enum ToolDispatchError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("failed to serialize tool result: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("tool task did not complete: {0}")]
    Interrupted(String),
}

/// The three field tools behind one dispatch entry point.
pub struct FieldTools {
    beat: CreateBeatHandler,
    checkin: CheckinCloneHandler,
    checkout: CheckoutHandler,
}

impl FieldTools {
    pub fn new(
        beat: CreateBeatHandler,
        checkin: CheckinCloneHandler,
        checkout: CheckoutHandler,
    ) -> Self {
        Self {
            beat,
            checkin,
            checkout,
        }
    }

    pub fn descriptors() -> &'static [ToolDescriptor] {
        &DESCRIPTORS
    }

    pub fn has_tool(name: &str) -> bool {
        DESCRIPTORS.iter().any(|d| d.name == name)
    }

    /// Runs the named tool against a raw JSON input and returns its flat result.
    pub async fn dispatch(&self, tool: &str, input: Value) -> Result<Value, ToolDispatchError> {
        if !Self::has_tool(tool) {
            warn!(tool, "Unknown tool requested");
            return Err(ToolDispatchError::UnknownTool(tool.to_string()));
        }

        let invocation_id = Uuid::new_v4();
        info!(tool, %invocation_id, request = %input, "Tool request");
        let started = Instant::now();

        let result = match tool {
            BEAT_CREATE => serde_json::to_value(self.beat.handle(input.into()).await),
            FSE_CHECKIN => serde_json::to_value(self.checkin.handle(input.into()).await),
            _ => serde_json::to_value(self.checkout.handle(input.into())),
        };
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match result {
            Ok(value) => {
                let ok = value.get("ok").and_then(Value::as_bool).unwrap_or(false);
                info!(tool, %invocation_id, ok, elapsed_ms, response = %value, "Tool response");
                Ok(value)
            }
            Err(e) => {
                error!(tool, %invocation_id, elapsed_ms, error = %e, "Tool result not serializable");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::field_service::FieldServiceEndpoint;
    use crate::application::handlers::beat::CreateBeatSettings;
    use crate::application::retry_envelope::{RetryEnvelope, RetryPolicy};
    use crate::application::test_support::{
        ScriptedTransport, StaticBeatReader, StaticCheckinRepository,
    };
    use crate::domain::beat::BeatTemplate;
    use crate::ports::CheckinClone;
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    fn tools(transport: Arc<ScriptedTransport>) -> FieldTools {
        let endpoint = FieldServiceEndpoint::new("https://fse.example.com", "jwt");
        let beat = CreateBeatHandler::new(
            RetryEnvelope::new(transport.clone(), RetryPolicy::default()),
            Arc::new(StaticBeatReader::returning(None)),
            CreateBeatSettings {
                endpoint: endpoint.clone(),
                template: BeatTemplate::default(),
                write_timeout: Duration::from_secs(30),
            },
        );
        let checkin = CheckinCloneHandler::new(
            Arc::new(StaticCheckinRepository::answering(Ok(CheckinClone::NoSourceRow))),
            transport,
            endpoint,
            Duration::from_secs(20),
        );
        FieldTools::new(beat, checkin, CheckoutHandler::new())
    }

    #[test]
    fn lists_three_tools() {
        let names: Vec<&str> = FieldTools::descriptors().iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["beat_create", "fse_checkin", "fse_checkout"]);
    }

    #[tokio::test]
    async fn unknown_tool_is_an_error() {
        let transport = Arc::new(ScriptedTransport::new(vec![]));
        let err = tools(transport).dispatch("beat_delete", json!({})).await.unwrap_err();
        assert!(matches!(err, ToolDispatchError::UnknownTool(name) if name == "beat_delete"));
    }

    #[tokio::test]
    async fn dispatches_checkout_from_json_text() {
        let transport = Arc::new(ScriptedTransport::new(vec![]));
        let result = tools(transport)
            .dispatch(
                FSE_CHECKOUT,
                json!(r#"{"lat": 1.0, "lon": 2.0, "deviceIdentifier": "d"}"#),
            )
            .await
            .unwrap();
        assert_eq!(result["ok"], json!(true));
        assert_eq!(result["action"], json!("fse.checkout"));
    }

    #[tokio::test]
    async fn workflow_failures_come_back_as_results() {
        let transport = Arc::new(ScriptedTransport::new(vec![]));
        let tools = tools(transport.clone());

        let checkin = tools.dispatch(FSE_CHECKIN, json!({"emp_id": "E1"})).await.unwrap();
        let beat = tools.dispatch(BEAT_CREATE, json!({"mid": "M1"})).await.unwrap();

        assert_eq!(checkin["ok"], json!(false));
        assert_eq!(checkin["code"], json!("NOT_FOUND"));
        assert_eq!(beat["ok"], json!(false));
        assert_eq!(beat["error"], json!("invalid input format"));
        assert_eq!(transport.call_count(), 0);
    }
}

//! CheckinCloneHandler - Duplicates an employee's latest check-in for today.
//!
//! The clone is committed first. Clearing the cached check-in status happens
//! afterwards, outside the transaction, and only its outcome is reported:
//! a failed clear never turns a committed clone into a failure.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::application::field_service::{FieldServiceEndpoint, CACHE_DELETE_PATH};
use crate::config::ServiceConfig;
use crate::domain::attendance::{checkin_status_key, CheckinCloneRequest};
use crate::domain::delivery::ResponseBody;
use crate::domain::foundation::{ErrorCode, Timestamp, ToolInput, ValidationError};
use crate::domain::outcome::{
    CacheClearance, CheckinCloned, CheckinOutcome, ToolFailure, EMP_ID_REQUIRED,
    INSERTED_ROW_MISSING, NO_SOURCE_CHECKIN,
};
use crate::ports::{CheckinClone, CheckinRepository, HttpTransport};

/// Query parameter naming the cache key to drop.
const CACHE_KEY_PARAM: &str = "redisKey";

/// Handler for the `fse_checkin` tool.
pub struct CheckinCloneHandler {
    checkins: Arc<dyn CheckinRepository>,
    transport: Arc<dyn HttpTransport>,
    endpoint: FieldServiceEndpoint,
    cache_timeout: Duration,
}

impl CheckinCloneHandler {
    pub fn new(
        checkins: Arc<dyn CheckinRepository>,
        transport: Arc<dyn HttpTransport>,
        endpoint: FieldServiceEndpoint,
        cache_timeout: Duration,
    ) -> Self {
        Self {
            checkins,
            transport,
            endpoint,
            cache_timeout,
        }
    }

    pub fn from_config(
        checkins: Arc<dyn CheckinRepository>,
        transport: Arc<dyn HttpTransport>,
        service: &ServiceConfig,
    ) -> Self {
        Self::new(
            checkins,
            transport,
            FieldServiceEndpoint::from_config(service),
            service.cache_timeout(),
        )
    }

    pub async fn handle(&self, input: ToolInput<CheckinCloneRequest>) -> CheckinOutcome {
        self.clone_checkin(input).await.into()
    }

    async fn clone_checkin(
        &self,
        input: ToolInput<CheckinCloneRequest>,
    ) -> Result<CheckinCloned, ToolFailure> {
        let request = input.resolve().map_err(|e| match e {
            ValidationError::Unparseable { ref reason } => ToolFailure::new(
                ErrorCode::ValidationFailed,
                format!("invalid input: {}", reason),
            ),
            other => ToolFailure::validation(EMP_ID_REQUIRED, &other),
        })?;
        let emp_id = request.emp_id();

        let record = match self.checkins.clone_latest_checkin(emp_id).await {
            Ok(CheckinClone::Inserted(Some(record))) => record,
            Ok(CheckinClone::Inserted(None)) => {
                warn!(emp_id = %emp_id, "Clone committed but read-back found nothing");
                return Err(ToolFailure::new(
                    ErrorCode::ConsistencyFailure,
                    INSERTED_ROW_MISSING,
                ));
            }
            Ok(CheckinClone::NoSourceRow) => {
                info!(emp_id = %emp_id, "No completed check-in to clone");
                return Err(ToolFailure::new(ErrorCode::NotFound, NO_SOURCE_CHECKIN));
            }
            Err(e) => {
                error!(emp_id = %emp_id, error = %e, "Check-in clone failed");
                return Err(ToolFailure::new(
                    ErrorCode::DatabaseError,
                    format!("DB error: {}", e.message),
                ));
            }
        };

        info!(emp_id = %emp_id, id = record.id, "Check-in cloned");

        let key = checkin_status_key(&Timestamp::now(), emp_id);
        let clearance = self.clear_status_cache(&key).await;

        Ok(CheckinCloned::new(record, key, clearance))
    }

    /// One best-effort POST to the cache admin endpoint; never retried.
    async fn clear_status_cache(&self, key: &str) -> CacheClearance {
        let request = self
            .endpoint
            .post(CACHE_DELETE_PATH)
            .with_query(CACHE_KEY_PARAM, key)
            .with_timeout(self.cache_timeout);

        match self.transport.send(&request).await {
            Ok(response) => {
                let cleared = response.is_success();
                if !cleared {
                    warn!(key, status = response.status, "Cache clear rejected");
                }
                CacheClearance {
                    cleared,
                    response: ResponseBody::parse(&response.body),
                }
            }
            Err(e) => {
                warn!(key, error = %e, "Cache clear failed");
                CacheClearance {
                    cleared: false,
                    response: ResponseBody::Text(e.to_string()),
                }
            }
        }
    }
}

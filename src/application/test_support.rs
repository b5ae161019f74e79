//! Mutex-backed port doubles shared by the application tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::attendance::CheckinRecord;
use crate::domain::beat::BeatRecord;
use crate::domain::foundation::{DomainError, EmployeeId, MerchantId};
use crate::ports::{
    BeatReader, CheckinClone, CheckinRepository, HttpTransport, OutboundRequest,
    OutboundResponse, TransportError,
};

/// Replays a fixed script of transport results and records every request.
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Result<OutboundResponse, TransportError>>>,
    requests: Mutex<Vec<OutboundRequest>>,
}

impl ScriptedTransport {
    pub fn new(script: Vec<Result<OutboundResponse, TransportError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<OutboundRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: &OutboundRequest) -> Result<OutboundResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Request("script exhausted".to_string())))
    }
}

/// Beat reader with a canned answer.
pub struct StaticBeatReader {
    answer: Result<Option<BeatRecord>, DomainError>,
    lookups: Mutex<Vec<MerchantId>>,
}

impl StaticBeatReader {
    pub fn returning(record: Option<BeatRecord>) -> Self {
        Self {
            answer: Ok(record),
            lookups: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            answer: Err(DomainError::database(message)),
            lookups: Mutex::new(Vec::new()),
        }
    }

    pub fn lookups(&self) -> Vec<MerchantId> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl BeatReader for StaticBeatReader {
    async fn latest_for_mid(&self, mid: &MerchantId) -> Result<Option<BeatRecord>, DomainError> {
        self.lookups.lock().unwrap().push(mid.clone());
        self.answer.clone()
    }
}

/// Check-in repository with a canned clone result.
pub struct StaticCheckinRepository {
    answer: Result<CheckinClone, DomainError>,
    calls: Mutex<Vec<EmployeeId>>,
}

impl StaticCheckinRepository {
    pub fn inserted(record: CheckinRecord) -> Self {
        Self::answering(Ok(CheckinClone::Inserted(Some(record))))
    }

    pub fn answering(answer: Result<CheckinClone, DomainError>) -> Self {
        Self {
            answer,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<EmployeeId> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CheckinRepository for StaticCheckinRepository {
    async fn clone_latest_checkin(
        &self,
        emp_id: &EmployeeId,
    ) -> Result<CheckinClone, DomainError> {
        self.calls.lock().unwrap().push(emp_id.clone());
        self.answer.clone()
    }
}

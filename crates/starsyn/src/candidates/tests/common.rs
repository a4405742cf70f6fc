use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::candidates::actions::{ActionError, CandidateActions};
use crate::candidates::domain::{
    CandidateId, CandidateRecord, CandidateStatus, ContactMethod, Intent,
};
use crate::candidates::service::CandidateDashboardService;
use crate::candidates::source::{CandidateSource, SourceError, StaticCandidateSource};
use crate::candidates::candidate_router;

pub(super) fn revealed() -> CandidateRecord {
    let mut record = CandidateRecord::new("r-1", "CAND-1001", 92, "Data Science", Intent::VeryHigh);
    record.is_revealed = true;
    record.name = Some("Ada Park".to_string());
    record.email = Some("ada@example.com".to_string());
    record.phone = Some("+1 (555) 100-2000".to_string());
    record.status = Some(CandidateStatus::Contacted);
    record.favorite = true;
    record
}

pub(super) fn blind() -> CandidateRecord {
    let mut record = CandidateRecord::new("b-1", "CAND-2002", 71, "Cybersecurity", Intent::High);
    record.email = Some("hidden@example.com".to_string());
    record.status = Some(CandidateStatus::New);
    record
}

pub(super) fn records() -> Vec<CandidateRecord> {
    vec![revealed(), blind()]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum RecordedAction {
    Favorite(CandidateId, bool),
    Contact(CandidateId, ContactMethod),
    Reveal(CandidateId),
    Status(CandidateId, CandidateStatus),
}

#[derive(Default, Clone)]
pub(super) struct MemoryActions {
    events: Arc<Mutex<Vec<RecordedAction>>>,
}

impl MemoryActions {
    pub(super) fn events(&self) -> Vec<RecordedAction> {
        self.events.lock().expect("action mutex poisoned").clone()
    }

    fn record(&self, action: RecordedAction) {
        self.events
            .lock()
            .expect("action mutex poisoned")
            .push(action);
    }
}

impl CandidateActions for MemoryActions {
    fn request_favorite_toggle(&self, id: &CandidateId, favorite: bool) -> Result<(), ActionError> {
        self.record(RecordedAction::Favorite(id.clone(), favorite));
        Ok(())
    }

    fn request_contact(&self, id: &CandidateId, method: ContactMethod) -> Result<(), ActionError> {
        self.record(RecordedAction::Contact(id.clone(), method));
        Ok(())
    }

    fn request_reveal(&self, id: &CandidateId) -> Result<(), ActionError> {
        self.record(RecordedAction::Reveal(id.clone()));
        Ok(())
    }

    fn request_status_change(
        &self,
        id: &CandidateId,
        status: &CandidateStatus,
    ) -> Result<(), ActionError> {
        self.record(RecordedAction::Status(id.clone(), status.clone()));
        Ok(())
    }
}

pub(super) struct OfflineActions;

impl CandidateActions for OfflineActions {
    fn request_favorite_toggle(&self, _id: &CandidateId, _favorite: bool) -> Result<(), ActionError> {
        Err(ActionError::Transport("backend offline".to_string()))
    }

    fn request_contact(&self, _id: &CandidateId, _method: ContactMethod) -> Result<(), ActionError> {
        Err(ActionError::Transport("backend offline".to_string()))
    }

    fn request_reveal(&self, _id: &CandidateId) -> Result<(), ActionError> {
        Err(ActionError::Transport("backend offline".to_string()))
    }

    fn request_status_change(
        &self,
        _id: &CandidateId,
        _status: &CandidateStatus,
    ) -> Result<(), ActionError> {
        Err(ActionError::Transport("backend offline".to_string()))
    }
}

pub(super) struct UnavailableSource;

impl CandidateSource for UnavailableSource {
    fn fetch_candidates(&self) -> Result<Vec<CandidateRecord>, SourceError> {
        Err(SourceError::Unavailable("profile service offline".to_string()))
    }
}

pub(super) fn build_service() -> (
    CandidateDashboardService<StaticCandidateSource, MemoryActions>,
    Arc<MemoryActions>,
) {
    let source = StaticCandidateSource::new(records()).expect("unique fixture ids");
    let actions = Arc::new(MemoryActions::default());
    let service = CandidateDashboardService::new(Arc::new(source), actions.clone());
    (service, actions)
}

pub(super) fn router_with_service(
    service: CandidateDashboardService<StaticCandidateSource, MemoryActions>,
) -> axum::Router {
    candidate_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn read_text_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}

use metrics_exporter_prometheus::PrometheusHandle;
use starsyn::candidates::{
    ActionError, CandidateActions, CandidateId, CandidateRecord, CandidateSource, CandidateStatus,
    ContactMethod, DemoCandidateProvider, JsonFileCandidateSource, SortKey, SourceError,
};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Candidate source picked from configuration: a JSON file when a path is set,
/// otherwise the built-in demo provider.
#[derive(Debug, Clone)]
pub(crate) enum ConfiguredSource {
    Demo(DemoCandidateProvider),
    File(JsonFileCandidateSource),
}

impl ConfiguredSource {
    pub(crate) fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::File(JsonFileCandidateSource::new(path)),
            None => Self::Demo(DemoCandidateProvider),
        }
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            Self::Demo(_) => "built-in demo data".to_string(),
            Self::File(source) => source.path().display().to_string(),
        }
    }
}

impl CandidateSource for ConfiguredSource {
    fn fetch_candidates(&self) -> Result<Vec<CandidateRecord>, SourceError> {
        match self {
            Self::Demo(provider) => provider.fetch_candidates(),
            Self::File(source) => source.fetch_candidates(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ActionEvent {
    Favorite { id: CandidateId, favorite: bool },
    Contact { id: CandidateId, method: ContactMethod },
    Reveal { id: CandidateId },
    Status { id: CandidateId, status: CandidateStatus },
}

/// Number of recent actions kept by [`InMemoryActionLog::default`].
pub(crate) const ACTION_HISTORY_LIMIT: usize = 256;

/// Logs requested actions and keeps the most recent ones in memory. Nothing is
/// sent anywhere; older events are dropped once the limit is reached.
#[derive(Clone)]
pub(crate) struct InMemoryActionLog {
    events: Arc<Mutex<VecDeque<ActionEvent>>>,
    limit: usize,
}

impl Default for InMemoryActionLog {
    fn default() -> Self {
        Self::with_limit(ACTION_HISTORY_LIMIT)
    }
}

impl InMemoryActionLog {
    pub(crate) fn with_limit(limit: usize) -> Self {
        Self {
            events: Arc::new(Mutex::new(VecDeque::with_capacity(limit.min(64)))),
            limit,
        }
    }

    fn push(&self, event: ActionEvent) -> Result<(), ActionError> {
        let mut guard = self
            .events
            .lock()
            .map_err(|_| ActionError::Transport("action log mutex poisoned".to_string()))?;
        info!(?event, "candidate action recorded");
        if self.limit == 0 {
            return Ok(());
        }
        while guard.len() >= self.limit {
            guard.pop_front();
        }
        guard.push_back(event);
        Ok(())
    }

    /// Recorded events, oldest first.
    pub(crate) fn events(&self) -> Vec<ActionEvent> {
        self.events
            .lock()
            .map(|guard| guard.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl CandidateActions for InMemoryActionLog {
    fn request_favorite_toggle(&self, id: &CandidateId, favorite: bool) -> Result<(), ActionError> {
        self.push(ActionEvent::Favorite {
            id: id.clone(),
            favorite,
        })
    }

    fn request_contact(&self, id: &CandidateId, method: ContactMethod) -> Result<(), ActionError> {
        self.push(ActionEvent::Contact {
            id: id.clone(),
            method,
        })
    }

    fn request_reveal(&self, id: &CandidateId) -> Result<(), ActionError> {
        self.push(ActionEvent::Reveal { id: id.clone() })
    }

    fn request_status_change(
        &self,
        id: &CandidateId,
        status: &CandidateStatus,
    ) -> Result<(), ActionError> {
        self.push(ActionEvent::Status {
            id: id.clone(),
            status: status.clone(),
        })
    }
}

pub(crate) fn parse_sort_key(raw: &str) -> Result<SortKey, String> {
    SortKey::parse(raw).ok_or_else(|| {
        let known: Vec<&str> = SortKey::ALL.iter().map(|key| key.label()).collect();
        format!("unknown sort key '{raw}' (expected one of {})", known.join(", "))
    })
}

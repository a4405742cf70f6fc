use serde::Serialize;

use super::domain::{CandidateId, CandidateStatus, ContactMethod};

/// Side-effecting callbacks raised by the dashboard. The engine never applies
/// these to its own records: a refreshed list from the source is authoritative.
pub trait CandidateActions: Send + Sync {
    fn request_favorite_toggle(&self, id: &CandidateId, favorite: bool) -> Result<(), ActionError>;
    fn request_contact(&self, id: &CandidateId, method: ContactMethod) -> Result<(), ActionError>;
    fn request_reveal(&self, id: &CandidateId) -> Result<(), ActionError>;
    fn request_status_change(
        &self,
        id: &CandidateId,
        status: &CandidateStatus,
    ) -> Result<(), ActionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("action transport unavailable: {0}")]
    Transport(String),
}

/// Toast tone attached to an acknowledgement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AcknowledgementTone {
    Success,
    Info,
}

/// User-facing confirmation returned once a callback accepted the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Acknowledgement {
    pub candidate_id: CandidateId,
    pub title: String,
    pub description: String,
    pub tone: AcknowledgementTone,
}

impl Acknowledgement {
    pub(crate) fn favorite(candidate_id: CandidateId, favorite: bool, display_name: &str) -> Self {
        let (title, description) = if favorite {
            ("Added to favorites", format!("{display_name} was added to your favorites"))
        } else {
            (
                "Removed from favorites",
                format!("{display_name} was removed from your favorites"),
            )
        };
        Self {
            candidate_id,
            title: title.to_string(),
            description,
            tone: AcknowledgementTone::Success,
        }
    }

    pub(crate) fn contact(
        candidate_id: CandidateId,
        method: ContactMethod,
        display_name: &str,
    ) -> Self {
        Self {
            candidate_id,
            title: format!("Contacting {display_name}"),
            description: format!("Opening {} interface...", method.label()),
            tone: AcknowledgementTone::Info,
        }
    }

    pub(crate) fn reveal(candidate_id: CandidateId) -> Self {
        Self {
            candidate_id,
            title: "Reveal requested".to_string(),
            description: "Your request has been submitted and is pending approval.".to_string(),
            tone: AcknowledgementTone::Info,
        }
    }

    pub(crate) fn status(candidate_id: CandidateId, status: &CandidateStatus) -> Self {
        Self {
            candidate_id,
            title: "Status updated".to_string(),
            description: format!("Candidate status changed to {}", status.as_str()),
            tone: AcknowledgementTone::Success,
        }
    }
}

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{CandidateId, CandidateRecord, CandidateStatus, ContactMethod, Intent};

/// Badge color family shown next to intent and status values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Purple,
    Green,
    Blue,
    Gray,
    Orange,
    Teal,
}

pub fn intent_tone(intent: &Intent) -> BadgeTone {
    match intent {
        Intent::VeryHigh => BadgeTone::Purple,
        Intent::High => BadgeTone::Green,
        Intent::Medium => BadgeTone::Blue,
        Intent::Low | Intent::Other(_) => BadgeTone::Gray,
    }
}

pub fn status_tone(status: Option<&CandidateStatus>) -> BadgeTone {
    match status {
        Some(CandidateStatus::New) => BadgeTone::Blue,
        Some(CandidateStatus::Contacted) => BadgeTone::Purple,
        Some(CandidateStatus::Applied) => BadgeTone::Orange,
        Some(CandidateStatus::Interviewed) => BadgeTone::Teal,
        Some(CandidateStatus::Accepted) => BadgeTone::Green,
        Some(CandidateStatus::Other(_)) | None => BadgeTone::Gray,
    }
}

/// Upper-case the first character for menu and badge labels ("very-high" -> "Very-high").
pub fn display_label(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub value: String,
    pub label: String,
    pub tone: BadgeTone,
}

/// Rendered form of a candidate for table rows, cards and exports.
///
/// This is the only shape in which records leave the crate: identity fields are
/// populated exclusively for revealed candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateCard {
    pub id: CandidateId,
    pub blind_id: String,
    pub display_name: String,
    pub revealed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub match_score: u8,
    pub program: String,
    pub intent: Badge,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Badge>,
    pub status_tone: BadgeTone,
    pub activity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_date: Option<DateTime<Utc>>,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub favorite: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub contact_methods: Vec<ContactMethod>,
    pub selected: bool,
}

impl CandidateCard {
    pub fn from_record(record: &CandidateRecord) -> Self {
        let email = record.revealed_email().map(str::to_string);
        let phone = record.revealed_phone().map(str::to_string);

        let mut contact_methods = Vec::with_capacity(3);
        if email.is_some() {
            contact_methods.push(ContactMethod::Email);
        }
        if phone.is_some() {
            contact_methods.push(ContactMethod::Phone);
        }
        contact_methods.push(ContactMethod::Message);

        Self {
            id: record.id.clone(),
            blind_id: record.blind_id.clone(),
            display_name: record.display_name().to_string(),
            revealed: record.is_revealed,
            name: record.revealed_name().map(str::to_string),
            email,
            phone,
            match_score: record.match_score,
            program: record.program.clone(),
            intent: Badge {
                value: record.intent.as_str().to_string(),
                label: display_label(record.intent.as_str()),
                tone: intent_tone(&record.intent),
            },
            status: record.status.as_ref().map(|status| Badge {
                value: status.as_str().to_string(),
                label: display_label(status.as_str()),
                tone: status_tone(Some(status)),
            }),
            status_tone: status_tone(record.status.as_ref()),
            activity: record.activity.clone(),
            activity_date: record.activity_date,
            skills: record.skills.clone(),
            location: record.location.clone(),
            favorite: record.favorite,
            avatar_url: record.avatar_url.clone(),
            contact_methods,
            selected: false,
        }
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

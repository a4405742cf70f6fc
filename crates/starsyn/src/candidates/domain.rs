use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stable identifier for a candidate within one working set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(pub String);

impl CandidateId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CandidateId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Inferred interest level. Values outside the known set are kept verbatim in `Other`
/// and only ever compare equal to the same string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Intent {
    Low,
    Medium,
    High,
    VeryHigh,
    Other(String),
}

impl Intent {
    pub const KNOWN: [Intent; 4] = [Intent::Low, Intent::Medium, Intent::High, Intent::VeryHigh];

    pub fn as_str(&self) -> &str {
        match self {
            Intent::Low => "low",
            Intent::Medium => "medium",
            Intent::High => "high",
            Intent::VeryHigh => "very-high",
            Intent::Other(value) => value,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Intent::Other(_))
    }
}

impl From<String> for Intent {
    fn from(value: String) -> Self {
        match value.as_str() {
            "low" => Intent::Low,
            "medium" => Intent::Medium,
            "high" => Intent::High,
            "very-high" => Intent::VeryHigh,
            _ => Intent::Other(value),
        }
    }
}

impl From<&str> for Intent {
    fn from(value: &str) -> Self {
        Intent::from(value.to_string())
    }
}

impl From<Intent> for String {
    fn from(intent: Intent) -> Self {
        match intent {
            Intent::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

/// Recruiting pipeline stage. A record without a status simply has `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CandidateStatus {
    New,
    Contacted,
    Applied,
    Interviewed,
    Accepted,
    Other(String),
}

impl CandidateStatus {
    pub const KNOWN: [CandidateStatus; 5] = [
        CandidateStatus::New,
        CandidateStatus::Contacted,
        CandidateStatus::Applied,
        CandidateStatus::Interviewed,
        CandidateStatus::Accepted,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            CandidateStatus::New => "new",
            CandidateStatus::Contacted => "contacted",
            CandidateStatus::Applied => "applied",
            CandidateStatus::Interviewed => "interviewed",
            CandidateStatus::Accepted => "accepted",
            CandidateStatus::Other(value) => value,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, CandidateStatus::Other(_))
    }
}

impl From<String> for CandidateStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "new" => CandidateStatus::New,
            "contacted" => CandidateStatus::Contacted,
            "applied" => CandidateStatus::Applied,
            "interviewed" => CandidateStatus::Interviewed,
            "accepted" => CandidateStatus::Accepted,
            _ => CandidateStatus::Other(value),
        }
    }
}

impl From<&str> for CandidateStatus {
    fn from(value: &str) -> Self {
        CandidateStatus::from(value.to_string())
    }
}

impl From<CandidateStatus> for String {
    fn from(status: CandidateStatus) -> Self {
        match status {
            CandidateStatus::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

/// Outreach channel requested from the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    Email,
    Phone,
    Message,
}

impl ContactMethod {
    pub const fn label(self) -> &'static str {
        match self {
            ContactMethod::Email => "email",
            ContactMethod::Phone => "phone",
            ContactMethod::Message => "message",
        }
    }
}

/// One row of recruiting data as delivered by a candidate source.
///
/// `name`, `email` and `phone` may be populated upstream even for blind records;
/// consumers go through [`CandidateRecord::display_name`] and the contact accessors
/// (or the presentation projection) which check `is_revealed` every time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    pub id: CandidateId,
    pub blind_id: String,
    pub match_score: u8,
    pub program: String,
    #[serde(default)]
    pub activity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_date: Option<DateTime<Utc>>,
    pub intent: Intent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CandidateStatus>,
    #[serde(default)]
    pub is_revealed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CandidateRecord {
    pub const MAX_MATCH_SCORE: u8 = 100;

    /// Minimal blind record; everything optional starts empty.
    pub fn new(
        id: impl Into<String>,
        blind_id: impl Into<String>,
        match_score: u8,
        program: impl Into<String>,
        intent: Intent,
    ) -> Self {
        Self {
            id: CandidateId(id.into()),
            blind_id: blind_id.into(),
            match_score: match_score.min(Self::MAX_MATCH_SCORE),
            program: program.into(),
            activity: String::new(),
            activity_date: None,
            intent,
            status: None,
            is_revealed: false,
            name: None,
            email: None,
            phone: None,
            skills: Vec::new(),
            location: None,
            favorite: false,
            avatar_url: None,
            notes: None,
        }
    }

    /// Clamp values that arrived out of range from an upstream source.
    pub fn normalized(mut self) -> Self {
        self.match_score = self.match_score.min(Self::MAX_MATCH_SCORE);
        self
    }

    /// Real name when revealed, otherwise the anonymized blind identifier.
    pub fn display_name(&self) -> &str {
        match (&self.name, self.is_revealed) {
            (Some(name), true) if !name.trim().is_empty() => name,
            _ => &self.blind_id,
        }
    }

    pub fn revealed_email(&self) -> Option<&str> {
        self.email.as_deref().filter(|_| self.is_revealed)
    }

    pub fn revealed_phone(&self) -> Option<&str> {
        self.phone.as_deref().filter(|_| self.is_revealed)
    }

    pub fn revealed_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|_| self.is_revealed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_intent_round_trips_verbatim() {
        let intent: Intent = serde_json::from_value(json!("lukewarm")).expect("any string");
        assert_eq!(intent, Intent::Other("lukewarm".to_string()));
        assert!(!intent.is_known());
        assert_eq!(serde_json::to_value(&intent).expect("serializes"), json!("lukewarm"));
        assert_ne!(intent, Intent::Low);
    }

    #[test]
    fn known_values_use_kebab_case_wire_form() {
        let intent: Intent = serde_json::from_value(json!("very-high")).expect("known");
        assert_eq!(intent, Intent::VeryHigh);
        let status: CandidateStatus = serde_json::from_value(json!("interviewed")).expect("known");
        assert_eq!(status, CandidateStatus::Interviewed);
        assert_eq!(String::from(CandidateStatus::Accepted), "accepted");
    }

    #[test]
    fn record_tolerates_missing_optional_fields() {
        let record: CandidateRecord = serde_json::from_value(json!({
            "id": "c-1",
            "blindId": "CAND-1001",
            "matchScore": 88,
            "program": "Data Science",
            "intent": "high"
        }))
        .expect("minimal record parses");

        assert_eq!(record.id, CandidateId::from("c-1"));
        assert!(record.status.is_none());
        assert!(record.activity_date.is_none());
        assert!(record.skills.is_empty());
        assert!(!record.is_revealed);
    }

    #[test]
    fn blind_records_never_expose_identity() {
        let mut record = CandidateRecord::new("c-2", "CAND-2002", 75, "Cybersecurity", Intent::Low);
        record.name = Some("Avery Quinn".to_string());
        record.email = Some("avery@example.com".to_string());
        record.phone = Some("+1 (555) 010-2000".to_string());

        assert_eq!(record.display_name(), "CAND-2002");
        assert!(record.revealed_email().is_none());
        assert!(record.revealed_phone().is_none());
        assert!(record.revealed_name().is_none());

        record.is_revealed = true;
        assert_eq!(record.display_name(), "Avery Quinn");
        assert_eq!(record.revealed_email(), Some("avery@example.com"));
    }

    #[test]
    fn normalized_clamps_match_score() {
        let mut record = CandidateRecord::new("c-3", "CAND-3003", 90, "AI/ML", Intent::Medium);
        record.match_score = 140;
        assert_eq!(record.normalized().match_score, 100);
    }
}

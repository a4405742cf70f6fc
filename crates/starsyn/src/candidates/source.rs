use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;
use tracing::debug;

use super::domain::{CandidateId, CandidateRecord, CandidateStatus, Intent};

/// Supplier of the working set. Implementations return the full list each call.
pub trait CandidateSource: Send + Sync {
    fn fetch_candidates(&self) -> Result<Vec<CandidateRecord>, SourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read candidates from {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid candidate data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate candidate id '{0}' in working set")]
    DuplicateId(CandidateId),
    #[error("candidate source unavailable: {0}")]
    Unavailable(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CandidatePayload {
    List(Vec<CandidateRecord>),
    Wrapped { candidates: Vec<CandidateRecord> },
}

/// Parse a JSON array of records, or an object with a `candidates` array.
pub fn parse_candidates<R: Read>(reader: R) -> Result<Vec<CandidateRecord>, SourceError> {
    let payload: CandidatePayload = serde_json::from_reader(reader)?;
    let records = match payload {
        CandidatePayload::List(records) => records,
        CandidatePayload::Wrapped { candidates } => candidates,
    };
    working_set(records)
}

/// Normalize records and enforce id uniqueness.
pub fn working_set(records: Vec<CandidateRecord>) -> Result<Vec<CandidateRecord>, SourceError> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut normalized = Vec::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id.clone()) {
            return Err(SourceError::DuplicateId(record.id));
        }
        normalized.push(record.normalized());
    }
    Ok(normalized)
}

/// Fixed in-memory list, mostly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticCandidateSource {
    records: Vec<CandidateRecord>,
}

impl StaticCandidateSource {
    pub fn new(records: Vec<CandidateRecord>) -> Result<Self, SourceError> {
        Ok(Self {
            records: working_set(records)?,
        })
    }
}

impl CandidateSource for StaticCandidateSource {
    fn fetch_candidates(&self) -> Result<Vec<CandidateRecord>, SourceError> {
        Ok(self.records.clone())
    }
}

/// Reads the candidate file on every fetch so edits show up on the next page load.
#[derive(Debug, Clone)]
pub struct JsonFileCandidateSource {
    path: PathBuf,
}

impl JsonFileCandidateSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CandidateSource for JsonFileCandidateSource {
    fn fetch_candidates(&self) -> Result<Vec<CandidateRecord>, SourceError> {
        let file = std::fs::File::open(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        let records = parse_candidates(std::io::BufReader::new(file))?;
        debug!(path = %self.path.display(), count = records.len(), "loaded candidate file");
        Ok(records)
    }
}

/// Named sample-data collaborator used when no real source is configured.
///
/// The list is fixed: ids, scores and timestamps never change between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoCandidateProvider;

impl DemoCandidateProvider {
    pub fn records() -> Vec<CandidateRecord> {
        vec![
            demo(
                DemoSeed {
                    id: "cand-1001",
                    score: 94,
                    program: "Data Science",
                    intent: Intent::VeryHigh,
                    status: Some(CandidateStatus::Interviewed),
                    activity: "Viewed program page",
                    day: 12,
                    location: "San Francisco, CA",
                    skills: &["Python", "Machine Learning", "SQL"],
                },
                Some(("Maya Chen", "maya.chen@example.com", "+1 (555) 201-0101")),
            ),
            demo(
                DemoSeed {
                    id: "cand-1002",
                    score: 88,
                    program: "Cybersecurity",
                    intent: Intent::High,
                    status: Some(CandidateStatus::Applied),
                    activity: "Started application",
                    day: 11,
                    location: "Austin, TX",
                    skills: &["Network Security", "Linux", "Python"],
                },
                None,
            ),
            demo(
                DemoSeed {
                    id: "cand-1003",
                    score: 88,
                    program: "Computer Science",
                    intent: Intent::Medium,
                    status: Some(CandidateStatus::New),
                    activity: "Downloaded brochure",
                    day: 9,
                    location: "Chicago, IL",
                    skills: &["Java", "Algorithms", "React"],
                },
                Some(("Luis Ortega", "luis.ortega@example.com", "+1 (555) 201-0103")),
            ),
            demo(
                DemoSeed {
                    id: "cand-1004",
                    score: 81,
                    program: "AI/ML",
                    intent: Intent::VeryHigh,
                    status: Some(CandidateStatus::Contacted),
                    activity: "Attended webinar",
                    day: 10,
                    location: "Seattle, WA",
                    skills: &["PyTorch", "Statistics", "Python"],
                },
                None,
            ),
            demo(
                DemoSeed {
                    id: "cand-1005",
                    score: 77,
                    program: "Software Eng",
                    intent: Intent::Low,
                    status: None,
                    activity: "Opened newsletter",
                    day: 2,
                    location: "Columbus, OH",
                    skills: &["JavaScript", "Node.js", "React"],
                },
                None,
            ),
            demo(
                DemoSeed {
                    id: "cand-1006",
                    score: 73,
                    program: "Data Science",
                    intent: Intent::Medium,
                    status: Some(CandidateStatus::Accepted),
                    activity: "Submitted transcript",
                    day: 7,
                    location: "Arlington, VA",
                    skills: &["R", "Data Visualization", "SQL"],
                },
                Some(("Priya Nair", "priya.nair@example.com", "+1 (555) 201-0106")),
            ),
            demo(
                DemoSeed {
                    id: "cand-1007",
                    score: 69,
                    program: "Cybersecurity",
                    intent: Intent::High,
                    status: Some(CandidateStatus::New),
                    activity: "Requested info",
                    day: 5,
                    location: "San Diego, CA",
                    skills: &["Incident Response", "Cloud Security"],
                },
                None,
            ),
            demo(
                DemoSeed {
                    id: "cand-1008",
                    score: 62,
                    program: "Computer Science",
                    intent: Intent::Low,
                    status: Some(CandidateStatus::Contacted),
                    activity: "Visited campus page",
                    day: 3,
                    location: "Boston, MA",
                    skills: &["C++", "Operating Systems"],
                },
                None,
            ),
        ]
    }
}

impl CandidateSource for DemoCandidateProvider {
    fn fetch_candidates(&self) -> Result<Vec<CandidateRecord>, SourceError> {
        Ok(Self::records())
    }
}

struct DemoSeed {
    id: &'static str,
    score: u8,
    program: &'static str,
    intent: Intent,
    status: Option<CandidateStatus>,
    activity: &'static str,
    day: u32,
    location: &'static str,
    skills: &'static [&'static str],
}

fn demo(seed: DemoSeed, identity: Option<(&str, &str, &str)>) -> CandidateRecord {
    let blind_id = seed.id.replace("cand-", "CAND-");
    let mut record = CandidateRecord::new(seed.id, blind_id, seed.score, seed.program, seed.intent);
    record.status = seed.status;
    record.activity = seed.activity.to_string();
    record.activity_date = demo_timestamp(seed.day);
    record.location = Some(seed.location.to_string());
    record.skills = seed.skills.iter().map(|skill| skill.to_string()).collect();

    if let Some((name, email, phone)) = identity {
        record.is_revealed = true;
        record.name = Some(name.to_string());
        record.email = Some(email.to_string());
        record.phone = Some(phone.to_string());
        record.favorite = seed.score >= 90;
    }

    record
}

fn demo_timestamp(day: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(2025, 6, day, 15, 30, 0).single()
}

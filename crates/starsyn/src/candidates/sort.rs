use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::domain::CandidateRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    MatchScore,
    Activity,
    Intent,
    Program,
    Status,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::MatchScore,
        SortKey::Activity,
        SortKey::Intent,
        SortKey::Program,
        SortKey::Status,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            SortKey::MatchScore => "matchScore",
            SortKey::Activity => "activity",
            SortKey::Intent => "intent",
            SortKey::Program => "program",
            SortKey::Status => "status",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.label().eq_ignore_ascii_case(raw.trim()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[default]
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub const fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Current sort column and direction. Defaults to highest match score first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    #[serde(default)]
    pub key: SortKey,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortState {
    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Re-selecting the active key flips direction; a new key starts descending.
    pub fn select(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = self.direction.toggled();
        } else {
            self.key = key;
            self.direction = SortDirection::Descending;
        }
    }
}

/// Ascending comparison for a key. Undated pairs under `Activity` compare equal.
///
/// Text keys are not locale-aware collation: both sides are lowercased and then
/// compared by Unicode scalar value, so the order is the same on every host.
/// Accented letters therefore sort after `z`, and a missing status reads as "".
pub fn compare(a: &CandidateRecord, b: &CandidateRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::MatchScore => a.match_score.cmp(&b.match_score),
        SortKey::Activity => match (a.activity_date, b.activity_date) {
            (Some(left), Some(right)) => left.cmp(&right),
            _ => Ordering::Equal,
        },
        SortKey::Intent | SortKey::Program | SortKey::Status => {
            text_value(a, key).cmp(&text_value(b, key))
        }
    }
}

fn text_value(record: &CandidateRecord, key: SortKey) -> String {
    let raw = match key {
        SortKey::Intent => record.intent.as_str(),
        SortKey::Program => record.program.as_str(),
        SortKey::Status => record
            .status
            .as_ref()
            .map(|status| status.as_str())
            .unwrap_or_default(),
        SortKey::MatchScore | SortKey::Activity => "",
    };
    raw.to_lowercase()
}

/// Stable in-place sort. Ties keep their input order in both directions.
pub fn sort_records(records: &mut [&CandidateRecord], state: SortState) {
    let SortState { key, direction } = state;
    match key {
        // The date comparator is not transitive once undated records are mixed in,
        // so it goes through a sort that only ever moves strictly greater elements.
        SortKey::Activity => {
            insertion_sort_by(records, |a, b| direction.apply(compare(a, b, key)))
        }
        _ => records.sort_by(|a, b| direction.apply(compare(a, b, key))),
    }
}

fn insertion_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for index in 1..items.len() {
        let mut cursor = index;
        while cursor > 0 && compare(&items[cursor - 1], &items[cursor]) == Ordering::Greater {
            items.swap(cursor - 1, cursor);
            cursor -= 1;
        }
    }
}

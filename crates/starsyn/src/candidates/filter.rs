use serde::{Deserialize, Serialize};

use super::domain::CandidateRecord;

/// Categorical columns the dashboard can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterDimension {
    Intent,
    Program,
    Status,
}

impl FilterDimension {
    pub const ALL: [FilterDimension; 3] = [
        FilterDimension::Intent,
        FilterDimension::Program,
        FilterDimension::Status,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            FilterDimension::Intent => "intent",
            FilterDimension::Program => "program",
            FilterDimension::Status => "status",
        }
    }

    /// String form of the record's value for this column; `None` when the record has none.
    pub fn value_of(self, record: &CandidateRecord) -> Option<&str> {
        match self {
            FilterDimension::Intent => Some(record.intent.as_str()),
            FilterDimension::Program => Some(record.program.as_str()),
            FilterDimension::Status => record.status.as_ref().map(|status| status.as_str()),
        }
    }
}

/// Selected values per dimension. OR within a dimension, AND across dimensions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFilters {
    #[serde(default)]
    pub intent: Vec<String>,
    #[serde(default)]
    pub program: Vec<String>,
    #[serde(default)]
    pub status: Vec<String>,
}

impl ActiveFilters {
    pub fn values(&self, dimension: FilterDimension) -> &[String] {
        match dimension {
            FilterDimension::Intent => &self.intent,
            FilterDimension::Program => &self.program,
            FilterDimension::Status => &self.status,
        }
    }

    fn values_mut(&mut self, dimension: FilterDimension) -> &mut Vec<String> {
        match dimension {
            FilterDimension::Intent => &mut self.intent,
            FilterDimension::Program => &mut self.program,
            FilterDimension::Status => &mut self.status,
        }
    }

    /// Add the value if it is not selected yet, remove it otherwise.
    pub fn toggle(&mut self, dimension: FilterDimension, value: impl Into<String>) {
        let value = value.into();
        let selected = self.values_mut(dimension);
        if let Some(position) = selected.iter().position(|existing| *existing == value) {
            selected.remove(position);
        } else {
            selected.push(value);
        }
    }

    pub fn is_active(&self) -> bool {
        FilterDimension::ALL
            .iter()
            .any(|dimension| !self.values(*dimension).is_empty())
    }

    /// Total number of selected values across every dimension.
    pub fn active_count(&self) -> usize {
        FilterDimension::ALL
            .iter()
            .map(|dimension| self.values(*dimension).len())
            .sum()
    }

    pub fn clear(&mut self) {
        self.intent.clear();
        self.program.clear();
        self.status.clear();
    }

    pub fn matches(&self, record: &CandidateRecord) -> bool {
        FilterDimension::ALL.iter().all(|dimension| {
            let selected = self.values(*dimension);
            if selected.is_empty() {
                return true;
            }
            match dimension.value_of(record) {
                Some(value) => selected.iter().any(|candidate| candidate == value),
                None => false,
            }
        })
    }
}

/// Case-insensitive substring match over blind id, name, program, skills and location.
/// An empty term matches every record.
pub fn matches_search(record: &CandidateRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let needle = term.to_lowercase();
    let skills = (!record.skills.is_empty()).then(|| record.skills.join(" "));

    let matched = [
        Some(record.blind_id.as_str()),
        record.name.as_deref(),
        Some(record.program.as_str()),
        skills.as_deref(),
        record.location.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(&needle));
    matched
}

/// Records passing the search and every active filter, in input order.
pub fn filter_records<'a, I>(
    records: I,
    search: &str,
    filters: &ActiveFilters,
) -> Vec<&'a CandidateRecord>
where
    I: IntoIterator<Item = &'a CandidateRecord>,
{
    records
        .into_iter()
        .filter(|record| matches_search(record, search) && filters.matches(record))
        .collect()
}

/// Distinct values present for a dimension, in first-seen order, for the filter menu.
pub fn filter_options(records: &[CandidateRecord], dimension: FilterDimension) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for value in records.iter().filter_map(|record| dimension.value_of(record)) {
        if !value.is_empty() && !options.iter().any(|existing| existing == value) {
            options.push(value.to_string());
        }
    }
    options
}

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{CandidateId, CandidateRecord};
use super::filter::{filter_options, filter_records, ActiveFilters, FilterDimension};
use super::presentation::CandidateCard;
use super::selection::{SelectionState, SelectionSummary};
use super::sort::{sort_records, SortState};

/// UI-controlled inputs of the view: search text, filter selections and sort order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewParams {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub filters: ActiveFilters,
    #[serde(default)]
    pub sort: SortState,
}

impl ViewParams {
    /// Reset filters and the search term; sort order is kept.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.search.clear();
    }

    pub fn has_active_filters(&self) -> bool {
        self.filters.is_active()
    }
}

/// Derived view over a borrowed record list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateView<'a> {
    pub visible: Vec<&'a CandidateRecord>,
    pub total_count: usize,
    pub visible_count: usize,
    pub selection: SelectionSummary,
}

impl<'a> CandidateView<'a> {
    /// True when filtering hid at least one record ("N of M" in the toolbar).
    pub fn is_filtered(&self) -> bool {
        self.visible_count != self.total_count
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn visible_ids(&self) -> impl Iterator<Item = &'a CandidateId> + '_ {
        self.visible.iter().copied().map(|record| &record.id)
    }

    /// Gated projections of the visible rows with their checkbox state.
    pub fn cards(&self, selection: &SelectionState) -> Vec<CandidateCard> {
        self.visible
            .iter()
            .map(|record| {
                CandidateCard::from_record(record).with_selected(selection.contains(&record.id))
            })
            .collect()
    }
}

/// Filter then sort. Output order depends only on the inputs.
pub fn visible_records<'a>(
    records: &'a [CandidateRecord],
    params: &ViewParams,
) -> Vec<&'a CandidateRecord> {
    let mut visible = filter_records(records, &params.search, &params.filters);
    sort_records(&mut visible, params.sort);
    visible
}

pub fn selection_summary(
    records: &[CandidateRecord],
    params: &ViewParams,
    selection: &SelectionState,
) -> SelectionSummary {
    let visible = visible_records(records, params);
    selection.summary(visible.iter().map(|record| &record.id))
}

/// Full derivation: filter, sort, then intersect the selection with the result.
pub fn derive_view<'a>(
    records: &'a [CandidateRecord],
    params: &ViewParams,
    selection: &SelectionState,
) -> CandidateView<'a> {
    let visible = visible_records(records, params);
    let summary = selection.summary(visible.iter().map(|record| &record.id));

    debug!(
        total = records.len(),
        visible = visible.len(),
        selected = summary.selected_count,
        sort = params.sort.key.label(),
        "candidate view recomputed"
    );

    CandidateView {
        total_count: records.len(),
        visible_count: visible.len(),
        visible,
        selection: summary,
    }
}

/// Menu entries for every filter dimension, taken from the unfiltered list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub intent: Vec<String>,
    pub program: Vec<String>,
    pub status: Vec<String>,
}

impl FilterOptions {
    pub fn collect(records: &[CandidateRecord]) -> Self {
        Self {
            intent: filter_options(records, FilterDimension::Intent),
            program: filter_options(records, FilterDimension::Program),
            status: filter_options(records, FilterDimension::Status),
        }
    }
}

use super::domain::{CandidateId, CandidateRecord};
use super::filter::FilterDimension;
use super::selection::SelectionState;
use super::sort::SortKey;
use super::view::{derive_view, visible_records, CandidateView, ViewParams};

/// Caller-owned state for one dashboard session: the working set plus the
/// user-controlled view inputs. All derivation goes through the pure engine.
#[derive(Debug, Clone, Default)]
pub struct CandidateViewController {
    records: Vec<CandidateRecord>,
    params: ViewParams,
    selection: SelectionState,
}

impl CandidateViewController {
    pub fn new(records: Vec<CandidateRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    pub fn records(&self) -> &[CandidateRecord] {
        &self.records
    }

    pub fn params(&self) -> &ViewParams {
        &self.params
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn on_search_change(&mut self, search: impl Into<String>) {
        self.params.search = search.into();
    }

    pub fn on_filter_toggle(&mut self, dimension: FilterDimension, value: impl Into<String>) {
        self.params.filters.toggle(dimension, value);
    }

    pub fn on_sort_change(&mut self, key: SortKey) {
        self.params.sort.select(key);
    }

    pub fn on_selection_toggle(&mut self, id: &CandidateId) -> bool {
        self.selection.toggle(id)
    }

    pub fn on_select_all_toggle(&mut self) {
        let visible = visible_records(&self.records, &self.params);
        self.selection
            .toggle_all(visible.iter().map(|record| &record.id));
    }

    pub fn clear_filters(&mut self) {
        self.params.clear_filters();
    }

    /// Swap in a refreshed working set. Selection does not survive a refresh.
    pub fn replace_records(&mut self, records: Vec<CandidateRecord>) {
        self.records = records;
        self.selection.clear();
    }

    pub fn view(&self) -> CandidateView<'_> {
        derive_view(&self.records, &self.params, &self.selection)
    }
}

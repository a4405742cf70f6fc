use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::domain::CandidateId;

/// Checked candidate ids for bulk actions. Lives as long as the view and is dropped
/// whenever the record list is replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionState {
    ids: BTreeSet<CandidateId>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &CandidateId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CandidateId> {
        self.ids.iter()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Flip membership, returning whether the id is selected afterwards.
    pub fn toggle(&mut self, id: &CandidateId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    /// Select-all scoped to the visible rows: clears them when every visible id is
    /// already selected, otherwise selects all of them. Ids outside `visible` are
    /// never touched.
    pub fn toggle_all<'a, I>(&mut self, visible: I)
    where
        I: IntoIterator<Item = &'a CandidateId>,
    {
        let visible: Vec<&CandidateId> = visible.into_iter().collect();
        if visible.is_empty() {
            return;
        }

        if visible.iter().all(|id| self.ids.contains(*id)) {
            for id in visible {
                self.ids.remove(id);
            }
        } else {
            self.ids.extend(visible.into_iter().cloned());
        }
    }

    /// Tri-state checkbox data for the currently visible rows.
    pub fn summary<'a, I>(&self, visible: I) -> SelectionSummary
    where
        I: IntoIterator<Item = &'a CandidateId>,
    {
        let mut visible_count = 0usize;
        let mut visible_selected = 0usize;
        for id in visible {
            visible_count += 1;
            if self.ids.contains(id) {
                visible_selected += 1;
            }
        }

        SelectionSummary {
            all_selected: visible_count > 0 && visible_selected == visible_count,
            indeterminate: visible_selected > 0 && visible_selected < visible_count,
            selected_count: self.ids.len(),
            visible_selected,
        }
    }
}

impl FromIterator<CandidateId> for SelectionState {
    fn from_iter<T: IntoIterator<Item = CandidateId>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// `selected_count` covers the whole selection (what a bulk action would act on);
/// `visible_selected` is the part of it inside the current view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SelectionSummary {
    pub all_selected: bool,
    pub indeterminate: bool,
    pub selected_count: usize,
    pub visible_selected: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<CandidateId> {
        raw.iter().map(|id| CandidateId::from(*id)).collect()
    }

    #[test]
    fn toggle_flips_membership() {
        let mut selection = SelectionState::new();
        let id = CandidateId::from("a");
        assert!(selection.toggle(&id));
        assert!(selection.contains(&id));
        assert!(!selection.toggle(&id));
        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_all_only_touches_visible_ids() {
        let visible = ids(&["b", "c", "d"]);
        let mut selection: SelectionState = ids(&["a"]).into_iter().collect();

        selection.toggle_all(&visible);
        assert_eq!(selection.len(), 4);

        selection.toggle_all(&visible);
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec![&CandidateId::from("a")]);
    }

    #[test]
    fn partial_visible_selection_is_completed_not_cleared() {
        let visible = ids(&["a", "b"]);
        let mut selection: SelectionState = ids(&["a"]).into_iter().collect();
        selection.toggle_all(&visible);
        assert!(selection.contains(&CandidateId::from("b")));
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn toggle_all_on_empty_view_is_a_no_op() {
        let mut selection: SelectionState = ids(&["a"]).into_iter().collect();
        selection.toggle_all(&Vec::<CandidateId>::new());
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn summary_reports_tri_state() {
        let visible = ids(&["a", "b", "c"]);
        let mut selection: SelectionState = ids(&["a", "z"]).into_iter().collect();

        let summary = selection.summary(&visible);
        assert!(summary.indeterminate);
        assert!(!summary.all_selected);
        assert_eq!(summary.selected_count, 2);
        assert_eq!(summary.visible_selected, 1);

        selection.toggle_all(&visible);
        let summary = selection.summary(&visible);
        assert!(summary.all_selected);
        assert!(!summary.indeterminate);

        let empty = SelectionState::new().summary(&Vec::<CandidateId>::new());
        assert!(!empty.all_selected);
        assert!(!empty.indeterminate);
    }
}

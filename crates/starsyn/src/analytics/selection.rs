use serde::Serialize;

use super::catalog::CatalogEntry;

/// Per-category checkbox summary shown next to each accordion header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryState {
    pub selected: usize,
    pub total: usize,
    pub all_selected: bool,
    pub some_selected: bool,
}

/// Working list of selected catalog keys while a selector dialog is open.
/// Order is preserved because it drives panel order on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CatalogSelection {
    keys: Vec<String>,
}

impl CatalogSelection {
    pub fn new(keys: Vec<String>) -> Self {
        Self { keys }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn into_keys(self) -> Vec<String> {
        self.keys
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|existing| existing == key)
    }

    /// Remove the key if present, otherwise append it.
    pub fn toggle(&mut self, key: &str) {
        if let Some(position) = self.keys.iter().position(|existing| existing == key) {
            self.keys.remove(position);
        } else {
            self.keys.push(key.to_string());
        }
    }

    /// Append every key of the category that is not selected yet.
    pub fn select_category<E: CatalogEntry>(&mut self, catalog: &[E], category: &str) {
        for entry in catalog.iter().filter(|entry| entry.category() == category) {
            if !self.contains(entry.key()) {
                self.keys.push(entry.key().to_string());
            }
        }
    }

    pub fn deselect_category<E: CatalogEntry>(&mut self, catalog: &[E], category: &str) {
        self.keys.retain(|key| {
            !catalog
                .iter()
                .any(|entry| entry.category() == category && entry.key() == key)
        });
    }

    pub fn category_state<E: CatalogEntry>(&self, catalog: &[E], category: &str) -> CategoryState {
        let mut state = CategoryState::default();
        for entry in catalog.iter().filter(|entry| entry.category() == category) {
            state.total += 1;
            if self.contains(entry.key()) {
                state.selected += 1;
            }
        }
        state.all_selected = state.total > 0 && state.selected == state.total;
        state.some_selected = state.selected > 0;
        state
    }
}

impl From<Vec<String>> for CatalogSelection {
    fn from(keys: Vec<String>) -> Self {
        Self::new(keys)
    }
}

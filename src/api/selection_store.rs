use indexmap::IndexSet;
use tracing::{debug, warn};

use crate::core::Dataset;

/// Set of selected model ids. Iteration order carries no meaning.
pub type SelectionSet = IndexSet<String>;

/// Single authoritative owner of which model ids are visible across all charts.
///
/// Every id in the selection is a dataset model id. The store starts with
/// every model selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionStore {
    known: IndexSet<String>,
    selected: SelectionSet,
    epoch: u64,
}

impl SelectionStore {
    #[must_use]
    pub fn new(dataset: &Dataset) -> Self {
        let known: IndexSet<String> = dataset.model_ids().map(str::to_owned).collect();
        Self {
            selected: known.clone(),
            known,
            epoch: 0,
        }
    }

    pub fn select_all(&mut self) {
        self.selected = self.known.clone();
        self.bump_epoch("select all");
    }

    pub fn deselect_all(&mut self) {
        self.selected.clear();
        self.bump_epoch("deselect all");
    }

    /// Adds or removes `id`. Returns `false` when `id` is not a dataset model.
    ///
    /// An unknown id is a caller defect: it trips a debug assertion and is a
    /// logged no-op in release builds.
    pub fn set_model(&mut self, id: &str, included: bool) -> bool {
        let known = self.known.contains(id);
        debug_assert!(known, "unknown model id `{id}` in selection mutation");
        if !known {
            warn!(model_id = id, "ignoring selection change for unknown model");
            return false;
        }

        if included {
            self.selected.insert(id.to_owned());
        } else {
            self.selected.shift_remove(id);
        }
        self.bump_epoch(if included { "include model" } else { "exclude model" });
        true
    }

    /// Selected ids in dataset order.
    #[must_use]
    pub fn current_selection(&self) -> Vec<&str> {
        self.known
            .iter()
            .filter(|id| self.selected.contains(id.as_str()))
            .map(String::as_str)
            .collect()
    }

    #[must_use]
    pub fn selection_set(&self) -> &SelectionSet {
        &self.selected
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn total_count(&self) -> usize {
        self.known.len()
    }

    /// Page-chrome badge, e.g. `"12 of 20"`.
    #[must_use]
    pub fn badge(&self) -> String {
        format!("{} of {}", self.selected_count(), self.total_count())
    }

    /// Number of accepted mutations since construction.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    fn bump_epoch(&mut self, reason: &'static str) {
        self.epoch += 1;
        debug!(
            reason,
            epoch = self.epoch,
            selected = self.selected.len(),
            total = self.known.len(),
            "selection changed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::SelectionStore;
    use crate::core::{Dataset, Model};

    fn store() -> SelectionStore {
        let dataset = Dataset::new(
            vec![
                Model::new("a", "A", "P", 0.1),
                Model::new("b", "B", "P", 0.2),
                Model::new("c", "C", "Q", 0.3),
            ],
            Vec::new(),
        )
        .expect("dataset");
        SelectionStore::new(&dataset)
    }

    #[test]
    fn current_selection_follows_dataset_order_after_reinsert() {
        let mut store = store();
        assert!(store.set_model("a", false));
        assert!(store.set_model("a", true));
        assert_eq!(store.current_selection(), vec!["a", "b", "c"]);
        assert_eq!(store.epoch(), 2);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "unknown model id")]
    fn unknown_id_trips_debug_assertion() {
        let mut store = store();
        store.set_model("ghost", true);
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn unknown_id_is_a_release_no_op() {
        let mut store = store();
        assert!(!store.set_model("ghost", true));
        assert_eq!(store.selected_count(), 3);
        assert_eq!(store.epoch(), 0);
    }
}

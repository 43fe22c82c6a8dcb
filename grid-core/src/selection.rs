//! FILENAME: grid-core/src/selection.rs
//! Row selection state for the widget.
//!
//! Selection is keyed by row id into the caller's slice, so it
//! survives re-sorting and re-grouping (both only reorder ids). The anchor
//! supports shift-click style range extension.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::record::RowId;

/// Selected row ids plus the range-selection anchor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionModel {
    selected: FxHashSet<RowId>,
    anchor: Option<RowId>,
}

impl SelectionModel {
    pub fn new() -> Self {
        SelectionModel::default()
    }

    pub fn is_selected(&self, id: RowId) -> bool {
        self.selected.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Adds a row to the selection and moves the anchor to it.
    pub fn select(&mut self, id: RowId) {
        self.selected.insert(id);
        self.anchor = Some(id);
    }

    /// Clears everything else and selects just this row.
    pub fn select_only(&mut self, id: RowId) {
        self.selected.clear();
        self.select(id);
    }

    pub fn deselect(&mut self, id: RowId) {
        self.selected.remove(&id);
        if self.anchor == Some(id) {
            self.anchor = None;
        }
    }

    /// Toggles a row, returning its new selected state.
    pub fn toggle(&mut self, id: RowId) -> bool {
        if self.selected.contains(&id) {
            self.deselect(id);
            false
        } else {
            self.select(id);
            true
        }
    }

    /// Selects the inclusive id range between the anchor and `id`,
    /// keeping the anchor in place. Falls back to `select` when there is
    /// no anchor yet.
    pub fn extend_to(&mut self, id: RowId) {
        match self.anchor {
            Some(anchor) => {
                let (lo, hi) = if anchor <= id { (anchor, id) } else { (id, anchor) };
                for i in lo..=hi {
                    self.selected.insert(i);
                }
            }
            None => self.select(id),
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
        self.anchor = None;
    }

    /// The selected ids in ascending order.
    pub fn selected_ids(&self) -> Vec<RowId> {
        let mut ids: Vec<RowId> = self.selected.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut selection = SelectionModel::new();
        assert!(selection.toggle(3));
        assert!(selection.is_selected(3));
        assert!(!selection.toggle(3));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_extend_to_uses_anchor() {
        let mut selection = SelectionModel::new();
        selection.select(2);
        selection.extend_to(5);
        assert_eq!(selection.selected_ids(), vec![2, 3, 4, 5]);

        // Extending backwards from the same anchor
        selection.extend_to(0);
        assert_eq!(selection.selected_ids(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_select_only_replaces() {
        let mut selection = SelectionModel::new();
        selection.select(1);
        selection.select(2);
        selection.select_only(7);
        assert_eq!(selection.selected_ids(), vec![7]);
    }

    #[test]
    fn test_deselect_anchor_clears_anchor() {
        let mut selection = SelectionModel::new();
        selection.select(4);
        selection.deselect(4);
        selection.extend_to(6);
        // No anchor left, so extend_to degrades to a plain select
        assert_eq!(selection.selected_ids(), vec![6]);
    }
}

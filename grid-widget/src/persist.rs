//! FILENAME: grid-widget/src/persist.rs
//! View-state snapshots.
//!
//! Captures the user-visible presentation state (grouping, sort, filters,
//! expand state, page position) into a serializable snapshot, so a
//! frontend can persist the view across sessions and restore it onto a
//! fresh `GridState`. The rows themselves are never part of a snapshot.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use grid_core::{ColumnFilter, SortDescriptor};
use group_engine::GroupDescriptor;

use crate::state::GridState;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serializable snapshot of the grid's presentation state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewState {
    /// Keys of expanded groups, sorted for snapshot stability.
    pub expanded_keys: Vec<String>,
    pub group_by: Vec<GroupDescriptor>,
    pub sort: Vec<SortDescriptor>,
    pub filters: Vec<ColumnFilter>,
    pub page_index: usize,
}

impl ViewState {
    /// Captures the presentation state of `state`.
    pub fn capture(state: &GridState) -> Self {
        let mut expanded_keys: Vec<String> = state.expanded_keys().iter().cloned().collect();
        expanded_keys.sort_unstable();
        let options = state.options();
        ViewState {
            expanded_keys,
            group_by: options.group_by.clone(),
            sort: options.sort.clone(),
            filters: options.filters.clone(),
            page_index: options.pager.page_index,
        }
    }

    /// Restores this snapshot onto `state`. Expand keys that no longer
    /// match any group are kept; they are harmless and become live again
    /// if the group reappears.
    pub fn apply(&self, state: &mut GridState) {
        state.set_expanded_keys(self.expanded_keys.iter().cloned());
        let options = state.options_mut();
        options.group_by = self.group_by.clone();
        options.sort = self.sort.clone();
        options.filters = self.filters.clone();
        options.pager.page_index = self.page_index;
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}

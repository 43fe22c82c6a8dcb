//! FILENAME: grid-widget/src/definition.rs
//! Grid Options - The serializable configuration.
//!
//! This module contains the types that DESCRIBE how a grid presents its
//! rows. These structures are designed to be:
//! - Serializable (for saving/loading view state)
//! - Immutable snapshots of user intent
//!
//! Reuses SortDescriptor, ColumnFilter, and Pager from grid-core, and
//! GroupDescriptor and AggregateSpec from group-engine.

use serde::{Deserialize, Serialize};

use grid_core::{ColumnFilter, Pager, SortDescriptor};
use group_engine::{AggregateSpec, GroupDescriptor};

/// Controls how the grid presents its rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    /// Fields to group by (ordered from outer to inner).
    pub group_by: Vec<GroupDescriptor>,

    /// Which aggregates to compute per field at every group level.
    pub aggregates: AggregateSpec,

    /// Sort keys applied before grouping (ordered by priority).
    pub sort: Vec<SortDescriptor>,

    /// Column filters applied before sorting and grouping.
    pub filters: Vec<ColumnFilter>,

    /// Display options.
    pub layout: GridLayout,

    /// Pagination over the flattened render sequence.
    pub pager: Pager,
}

impl GridOptions {
    /// True when at least one group descriptor is active.
    pub fn is_grouped(&self) -> bool {
        !self.group_by.is_empty()
    }
}

/// Display options for the rendered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLayout {
    /// Emit a footer row after each expanded group's children.
    pub show_footers: bool,

    /// Newly encountered groups start expanded rather than collapsed.
    pub expand_new_groups: bool,
}

impl Default for GridLayout {
    fn default() -> Self {
        GridLayout {
            show_footers: true,
            expand_new_groups: false,
        }
    }
}

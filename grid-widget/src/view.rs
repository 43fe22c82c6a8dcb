//! FILENAME: grid-widget/src/view.rs
//! Grid View - Renderable output for the frontend.
//!
//! This module transforms the flattened group tree into the flat list of
//! render rows a viewport scrolls through. Render rows are self-contained
//! value snapshots: the frontend needs no access to the tree or the raw
//! records to paint them.

use serde::{Deserialize, Serialize};

use grid_core::{RowId, Value};
use group_engine::Aggregates;

// ============================================================================
// RENDER ROW
// ============================================================================

/// The type of a row in the rendered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderRowKind {
    /// Group header: label, expand toggle, inline aggregates.
    GroupHeader,
    /// Detail row: one source record.
    Detail,
    /// Group footer: aggregates for the group just closed.
    GroupFooter,
}

/// One row of the rendered sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderRow {
    /// Stable node key; the frontend keys DOM rows and expand state on it.
    pub key: String,

    pub kind: RenderRowKind,

    /// Nesting depth, 0 for top-level. Drives indentation.
    pub level: usize,

    /// Grouped field name (headers and footers only).
    pub field: Option<String>,

    /// Group key value (headers and footers only).
    pub value: Option<Value>,

    /// Aggregate results keyed "field:kind", plus "count" (headers and
    /// footers only).
    pub aggregates: Option<Aggregates>,

    /// Source row id (detail rows only).
    pub row: Option<RowId>,

    /// Whether this group is currently expanded (headers only).
    pub expanded: bool,

    /// Rows under this group at any depth (headers and footers only).
    pub member_count: usize,

    /// Whether the source row is selected (detail rows only).
    pub selected: bool,
}

// ============================================================================
// GRID VIEW
// ============================================================================

/// The complete rendered output for one page of the grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridView {
    /// Render rows for the current page, in display order.
    pub rows: Vec<RenderRow>,

    /// Length of the full flattened sequence before pagination.
    pub total_count: usize,

    /// Number of pages at the current page size.
    pub page_count: usize,

    /// Page the rows above belong to.
    pub page_index: usize,
}

impl GridView {
    /// Viewport slice: `count` render rows starting at `start`, clamped.
    pub fn window(&self, start: usize, count: usize) -> &[RenderRow] {
        let start = start.min(self.rows.len());
        let end = (start + count).min(self.rows.len());
        &self.rows[start..end]
    }
}

//! FILENAME: grid-widget/src/state.rs
//! Grid State - the mutable widget model.
//!
//! Owns the rows, the presentation options, the selection, and the
//! per-group expand state. `build_view` runs the full presentation
//! pipeline: filter, sort, group, flatten, paginate. The group tree is
//! ephemeral and rebuilt on every view; expand state lives here, keyed
//! by stable group key, so it survives rebuilds and data refreshes.

use rustc_hash::FxHashSet;

use grid_core::{apply_filters, sort_ids, Record, SelectionModel};
use group_engine::{build_group_tree_for, flatten_tree, GridNode};

use crate::definition::GridOptions;
use crate::view::{GridView, RenderRow, RenderRowKind};

pub struct GridState {
    rows: Vec<Record>,
    options: GridOptions,
    selection: SelectionModel,
    /// Keys of currently expanded groups.
    expanded: FxHashSet<String>,
    /// Every group key ever observed, for expand-new-groups tracking.
    seen_groups: FxHashSet<String>,
}

impl GridState {
    pub fn new(options: GridOptions) -> Self {
        GridState {
            rows: Vec::new(),
            options,
            selection: SelectionModel::new(),
            expanded: FxHashSet::default(),
            seen_groups: FxHashSet::default(),
        }
    }

    pub fn with_rows(rows: Vec<Record>, options: GridOptions) -> Self {
        let mut state = Self::new(options);
        state.rows = rows;
        state
    }

    // ========================================================================
    // DATA
    // ========================================================================

    /// Replaces the row set. Expand state is keyed by group key, not row
    /// position, so groups that still exist keep their state.
    pub fn set_rows(&mut self, rows: Vec<Record>) {
        log::debug!("replacing {} rows with {}", self.rows.len(), rows.len());
        self.rows = rows;
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    // ========================================================================
    // OPTIONS / SELECTION ACCESSORS
    // ========================================================================

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut GridOptions {
        &mut self.options
    }

    pub fn set_options(&mut self, options: GridOptions) {
        self.options = options;
    }

    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionModel {
        &mut self.selection
    }

    // ========================================================================
    // EXPAND / COLLAPSE
    // ========================================================================

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.contains(key)
    }

    pub fn expand(&mut self, key: impl Into<String>) {
        self.expanded.insert(key.into());
    }

    pub fn collapse(&mut self, key: &str) {
        self.expanded.remove(key);
    }

    /// Flips one group's expand state; returns the new state.
    pub fn toggle_group(&mut self, key: &str) -> bool {
        if self.expanded.remove(key) {
            false
        } else {
            self.expanded.insert(key.to_string());
            true
        }
    }

    /// Expands every group the current options produce.
    pub fn expand_all(&mut self) {
        let tree = self.current_tree();
        collect_group_keys(&tree, &mut self.expanded);
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    pub fn expanded_keys(&self) -> &FxHashSet<String> {
        &self.expanded
    }

    pub fn set_expanded_keys(&mut self, keys: impl IntoIterator<Item = String>) {
        self.expanded = keys.into_iter().collect();
    }

    // ========================================================================
    // VIEW PIPELINE
    // ========================================================================

    /// Runs the presentation pipeline and returns the current page of
    /// render rows.
    pub fn build_view(&mut self) -> GridView {
        let tree = self.current_tree();
        self.track_new_groups(&tree);

        let flat = flatten_tree(&tree, &self.expanded, self.options.layout.show_footers);
        let total_count = flat.len();
        let mut pager = self.options.pager;
        let page_count = pager.page_count(total_count);
        // A stale page index past the end snaps to the last page
        pager.page_index = pager.page_index.min(page_count - 1);
        let page_index = pager.page_index;
        let range = pager.range(total_count);

        let rows: Vec<RenderRow> = flat[range]
            .iter()
            .map(|node| self.render_node(node))
            .collect();

        log::debug!(
            "built grid view: {} of {} render rows, page {}/{}",
            rows.len(),
            total_count,
            page_index + 1,
            page_count
        );

        GridView {
            rows,
            total_count,
            page_count,
            page_index,
        }
    }

    /// Filter, sort, group. Node row ids always index `self.rows`.
    fn current_tree(&self) -> Vec<GridNode> {
        let visible = apply_filters(&self.rows, &self.options.filters);
        let ordered = sort_ids(&self.rows, &visible, &self.options.sort);
        build_group_tree_for(
            &self.rows,
            &ordered,
            &self.options.group_by,
            &self.options.aggregates,
        )
    }

    /// Registers group keys seen for the first time, expanding them when
    /// the layout asks for it.
    fn track_new_groups(&mut self, tree: &[GridNode]) {
        let mut keys = FxHashSet::default();
        collect_group_keys(tree, &mut keys);
        for key in keys {
            if self.seen_groups.insert(key.clone()) && self.options.layout.expand_new_groups {
                self.expanded.insert(key);
            }
        }
    }

    fn render_node(&self, node: &GridNode) -> RenderRow {
        match node {
            GridNode::Group {
                key,
                level,
                field,
                value,
                member_rows,
                aggregates,
                ..
            } => RenderRow {
                key: key.clone(),
                kind: RenderRowKind::GroupHeader,
                level: *level,
                field: Some(field.clone()),
                value: Some(value.clone()),
                aggregates: Some(aggregates.clone()),
                row: None,
                expanded: self.expanded.contains(key),
                member_count: member_rows.len(),
                selected: false,
            },
            GridNode::Row { key, level, row } => RenderRow {
                key: key.clone(),
                kind: RenderRowKind::Detail,
                level: *level,
                field: None,
                value: None,
                aggregates: None,
                row: Some(*row),
                expanded: false,
                member_count: 0,
                selected: self.selection.is_selected(*row),
            },
            GridNode::Footer {
                key,
                level,
                field,
                value,
                aggregates,
            } => RenderRow {
                key: key.clone(),
                kind: RenderRowKind::GroupFooter,
                level: *level,
                field: Some(field.clone()),
                value: Some(value.clone()),
                aggregates: Some(aggregates.clone()),
                row: None,
                expanded: false,
                member_count: aggregates.get("count").copied().unwrap_or(0.0) as usize,
                selected: false,
            },
        }
    }
}

fn collect_group_keys(nodes: &[GridNode], keys: &mut FxHashSet<String>) {
    for node in nodes {
        if let GridNode::Group { key, children, .. } = node {
            keys.insert(key.clone());
            collect_group_keys(children, keys);
        }
    }
}

//! FILENAME: group-engine/src/flatten.rs
//! Tree Flattener - projects the group tree onto the linear sequence a
//! viewport scrolls through, honouring per-group expand/collapse state.
//!
//! Rules:
//! - A group node is always emitted. If its key is expanded, its subtree
//!   follows, then its footer (when footers are on). Collapsed groups
//!   suppress both.
//! - Leaf rows are always emitted.
//! - Footers are never emitted by the outer walk; the owning group emits
//!   its own footer by peeking at the next sibling.
//!
//! The flattener borrows the tree. Collapse/expand changes re-run the
//! flatten only, never the build.

use rustc_hash::FxHashSet;

use crate::node::GridNode;

/// Flattens `nodes` into display order as references into the tree.
pub fn flatten_tree<'a>(
    nodes: &'a [GridNode],
    expanded_keys: &FxHashSet<String>,
    show_footers: bool,
) -> Vec<&'a GridNode> {
    let mut out = Vec::new();
    flatten_into(nodes, expanded_keys, show_footers, &mut out);
    out
}

fn flatten_into<'a>(
    nodes: &'a [GridNode],
    expanded_keys: &FxHashSet<String>,
    show_footers: bool,
    out: &mut Vec<&'a GridNode>,
) {
    for (i, node) in nodes.iter().enumerate() {
        match node {
            GridNode::Group { key, children, .. } => {
                out.push(node);
                if expanded_keys.contains(key) {
                    flatten_into(children, expanded_keys, show_footers, out);
                    if show_footers {
                        if let Some(footer @ GridNode::Footer { .. }) = nodes.get(i + 1) {
                            out.push(footer);
                        }
                    }
                }
            }
            GridNode::Row { .. } => out.push(node),
            // Emitted by the preceding group when expanded
            GridNode::Footer { .. } => {}
        }
    }
}

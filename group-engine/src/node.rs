//! FILENAME: group-engine/src/node.rs
//! The group-tree node type and key derivation.
//!
//! `GridNode` is a closed sum with exactly three kinds: group headers,
//! leaf rows, and group footers. The flattener matches on it exhaustively,
//! so adding a kind is a compile-time-checked change across the engine.
//!
//! Key stability: a group key is derived from its field and value only,
//! so it is identical across rebuilds with unchanged input - this is what
//! lets the caller's expand/collapse set survive a data refresh. Leaf keys
//! only need to be unique among siblings.

use serde::{Deserialize, Serialize};

use grid_core::{RowId, Value};

use crate::aggregate::Aggregates;

/// A node of the group tree, and equally an element of the flattened
/// render sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GridNode {
    /// A group header: one distinct value of the level's group-by field.
    Group {
        key: String,
        level: usize,
        field: String,
        value: Value,
        /// The full bucket, as ids into the caller's row slice.
        member_rows: Vec<RowId>,
        aggregates: Aggregates,
        children: Vec<GridNode>,
    },
    /// A leaf row wrapping one original row.
    Row {
        key: String,
        level: usize,
        row: RowId,
    },
    /// Summarizes the same bucket as the group node immediately before it.
    Footer {
        key: String,
        level: usize,
        field: String,
        value: Value,
        aggregates: Aggregates,
    },
}

impl GridNode {
    pub fn key(&self) -> &str {
        match self {
            GridNode::Group { key, .. }
            | GridNode::Row { key, .. }
            | GridNode::Footer { key, .. } => key,
        }
    }

    pub fn level(&self) -> usize {
        match self {
            GridNode::Group { level, .. }
            | GridNode::Row { level, .. }
            | GridNode::Footer { level, .. } => *level,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, GridNode::Group { .. })
    }

    pub fn is_row(&self) -> bool {
        matches!(self, GridNode::Row { .. })
    }

    pub fn is_footer(&self) -> bool {
        matches!(self, GridNode::Footer { .. })
    }
}

/// Stable key for a group node: field plus the bucket value's canonical
/// string. Unique within a sibling set because sibling buckets are
/// distinct values of one field.
pub fn group_key(field: &str, value: &Value) -> String {
    format!("{}:{}", field, value.key_string())
}

/// Key for the footer paired with a group key.
pub fn footer_key(group_key: &str) -> String {
    format!("footer:{}", group_key)
}

/// Key for a leaf row: level, enclosing group value (when inside one) and
/// sibling index. The group value disambiguates siblings across groups
/// that happen to share row content; stability across reorderings is not
/// required.
pub fn leaf_key(level: usize, group_value: Option<&Value>, index: usize) -> String {
    match group_value {
        Some(value) => format!("row:{}:{}:{}", level, value.key_string(), index),
        None => format!("row:{}:{}", level, index),
    }
}

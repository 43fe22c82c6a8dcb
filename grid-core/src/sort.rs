//! FILENAME: grid-core/src/sort.rs
//! Multi-key row sorting applied upstream of the grouping engine.
//!
//! Sorting never moves the rows themselves; it produces an
//! ordered list of row ids into the caller's slice. The sort is stable, so
//! rows comparing equal on every key keep their input order.

use serde::{Deserialize, Serialize};

use crate::record::{Record, RowId};

/// Direction for sorting and for group-key ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Ascending
    }
}

/// One sort key: a field and a direction. Earlier descriptors win.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDescriptor {
    pub field: String,
    pub direction: SortDirection,
}

impl SortDescriptor {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        SortDescriptor {
            field: field.into(),
            direction,
        }
    }

    pub fn ascending(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Descending)
    }
}

/// Sorts a subset of rows (given as ids) by the descriptor list.
/// Returns a newly ordered id list; `rows` is untouched.
pub fn sort_ids(rows: &[Record], ids: &[RowId], descriptors: &[SortDescriptor]) -> Vec<RowId> {
    let mut sorted: Vec<RowId> = ids.to_vec();
    if descriptors.is_empty() {
        return sorted;
    }

    sorted.sort_by(|&a, &b| {
        for descriptor in descriptors {
            let va = rows[a as usize].get(&descriptor.field);
            let vb = rows[b as usize].get(&descriptor.field);
            let ordering = match descriptor.direction {
                SortDirection::Ascending => va.cmp(vb),
                SortDirection::Descending => vb.cmp(va),
            };
            if ordering != std::cmp::Ordering::Equal {
                return ordering;
            }
        }
        std::cmp::Ordering::Equal
    });

    sorted
}

/// Sorts all rows of a slice. See `sort_ids`.
pub fn sort_rows(rows: &[Record], descriptors: &[SortDescriptor]) -> Vec<RowId> {
    let ids: Vec<RowId> = (0..rows.len() as RowId).collect();
    sort_ids(rows, &ids, descriptors)
}

//! FILENAME: grid-core/src/page.rs
//! Pagination arithmetic for the render sequence.
//!
//! The widget pages the flattened render rows, not the raw data rows, so
//! groups are never split across page boundaries mid-subtree. A page size
//! of 0 means paging is off and everything is one page.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Current page position and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pager {
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        // Paging off by default
        Pager {
            page_index: 0,
            page_size: 0,
        }
    }
}

impl Pager {
    pub fn new(page_index: usize, page_size: usize) -> Self {
        Pager {
            page_index,
            page_size,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.page_size > 0
    }

    /// Number of pages for `total` items, never less than 1.
    pub fn page_count(&self, total: usize) -> usize {
        if self.page_size == 0 {
            return 1;
        }
        total.div_ceil(self.page_size).max(1)
    }

    /// Item range of the current page, clamped to `total`. A page index
    /// past the end yields an empty range at the end.
    pub fn range(&self, total: usize) -> Range<usize> {
        if self.page_size == 0 {
            return 0..total;
        }
        let start = (self.page_index * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }
}

//! FILENAME: grid-core/src/lib.rs
//! Shared data model for the grid widget.
//!
//! This crate holds everything upstream of the grouping engine: the
//! dynamic value type, schema-less records, and the row-level features
//! (sorting, filtering, pagination, selection). It deliberately knows
//! nothing about grouping or rendering.
//!
//! Layers:
//! - `value` / `record`: the schema-less data model
//! - `sort` / `filter`: produce ordered/visible row-id lists
//! - `page`: window arithmetic over the render sequence
//! - `selection`: row selection state

pub mod filter;
pub mod page;
pub mod record;
pub mod selection;
pub mod sort;
pub mod value;

pub use filter::{apply_filters, row_visible, ColumnFilter, ComparisonOperator, FilterCondition, TextOperator};
pub use page::Pager;
pub use record::{Record, RowId};
pub use selection::SelectionModel;
pub use sort::{sort_ids, sort_rows, SortDescriptor, SortDirection};
pub use value::{OrderedF64, Value};

//! FILENAME: grid-widget/src/lib.rs
//! Grid widget backend - the stateful presentation model.
//!
//! This crate ties `grid-core` and `group-engine` together into the model
//! a data-grid frontend drives: it owns the rows and the presentation
//! options, runs the filter/sort/group/flatten/paginate pipeline, and
//! exposes the result as self-contained render rows.
//!
//! Layers:
//! - `definition`: Serializable configuration (what the grid view IS)
//! - `state`: Mutable widget model and the view pipeline (HOW we compute)
//! - `view`: Renderable output for the frontend (WHAT we display)
//! - `persist`: View-state snapshots for saving/restoring sessions

pub mod definition;
pub mod persist;
pub mod state;
pub mod view;

pub use definition::{GridLayout, GridOptions};
pub use persist::{SnapshotError, ViewState};
pub use state::GridState;
pub use view::{GridView, RenderRow, RenderRowKind};

//! FILENAME: group-engine/src/lib.rs
//! Row grouping subsystem for the data grid.
//!
//! This crate turns a flat row set into a hierarchical group tree with
//! per-group aggregates, then projects the tree onto the linear row
//! sequence a viewport renders. It depends on `grid-core` only for shared
//! types (Value, Record, SortDirection).
//!
//! Layers:
//! - `descriptor`: Serializable configuration (what the grouping IS)
//! - `node`: Tree node representation and key derivation
//! - `aggregate`: Per-bucket aggregate computation
//! - `builder`: Tree construction (HOW we compute)
//! - `flatten`: Display-order projection (WHAT we display)

pub mod aggregate;
pub mod builder;
pub mod descriptor;
pub mod flatten;
pub mod node;

pub use aggregate::{compute_aggregates, Aggregates};
pub use builder::{build_group_tree, build_group_tree_for};
pub use descriptor::{AggregateKind, AggregateKinds, AggregateSpec, GroupDescriptor};
pub use flatten::flatten_tree;
pub use node::{footer_key, group_key, leaf_key, GridNode};

//! FILENAME: group-engine/src/descriptor.rs
//! Grouping configuration - the serializable description of what to group
//! and what to aggregate.
//!
//! An ordered list of `GroupDescriptor`s defines the nesting depth and
//! order of the tree; an `AggregateSpec` names, per field, which aggregate
//! kinds to compute at every group level.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use grid_core::SortDirection;

/// One level of grouping: the field to bucket on and the order its
/// distinct keys appear in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDescriptor {
    pub field: String,
    #[serde(default)]
    pub direction: SortDirection,
}

impl GroupDescriptor {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        GroupDescriptor {
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

/// Supported aggregate functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateKind {
    Sum,
    Avg,
    Min,
    Max,
    Count,
}

impl AggregateKind {
    /// Wire name, used as the suffix of aggregate-result keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregateKind::Sum => "sum",
            AggregateKind::Avg => "avg",
            AggregateKind::Min => "min",
            AggregateKind::Max => "max",
            AggregateKind::Count => "count",
        }
    }
}

/// The per-field kind lists; most fields request only a handful.
pub type AggregateKinds = SmallVec<[AggregateKind; 4]>;

/// Mapping of field name → aggregate kinds to compute for that field.
/// Applies uniformly at every group level. Fields absent from the spec
/// contribute no aggregate keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateSpec {
    fields: FxHashMap<String, AggregateKinds>,
}

impl AggregateSpec {
    pub fn new() -> Self {
        AggregateSpec::default()
    }

    /// Builder-style registration of a field's aggregate kinds.
    pub fn with_field(
        mut self,
        field: impl Into<String>,
        kinds: impl IntoIterator<Item = AggregateKind>,
    ) -> Self {
        self.fields.insert(field.into(), kinds.into_iter().collect());
        self
    }

    pub fn kinds_for(&self, field: &str) -> Option<&[AggregateKind]> {
        self.fields.get(field).map(|k| k.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[AggregateKind])> {
        self.fields.iter().map(|(f, k)| (f.as_str(), k.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

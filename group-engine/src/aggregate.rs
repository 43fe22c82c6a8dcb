//! FILENAME: group-engine/src/aggregate.rs
//! The aggregate function table.
//!
//! Aggregates for a group are always computed over the group's full flat
//! bucket, never derived from child aggregates. For each requested field,
//! the bucket's values are filtered to exclude `Value::Empty` (null rows),
//! coerced to numbers, and fed through a single-pass accumulator.
//!
//! Empty-input policy: `sum`, `avg`, `min` and `max` all yield `0` when
//! the filtered value list is empty. The `0` sentinel for min/max is
//! observable in rendered footers and is kept deliberately.

use rustc_hash::FxHashMap;

use grid_core::{Record, RowId};

use crate::descriptor::{AggregateKind, AggregateSpec};

/// Computed aggregate results, keyed `"<field>:<kind>"`. The `"count"`
/// key is always present and carries the bucket's full row count.
pub type Aggregates = FxHashMap<String, f64>;

/// Single-pass accumulator over one field's filtered value list.
#[derive(Debug, Clone, Copy)]
struct AggregateAccumulator {
    sum: f64,
    count: u64,
    min: Option<f64>,
    max: Option<f64>,
}

impl AggregateAccumulator {
    fn new() -> Self {
        AggregateAccumulator {
            sum: 0.0,
            count: 0,
            min: None,
            max: None,
        }
    }

    fn add(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = Some(self.max.map_or(value, |m| m.max(value)));
    }

    fn compute(&self, kind: AggregateKind) -> f64 {
        match kind {
            AggregateKind::Sum => self.sum,
            AggregateKind::Avg => {
                if self.count > 0 {
                    self.sum / (self.count as f64)
                } else {
                    0.0
                }
            }
            AggregateKind::Min => self.min.unwrap_or(0.0),
            AggregateKind::Max => self.max.unwrap_or(0.0),
            AggregateKind::Count => self.count as f64,
        }
    }
}

/// Computes every requested aggregate over the given bucket (`ids` into
/// `rows`) and adds the bucket-level `"count"` key.
pub fn compute_aggregates(rows: &[Record], ids: &[RowId], spec: &AggregateSpec) -> Aggregates {
    let mut out = Aggregates::default();

    for (field, kinds) in spec.iter() {
        let mut acc = AggregateAccumulator::new();
        for &id in ids {
            let value = rows[id as usize].get(field);
            if value.is_empty() {
                continue;
            }
            acc.add(value.coerce_number());
        }
        for kind in kinds {
            out.insert(format!("{}:{}", field, kind.as_str()), acc.compute(*kind));
        }
    }

    out.insert("count".to_string(), ids.len() as f64);
    out
}

//! FILENAME: grid-core/src/value.rs
//! The dynamic field value carried by grid records.
//!
//! Rows are schema-less; every field resolves to a `Value`. The
//! grouping engine buckets on these (hence the Eq/Hash requirements) and
//! orders them with a single total order, so `Value` is designed to be a
//! well-behaved map key as well as a sort key.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Wrapper around f64 that implements Eq and Hash for use as bucket keys.
/// NaN values are treated as equal to each other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrderedF64(pub f64);

impl OrderedF64 {
    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

impl PartialEq for OrderedF64 {
    fn eq(&self, other: &Self) -> bool {
        if self.0.is_nan() && other.0.is_nan() {
            true
        } else {
            self.0 == other.0
        }
    }
}

impl Eq for OrderedF64 {}

impl std::hash::Hash for OrderedF64 {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        if self.0.is_nan() {
            // All NaN values hash to the same thing
            u64::MAX.hash(state);
        } else {
            self.0.to_bits().hash(state);
        }
    }
}

/// A dynamically typed value within a grid record.
///
/// Dates are carried as serial numbers by the caller, so "date ordering"
/// is numeric ordering here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    Empty,
    Number(OrderedF64),
    Text(String),
    Bool(bool),
}

impl Value {
    pub fn number(n: f64) -> Self {
        Value::Number(OrderedF64(n))
    }

    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    /// Returns the numeric content, if this value is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.0),
            _ => None,
        }
    }

    /// Permissive numeric coercion used by the aggregate table: numbers
    /// pass through, booleans map to 1/0, text parses or yields 0, and
    /// anything NaN-like collapses to 0 so sums never poison.
    pub fn coerce_number(&self) -> f64 {
        let n = match self {
            Value::Empty => 0.0,
            Value::Number(n) => n.0,
            Value::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        };
        if n.is_nan() {
            0.0
        } else {
            n
        }
    }

    /// Canonical string rendering, used in group keys and display labels.
    pub fn key_string(&self) -> String {
        match self {
            Value::Empty => "(blank)".to_string(),
            Value::Number(n) => format!("{}", n.0),
            Value::Text(s) => s.clone(),
            Value::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key_string())
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    /// Total order across variants: Empty < Number < Text < Bool,
    /// with the natural order within each variant.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Empty, Value::Empty) => Ordering::Equal,
            (Value::Empty, _) => Ordering::Less,
            (_, Value::Empty) => Ordering::Greater,

            (Value::Number(na), Value::Number(nb)) => {
                na.0.partial_cmp(&nb.0).unwrap_or(Ordering::Equal)
            }
            (Value::Number(_), _) => Ordering::Less,
            (_, Value::Number(_)) => Ordering::Greater,

            (Value::Text(ta), Value::Text(tb)) => ta.cmp(tb),
            (Value::Text(_), _) => Ordering::Less,
            (_, Value::Text(_)) => Ordering::Greater,

            (Value::Bool(ba), Value::Bool(bb)) => ba.cmp(bb),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::text(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

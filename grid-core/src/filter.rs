//! FILENAME: grid-core/src/filter.rs
//! Per-column row filtering applied upstream of the grouping engine.
//!
//! A row is visible when it satisfies every active column filter.
//! Filtering preserves input order; like sorting it returns row ids into
//! the caller's slice rather than moving rows.

use serde::{Deserialize, Serialize};

use crate::record::{Record, RowId};
use crate::value::Value;

/// Comparison operators for number filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOperator {
    Equals,
    NotEquals,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Between,
    NotBetween,
}

/// Text filter operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextOperator {
    Equals,
    NotEquals,
    Contains,
    NotContains,
    BeginsWith,
    EndsWith,
}

/// The condition a field value must satisfy for its row to stay visible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterCondition {
    /// Include only these specific values.
    ValueList(Vec<Value>),

    /// Comparison filter for numbers. Rows whose value is not numeric
    /// fail the condition.
    NumberFilter {
        operator: ComparisonOperator,
        value: f64,
        /// Second bound for Between/NotBetween.
        value2: Option<f64>,
    },

    /// Text-based filter, matched against the value's string rendering.
    TextFilter {
        operator: TextOperator,
        value: String,
        case_sensitive: bool,
    },

    /// Keep only rows where the field carries any value at all.
    NotBlank,
}

/// A filter bound to one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnFilter {
    pub field: String,
    pub condition: FilterCondition,
}

impl ColumnFilter {
    pub fn new(field: impl Into<String>, condition: FilterCondition) -> Self {
        ColumnFilter {
            field: field.into(),
            condition,
        }
    }
}

/// Returns the ids of rows satisfying every filter, in input order.
pub fn apply_filters(rows: &[Record], filters: &[ColumnFilter]) -> Vec<RowId> {
    (0..rows.len() as RowId)
        .filter(|&id| row_visible(&rows[id as usize], filters))
        .collect()
}

/// Checks a single row against the active filter set.
pub fn row_visible(record: &Record, filters: &[ColumnFilter]) -> bool {
    filters
        .iter()
        .all(|f| matches_condition(record.get(&f.field), &f.condition))
}

fn matches_condition(value: &Value, condition: &FilterCondition) -> bool {
    match condition {
        FilterCondition::ValueList(allowed) => allowed.contains(value),

        FilterCondition::NumberFilter {
            operator,
            value: bound,
            value2,
        } => {
            let n = match value.as_number() {
                Some(n) => n,
                None => return false,
            };
            match operator {
                ComparisonOperator::Equals => n == *bound,
                ComparisonOperator::NotEquals => n != *bound,
                ComparisonOperator::GreaterThan => n > *bound,
                ComparisonOperator::GreaterThanOrEqual => n >= *bound,
                ComparisonOperator::LessThan => n < *bound,
                ComparisonOperator::LessThanOrEqual => n <= *bound,
                ComparisonOperator::Between => {
                    let hi = value2.unwrap_or(*bound);
                    n >= *bound && n <= hi
                }
                ComparisonOperator::NotBetween => {
                    let hi = value2.unwrap_or(*bound);
                    n < *bound || n > hi
                }
            }
        }

        FilterCondition::TextFilter {
            operator,
            value: pattern,
            case_sensitive,
        } => {
            let mut haystack = value.key_string();
            let mut needle = pattern.clone();
            if !case_sensitive {
                haystack = haystack.to_lowercase();
                needle = needle.to_lowercase();
            }
            match operator {
                TextOperator::Equals => haystack == needle,
                TextOperator::NotEquals => haystack != needle,
                TextOperator::Contains => haystack.contains(&needle),
                TextOperator::NotContains => !haystack.contains(&needle),
                TextOperator::BeginsWith => haystack.starts_with(&needle),
                TextOperator::EndsWith => haystack.ends_with(&needle),
            }
        }

        FilterCondition::NotBlank => !value.is_empty(),
    }
}

//! FILENAME: grid-core/src/record.rs
//! Schema-less row records and the row identifier type.
//!
//! The grid imposes no schema on its data source. A record is an
//! opaque field-name → value accessor; fields named by group descriptors,
//! sort descriptors, or aggregate specs are resolved through `get`, which
//! yields `Value::Empty` for anything the record does not carry.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Index of a row within the caller-supplied row slice (0-based).
/// Tree nodes and selection reference rows by id rather than by clone.
pub type RowId = u32;

static EMPTY: Value = Value::Empty;

/// A single schema-less row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    fields: FxHashMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Record {
            fields: FxHashMap::default(),
        }
    }

    /// Builder-style field assignment, convenient for fixtures.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Resolves a field by name. Absent fields read as `Value::Empty`.
    pub fn get(&self, field: &str) -> &Value {
        self.fields.get(field).unwrap_or(&EMPTY)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Record {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_field_reads_empty() {
        let record = Record::new().with_field("region", "North");
        assert_eq!(record.get("region"), &Value::text("North"));
        assert_eq!(record.get("missing"), &Value::Empty);
    }

    #[test]
    fn test_set_overwrites() {
        let mut record = Record::new();
        record.set("sales", 10.0);
        record.set("sales", 20.0);
        assert_eq!(record.get("sales").as_number(), Some(20.0));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_serde_round_trip() {
        let record = Record::new()
            .with_field("region", "North")
            .with_field("sales", 100.0);
        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}

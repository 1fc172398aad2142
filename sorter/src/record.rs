use serde::{Deserialize, Serialize};

use crate::core::types::{ColumnKey, FieldValue};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

impl Record {
    pub fn new(id: i64, name: impl Into<String>, age: i64) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }

    /// Typed value of the cell under `column`.
    pub fn field(&self, column: ColumnKey) -> FieldValue<'_> {
        match column {
            ColumnKey::Id => FieldValue::Number(self.id),
            ColumnKey::Name => FieldValue::Text(&self.name),
            ColumnKey::Age => FieldValue::Number(self.age),
        }
    }
}

/// Built-in record set used when no records file is configured.
pub fn default_records() -> Vec<Record> {
    vec![
        Record::new(123, "이낙생", 20),
        Record::new(456, "김문기", 40),
        Record::new(789, "나오성", 30),
    ]
}

//! Shared deterministic types for the sorter core.
//!
//! These types define stable contracts between core components. They do not
//! depend on external state or I/O.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a sortable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKey {
    Id,
    Name,
    Age,
}

impl ColumnKey {
    /// Every selectable column, in header order.
    pub const ALL: [ColumnKey; 3] = [ColumnKey::Id, ColumnKey::Name, ColumnKey::Age];

    pub fn as_str(self) -> &'static str {
        match self {
            ColumnKey::Id => "id",
            ColumnKey::Name => "name",
            ColumnKey::Age => "age",
        }
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColumnError {
    pub input: String,
}

impl fmt::Display for ParseColumnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown column '{}' (expected one of: id, name, age)",
            self.input
        )
    }
}

impl std::error::Error for ParseColumnError {}

impl FromStr for ColumnKey {
    type Err = ParseColumnError;

    /// Exact, case-sensitive match. Unknown keys are an error, never a fallback column.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColumnKey::ALL
            .into_iter()
            .find(|column| column.as_str() == s)
            .ok_or_else(|| ParseColumnError {
                input: s.to_string(),
            })
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// Typed value of a single record cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(i64),
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Number(number) => write!(f, "{number}"),
        }
    }
}

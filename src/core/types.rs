use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Externally inferred semantic tag for a spreadsheet column.
///
/// Tags come from an upstream inference step and are treated as ground
/// truth here; coercion never re-derives a column's kind from its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Numeric,
    String,
    Date,
    Boolean,
}

/// Column metadata: display name plus inferred kind, positionally aligned
/// with the cells of each raw row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnType {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ColumnKind,
}

impl ColumnType {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Loosely typed spreadsheet cell.
///
/// Variant order matters for untagged deserialization: any JSON string
/// lands on `Text`, so `Date` is only ever produced natively or by
/// coercion, never while parsing an input payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Date(DateTime<Utc>),
}

impl CellValue {
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Numeric payload, if this cell holds one.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

/// Tabular payload handed to preparation: header names, optional column
/// tags, and positionally aligned raw rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSample {
    pub headers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_types: Option<Vec<ColumnType>>,
    pub rows: Vec<Vec<CellValue>>,
}

impl DataSample {
    #[must_use]
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            headers,
            column_types: None,
            rows,
        }
    }

    /// Attaches externally inferred column tags; their presence selects
    /// the tag-driven coercion path during preparation.
    #[must_use]
    pub fn with_column_types(mut self, column_types: Vec<ColumnType>) -> Self {
        self.column_types = Some(column_types);
        self
    }
}

/// One coerced row keyed by column name. Rebuilt wholesale on every
/// preparation call, never patched in place.
pub type ProcessedRow = IndexMap<String, CellValue>;

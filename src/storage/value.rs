//! Value and row types for FlatDB
//!
//! This module defines how typed cell values are represented in memory
//! and in the JSON artifacts.

use crate::catalog::DataType;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A row: column name → value, in schema column order
pub type Row = IndexMap<String, Value>;

/// A cell value in the store
///
/// Serializes as a bare JSON scalar; the three JSON shapes are disjoint,
/// so the untagged representation round-trips losslessly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// String value
    Str(String),
}

impl Value {
    /// Get the declared type this value carries
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Bool(_) => DataType::Bool,
            Value::Int(_) => DataType::Int,
            Value::Str(_) => DataType::Str,
        }
    }

    /// Check this value against a column's declared type.
    ///
    /// Matching is tag-exact: `Str("1")` never passes an `int` column.
    pub fn check_type(&self, column: &str, expected: DataType) -> Result<()> {
        if self.data_type() == expected {
            return Ok(());
        }
        Err(Error::TypeMismatch {
            column: column.to_string(),
            expected: expected.to_string(),
            found: format!("{} {}", self.data_type(), self.display_literal()),
        })
    }

    /// Render the value as a command-grammar literal (strings quoted)
    pub fn display_literal(&self) -> String {
        match self {
            Value::Str(s) => format!("\"{}\"", s),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Str(s) => write!(f, "{}", s),
        }
    }
}

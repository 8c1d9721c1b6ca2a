//! Column types for FlatDB
//!
//! This module defines the three column types supported by the store.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column data types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// 64-bit signed integer
    Int,
    /// UTF-8 string
    Str,
    /// Boolean
    Bool,
}

impl DataType {
    /// Parse a type name as written in a column declaration.
    ///
    /// Accepts the long aliases the original grammar tolerated
    /// (`integer`, `string`, `boolean`); comparison is case-insensitive.
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "int" | "integer" => Ok(DataType::Int),
            "str" | "string" => Ok(DataType::Str),
            "bool" | "boolean" => Ok(DataType::Bool),
            other => Err(Error::UnknownType(other.to_string())),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Int => write!(f, "int"),
            DataType::Str => write!(f, "str"),
            DataType::Bool => write!(f, "bool"),
        }
    }
}

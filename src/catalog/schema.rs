//! Schema definitions for FlatDB
//!
//! This module defines table schemas and column metadata.

use super::types::DataType;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Name of the auto-assigned primary column. Reserved: callers may never
/// declare, supply, or update it.
pub const ID_COLUMN: &str = "ID";

/// Column definition in a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name
    pub name: String,
    /// Column type
    #[serde(rename = "type")]
    pub data_type: DataType,
}

impl Column {
    /// Create a new column
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// Table schema - ordered columns plus the auto-increment counter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Ordered list of columns; the first is always `ID:int`
    columns: Vec<Column>,
    /// Next value handed out for `ID`; monotonic, never reused
    next_id: u64,
}

impl TableSchema {
    /// Build a schema from caller-declared columns.
    ///
    /// Prepends `ID:int` and starts `next_id` at 1. Fails if a column is
    /// named `ID` (any case) or two columns share a name case-insensitively.
    pub fn new(declared: Vec<Column>) -> Result<Self> {
        let mut seen: Vec<String> = vec![ID_COLUMN.to_ascii_lowercase()];
        for col in &declared {
            let lower = col.name.to_ascii_lowercase();
            if lower == ID_COLUMN.to_ascii_lowercase() {
                return Err(Error::ReservedColumn(col.name.clone()));
            }
            if seen.contains(&lower) {
                return Err(Error::DuplicateColumn(col.name.clone()));
            }
            seen.push(lower);
        }

        let mut columns = Vec::with_capacity(declared.len() + 1);
        columns.push(Column::new(ID_COLUMN, DataType::Int));
        columns.extend(declared);

        Ok(Self {
            columns,
            next_id: 1,
        })
    }

    /// Get all columns, `ID` first
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get the columns the caller supplies on insert (everything but `ID`)
    pub fn data_columns(&self) -> &[Column] {
        &self.columns[1..]
    }

    /// Get a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Check if a column exists
    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Get column names in declared order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Peek at the next `ID` without consuming it
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Hand out the next `ID` and advance the counter
    pub fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

//! Command AST
//!
//! This module defines the parsed form of each command.

use crate::catalog::Column;
use crate::storage::Value;
use std::fmt;

/// A parsed command line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `create <table> <col:type>+`
    Create { table: String, columns: Vec<Column> },
    /// `show tables`
    ShowTables,
    /// `describe <table>`
    Describe { table: String },
    /// `drop <table>`
    Drop { table: String },
    /// `insert into <table> values (...)`
    Insert { table: String, values: Vec<Value> },
    /// `select from <table> [where ...]`
    Select {
        table: String,
        condition: Option<Condition>,
    },
    /// `update <table> set ... [where ...]`
    Update {
        table: String,
        assignments: Vec<Assignment>,
        condition: Option<Condition>,
    },
    /// `delete from <table> [where ...]`
    Delete {
        table: String,
        condition: Option<Condition>,
    },
    /// `info <table>`
    Info { table: String },
    /// `help`
    Help,
    /// `exit` / `quit`
    Exit,
}

/// A single equality test on one column
///
/// The column is raw text here; it is checked against the target table's
/// schema by the engine, not the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// Column name
    pub column: String,
    /// Value the column must equal (tag-exact)
    pub value: Value,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.column, self.value.display_literal())
    }
}

/// A single `column = value` assignment from a SET clause
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Column name
    pub column: String,
    /// New value
    pub value: Value,
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.column, self.value.display_literal())
    }
}

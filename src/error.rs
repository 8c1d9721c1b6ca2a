//! Error types for FlatDB
//!
//! This module defines all error types used throughout the store.

use thiserror::Error;

/// The main error type for FlatDB
#[derive(Error, Debug)]
pub enum Error {
    // ========== Lexer Errors ==========
    #[error("Parse error: unexpected character '{0}' at position {1}")]
    UnexpectedCharacter(char, usize),

    #[error("Parse error: unterminated string literal starting at position {0}")]
    UnterminatedString(usize),

    #[error("Parse error: invalid number format at position {0}")]
    InvalidNumber(usize),

    // ========== Parser Errors ==========
    #[error("Parse error: unexpected token '{found}', expected {expected}")]
    UnexpectedToken { expected: String, found: String },

    #[error("Parse error: {0}")]
    Parse(String),

    // ========== Catalog Errors ==========
    #[error("Catalog error: table '{0}' not found")]
    TableNotFound(String),

    #[error("Catalog error: table '{0}' already exists")]
    TableAlreadyExists(String),

    #[error("Catalog error: column '{0}' not found in table '{1}'")]
    ColumnNotFound(String, String),

    #[error("Catalog error: duplicate column name '{0}'")]
    DuplicateColumn(String),

    #[error("Catalog error: column name '{0}' is reserved")]
    ReservedColumn(String),

    #[error("Catalog error: unsupported type '{0}' (only int, str, bool)")]
    UnknownType(String),

    // ========== Validation Errors ==========
    #[error("Validation error: column '{column}' expects {expected}, got {found}")]
    TypeMismatch {
        column: String,
        expected: String,
        found: String,
    },

    #[error("Validation error: expected {expected} value(s), got {found}")]
    ArityMismatch { expected: usize, found: usize },

    #[error("Validation error: column '{0}' is immutable")]
    ImmutableColumn(String),

    // ========== Storage Errors ==========
    #[error("Storage error: data artifact for table '{0}' is missing")]
    MissingData(String),

    #[error("Storage error: artifact '{0}' is corrupted: {1}")]
    Corrupted(String, String),

    // ========== I/O Errors ==========
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    // ========== Internal Errors ==========
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for FlatDB operations
pub type Result<T> = std::result::Result<T, Error>;

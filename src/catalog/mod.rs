//! Catalog module
//!
//! This module contains the column type model, table schemas, and the
//! metadata store that persists them.

pub mod metadata;
pub mod schema;
pub mod types;

pub use metadata::MetadataStore;
pub use schema::{Column, TableSchema, ID_COLUMN};
pub use types::DataType;

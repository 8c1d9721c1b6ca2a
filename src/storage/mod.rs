//! Storage module
//!
//! This module contains the typed value model and the per-table data store.

pub mod data;
pub mod value;

pub use data::DataStore;
pub use value::{Row, Value};

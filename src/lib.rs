//! FlatDB - A file-backed tabular data store
//!
//! This library provides the core components for a small table engine:
//! - Command parsing (lexer, parser, AST)
//! - Catalog (column types, schemas, metadata persistence)
//! - Row storage (typed values, per-table JSON artifacts)
//! - CRUD engine with a select-result cache
//! - Session layer (confirmation gating, timing)

pub mod catalog;
pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod storage;

pub use error::{Error, Result};

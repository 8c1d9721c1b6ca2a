//! Engine module
//!
//! This module contains the CRUD engine, the select-result cache, and the
//! session layer that applies the cross-cutting policies (confirmation
//! gating, timing) around engine calls.

pub mod cache;
pub mod engine;
pub mod session;

pub use cache::ResultCache;
pub use engine::{Database, InsertResult, TableInfo};
pub use session::{AlwaysConfirm, ConfirmPolicy, NeverConfirm, Outcome, Session};

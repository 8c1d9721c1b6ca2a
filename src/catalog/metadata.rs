//! Metadata store for FlatDB
//!
//! Persists the table-name → schema mapping as one JSON artifact,
//! rewritten whole on every change.

use super::schema::TableSchema;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Serializable proxy for the metadata artifact
#[derive(serde::Serialize, serde::Deserialize, Default)]
struct MetadataFile {
    tables: IndexMap<String, TableSchema>,
}

/// Metadata store - loads and rewrites the schema mapping
#[derive(Debug, Clone)]
pub struct MetadataStore {
    path: PathBuf,
}

impl MetadataStore {
    /// Create a store backed by the given artifact path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the metadata artifact
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full table-name → schema mapping.
    ///
    /// An absent artifact means an empty store; an unparseable one is
    /// surfaced as `Corrupted`, never silently replaced.
    pub fn load(&self) -> Result<IndexMap<String, TableSchema>> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "metadata artifact absent, starting empty");
                return Ok(IndexMap::new());
            }
            Err(e) => return Err(Error::IoError(e)),
        };

        let file: MetadataFile = serde_json::from_str(&text)
            .map_err(|e| Error::Corrupted(self.path.display().to_string(), e.to_string()))?;
        Ok(file.tables)
    }

    /// Rewrite the whole metadata artifact
    pub fn save(&self, tables: &IndexMap<String, TableSchema>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = MetadataFile {
            tables: tables.clone(),
        };
        let json = serde_json::to_string_pretty(&file).map_err(|e| Error::Internal(e.to_string()))?;
        std::fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), tables = tables.len(), "metadata saved");
        Ok(())
    }

    /// List table names, sorted
    pub fn list_tables(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self.load()?.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    /// Check if a table exists
    pub fn table_exists(&self, name: &str) -> Result<bool> {
        Ok(self.load()?.contains_key(name))
    }
}

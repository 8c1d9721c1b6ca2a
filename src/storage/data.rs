//! Per-table data store for FlatDB
//!
//! One JSON artifact per table holds the ordered row sequence; every
//! mutation rewrites the artifact whole.

use super::value::Row;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Data store - loads and rewrites per-table row artifacts
#[derive(Debug, Clone)]
pub struct DataStore {
    dir: PathBuf,
}

impl DataStore {
    /// Create a store rooted at the given data directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the data artifacts
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, table: &str) -> PathBuf {
        self.dir.join(format!("{}.json", table))
    }

    /// Check whether a table's data artifact exists
    pub fn exists(&self, table: &str) -> bool {
        self.path_for(table).exists()
    }

    /// Load a table's ordered row sequence.
    ///
    /// A missing artifact is `MissingData` — the table was listed in the
    /// metadata, so its absence is an inconsistency, not an empty table.
    pub fn load(&self, table: &str) -> Result<Vec<Row>> {
        let path = self.path_for(table);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::MissingData(table.to_string()));
            }
            Err(e) => return Err(Error::IoError(e)),
        };

        serde_json::from_str(&text)
            .map_err(|e| Error::Corrupted(path.display().to_string(), e.to_string()))
    }

    /// Rewrite a table's data artifact whole
    pub fn save(&self, table: &str, rows: &[Row]) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(rows).map_err(|e| Error::Internal(e.to_string()))?;
        std::fs::write(self.path_for(table), json)?;
        debug!(table, rows = rows.len(), "data artifact saved");
        Ok(())
    }

    /// Remove a table's data artifact.
    ///
    /// An already-absent artifact is the same schema/data inconsistency
    /// `load` reports.
    pub fn delete(&self, table: &str) -> Result<()> {
        match std::fs::remove_file(self.path_for(table)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::MissingData(table.to_string()))
            }
            Err(e) => Err(Error::IoError(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Value;
    use tempfile::TempDir;

    fn row(id: i64, name: &str) -> Row {
        let mut row = Row::new();
        row.insert("ID".to_string(), Value::Int(id));
        row.insert("name".to_string(), Value::Str(name.to_string()));
        row
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = DataStore::new(dir.path().join("data"));

        let rows = vec![row(1, "Alice"), row(2, "Bob")];
        store.save("users", &rows).unwrap();

        let loaded = store.load("users").unwrap();
        assert_eq!(loaded, rows);
        assert!(store.exists("users"));
    }

    #[test]
    fn test_missing_artifact_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = DataStore::new(dir.path().join("data"));

        let result = store.load("ghost");
        assert!(matches!(result, Err(Error::MissingData(t)) if t == "ghost"));

        let result = store.delete("ghost");
        assert!(matches!(result, Err(Error::MissingData(_))));
    }

    #[test]
    fn test_corrupted_artifact_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = DataStore::new(dir.path());
        std::fs::write(dir.path().join("users.json"), "[{]").unwrap();

        let result = store.load("users");
        assert!(matches!(result, Err(Error::Corrupted(_, _))));
    }

    #[test]
    fn test_delete_removes_artifact() {
        let dir = TempDir::new().unwrap();
        let store = DataStore::new(dir.path().join("data"));

        store.save("users", &[]).unwrap();
        assert!(store.exists("users"));

        store.delete("users").unwrap();
        assert!(!store.exists("users"));
    }
}

//! Storage path configuration for FlatDB
//!
//! Paths come from two environment variables with fixed relative defaults.

use std::path::{Path, PathBuf};

/// Environment variable naming the metadata artifact path.
pub const META_ENV: &str = "FLATDB_META";

/// Environment variable naming the directory holding per-table data artifacts.
pub const DATA_ENV: &str = "FLATDB_DATA";

const DEFAULT_META: &str = "storage/metadata.json";
const DEFAULT_DATA: &str = "data";

/// Storage locations for the metadata and data artifacts
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the metadata JSON file
    pub metadata_path: PathBuf,
    /// Directory holding one JSON file per table
    pub data_dir: PathBuf,
}

impl Config {
    /// Build a config from the environment, falling back to the defaults.
    pub fn from_env() -> Self {
        Self {
            metadata_path: std::env::var_os(META_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_META)),
            data_dir: std::env::var_os(DATA_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA)),
        }
    }

    /// Place both artifacts under a single root directory.
    ///
    /// Used by tests to point the store at a temporary directory.
    pub fn under_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            metadata_path: root.join("metadata.json"),
            data_dir: root.join("data"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            metadata_path: PathBuf::from(DEFAULT_META),
            data_dir: PathBuf::from(DEFAULT_DATA),
        }
    }
}

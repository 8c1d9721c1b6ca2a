//! CRUD engine for FlatDB
//!
//! `Database` implements the nine operations against the two injected
//! stores. Every operation reloads persisted state first and rewrites it
//! whole after a successful in-memory mutation; validation always precedes
//! mutation, so a rejected command leaves the artifacts untouched.

use super::cache::ResultCache;
use crate::catalog::{Column, MetadataStore, TableSchema, ID_COLUMN};
use crate::command::{Assignment, Condition};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::storage::{DataStore, Row, Value};
use indexmap::IndexMap;
use tracing::debug;

/// Result of a successful insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertResult {
    /// `ID` assigned to the new row
    pub id: u64,
    /// Row count after the insert
    pub total_rows: usize,
}

/// Result of `info <table>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableInfo {
    /// Ordered schema columns, `ID` first
    pub columns: Vec<Column>,
    /// Current row count
    pub row_count: usize,
    /// Next `ID` to be assigned
    pub next_id: u64,
}

/// The table engine: metadata store + data store + select cache
#[derive(Debug)]
pub struct Database {
    metadata: MetadataStore,
    data: DataStore,
    cache: ResultCache,
}

impl Database {
    /// Create an engine over the configured artifact paths
    pub fn new(config: &Config) -> Self {
        Self::with_stores(
            MetadataStore::new(&config.metadata_path),
            DataStore::new(&config.data_dir),
        )
    }

    /// Create an engine over explicit stores
    pub fn with_stores(metadata: MetadataStore, data: DataStore) -> Self {
        Self {
            metadata,
            data,
            cache: ResultCache::new(),
        }
    }

    /// Create a table: schema with `ID:int` prepended, plus an empty data
    /// artifact
    pub fn create_table(&mut self, table: &str, columns: Vec<Column>) -> Result<()> {
        let mut tables = self.metadata.load()?;
        if tables.contains_key(table) {
            return Err(Error::TableAlreadyExists(table.to_string()));
        }

        let schema = TableSchema::new(columns)?;
        tables.insert(table.to_string(), schema);

        self.data.save(table, &[])?;
        self.metadata.save(&tables)?;
        debug!(table, "table created");
        Ok(())
    }

    /// Drop a table: remove both the schema entry and the data artifact
    pub fn drop_table(&mut self, table: &str) -> Result<()> {
        let mut tables = self.metadata.load()?;
        if tables.shift_remove(table).is_none() {
            return Err(Error::TableNotFound(table.to_string()));
        }

        // Remove the data artifact before committing the metadata so a
        // failure here leaves the previous state fully intact.
        self.data.delete(table)?;
        self.metadata.save(&tables)?;

        self.cache.invalidate_table(table);
        debug!(table, "table dropped");
        Ok(())
    }

    /// List table names, sorted
    pub fn list_tables(&self) -> Result<Vec<String>> {
        self.metadata.list_tables()
    }

    /// Get a table's ordered schema
    pub fn describe(&self, table: &str) -> Result<TableSchema> {
        let tables = self.metadata.load()?;
        Self::require_schema(&tables, table).cloned()
    }

    /// Insert one row; values map 1:1 to the non-`ID` columns in declared
    /// order, and `ID` is assigned from the schema counter
    pub fn insert(&mut self, table: &str, values: Vec<Value>) -> Result<InsertResult> {
        let mut tables = self.metadata.load()?;
        let schema = Self::require_schema(&tables, table)?;

        let data_columns = schema.data_columns();
        if values.len() != data_columns.len() {
            return Err(Error::ArityMismatch {
                expected: data_columns.len(),
                found: values.len(),
            });
        }
        for (column, value) in data_columns.iter().zip(&values) {
            value.check_type(&column.name, column.data_type)?;
        }

        let mut rows = self.data.load(table)?;

        let schema = tables
            .get_mut(table)
            .ok_or_else(|| Error::TableNotFound(table.to_string()))?;
        let id = schema.allocate_id();

        let mut row = Row::new();
        row.insert(ID_COLUMN.to_string(), Value::Int(id as i64));
        for (column, value) in schema.data_columns().iter().zip(values) {
            row.insert(column.name.clone(), value);
        }
        rows.push(row);
        let total_rows = rows.len();

        self.data.save(table, &rows)?;
        self.metadata.save(&tables)?;

        self.cache.invalidate_table(table);
        debug!(table, id, total_rows, "row inserted");
        Ok(InsertResult { id, total_rows })
    }

    /// Select rows in insertion order; no condition means all rows.
    /// Consults and populates the result cache.
    pub fn select(&mut self, table: &str, condition: Option<&Condition>) -> Result<Vec<Row>> {
        let tables = self.metadata.load()?;
        let schema = Self::require_schema(&tables, table)?;
        Self::check_condition(schema, table, condition)?;

        if let Some(rows) = self.cache.get(table, condition) {
            debug!(table, "select served from cache");
            return Ok(rows.clone());
        }

        let rows = self.data.load(table)?;
        let matched: Vec<Row> = rows
            .into_iter()
            .filter(|row| Self::matches(row, condition))
            .collect();

        self.cache.put(table, condition, matched.clone());
        debug!(table, matched = matched.len(), "select computed");
        Ok(matched)
    }

    /// Apply assignments to every matching row; returns the matched count
    pub fn update(
        &mut self,
        table: &str,
        assignments: &[Assignment],
        condition: Option<&Condition>,
    ) -> Result<usize> {
        let tables = self.metadata.load()?;
        let schema = Self::require_schema(&tables, table)?;
        Self::check_condition(schema, table, condition)?;

        for assignment in assignments {
            if assignment.column == ID_COLUMN {
                return Err(Error::ImmutableColumn(ID_COLUMN.to_string()));
            }
            let column = schema.column(&assignment.column).ok_or_else(|| {
                Error::ColumnNotFound(assignment.column.clone(), table.to_string())
            })?;
            assignment
                .value
                .check_type(&column.name, column.data_type)?;
        }

        let mut rows = self.data.load(table)?;
        let mut affected = 0;
        for row in rows.iter_mut() {
            if !Self::matches(row, condition) {
                continue;
            }
            for assignment in assignments {
                row.insert(assignment.column.clone(), assignment.value.clone());
            }
            affected += 1;
        }

        self.data.save(table, &rows)?;
        self.cache.invalidate_table(table);
        debug!(table, affected, "rows updated");
        Ok(affected)
    }

    /// Remove every matching row; returns the removed count. `next_id` is
    /// untouched, so dropped IDs are never reissued.
    pub fn delete(&mut self, table: &str, condition: Option<&Condition>) -> Result<usize> {
        let tables = self.metadata.load()?;
        let schema = Self::require_schema(&tables, table)?;
        Self::check_condition(schema, table, condition)?;

        let mut rows = self.data.load(table)?;
        let before = rows.len();
        rows.retain(|row| !Self::matches(row, condition));
        let affected = before - rows.len();

        self.data.save(table, &rows)?;
        self.cache.invalidate_table(table);
        debug!(table, affected, "rows deleted");
        Ok(affected)
    }

    /// Get `{columns, row_count, next_id}`; read-only, bypasses the cache
    pub fn info(&self, table: &str) -> Result<TableInfo> {
        let tables = self.metadata.load()?;
        let schema = Self::require_schema(&tables, table)?;
        let rows = self.data.load(table)?;
        Ok(TableInfo {
            columns: schema.columns().to_vec(),
            row_count: rows.len(),
            next_id: schema.next_id(),
        })
    }

    fn require_schema<'a>(
        tables: &'a IndexMap<String, TableSchema>,
        table: &str,
    ) -> Result<&'a TableSchema> {
        tables
            .get(table)
            .ok_or_else(|| Error::TableNotFound(table.to_string()))
    }

    /// A condition must name a schema column; value typing is not checked
    /// here because tag-exact equality already makes a mistyped literal
    /// match nothing.
    fn check_condition(
        schema: &TableSchema,
        table: &str,
        condition: Option<&Condition>,
    ) -> Result<()> {
        if let Some(cond) = condition {
            if !schema.has_column(&cond.column) {
                return Err(Error::ColumnNotFound(cond.column.clone(), table.to_string()));
            }
        }
        Ok(())
    }

    fn matches(row: &Row, condition: Option<&Condition>) -> bool {
        match condition {
            Some(cond) => row.get(&cond.column) == Some(&cond.value),
            None => true,
        }
    }
}

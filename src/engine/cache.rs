//! Select-result cache for FlatDB
//!
//! Memoizes select results keyed by (table, normalized condition). Entries
//! are snapshots, never live views; any mutation of a table throws away all
//! of that table's entries. The cache lives for the process only.

use crate::command::Condition;
use crate::storage::{Row, Value};
use std::collections::HashMap;
use tracing::debug;

/// Canonical cache key: table name plus the normalized condition
type CacheKey = (String, Option<(String, Value)>);

/// Select-result cache with per-table invalidation
#[derive(Debug, Default)]
pub struct ResultCache {
    entries: HashMap<CacheKey, Vec<Row>>,
}

impl ResultCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    fn key(table: &str, condition: Option<&Condition>) -> CacheKey {
        (
            table.to_string(),
            condition.map(|c| (c.column.clone(), c.value.clone())),
        )
    }

    /// Look up a memoized result
    pub fn get(&self, table: &str, condition: Option<&Condition>) -> Option<&Vec<Row>> {
        self.entries.get(&Self::key(table, condition))
    }

    /// Memoize a computed result
    pub fn put(&mut self, table: &str, condition: Option<&Condition>, rows: Vec<Row>) {
        self.entries.insert(Self::key(table, condition), rows);
    }

    /// Drop every entry for the given table
    pub fn invalidate_table(&mut self, table: &str) {
        let before = self.entries.len();
        self.entries.retain(|(t, _), _| t != table);
        let dropped = before - self.entries.len();
        if dropped > 0 {
            debug!(table, dropped, "cache invalidated");
        }
    }

    /// Number of memoized results
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cond(column: &str, value: Value) -> Condition {
        Condition {
            column: column.to_string(),
            value,
        }
    }

    fn row(id: i64) -> Row {
        let mut row = Row::new();
        row.insert("ID".to_string(), Value::Int(id));
        row
    }

    #[test]
    fn test_hit_requires_same_table_and_condition() {
        let mut cache = ResultCache::new();
        let c = cond("age", Value::Int(28));

        cache.put("users", Some(&c), vec![row(1)]);

        assert!(cache.get("users", Some(&c)).is_some());
        assert!(cache.get("users", None).is_none());
        assert!(cache.get("orders", Some(&c)).is_none());
        assert!(cache
            .get("users", Some(&cond("age", Value::Int(29))))
            .is_none());
    }

    #[test]
    fn test_condition_values_are_tag_exact_keys() {
        let mut cache = ResultCache::new();
        let int_cond = cond("x", Value::Int(1));
        let str_cond = cond("x", Value::Str("1".to_string()));

        cache.put("t", Some(&int_cond), vec![row(1)]);
        assert!(cache.get("t", Some(&str_cond)).is_none());
    }

    #[test]
    fn test_invalidate_table_drops_only_that_table() {
        let mut cache = ResultCache::new();
        cache.put("users", None, vec![row(1)]);
        cache.put("users", Some(&cond("age", Value::Int(28))), vec![]);
        cache.put("orders", None, vec![row(2)]);
        assert_eq!(cache.len(), 3);

        cache.invalidate_table("users");
        assert_eq!(cache.len(), 1);
        assert!(cache.get("orders", None).is_some());
        assert!(cache.get("users", None).is_none());
    }
}

use flatdb::command::Condition;
use flatdb::config::Config;
use flatdb::engine::Database;
use flatdb::storage::Value;
use tempfile::TempDir;

fn db(dir: &TempDir) -> Database {
    Database::new(&Config::under_root(dir.path()))
}

fn users(db: &mut Database) {
    use flatdb::catalog::{Column, DataType};
    db.create_table(
        "users",
        vec![
            Column::new("name", DataType::Str),
            Column::new("age", DataType::Int),
        ],
    )
    .unwrap();
    db.insert(
        "users",
        vec![Value::Str("Sergei".to_string()), Value::Int(28)],
    )
    .unwrap();
}

/// A repeated select is served from the cache: editing the data artifact
/// behind the engine's back is not visible until a mutation invalidates
/// the entry.
#[test]
fn test_select_is_memoized_per_table_and_condition() {
    let dir = TempDir::new().unwrap();
    let mut db = db(&dir);
    users(&mut db);

    let first = db.select("users", None).unwrap();
    assert_eq!(first.len(), 1);

    // external edit the cache cannot see
    std::fs::write(dir.path().join("data/users.json"), "[]").unwrap();

    let second = db.select("users", None).unwrap();
    assert_eq!(second, first);

    // a different condition is a different key: computed fresh, sees the edit
    let filtered = db
        .select(
            "users",
            Some(&Condition {
                column: "age".to_string(),
                value: Value::Int(28),
            }),
        )
        .unwrap();
    assert!(filtered.is_empty());
}

#[test]
fn test_insert_invalidates_cached_selects() {
    let dir = TempDir::new().unwrap();
    let mut db = db(&dir);
    users(&mut db);

    let before = db.select("users", None).unwrap();
    assert_eq!(before.len(), 1);

    db.insert(
        "users",
        vec![Value::Str("Anna".to_string()), Value::Int(31)],
    )
    .unwrap();

    // stale cache forbidden: the new row must show up
    let after = db.select("users", None).unwrap();
    assert_eq!(after.len(), 2);
    assert_eq!(after[1]["name"], Value::Str("Anna".to_string()));
}

#[test]
fn test_update_and_delete_invalidate_cached_selects() {
    let dir = TempDir::new().unwrap();
    let mut db = db(&dir);
    users(&mut db);

    let cond = Condition {
        column: "name".to_string(),
        value: Value::Str("Sergei".to_string()),
    };
    assert_eq!(db.select("users", Some(&cond)).unwrap().len(), 1);

    use flatdb::command::Assignment;
    db.update(
        "users",
        &[Assignment {
            column: "age".to_string(),
            value: Value::Int(29),
        }],
        Some(&cond),
    )
    .unwrap();

    let rows = db.select("users", Some(&cond)).unwrap();
    assert_eq!(rows[0]["age"], Value::Int(29));

    db.delete("users", Some(&cond)).unwrap();
    assert!(db.select("users", Some(&cond)).unwrap().is_empty());
}

/// Dropping a table clears its cache entries: recreating the name must not
/// resurrect rows from the dropped incarnation.
#[test]
fn test_drop_clears_cache_for_recreated_table() {
    use flatdb::catalog::{Column, DataType};

    let dir = TempDir::new().unwrap();
    let mut db = db(&dir);
    users(&mut db);

    assert_eq!(db.select("users", None).unwrap().len(), 1);

    db.drop_table("users").unwrap();
    db.create_table("users", vec![Column::new("score", DataType::Int)])
        .unwrap();

    let rows = db.select("users", None).unwrap();
    assert!(rows.is_empty());
}

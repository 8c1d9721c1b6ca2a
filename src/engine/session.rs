//! Session layer for FlatDB
//!
//! Wraps each engine call in the cross-cutting policies: a confirmation
//! gate that short-circuits destructive commands before the engine runs,
//! and timing measurement around insert and select. Declined confirmations
//! are a distinct outcome, not an error, and leave all state (cache
//! included) untouched.

use super::engine::{Database, TableInfo};
use crate::catalog::TableSchema;
use crate::command::Command;
use crate::error::Result;
use crate::storage::Row;
use std::time::{Duration, Instant};
use tracing::info;

/// Decides whether a destructive command may proceed
pub trait ConfirmPolicy {
    /// Return true to run the described action, false to cancel it
    fn confirm(&mut self, action: &str) -> bool;
}

/// Policy that approves everything (non-interactive callers, tests)
#[derive(Debug, Default)]
pub struct AlwaysConfirm;

impl ConfirmPolicy for AlwaysConfirm {
    fn confirm(&mut self, _action: &str) -> bool {
        true
    }
}

/// Policy that declines everything
#[derive(Debug, Default)]
pub struct NeverConfirm;

impl ConfirmPolicy for NeverConfirm {
    fn confirm(&mut self, _action: &str) -> bool {
        false
    }
}

/// What a command produced
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Table created
    Created { table: String },
    /// Table dropped
    Dropped { table: String },
    /// Sorted table names
    Tables(Vec<String>),
    /// A table's ordered schema
    Described { table: String, schema: TableSchema },
    /// Row inserted
    Inserted {
        id: u64,
        total_rows: usize,
        elapsed: Duration,
    },
    /// Matching rows, in insertion order, with the schema's column order
    Selected {
        columns: Vec<String>,
        rows: Vec<Row>,
        elapsed: Duration,
    },
    /// Rows changed by an update
    Updated { affected: usize },
    /// Rows removed by a delete
    Deleted { affected: usize },
    /// `{columns, row_count, next_id}`
    Info { table: String, info: TableInfo },
    /// Destructive command declined by the confirmation policy
    Cancelled,
    /// Caller should print usage
    Help,
    /// Caller should terminate its loop
    Exit,
}

/// One interactive session over a database
pub struct Session<C: ConfirmPolicy> {
    db: Database,
    confirm: C,
}

impl<C: ConfirmPolicy> Session<C> {
    /// Create a session with the given confirmation policy
    pub fn new(db: Database, confirm: C) -> Self {
        Self { db, confirm }
    }

    /// Execute one parsed command, applying the cross-cutting policies
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::Create { table, columns } => {
                self.db.create_table(&table, columns)?;
                Ok(Outcome::Created { table })
            }
            Command::ShowTables => Ok(Outcome::Tables(self.db.list_tables()?)),
            Command::Describe { table } => {
                let schema = self.db.describe(&table)?;
                Ok(Outcome::Described { table, schema })
            }
            Command::Drop { table } => {
                if !self.confirm.confirm(&format!("drop table '{}'", table)) {
                    return Ok(Outcome::Cancelled);
                }
                self.db.drop_table(&table)?;
                Ok(Outcome::Dropped { table })
            }
            Command::Insert { table, values } => {
                let start = Instant::now();
                let result = self.db.insert(&table, values)?;
                let elapsed = start.elapsed();
                info!(table = %table, elapsed_ms = elapsed.as_millis() as u64, "insert finished");
                Ok(Outcome::Inserted {
                    id: result.id,
                    total_rows: result.total_rows,
                    elapsed,
                })
            }
            Command::Select { table, condition } => {
                let start = Instant::now();
                let rows = self.db.select(&table, condition.as_ref())?;
                let elapsed = start.elapsed();
                info!(table = %table, elapsed_ms = elapsed.as_millis() as u64, "select finished");

                let columns = self
                    .db
                    .describe(&table)?
                    .column_names()
                    .into_iter()
                    .map(String::from)
                    .collect();
                Ok(Outcome::Selected {
                    columns,
                    rows,
                    elapsed,
                })
            }
            Command::Update {
                table,
                assignments,
                condition,
            } => {
                let affected = self.db.update(&table, &assignments, condition.as_ref())?;
                Ok(Outcome::Updated { affected })
            }
            Command::Delete { table, condition } => {
                let action = match &condition {
                    Some(cond) => format!("delete from '{}' where {}", table, cond),
                    None => format!("delete ALL rows from '{}'", table),
                };
                if !self.confirm.confirm(&action) {
                    return Ok(Outcome::Cancelled);
                }
                let affected = self.db.delete(&table, condition.as_ref())?;
                Ok(Outcome::Deleted { affected })
            }
            Command::Info { table } => {
                let info = self.db.info(&table)?;
                Ok(Outcome::Info { table, info })
            }
            Command::Help => Ok(Outcome::Help),
            Command::Exit => Ok(Outcome::Exit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Column, DataType};
    use crate::config::Config;
    use crate::storage::Value;
    use tempfile::TempDir;

    fn session<C: ConfirmPolicy>(dir: &TempDir, confirm: C) -> Session<C> {
        Session::new(Database::new(&Config::under_root(dir.path())), confirm)
    }

    fn create_t(session: &mut Session<impl ConfirmPolicy>) {
        session
            .execute(Command::Create {
                table: "t".to_string(),
                columns: vec![Column::new("a", DataType::Int)],
            })
            .unwrap();
    }

    #[test]
    fn test_declined_drop_is_cancelled_not_error() {
        let dir = TempDir::new().unwrap();
        let mut session = session(&dir, NeverConfirm);
        create_t(&mut session);

        let outcome = session
            .execute(Command::Drop {
                table: "t".to_string(),
            })
            .unwrap();
        assert_eq!(outcome, Outcome::Cancelled);

        // table is still there
        let outcome = session.execute(Command::ShowTables).unwrap();
        assert_eq!(outcome, Outcome::Tables(vec!["t".to_string()]));
    }

    #[test]
    fn test_declined_delete_leaves_rows() {
        let dir = TempDir::new().unwrap();
        let mut session = session(&dir, NeverConfirm);
        create_t(&mut session);
        // NeverConfirm only gates destructive commands; insert runs
        session
            .execute(Command::Insert {
                table: "t".to_string(),
                values: vec![Value::Int(5)],
            })
            .unwrap();

        let outcome = session
            .execute(Command::Delete {
                table: "t".to_string(),
                condition: None,
            })
            .unwrap();
        assert_eq!(outcome, Outcome::Cancelled);

        match session
            .execute(Command::Select {
                table: "t".to_string(),
                condition: None,
            })
            .unwrap()
        {
            Outcome::Selected { rows, .. } => assert_eq!(rows.len(), 1),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_insert_and_select_report_elapsed() {
        let dir = TempDir::new().unwrap();
        let mut session = session(&dir, AlwaysConfirm);
        create_t(&mut session);

        match session
            .execute(Command::Insert {
                table: "t".to_string(),
                values: vec![Value::Int(5)],
            })
            .unwrap()
        {
            Outcome::Inserted { id, total_rows, .. } => {
                assert_eq!(id, 1);
                assert_eq!(total_rows, 1);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }

        match session
            .execute(Command::Select {
                table: "t".to_string(),
                condition: None,
            })
            .unwrap()
        {
            Outcome::Selected { columns, rows, .. } => {
                assert_eq!(columns, vec!["ID".to_string(), "a".to_string()]);
                assert_eq!(rows.len(), 1);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_confirmed_drop_runs() {
        let dir = TempDir::new().unwrap();
        let mut session = session(&dir, AlwaysConfirm);
        create_t(&mut session);

        let outcome = session
            .execute(Command::Drop {
                table: "t".to_string(),
            })
            .unwrap();
        assert_eq!(
            outcome,
            Outcome::Dropped {
                table: "t".to_string()
            }
        );
    }
}

//! FlatDB - interactive command-line client

use std::io::{self, Write};

use anyhow::Context;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing_subscriber::EnvFilter;

use flatdb::catalog::TableSchema;
use flatdb::command::Parser;
use flatdb::config::Config;
use flatdb::engine::{ConfirmPolicy, Database, Outcome, Session, TableInfo};
use flatdb::storage::Row;

/// Print welcome banner
fn print_banner() {
    println!(
        r#"
  _____ _       _   ____  ____
 |  ___| | __ _| |_|  _ \| __ )
 | |_  | |/ _` | __| | | |  _ \
 |  _| | | (_| | |_| |_| | |_) |
 |_|   |_|\__,_|\__|____/|____/

 A file-backed tabular data store
 Type 'help' for help, 'exit' to quit
"#
    );
}

/// Print help message
fn print_help() {
    println!(
        r#"
Commands:
  create <table> <col:type> [col:type ...]    type: int | str | bool
  show tables
  describe <table>
  drop <table>
  info <table>
  help
  exit / quit

Data operations:
  insert into <table> values (<v1>, <v2>, ...)
  select from <table> [where <col> = <value>]
  update <table> set <col> = <value> [, <col> = <value>] [where <col> = <value>]
  delete from <table> [where <col> = <value>]

Examples:
  create users name:str age:int is_active:bool
  insert into users values ("Sergei", 28, true)
  select from users where age = 28
"#
    );
}

/// Format select results as a table, column order from the schema
fn format_results(columns: &[String], rows: &[Row]) -> String {
    if columns.is_empty() && rows.is_empty() {
        return String::new();
    }

    // Calculate column widths
    let mut widths: Vec<usize> = columns.iter().map(|c| c.len()).collect();

    for row in rows {
        for (i, column) in columns.iter().enumerate() {
            if let Some(value) = row.get(column) {
                widths[i] = widths[i].max(format!("{}", value).len());
            }
        }
    }

    let mut output = String::new();

    // Header separator
    let separator: String = widths
        .iter()
        .map(|w| "-".repeat(*w + 2))
        .collect::<Vec<_>>()
        .join("+");
    let separator = format!("+{}+\n", separator);

    // Header
    output.push_str(&separator);
    let header: String = columns
        .iter()
        .zip(&widths)
        .map(|(c, w)| format!(" {:^width$} ", c, width = *w))
        .collect::<Vec<_>>()
        .join("|");
    output.push_str(&format!("|{}|\n", header));
    output.push_str(&separator);

    // Rows
    for row in rows {
        let row_str: String = columns
            .iter()
            .zip(&widths)
            .map(|(c, w)| {
                let cell = row.get(c).map(|v| format!("{}", v)).unwrap_or_default();
                format!(" {:>width$} ", cell, width = *w)
            })
            .collect::<Vec<_>>()
            .join("|");
        output.push_str(&format!("|{}|\n", row_str));
    }

    if !rows.is_empty() {
        output.push_str(&separator);
    }

    output.push_str(&format!("{} row(s) returned\n", rows.len()));

    output
}

fn print_schema(table: &str, schema: &TableSchema) {
    println!("Table: {}", table);
    println!("Columns:");
    for col in schema.columns() {
        println!("  {}: {}", col.name, col.data_type);
    }
}

fn print_info(table: &str, info: &TableInfo) {
    println!("Table: {}", table);
    println!("Columns:");
    for col in &info.columns {
        println!("  {}: {}", col.name, col.data_type);
    }
    println!("Rows: {}", info.row_count);
    println!("Next ID: {}", info.next_id);
}

/// Confirmation policy that asks on stdin
struct StdinConfirm;

impl ConfirmPolicy for StdinConfirm {
    fn confirm(&mut self, action: &str) -> bool {
        print!("Are you sure you want to {}? [y/n]: ", action);
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        if io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

/// Execute one line and render its outcome; returns false when the loop
/// should stop
fn execute_line(line: &str, session: &mut Session<StdinConfirm>) -> bool {
    let command = match Parser::new(line).and_then(|mut p| p.parse()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Type 'help' for the command list.");
            return true;
        }
    };

    match session.execute(command) {
        Ok(Outcome::Created { table }) => println!("Table '{}' created.", table),
        Ok(Outcome::Dropped { table }) => println!("Table '{}' dropped.", table),
        Ok(Outcome::Tables(tables)) => {
            if tables.is_empty() {
                println!("No tables found.");
            } else {
                println!("Tables:");
                for table in tables {
                    println!("  {}", table);
                }
            }
        }
        Ok(Outcome::Described { table, schema }) => print_schema(&table, &schema),
        Ok(Outcome::Inserted {
            id,
            total_rows,
            elapsed,
        }) => {
            println!(
                "OK. Inserted row with ID {}. Total rows: {} ({:.3} s)",
                id,
                total_rows,
                elapsed.as_secs_f64()
            );
        }
        Ok(Outcome::Selected {
            columns,
            rows,
            elapsed,
        }) => {
            print!("{}", format_results(&columns, &rows));
            println!("({:.3} s)", elapsed.as_secs_f64());
        }
        Ok(Outcome::Updated { affected }) => println!("OK. Updated {} row(s).", affected),
        Ok(Outcome::Deleted { affected }) => println!("OK. Deleted {} row(s).", affected),
        Ok(Outcome::Info { table, info }) => print_info(&table, &info),
        Ok(Outcome::Cancelled) => println!("Cancelled."),
        Ok(Outcome::Help) => print_help(),
        Ok(Outcome::Exit) => {
            println!("Goodbye!");
            return false;
        }
        Err(e) => eprintln!("{}", e),
    }

    true
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env();
    let mut session = Session::new(Database::new(&config), StdinConfirm);

    print_banner();

    let mut editor = DefaultEditor::new().context("failed to start line editor")?;

    loop {
        match editor.readline("flatdb> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(trimmed);
                if !execute_line(trimmed, &mut session) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        }
    }

    Ok(())
}

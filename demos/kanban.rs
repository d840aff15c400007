//! Kanban board
//!
//! Loads a wildcard table from JSON and lists the choices a board UI
//! would offer for each column.
//!
//! Run with: RUST_LOG=statute=debug cargo run --example kanban

use statute::engine::{next_states, transition};
use statute::RuleTable;
use tracing_subscriber::EnvFilter;

const BOARD: &str = r#"{
    "todo":     { "next": "any" },
    "doing":    { "next": "any" },
    "done":     { "next": { "explicit": ["archived", "todo"] } },
    "archived": {}
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Kanban Example ===\n");

    let board: RuleTable<String> = RuleTable::from_json_str(BOARD)?;
    for column in board.states() {
        println!("{column:>9} -> {:?}", next_states(column, &board)?);
    }

    let issue = "todo".to_string();
    let issue = transition(&issue, &"done".to_string(), &board)?;
    println!("\nIssue jumped straight to '{issue}'");

    let issue = transition(&issue, &"archived".to_string(), &board)?;
    match transition(&issue, &"todo".to_string(), &board) {
        Ok(_) => println!("Unexpectedly reopened"),
        Err(err) => println!("Archived issues stay put: {err}"),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}

//! Session Tests
//!
//! Scripted sessions run against in-memory input and output.
//!
//! Tests verify:
//! - Output lines for GET hits, misses and invalid rollbacks
//! - END and end of input terminate the session
//! - Bad input is reported and the session continues
//! - Prompt and null display come from the config

use std::io::Cursor;

use stackkv::{Config, Session, Store};

// =============================================================================
// Helper Functions
// =============================================================================

fn quiet_config() -> Config {
    Config::builder().prompt("").build()
}

/// Run a script and return (output, executed command count)
fn run_script(store: &mut Store, config: Config, script: &str) -> (String, usize) {
    let mut output = Vec::new();
    let executed = {
        let mut session = Session::new(store, config, Cursor::new(script), &mut output);
        session.run().unwrap()
    };
    (String::from_utf8(output).unwrap(), executed)
}

// =============================================================================
// Scripted Session Tests
// =============================================================================

#[test]
fn test_basic_get_set_unset() {
    let mut store = Store::new();
    let script = "SET a 10\nGET a\nUNSET a\nGET a\nEND\n";

    let (output, executed) = run_script(&mut store, quiet_config(), script);

    assert_eq!(output, "10\nNULL\n");
    assert_eq!(executed, 4);
}

#[test]
fn test_nested_rollback_session() {
    let mut store = Store::new();
    let script = "\
BEGIN
SET a 10
GET a
BEGIN
SET a 20
GET a
ROLLBACK
GET a
ROLLBACK
GET a
END
";

    let (output, _) = run_script(&mut store, quiet_config(), script);

    assert_eq!(output, "10\n20\n10\nNULL\n");
    assert!(!store.in_transaction());
}

#[test]
fn test_commit_session() {
    let mut store = Store::new();
    let script = "\
BEGIN
SET a 30
BEGIN
SET a 40
COMMIT
GET a
ROLLBACK
END
";

    let (output, _) = run_script(&mut store, quiet_config(), script);

    assert_eq!(output, "40\nINVALID ROLLBACK\n");
    assert_eq!(store.table().get("a"), Some("40"));
}

#[test]
fn test_unset_inside_transaction_session() {
    let mut store = Store::new();
    let script = "\
SET a 50
BEGIN
GET a
SET a 60
BEGIN
UNSET a
GET a
ROLLBACK
GET a
COMMIT
GET a
END
";

    let (output, _) = run_script(&mut store, quiet_config(), script);

    assert_eq!(output, "50\nNULL\n60\n60\n");
}

#[test]
fn test_rollback_with_nothing_open() {
    let mut store = Store::new();

    let (output, executed) = run_script(&mut store, quiet_config(), "ROLLBACK\n");

    assert_eq!(output, "INVALID ROLLBACK\n");
    assert_eq!(executed, 1);
}

// =============================================================================
// Termination Tests
// =============================================================================

#[test]
fn test_end_stops_reading() {
    let mut store = Store::new();

    let (output, executed) = run_script(&mut store, quiet_config(), "END\nSET a 1\nGET a\n");

    assert_eq!(output, "");
    assert_eq!(executed, 0);
    assert_eq!(store.get("a"), None);
}

#[test]
fn test_end_of_input_stops_session() {
    let mut store = Store::new();

    let (output, executed) = run_script(&mut store, quiet_config(), "SET a 1\nGET a");

    assert_eq!(output, "1\n");
    assert_eq!(executed, 2);
}

#[test]
fn test_open_transactions_survive_session_end() {
    let mut store = Store::new();

    run_script(&mut store, quiet_config(), "BEGIN\nSET a 1\nEND\n");

    assert_eq!(store.depth(), 1);
    assert_eq!(store.get("a"), Some("1"));
    assert!(store.table().is_empty());
}

// =============================================================================
// Error Reporting Tests
// =============================================================================

#[test]
fn test_unknown_command_is_reported() {
    let mut store = Store::new();

    let (output, executed) = run_script(&mut store, quiet_config(), "drop a\nSET a 1\nGET a\n");

    assert_eq!(output, "Unrecognized command [DROP]\n1\n");
    assert_eq!(executed, 2);
}

#[test]
fn test_wrong_arity_is_reported() {
    let mut store = Store::new();

    let (output, _) = run_script(&mut store, quiet_config(), "SET a\nGET a\n");

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Protocol error: SET expects 2 argument(s)"));
    assert_eq!(lines[1], "NULL");
}

#[test]
fn test_blank_lines_are_ignored() {
    let mut store = Store::new();

    let (output, executed) = run_script(&mut store, quiet_config(), "\n\nSET a 1\n\nGET a\n");

    assert_eq!(output, "1\n");
    assert_eq!(executed, 2);
}

// =============================================================================
// Configuration Tests
// =============================================================================

#[test]
fn test_prompt_is_written_before_each_read() {
    let mut store = Store::new();
    let config = Config::builder().prompt("> ").build();

    let (output, _) = run_script(&mut store, config, "SET a 1\nGET a\nEND\n");

    assert_eq!(output, "> > 1\n> ");
}

#[test]
fn test_custom_null_display() {
    let mut store = Store::new();
    let config = Config::builder().prompt("").null_display("(nil)").build();

    let (output, _) = run_script(&mut store, config, "GET missing\n");

    assert_eq!(output, "(nil)\n");
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.prompt, ">>> ");
    assert_eq!(config.null_display, "NULL");
}

//! End-to-end tests driving the interactive menu over piped stdin

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn finlog(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finlog").unwrap();
    cmd.env("FINLOG_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn exits_cleanly_on_menu_choice_three() {
    let temp_dir = TempDir::new().unwrap();

    finlog(&temp_dir)
        .write_stdin("3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exiting the program..."));
}

#[test]
fn unknown_menu_choice_keeps_the_menu_alive() {
    let temp_dir = TempDir::new().unwrap();

    finlog(&temp_dir)
        .write_stdin("7\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid choice. Please enter 1, 2, or 3.",
        ))
        .stdout(predicate::str::contains("Exiting the program..."));
}

#[test]
fn add_and_query_full_session() {
    let temp_dir = TempDir::new().unwrap();

    let script = "1\n01-01-2023\n100\ni\nsalary\n\
                  1\n01-02-2023\n40\ne\ngroceries\n\
                  2\n01-01-2023\n01-02-2023\nn\n\
                  3\n";

    finlog(&temp_dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry added successfully."))
        .stdout(predicate::str::contains("Total Income: $100.00"))
        .stdout(predicate::str::contains("Total Expense: $40.00"))
        .stdout(predicate::str::contains("Net Savings: $60.00"));

    // The ledger persists across runs
    finlog(&temp_dir)
        .write_stdin("2\n01-01-2023\n01-01-2023\nn\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("salary"))
        .stdout(predicate::str::contains("Net Savings: $100.00"));
}

#[test]
fn empty_range_reports_no_transactions() {
    let temp_dir = TempDir::new().unwrap();

    let script = "1\n01-01-2023\n10\ni\n\n\
                  2\n06-01-2023\n06-30-2023\nn\n\
                  3\n";

    finlog(&temp_dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No transactions found in the specified date range.",
        ));
}

#[test]
fn invalid_input_is_reprompted_not_fatal() {
    let temp_dir = TempDir::new().unwrap();

    let script = "1\n13-45-2023\n01-15-2023\nabc\n25.50\nz\nE\nlunch\n3\n";

    finlog(&temp_dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid date format. Please use MM-DD-YYYY.",
        ))
        .stdout(predicate::str::contains("Invalid amount"))
        .stdout(predicate::str::contains("Invalid category"))
        .stdout(predicate::str::contains("Entry added successfully."));
}

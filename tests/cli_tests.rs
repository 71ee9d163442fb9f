//! End-to-end tests for the `finance` binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn finance(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finance").unwrap();
    cmd.env("FINANCE_TRACKER_DATA_DIR", dir.path())
        .current_dir(dir.path());
    cmd
}

#[test]
fn test_no_command_prints_usage_hint() {
    let dir = TempDir::new().unwrap();
    finance(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("finance --help"));
}

#[test]
fn test_fresh_start_notice() {
    let dir = TempDir::new().unwrap();
    finance(&dir)
        .arg("summary")
        .assert()
        .success()
        .stderr(predicate::str::contains("No previous data found. Starting fresh."))
        .stdout(predicate::str::contains("Total Expenses: $0.00"));
}

#[test]
fn test_budget_warning_flow() {
    let dir = TempDir::new().unwrap();

    finance(&dir)
        .args(["budget", "set", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget set to: $500.00"));

    finance(&dir)
        .args(["transaction", "add", "expense", "460", "Groceries", "--pick", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction added successfully!"))
        .stdout(predicate::str::contains(
            "Warning: Your expenses are close to exceeding your budget!",
        ));

    finance(&dir)
        .args(["txn", "add", "expense", "50", "Shoes", "--category", "shopping"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: You have exceeded your budget!"));

    finance(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Expenses: $510.00"))
        .stdout(predicate::str::contains("Net Savings:    -$510.00"));
}

#[test]
fn test_state_persists_between_runs() {
    let dir = TempDir::new().unwrap();

    finance(&dir)
        .args(["transaction", "add", "income", "1200", "Paycheck", "--pick", "1"])
        .assert()
        .success();

    assert!(dir.path().join("data").join("finance_data.json").exists());

    finance(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Starting fresh").not())
        .stdout(predicate::str::contains("Paycheck"))
        .stdout(predicate::str::contains("Salary"));
}

#[test]
fn test_new_category_is_created_and_listed() {
    let dir = TempDir::new().unwrap();

    finance(&dir)
        .args([
            "transaction",
            "add",
            "expense",
            "12.50",
            "Cinema",
            "--new-category",
            "Travel",
        ])
        .assert()
        .success();

    finance(&dir)
        .args(["category", "list", "expense"])
        .assert()
        .success()
        .stdout(predicate::str::contains("6. Travel"))
        .stdout(predicate::str::contains("Income categories").not());
}

#[test]
fn test_add_without_category_shows_menu() {
    let dir = TempDir::new().unwrap();

    finance(&dir)
        .args(["transaction", "add", "income", "100", "Gift"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("4. Other (Create New Category)"));
}

#[test]
fn test_invalid_input_is_rejected_without_saving() {
    let dir = TempDir::new().unwrap();

    finance(&dir)
        .args(["transaction", "add", "expense", "-5", "Coffee", "--pick", "1"])
        .assert()
        .failure();

    finance(&dir)
        .args(["transaction", "add", "expense", "5", "12345", "--pick", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Description cannot be empty or only numbers",
        ));

    assert!(!dir.path().join("data").join("finance_data.json").exists());
}

#[test]
fn test_delete_out_of_range() {
    let dir = TempDir::new().unwrap();

    finance(&dir)
        .args(["transaction", "add", "expense", "5", "Coffee", "--pick", "1"])
        .assert()
        .success();

    finance(&dir)
        .args(["transaction", "delete", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No transaction at position 2"));

    finance(&dir)
        .args(["transaction", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee"));

    finance(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions recorded."));
}

#[test]
fn test_export_writes_csv() {
    let dir = TempDir::new().unwrap();

    finance(&dir)
        .args(["transaction", "add", "expense", "50", "Dinner", "--pick", "1"])
        .assert()
        .success();

    finance(&dir)
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 transaction to"));

    let csv = fs::read_to_string(dir.path().join("transactions.csv")).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Type,Description,Amount,Category,Date"));
    assert!(lines.next().unwrap().starts_with("Expense,Dinner,50.00,Food,"));
}

#[test]
fn test_corrupt_snapshot_is_not_overwritten() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    fs::create_dir_all(&data_dir).unwrap();
    let snapshot = data_dir.join("finance_data.json");
    fs::write(&snapshot, "{ not json").unwrap();

    finance(&dir)
        .args(["budget", "set", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Corrupt data"));

    assert_eq!(fs::read_to_string(&snapshot).unwrap(), "{ not json");
}

#[test]
fn test_history_records_mutations() {
    let dir = TempDir::new().unwrap();

    finance(&dir)
        .args(["budget", "set", "300"])
        .assert()
        .success();
    finance(&dir)
        .args(["category", "add", "income", "Freelance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created income category: Freelance"));

    finance(&dir)
        .args(["history", "--limit", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UPDATE Budget"))
        .stdout(predicate::str::contains("CREATE Category"));
}

#[test]
fn test_config_changes_are_saved() {
    let dir = TempDir::new().unwrap();

    finance(&dir)
        .args(["config", "--currency", "€", "--audit", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved"))
        .stdout(predicate::str::contains("Currency symbol: €"));

    assert!(dir.path().join("config.json").exists());

    finance(&dir)
        .args(["budget", "set", "250"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget set to: €250.00"));

    finance(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No history recorded."));
}

#[test]
fn test_sub_cent_amount_is_rejected() {
    let dir = TempDir::new().unwrap();

    finance(&dir)
        .args(["transaction", "add", "expense", "9.999", "Coffee", "--pick", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("more than two decimal places"));

    assert!(!dir.path().join("data").join("finance_data.json").exists());
}

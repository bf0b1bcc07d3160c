//! End-to-end tests for the `budget` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn budget(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget").unwrap();
    cmd.env("BUDGET_TRACKER_DATA_DIR", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_empty_budget_shows_placeholder() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Income:    $0.00"))
        .stdout(predicate::str::contains("No expenses yet."));
}

#[test]
fn test_income_and_categories_persist_between_runs() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["income", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[+] Income updated successfully!"));

    budget(&dir)
        .args(["category", "add", "Rent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[+] Category added!"));

    budget(&dir)
        .args(["category", "amount", "Rent", "600"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent: $600.00"));

    budget(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expenses:  $600.00"))
        .stdout(predicate::str::contains("Remaining: $400.00"))
        .stdout(predicate::str::contains("60.0%"))
        .stdout(predicate::str::contains("(warning)"));

    assert!(dir.path().join("data").join("expenseData.json").exists());
    assert!(dir.path().join("budget.log").exists());
}

#[test]
fn test_duplicate_category_warns() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["category", "add", "Food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID: cat-"));
    budget(&dir)
        .args(["category", "add", "Food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[!] Category already exists"))
        .stdout(predicate::str::contains("ID:").not());
}

#[test]
fn test_negative_income_rejected() {
    let dir = TempDir::new().unwrap();

    budget(&dir).args(["income", "500"]).assert().success();
    budget(&dir)
        .args(["income", "-5"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[!] Please enter a valid income amount",
        ))
        .stdout(predicate::str::contains("Income:    $500.00"));
}

#[test]
fn test_calc_requires_income() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .arg("calc")
        .assert()
        .success()
        .stdout(predicate::str::contains("[!] Please set your income first"));
}

#[test]
fn test_calc_prints_ring() {
    let dir = TempDir::new().unwrap();

    budget(&dir).args(["income", "200"]).assert().success();
    budget(&dir).args(["category", "add", "Food"]).assert().success();
    budget(&dir)
        .args(["category", "amount", "Food", "50"])
        .assert()
        .success();

    budget(&dir)
        .arg("calc")
        .assert()
        .success()
        .stdout(predicate::str::contains("[+] Calculation complete"))
        .stdout(predicate::str::contains("25.0%  $150.00 remaining"));
}

#[test]
fn test_unknown_category_name_warns() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["category", "delete", "Nope"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[!] Category not found: Nope"));

    budget(&dir)
        .args(["category", "amount", "Nope", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[!] Category not found: Nope"));
}

#[test]
fn test_delete_category() {
    let dir = TempDir::new().unwrap();

    budget(&dir).args(["category", "add", "Fun"]).assert().success();
    budget(&dir)
        .args(["category", "delete", "Fun"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[x] Expense deleted successfully"));

    budget(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses yet."));
}

#[test]
fn test_reset_removes_stored_state() {
    let dir = TempDir::new().unwrap();

    budget(&dir).args(["income", "1000"]).assert().success();
    let stored = dir.path().join("data").join("expenseData.json");
    assert!(stored.exists());

    budget(&dir)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("[x] All data reset"));
    assert!(!stored.exists());

    budget(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Income:    $0.00"));
}

#[test]
fn test_config_shows_paths() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Store key:          expenseData"));
}

//! Integration tests for employee commands

#![allow(deprecated)]

use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_roster, roster_cmd};

fn stored(temp: &TempDir) -> Vec<Value> {
    let text = fs::read_to_string(temp.path().join(".roster/employees.json")).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn test_first_list_shows_demo_employees() {
    let temp = TempDir::new().unwrap();
    init_roster(temp.path());

    let output = roster_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    let ivan = stdout.find("Иван Иванов").unwrap();
    let maria = stdout.find("Мария Петрова").unwrap();
    let alexey = stdout.find("Алексей Сидоров").unwrap();
    assert!(ivan < maria && maria < alexey);

    let saved = stored(&temp);
    assert_eq!(saved.len(), 3);
    assert_eq!(saved[0]["id"], 1);
    assert_eq!(saved[0]["firstName"], "Иван");
    assert_eq!(saved[2]["address"], "ул. Садовая, д. 15");
}

#[test]
fn test_list_json() {
    let temp = TempDir::new().unwrap();
    init_roster(temp.path());

    let output = roster_cmd()
        .current_dir(temp.path())
        .arg("list")
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let list: Vec<Value> = serde_json::from_slice(&output).unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list[1]["lastName"], "Петрова");
}

#[test]
fn test_add_valid_employee() {
    let temp = TempDir::new().unwrap();
    init_roster(temp.path());

    roster_cmd()
        .current_dir(temp.path())
        .args([
            "add",
            "--first-name",
            "A",
            "--last-name",
            "B",
            "--experience",
            "1",
            "--age",
            "30",
            "--address",
            "X",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added A B"));

    let saved = stored(&temp);
    assert_eq!(saved.len(), 4);
    assert_eq!(saved[3]["firstName"], "A");
    assert_eq!(saved[3]["age"], 30);
    assert!(saved[3]["id"].is_i64());
}

#[test]
fn test_add_invalid_employee_fails() {
    let temp = TempDir::new().unwrap();
    init_roster(temp.path());

    roster_cmd()
        .current_dir(temp.path())
        .args([
            "add",
            "--first-name",
            "",
            "--last-name",
            "B",
            "--experience",
            "1",
            "--age",
            "30",
            "--address",
            "X",
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("first name is empty"));

    assert_eq!(stored(&temp).len(), 3);
}

#[test]
fn test_add_negative_experience_fails() {
    let temp = TempDir::new().unwrap();
    init_roster(temp.path());

    roster_cmd()
        .current_dir(temp.path())
        .args([
            "add",
            "--first-name",
            "A",
            "--last-name",
            "B",
            "--experience",
            "-2",
            "--age",
            "30",
            "--address",
            "X",
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("experience is negative"));
}

#[test]
fn test_show_employee() {
    let temp = TempDir::new().unwrap();
    init_roster(temp.path());

    roster_cmd()
        .current_dir(temp.path())
        .args(["show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("first name: Мария"))
        .stdout(predicate::str::contains("age: 35"));
}

#[test]
fn test_show_missing_employee() {
    let temp = TempDir::new().unwrap();
    init_roster(temp.path());

    roster_cmd()
        .current_dir(temp.path())
        .args(["show", "99"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Employee not found: 99"));
}

#[test]
fn test_update_changes_only_given_fields() {
    let temp = TempDir::new().unwrap();
    init_roster(temp.path());

    roster_cmd()
        .current_dir(temp.path())
        .args(["update", "2", "--age", "36"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated Мария Петрова"));

    let saved = stored(&temp);
    assert_eq!(saved.len(), 3);
    assert_eq!(saved[1]["id"], 2);
    assert_eq!(saved[1]["age"], 36);
    assert_eq!(saved[1]["firstName"], "Мария");
}

#[test]
fn test_update_invalid_is_rejected() {
    let temp = TempDir::new().unwrap();
    init_roster(temp.path());

    roster_cmd()
        .current_dir(temp.path())
        .args(["update", "1", "--age", "101"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("age must be between 18 and 100"));

    assert_eq!(stored(&temp)[0]["age"], 30);
}

#[test]
fn test_update_without_fields_fails() {
    let temp = TempDir::new().unwrap();
    init_roster(temp.path());

    roster_cmd()
        .current_dir(temp.path())
        .args(["update", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to update"));
}

#[test]
fn test_delete_employee() {
    let temp = TempDir::new().unwrap();
    init_roster(temp.path());

    roster_cmd()
        .current_dir(temp.path())
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted employee 1"));

    let saved = stored(&temp);
    assert_eq!(saved.len(), 2);
    assert_eq!(saved[0]["id"], 2);
    assert_eq!(saved[1]["id"], 3);
}

#[test]
fn test_delete_missing_employee_is_silent() {
    let temp = TempDir::new().unwrap();
    init_roster(temp.path());

    roster_cmd()
        .current_dir(temp.path())
        .args(["delete", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No employee with id 42"));

    assert_eq!(stored(&temp).len(), 3);
}

#[test]
fn test_deleting_everything_does_not_reseed() {
    let temp = TempDir::new().unwrap();
    init_roster(temp.path());

    for id in ["1", "2", "3"] {
        roster_cmd()
            .current_dir(temp.path())
            .args(["delete", id])
            .assert()
            .success();
    }

    roster_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No employees found"));
}

#[test]
fn test_blank_template() {
    let temp = TempDir::new().unwrap();
    init_roster(temp.path());

    let output = roster_cmd()
        .current_dir(temp.path())
        .arg("blank")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let blank: Value = serde_json::from_slice(&output).unwrap();
    assert!(blank["id"].is_null());
    assert_eq!(blank["firstName"], "");
    assert_eq!(blank["experience"], 0);
    assert_eq!(blank["age"], 25);
}

#[test]
fn test_blank_template_leaves_store_alone() {
    let temp = TempDir::new().unwrap();
    init_roster(temp.path());

    roster_cmd()
        .current_dir(temp.path())
        .arg("blank")
        .assert()
        .success();

    assert!(!temp.path().join(".roster/employees.json").exists());
}

#[test]
fn test_fractional_experience_round_trips() {
    let temp = TempDir::new().unwrap();
    init_roster(temp.path());
    fs::write(
        temp.path().join(".roster/employees.json"),
        r#"[{"id":1,"firstName":"A","lastName":"B","experience":2.5,"age":30,"address":"X"}]"#,
    )
    .unwrap();

    roster_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2.5"));

    roster_cmd()
        .current_dir(temp.path())
        .args(["update", "1", "--experience", "3.75"])
        .assert()
        .success();

    let saved = stored(&temp);
    assert_eq!(saved[0]["experience"], 3.75);
    assert_eq!(saved[0]["age"], 30);
}

#[test]
fn test_corrupt_store_reports_error() {
    let temp = TempDir::new().unwrap();
    init_roster(temp.path());
    fs::write(temp.path().join(".roster/employees.json"), "{oops").unwrap();

    roster_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not valid JSON"));
}

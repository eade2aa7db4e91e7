//! Integration tests for the stockline CLI.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn write_invoice(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn parse_emits_invoice_json() {
    let file = write_invoice("Invoice #12345\nDate: 2023-10-15\nItems:\nWine - 5 bottles - $100\n");

    Command::cargo_bin("stockline")
        .unwrap()
        .arg("parse")
        .arg(file.path())
        .arg("--compact")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""invoice_id":"12345""#))
        .stdout(predicate::str::contains(r#""invoice_date":"2023-10-15""#))
        .stdout(predicate::str::contains(r#""currency":"USD""#));
}

#[test]
fn inventory_emits_update_with_invoice_date() {
    let file = write_invoice("Date: 2023-10-15\nItems:\nWine - 5 bottles - $100\n");

    Command::cargo_bin("stockline")
        .unwrap()
        .arg("inventory")
        .arg(file.path())
        .arg("--compact")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""action":"add""#))
        .stdout(predicate::str::contains(r#""date":"2023-10-15""#))
        .stdout(predicate::str::contains(r#""sku":"wine-"#));
}

#[test]
fn inventory_uses_fallback_date_when_invoice_has_none() {
    let file = write_invoice("Items:\nWine - 5 bottles - $100\n");

    Command::cargo_bin("stockline")
        .unwrap()
        .arg("inventory")
        .arg(file.path())
        .arg("--date")
        .arg("2024-01-01")
        .arg("--compact")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""date":"2024-01-01""#));
}

#[test]
fn parse_fails_on_missing_file() {
    Command::cargo_bin("stockline")
        .unwrap()
        .arg("parse")
        .arg("/does/not/exist.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

//! End-to-end tests for the gridport binary

use assert_cmd::Command;
use gridport::backend::{save_workbook, Workbook, WorkbookFormat};
use gridport::Cell;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn contacts_fixture(path: &Path) {
    let rows = [
        vec![
            Cell::from("id"),
            Cell::from("number"),
            Cell::from("description"),
        ],
        vec![
            Cell::from(50i64),
            Cell::from(123i64),
            Cell::from("Description"),
        ],
        vec![
            Cell::from(6i64),
            Cell::from(456i64),
            Cell::from("Another description"),
        ],
    ];

    let mut workbook = Workbook::new();
    let sheet = workbook.active_sheet_mut();
    for (row, cells) in rows.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            sheet.set_value(row as u32 + 1, col as u16 + 1, cell.clone());
        }
    }
    save_workbook(&workbook, path, WorkbookFormat::Xlsx).unwrap();
}

fn gridport() -> Command {
    Command::cargo_bin("gridport").unwrap()
}

#[test]
fn test_inspect_lists_sheets() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.xlsx");
    contacts_fixture(&path);

    gridport()
        .arg("inspect")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sheet1"))
        .stdout(predicate::str::contains("3 rows"));
}

#[test]
fn test_inspect_missing_file_fails() {
    gridport()
        .arg("inspect")
        .arg("/nonexistent/contacts.xlsx")
        .assert()
        .failure();
}

#[test]
fn test_head_prints_positional_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.xlsx");
    contacts_fixture(&path);

    gridport()
        .arg("head")
        .arg(&path)
        .args(["-n", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("id\tnumber\tdescription"))
        .stdout(predicate::str::contains("50\t123\tDescription"));
}

#[test]
fn test_head_emits_json_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.xlsx");
    contacts_fixture(&path);

    gridport()
        .arg("head")
        .arg(&path)
        .args(["-n", "1", "--header-row", "0", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"id":50.0,"number":123.0,"description":"Description"}"#,
        ));
}

#[test]
fn test_convert_copies_rows() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("contacts.xlsx");
    let output = dir.path().join("copy.xlsx");
    contacts_fixture(&input);

    gridport()
        .arg("convert")
        .arg(&input)
        .arg(&output)
        .args(["--header-row", "0", "--prepend-header"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 2 rows"));

    assert!(output.exists());
}

#[test]
fn test_convert_to_legacy_format_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("contacts.xlsx");
    let output = dir.path().join("copy.xls");
    contacts_fixture(&input);

    gridport()
        .arg("convert")
        .arg(&input)
        .arg(&output)
        .assert()
        .failure();
}

//! Integration tests for the Shelf CLI

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// A `shelf` command pointed at a database inside `dir`
fn shelf(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("shelf").unwrap();
    cmd.env("SHELF_DATA", dir.path().join("db.json"));
    cmd
}

/// Add a book and return its id
fn add_book(dir: &TempDir, title: &str, pages: &str) -> String {
    shelf(dir)
        .args([
            "add",
            title,
            "--author",
            "Frank Herbert",
            "--genre",
            "Sci-fiction",
            "--pages",
            pages,
        ])
        .assert()
        .success();

    let books = list_json(dir);
    books
        .as_array()
        .unwrap()
        .iter()
        .find(|b| b["title"] == title)
        .expect("book was added")["id"]
        .as_str()
        .unwrap()
        .to_string()
}

fn list_json(dir: &TempDir) -> Value {
    let output = shelf(dir).args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

fn show_json(dir: &TempDir, id: &str) -> Value {
    let output = shelf(dir).args(["show", id, "--json"]).output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("shelf").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("progress"))
        .stdout(predicate::str::contains("wishlist"))
        .stdout(predicate::str::contains("report"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("shelf").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("shelf"));
}

#[test]
fn test_list_empty_collection() {
    let dir = TempDir::new().unwrap();
    shelf(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No books found"));
}

#[test]
fn test_add_requires_author() {
    let dir = TempDir::new().unwrap();
    shelf(&dir)
        .args(["add", "Dune", "--genre", "Sci-fiction", "--pages", "412"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required field: author"));
}

#[test]
fn test_add_rejects_zero_pages() {
    let dir = TempDir::new().unwrap();
    shelf(&dir)
        .args([
            "add", "Dune", "--author", "Frank Herbert", "--genre", "Fantasy", "--pages", "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Total pages must be a positive number, got 0",
        ));
}

#[test]
fn test_add_rejects_negative_pages() {
    let dir = TempDir::new().unwrap();
    shelf(&dir)
        .args([
            "add", "Dune", "--author", "Frank Herbert", "--genre", "Fantasy", "--pages", "-5",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("got -5"));
    assert_eq!(list_json(&dir).as_array().unwrap().len(), 0);
}

#[test]
fn test_add_rejects_unknown_genre() {
    let dir = TempDir::new().unwrap();
    shelf(&dir)
        .args([
            "add", "Dune", "--author", "Frank Herbert", "--genre", "Cookbooks", "--pages", "412",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown genre"));
}

#[test]
fn test_add_and_list() {
    let dir = TempDir::new().unwrap();
    let id = add_book(&dir, "Dune", "412");

    let books = list_json(&dir);
    assert_eq!(books.as_array().unwrap().len(), 1);
    assert_eq!(books[0]["status"], "To Read");
    assert_eq!(books[0]["pagesRead"], 0);

    shelf(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune by Frank Herbert"))
        .stdout(predicate::str::contains(&id[..8]));
}

#[test]
fn test_progress_lifecycle() {
    let dir = TempDir::new().unwrap();
    let id = add_book(&dir, "Dune", "300");

    shelf(&dir).args(["start", &id]).assert().success();
    let book = show_json(&dir, &id);
    assert_eq!(book["status"], "Reading");
    assert_eq!(book["pagesRead"], 0);

    // Starting twice is a note, not a failure
    shelf(&dir)
        .args(["start", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Already reading"));

    shelf(&dir).args(["progress", &id, "150"]).assert().success();
    assert_eq!(show_json(&dir, &id)["pagesRead"], 150);

    shelf(&dir).args(["progress", &id, "300"]).assert().success();
    let book = show_json(&dir, &id);
    assert_eq!(book["status"], "Completed");
    assert_eq!(book["pagesRead"], 300);

    shelf(&dir).args(["edit", &id, "--pages", "250"]).assert().success();
    let book = show_json(&dir, &id);
    assert_eq!(book["status"], "Completed");
    assert_eq!(book["pagesRead"], 250);
}

#[test]
fn test_status_to_reading_sets_first_page() {
    let dir = TempDir::new().unwrap();
    let id = add_book(&dir, "Dune", "300");

    shelf(&dir).args(["status", &id, "Reading"]).assert().success();
    let book = show_json(&dir, &id);
    assert_eq!(book["status"], "Reading");
    assert_eq!(book["pagesRead"], 1);
}

#[test]
fn test_wishlist_toggle() {
    let dir = TempDir::new().unwrap();
    let id = add_book(&dir, "Dune", "300");

    shelf(&dir).args(["wishlist", &id]).assert().success();
    assert_eq!(show_json(&dir, &id)["status"], "Wishlist");

    shelf(&dir).args(["wishlist", &id]).assert().success();
    assert_eq!(show_json(&dir, &id)["status"], "To Read");

    shelf(&dir).args(["progress", &id, "20"]).assert().success();
    shelf(&dir)
        .args(["wishlist", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("wishlist"));
    assert_eq!(show_json(&dir, &id)["status"], "Reading");
}

#[test]
fn test_id_prefix_resolution() {
    let dir = TempDir::new().unwrap();
    let id = add_book(&dir, "Dune", "300");

    shelf(&dir)
        .args(["show", &id[..8]])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title:     Dune"));

    shelf(&dir)
        .args(["show", "zzzzzzzz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No book"));
}

#[test]
fn test_edit_without_fields() {
    let dir = TempDir::new().unwrap();
    let id = add_book(&dir, "Dune", "300");

    shelf(&dir)
        .args(["edit", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to change"));
}

#[test]
fn test_remove() {
    let dir = TempDir::new().unwrap();
    let id = add_book(&dir, "Dune", "300");

    shelf(&dir)
        .args(["remove", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed Dune"));
    assert_eq!(list_json(&dir).as_array().unwrap().len(), 0);
}

#[test]
fn test_stats_and_report() {
    let dir = TempDir::new().unwrap();
    let dune = add_book(&dir, "Dune", "300");
    let emma = add_book(&dir, "Emma", "474");
    add_book(&dir, "Hyperion", "482");

    shelf(&dir).args(["progress", &dune, "75"]).assert().success();
    shelf(&dir).args(["status", &emma, "Completed"]).assert().success();

    let output = shelf(&dir).args(["stats", "--json"]).output().unwrap();
    let stats: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["total"], 3);
    assert_eq!(stats["completed"], 1);
    assert_eq!(stats["reading"], 1);
    assert_eq!(stats["wishlist"], 0);

    let report_path = dir.path().join("report.txt");
    shelf(&dir)
        .args([
            "report",
            "--target",
            "4",
            "--completed",
            "1",
            "--output",
            report_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let report = std::fs::read_to_string(&report_path).unwrap();
    assert!(report.contains("Progress: 25.0%"));
    assert!(report.contains("1. Dune by Frank Herbert"));
    assert!(report.contains("75/300 pages"));
    assert!(!report.contains("Emma"));
}

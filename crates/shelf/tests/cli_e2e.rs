#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

/// A data directory with one favorite, and a command pointed at it that can
/// never reach the network.
fn setup() -> TempDir {
    let data = TempDir::new().unwrap();
    let favorites = json!([{
        "id": "abc123",
        "title": "Rust in Action",
        "authors": ["Tim McNamara"],
        "description": "Systems programming.",
        "previewLink": "https://books.example/abc123"
    }]);
    fs::write(data.path().join("favorites"), favorites.to_string()).unwrap();
    data
}

fn shelf_cmd(data: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("shelf"));
    cmd.env("SHELF_DATA", data.path())
        .env("SHELF_SEARCH_ON_START", "false")
        .env("SHELF_API_BASE_URL", "http://127.0.0.1:1/volumes")
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn stored_ids(data: &TempDir, key: &str) -> Vec<String> {
    let raw = fs::read_to_string(data.path().join(key)).unwrap();
    let books: Vec<Value> = serde_json::from_str(&raw).unwrap();
    books
        .iter()
        .map(|b| b["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_toggle_resolves_from_other_collection() {
    let data = setup();

    shelf_cmd(&data)
        .args(["toggle", "readingList", "abc123"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Added \"Rust in Action\" to reading list",
        ));
    assert_eq!(stored_ids(&data, "readingList"), vec!["abc123"]);
    assert_eq!(stored_ids(&data, "favorites"), vec!["abc123"]);

    shelf_cmd(&data)
        .args(["read", "abc123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed"));
    assert!(stored_ids(&data, "readingList").is_empty());
}

#[test]
fn test_list_as_json_shows_badges() {
    let data = setup();

    let output = shelf_cmd(&data)
        .args(["list", "favorites", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let result: Value = serde_json::from_slice(&output.stdout).unwrap();
    let card = &result["cards"][0];
    assert_eq!(card["id"], "abc123");
    assert_eq!(card["byline"], "by Tim McNamara");
    assert_eq!(card["primary"]["kind"], "preview");
    assert_eq!(card["badges"][0]["active"], true);
    assert_eq!(card["badges"][1]["label"], "Add to reading list");
    assert_eq!(card["remove_from"], "favorites");
}

#[test]
fn test_unknown_id_is_a_no_op() {
    let data = setup();

    shelf_cmd(&data)
        .args(["fav", "nope"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No loaded book has id nope"));
    assert_eq!(stored_ids(&data, "favorites"), vec!["abc123"]);
}

#[test]
fn test_unknown_collection_fails() {
    let data = setup();

    shelf_cmd(&data)
        .args(["list", "wishlist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown collection: wishlist"));
}

#[test]
fn test_search_while_unreachable_reports_offline() {
    let data = setup();

    shelf_cmd(&data)
        .args(["search", "rust"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You are offline. Please check your internet connection.",
        ));
}

#[test]
fn test_theme_toggle_persists() {
    let data = setup();

    shelf_cmd(&data)
        .args(["theme", "--toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set to dark"));
    assert_eq!(fs::read_to_string(data.path().join("theme")).unwrap(), "dark");
}

#[test]
fn test_collections_follow_config() {
    let data = setup();
    fs::write(
        data.path().join("shelf.toml"),
        "collections = [\"favorites\"]\n",
    )
    .unwrap();

    let output = shelf_cmd(&data)
        .args(["collections", "--output", "json"])
        .output()
        .unwrap();
    let summaries: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summaries.as_array().unwrap().len(), 1);
    assert_eq!(summaries[0]["count"], 1);
}

#[test]
fn test_shell_switches_sections() {
    let data = setup();

    shelf_cmd(&data)
        .write_stdin("2\n3\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rust in Action"))
        .stdout(predicate::str::contains("Your reading list is empty."));
}

#[test]
fn test_shell_json_output_is_a_clean_document_stream() {
    let data = setup();

    let output = shelf_cmd(&data)
        .args(["--output", "json", "shell"])
        .write_stdin("2\nq\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let documents: Vec<Value> = serde_json::Deserializer::from_str(&stdout)
        .into_iter::<Value>()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(documents.len(), 2);
    assert_eq!(documents[1]["cards"][0]["id"], "abc123");
}

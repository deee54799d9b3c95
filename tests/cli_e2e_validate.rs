//! End-to-end tests for the `mkpatchlist validate` command.

mod common;
use common::prelude::*;

#[test]
fn test_validate_help() {
    Workspace::new()
        .cmd()
        .arg("validate")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Validate the series catalog without expanding it",
        ));
}

#[test]
fn test_validate_missing_catalog_dir() {
    let temp = assert_fs::TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("mkpatchlist").unwrap();
    cmd.current_dir(temp.path())
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Catalog directory not found"))
        .stderr(predicate::str::contains("hint:"));
}

#[test]
fn test_validate_no_documents() {
    let fixture = Workspace::new();

    fixture
        .cmd()
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No catalog documents"));
}

#[test]
fn test_validate_clean_catalog() {
    let fixture = Workspace::new();
    fixture.catalog_doc("series.yml", "base:\n  feature: {}\n");
    fixture.source_dir("base");
    fixture.source_dir("feature");

    fixture
        .cmd()
        .arg("validate")
        .arg("--strict")
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog is valid"));
}

#[test]
fn test_validate_malformed_document_fails() {
    let fixture = Workspace::new();
    fixture.catalog_doc("bad.yml", "series:\n  - a\n");

    fixture
        .cmd()
        .arg("validate")
        .assert()
        .failure()
        .stdout(predicate::str::contains("[ERR]").or(predicate::str::contains("❌")))
        .stderr(predicate::str::contains("Catalog validation failed"));
}

#[test]
fn test_validate_collision_is_warning() {
    let fixture = Workspace::new();
    fixture.catalog_doc("10-first.yml", "shared: {}\n");
    fixture.catalog_doc("20-second.yml", "shared: {}\n");
    fixture.source_dir("shared");

    // Warning only by default...
    fixture
        .cmd()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("redefined by"))
        .stdout(predicate::str::contains("has warnings"));

    // ...but fatal under --strict.
    fixture
        .cmd()
        .arg("validate")
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("strict mode"));
}

#[test]
fn test_validate_missing_source_directory_is_warning() {
    let fixture = Workspace::new();
    fixture.catalog_doc("series.yml", "ghost: {}\n");

    fixture
        .cmd()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("source directory not found"));

    fixture
        .cmd()
        .arg("validate")
        .arg("--strict")
        .assert()
        .failure();
}

#[test]
fn test_validate_summary_counts() {
    let fixture = Workspace::new();
    fixture.catalog_doc("series.yml", "base extras:\n  feature: {}\n");
    fixture.source_dir("base");
    fixture.source_dir("extras");
    fixture.source_dir("feature");

    fixture
        .cmd()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog documents: 1"))
        .stdout(predicate::str::contains("Top-level series: 1"))
        .stdout(predicate::str::contains("Source directories referenced: 3"));
}

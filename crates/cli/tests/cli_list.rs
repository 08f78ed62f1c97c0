use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::io::Write;
use tempfile::NamedTempFile;

fn card_listing() -> Command {
    let mut cmd = Command::cargo_bin("card-listing").unwrap();
    cmd.env("NO_COLOR", "1").env("RUST_LOG", "off");
    cmd
}

#[test]
fn list_defaults_to_your_tab() {
    card_listing()
        .args(["list", "--delay-ms", "0"])
        .assert()
        .success()
        .stdout(contains("Your cards (3 of 4)"))
        .stdout(contains("Burner Card 1"))
        .stdout(contains("Burner Card 2").not());
}

#[test]
fn list_with_search_and_type_as_json() {
    let output = card_listing()
        .args([
            "list",
            "--delay-ms",
            "0",
            "--tab",
            "all",
            "--search",
            "CARD 2",
            "--card-type",
            "burner",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let view: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = view["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Burner Card 2");
    assert_eq!(rows[0]["status"], "Blocked");
    assert!(view["filter_options"].is_null());
}

#[test]
fn list_reads_data_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"id": 1, "type": "virtual", "name": "Groceries", "spent": 12, "available_to_spend": 88, "status": "Active"}}]"#
    )
    .unwrap();

    card_listing()
        .args(["list", "--data-file"])
        .arg(file.path())
        .args(["--card-type", "virtual", "--show-filters"])
        .assert()
        .success()
        .stdout(contains("Groceries"))
        .stdout(contains("Filter Options"));
}

#[test]
fn unknown_tab_is_rejected() {
    card_listing()
        .args(["list", "--delay-ms", "0", "--tab", "frozen"])
        .assert()
        .failure()
        .stderr(contains("unknown tab"));
}

#[test]
fn options_lists_sentinel_first() {
    card_listing()
        .args(["options", "--delay-ms", "0"])
        .assert()
        .success()
        .stdout(contains("- all\n    - burner\n    - subscription"));
}

#[test]
fn missing_data_file_fails() {
    card_listing()
        .args(["list", "--data-file", "/nonexistent/cards.json"])
        .assert()
        .failure()
        .stderr(contains("Failed to load card file"));
}

#[test]
fn data_file_load_is_logged_to_stderr() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[]").unwrap();

    card_listing()
        .env("RUST_LOG", "info")
        .args(["list", "--data-file"])
        .arg(file.path())
        .assert()
        .success()
        .stderr(contains("Loading cards from"))
        .stdout(contains("Loading cards from").not())
        .stdout(contains("Your cards (0 of 0)"));
}

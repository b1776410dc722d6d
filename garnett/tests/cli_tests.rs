//! CLI Interface E2E Tests
//!
//! These tests run the garnett binary against fixture files and check what
//! it prints, writes and exits with.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get the path to the fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Build a garnett invocation isolated from any user configuration.
fn garnett(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_garnett"));
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("GARNETT_VERBOSE")
        .env_remove("GARNETT_CONFIG")
        .env_remove("GARNETT_NO_COLOR")
        .env_remove("RUST_LOG");
    cmd
}

const COUNTER_PLAIN: &str = "WORD\tclass\nWORD\tCounter\nAT_AT\t@@\nWORD\tcount\nEQUALS\t=\n\
NUMBER\t0\nWORD\tdef\nWORD\tincrement\nL_PAREN\t(\nWORD\tby\nEQUALS\t=\nNUMBER\t1\n\
R_PAREN\t)\nAT_AT\t@@\nWORD\tcount\nPLUS_EQUALS\t+=\nWORD\tby\nWORD\tend\nWORD\tend\n";

#[test]
fn test_cli_help() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    garnett(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("tokenize")));
}

#[test]
fn test_cli_version() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    garnett(temp_dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("garnett"));
}

#[test]
fn test_cli_tokenize_plain() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    garnett(temp_dir.path())
        .arg("tokenize")
        .arg(fixtures_dir().join("counter.rb"))
        .args(["--format", "plain"])
        .assert()
        .success()
        .stdout(COUNTER_PLAIN)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_cli_tokenize_pretty_is_default() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    garnett(temp_dir.path())
        .arg("tokenize")
        .arg(fixtures_dir().join("counter.rb"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "{type: \"WORD\", value: \"class\"}\n{type: \"WORD\", value: \"Counter\"}\n",
        ))
        .stdout(predicate::str::contains("{type: \"PLUS_EQUALS\", value: \"+=\"}"));
}

#[test]
fn test_cli_tokenize_stdin() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    garnett(temp_dir.path())
        .args(["tokenize", "-", "-F", "plain"])
        .write_stdin("x ||= [1.5, :y]")
        .assert()
        .success()
        .stdout(
            "WORD\tx\nPIPE_PIPE\t||\nEQUALS\t=\nL_SQUARE_PAREN\t[\nNUMBER\t1.5\nCOMMA\t,\n\
             COLON\t:\nWORD\ty\nR_SQUARE_PAREN\t]\n",
        );
}

#[test]
fn test_cli_tokenize_json_multiple_files_in_order() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let second = temp_dir.path().join("second.rb");
    std::fs::write(&second, "puts 42\n").expect("Failed to write source");

    let output = garnett(temp_dir.path())
        .arg("tokenize")
        .arg(fixtures_dir().join("counter.rb"))
        .arg(&second)
        .args(["-F", "json", "-j", "2"])
        .output()
        .expect("Failed to run garnett");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be JSON");
    let files = value.as_array().expect("Output should be an array");
    assert_eq!(files.len(), 2);
    assert_eq!(files[0]["tokens"].as_array().map(Vec::len), Some(19));
    assert_eq!(files[1]["file"], second.display().to_string());
    assert_eq!(files[1]["tokens"][1]["type"], "NUMBER");
    assert_eq!(files[1]["tokens"][1]["value"], "42");
}

#[test]
fn test_cli_tokenize_output_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("out").join("tokens.tsv");

    garnett(temp_dir.path())
        .arg("tokenize")
        .arg(fixtures_dir().join("counter.rb"))
        .args(["-F", "plain", "-o"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&output_path).expect("Output file should exist");
    assert_eq!(written, COUNTER_PLAIN);

    garnett(temp_dir.path())
        .arg("tokenize")
        .arg(fixtures_dir().join("counter.rb"))
        .arg("-o")
        .arg(&output_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_cli_tokenize_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    garnett(temp_dir.path())
        .args(["tokenize", "does_not_exist.rb"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_cli_tokenize_unknown_format() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    garnett(temp_dir.path())
        .arg("tokenize")
        .arg(fixtures_dir().join("counter.rb"))
        .args(["-F", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format"));
}

#[test]
fn test_cli_tokenize_verbose_logs_to_stderr() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    garnett(temp_dir.path())
        .args(["--verbose", "--no-color", "tokenize"])
        .arg(fixtures_dir().join("counter.rb"))
        .args(["-F", "plain"])
        .assert()
        .success()
        .stdout(COUNTER_PLAIN)
        .stderr(predicate::str::contains("tokenized"));
}

#[test]
fn test_cli_config_file_sets_default_format() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("custom.toml");
    std::fs::write(&config_path, "[tokenize]\nformat = \"plain\"\njobs = 1\n")
        .expect("Failed to write config");

    garnett(temp_dir.path())
        .arg("--config")
        .arg(&config_path)
        .args(["tokenize", "-"])
        .write_stdin("a.b")
        .assert()
        .success()
        .stdout("WORD\ta\nDOT\t.\nWORD\tb\n");
}

#[test]
fn test_cli_config_in_current_dir_is_picked_up() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(
        temp_dir.path().join("garnett.toml"),
        "[tokenize]\nformat = \"json\"\n",
    )
    .expect("Failed to write config");

    garnett(temp_dir.path())
        .args(["tokenize", "-"])
        .write_stdin("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"NUMBER\""));
}

#[test]
fn test_cli_malformed_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("broken.toml");
    std::fs::write(&config_path, "[tokenize\n").expect("Failed to write config");

    garnett(temp_dir.path())
        .arg("--config")
        .arg(&config_path)
        .arg("kinds")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_cli_kinds_plain() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    garnett(temp_dir.path())
        .args(["kinds", "-F", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("WORD\t\nNUMBER\t\nCOLON\t:\n"))
        .stdout(predicate::str::contains("AT_AT\t@@\n"));
}

#[test]
fn test_cli_init_writes_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    garnett(temp_dir.path()).arg("init").assert().success();

    let written = std::fs::read_to_string(temp_dir.path().join("garnett.toml"))
        .expect("garnett.toml should exist");
    assert!(written.contains("[tokenize]"));
    assert!(written.contains("format = \"pretty\""));

    garnett(temp_dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    garnett(temp_dir.path()).args(["init", "--force"]).assert().success();
}

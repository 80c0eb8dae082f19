//! CLI integration tests
//!
//! End-to-end tests for CLI commands using assert_cmd.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the switchboard binary for testing
fn switchboard_cmd() -> Command {
    let mut cmd = Command::cargo_bin("switchboard").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("SWITCHBOARD_LOG_LEVEL")
        .env_remove("SWITCHBOARD_LOG_FORMAT");
    cmd
}

/// Write the example config into a temp dir and return its path
fn example_config(temp_dir: &TempDir) -> PathBuf {
    let path = temp_dir.path().join("switchboard.toml");
    std::fs::write(&path, common::EXAMPLE_CONFIG).unwrap();
    path
}

#[test]
fn test_version_output() {
    switchboard_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("switchboard"));
}

#[test]
fn test_help_shows_all_commands() {
    switchboard_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("route"))
        .stdout(predicate::str::contains("agents"))
        .stdout(predicate::str::contains("classify"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_route_help() {
    switchboard_cmd()
        .args(["route", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--skill"))
        .stdout(predicate::str::contains("--message"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_config_init_creates_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("switchboard.toml");

    switchboard_cmd()
        .args(["config", "init", "-o", config_path.to_str().unwrap()])
        .assert()
        .success();

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[[agents]]"));
}

#[test]
fn test_config_init_no_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("switchboard.toml");
    std::fs::write(&config_path, "existing content").unwrap();

    switchboard_cmd()
        .args(["config", "init", "-o", config_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert_eq!(content, "existing content");
}

#[test]
fn test_route_json_picks_technician() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = example_config(&temp_dir);

    let output = switchboard_cmd()
        .args([
            "route",
            "--skill",
            "technical",
            "--json",
            "-c",
            config_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["decision"]["outcome"], "assigned");
    assert_eq!(parsed["decision"]["agent_id"], "agent-1");
    assert_eq!(parsed["decision"]["fallback"], false);
}

#[test]
fn test_route_message_text_output() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = example_config(&temp_dir);

    switchboard_cmd()
        .args([
            "route",
            "-m",
            "I want to cancel my subscription",
            "-c",
            config_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("cancellation"))
        .stdout(predicate::str::contains("agent-3"));
}

#[test]
fn test_route_without_config_reports_no_agent() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.toml");

    switchboard_cmd()
        .args([
            "route",
            "--skill",
            "billing",
            "--json",
            "-c",
            missing.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("no_eligible_agent"));
}

#[test]
fn test_route_rejects_unknown_skill() {
    switchboard_cmd()
        .args(["route", "--skill", "plumbing"])
        .assert()
        .failure();
}

#[test]
fn test_route_invalid_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("switchboard.toml");
    std::fs::write(
        &config_path,
        "[routing.weights]\nskill = 0.9\nload = 0.9\nperformance = 0.9\n",
    )
    .unwrap();

    switchboard_cmd()
        .args(["route", "-c", config_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_agents_list_available_json() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = example_config(&temp_dir);

    let output = switchboard_cmd()
        .args([
            "agents",
            "list",
            "--available",
            "--json",
            "-c",
            config_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let ids: Vec<&str> = parsed["agents"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["agent-1", "agent-3", "agent-5"]);
}

#[test]
fn test_classify_escalates_complaint() {
    switchboard_cmd()
        .args(["classify", "Bu hizmetten hiç memnun değilim, şikayet etmek istiyorum", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"should_escalate\": true"));
}

#[test]
fn test_classify_unknown_message() {
    switchboard_cmd()
        .args(["classify", "qwerty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown"));
}

#[test]
fn test_completions_bash() {
    switchboard_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("switchboard"));
}

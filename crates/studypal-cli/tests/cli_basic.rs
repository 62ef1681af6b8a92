//! Basic CLI E2E tests.
//!
//! Tests drive the built binary with piped stdin and verify outputs.

use std::io::Write;
use std::process::{Command, Stdio};

/// Run an interactive session fed from `script`; returns (stdout, stderr, code).
fn run_session(script: &str) -> (String, String, i32) {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("config.toml");
    let mut child = Command::new(env!("CARGO_BIN_EXE_studypal"))
        .arg("--config")
        .arg(&config)
        .env("STUDYPAL_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn studypal");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(script.as_bytes())
        .expect("write script");
    let output = child.wait_with_output().expect("wait for studypal");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);
    (stdout, stderr, code)
}

#[test]
fn test_subject_cascade() {
    let (stdout, _, code) = run_session(
        "subject add Art\n\
         task add --subject Art --deadline 2030-01-01 Draw a cat\n\
         subject remove Art\n\
         task list\n\
         quit\n",
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("\"subject_added\""), "{stdout}");
    assert!(stdout.contains("\"tasks_removed\": 1"), "{stdout}");
    assert!(stdout.trim_end().ends_with("[]"), "{stdout}");
}

#[test]
fn test_errors_do_not_end_session() {
    let (stdout, _, code) = run_session(
        "subject remove General\n\
         timer cancel\n\
         task add --subject Nowhere Read\n\
         pet\n",
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("error: subject 'General' is permanent"), "{stdout}");
    assert!(stdout.contains("error: no focus session is running"), "{stdout}");
    assert!(stdout.contains("error: unknown subject: 'Nowhere'"), "{stdout}");
    assert!(stdout.contains("\"Egg\""), "{stdout}");
}

#[test]
fn test_timer_start_and_status() {
    let (stdout, _, code) = run_session("timer start Math\ntimer status\ntimer start Math\n");
    assert_eq!(code, 0);
    assert!(stdout.contains("\"timer_started\""), "{stdout}");
    assert!(stdout.contains("\"state\": \"running\""), "{stdout}");
    assert!(stdout.contains("error: a focus session is already running"), "{stdout}");
}

#[test]
fn test_config_path_override() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("config.toml");
    let output = Command::new(env!("CARGO_BIN_EXE_studypal"))
        .args(["config", "set", "dashboard.upcoming_limit", "3", "--config"])
        .arg(&config)
        .env("STUDYPAL_LOG", "off")
        .output()
        .expect("Failed to execute CLI command");
    assert!(output.status.success());
    let written = std::fs::read_to_string(&config).unwrap();
    assert!(written.contains("upcoming_limit = 3"), "{written}");
}

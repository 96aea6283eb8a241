//! Smoke tests for the geochat binary.
//!
//! These run the built binary directly; none of them need a server.

use std::path::PathBuf;
use std::process::Command;

fn geochat_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove 'deps' directory
    path.push("geochat");
    path
}

#[test]
fn help_lists_the_session_commands() {
    let output = Command::new(geochat_bin())
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["chat", "upload", "query", "status"] {
        assert!(stdout.contains(command), "help should mention {command}");
    }
}

#[test]
fn status_runs_without_a_server() {
    let output = Command::new(geochat_bin())
        .arg("status")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Server"));
    assert!(stdout.contains("No asset uploaded yet"));
}

#[test]
fn status_json_output_is_valid() {
    let output = Command::new(geochat_bin())
        .args(["status", "--json"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("Output should be valid JSON");

    assert!(parsed.get("status").is_some(), "Should have status field");
    assert!(parsed.get("data").is_some(), "Should have data field");
}

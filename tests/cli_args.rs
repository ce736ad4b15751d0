//! Tests for CLI argument parsing and one-shot command failures.
//!
//! These run the built binary; none of them starts the interactive UI.

mod common;

use common::temp_config;
use std::process::Command;

fn stackbrowse_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_stackbrowse"))
}

/// Config whose API host refuses connections; the log file stays in the
/// temp dir.
fn unreachable_config() -> (tempfile::TempDir, std::path::PathBuf) {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("test.log");
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        format!(
            "[api]\nbase_url = \"http://127.0.0.1:{}\"\nconnect_timeout_seconds = 1\ntimeout_seconds = 2\n\n[logging]\nfile = {:?}\n",
            port,
            log.to_string_lossy()
        ),
    )
    .unwrap();
    (dir, path)
}

#[test]
fn test_help_lists_commands() {
    let output = stackbrowse_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("search"));
    assert!(stdout.contains("recent"));
    assert!(stdout.contains("show"));
    assert!(stdout.contains("--no-connectivity-check"));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let (_dir, path) = temp_config("[api]\npage_size = 0\n");
    let output = stackbrowse_cmd()
        .arg("--config")
        .arg(&path)
        .arg("recent")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.starts_with("Error: Config validation failed"),
        "got: {}",
        stderr
    );
}

#[test]
fn test_blank_site_override_is_rejected() {
    let (_dir, path) = unreachable_config();
    let output = stackbrowse_cmd()
        .arg("--config")
        .arg(&path)
        .args(["--site", " ", "recent"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("api.site must not be empty"), "got: {}", stderr);
}

#[test]
fn test_unknown_sort_shows_clap_error() {
    let output = stackbrowse_cmd()
        .args(["show", "1", "--sort", "newest"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown answer order"), "got: {}", stderr);
}

#[test]
fn test_unreachable_host_reports_network_error() {
    let (_dir, path) = unreachable_config();
    let output = stackbrowse_cmd()
        .arg("--config")
        .arg(&path)
        .args(["--no-connectivity-check", "search", "borrow", "checker"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: Network error:"), "got: {}", stderr);
}

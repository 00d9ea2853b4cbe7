//! Runs the built binary. None of these reach the terminal UI.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn deck_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_clasy-deck"));
    // Keep the user's own config out of the picture.
    let home = std::env::temp_dir().join("clasy-deck-cli-tests");
    cmd.env("XDG_CONFIG_HOME", &home).env("HOME", &home);
    cmd
}

#[test]
fn test_help_lists_options() {
    let output = deck_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--transition-ms"));
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--log-file"));
    assert!(stdout.contains("--list"));
}

#[test]
fn test_list_prints_titles_in_order() {
    let output = deck_cmd()
        .arg("--list")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "1. Portada");
    assert_eq!(lines[5], "6. Go-To-Market y Tracción");
    assert_eq!(lines[9], "10. Próximos Pasos");
}

#[test]
fn test_zero_transition_exits_with_error() {
    let output = deck_cmd()
        .args(["--transition-ms", "0", "--list"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "got: {stderr}");
    assert!(stderr.contains("transition_ms"), "got: {stderr}");
}

#[test]
fn test_broken_config_file_exits_with_error() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[deck]\ntransition_ms = -3\n").expect("write config");

    let output = deck_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--list")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "got: {stderr}");
}

#[test]
fn test_non_numeric_transition_is_rejected_by_parser() {
    let output = deck_cmd()
        .args(["--transition-ms", "fast"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid value"), "got: {stderr}");
}

#[test]
fn test_flag_overrides_out_of_range_file_value() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[deck]\ntransition_ms = 9000\n").expect("write config");

    let output = deck_cmd()
        .arg("--config")
        .arg(&path)
        .args(["--transition-ms", "300", "--list"])
        .output()
        .expect("Failed to execute command");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "got: {stderr}");
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("1. Portada"));

    let output = deck_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--list")
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(1));
}

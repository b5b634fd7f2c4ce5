//! CLI E2E tests for config loading and export.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn fixture_path(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../crates/testkit/fixtures")
        .join(relative)
}

fn msglog(args: &[&str], env: &[(&str, &str)]) -> io::Result<Output> {
    let mut command = Command::new(env!("CARGO_BIN_EXE_msglog"));
    command
        .args(args)
        .env_remove("MSGLOG_LEVEL")
        .env_remove("MSGLOG_FORMAT")
        .env_remove("MSGLOG_ID_TEMPLATE")
        .env_remove("MSGLOG_INCLUDE_LOCATION");
    for (key, value) in env {
        command.env(key, value);
    }
    command.output()
}

fn stdout_json(output: &Output) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("command failed: {stderr}").into());
    }
    Ok(serde_json::from_slice(&output.stdout)?)
}

#[test]
fn show_applies_env_overrides() -> Result<(), Box<dyn std::error::Error>> {
    let path = fixture_path("config/logger-config.valid.json");
    let path = path.to_string_lossy();
    let output = msglog(&["--config", &path, "config", "show"], &[(
        "MSGLOG_LEVEL",
        "warn",
    )])?;
    let config = stdout_json(&output)?;

    assert_eq!(config["level"]["minimum"], "WARN");
    assert_eq!(config["id"]["template"], "senzing-9999%04d");
    Ok(())
}

#[test]
fn show_supports_toml() -> Result<(), Box<dyn std::error::Error>> {
    let output = msglog(&["config", "show", "--format", "toml"], &[])?;
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("[output]"), "toml: {text}");
    Ok(())
}

#[test]
fn schema_is_json() -> Result<(), Box<dyn std::error::Error>> {
    let output = msglog(&["config", "schema"], &[])?;
    let schema = stdout_json(&output)?;
    assert!(schema["properties"]["status"].is_object());
    Ok(())
}

#[test]
fn invalid_and_missing_configs_have_distinct_exit_codes() -> io::Result<()> {
    let invalid = fixture_path("config/logger-config.invalid.json");
    let output = msglog(&["--config", &invalid.to_string_lossy(), "config", "show"], &[])?;
    assert_eq!(output.status.code(), Some(2));

    let missing = fixture_path("config/does-not-exist.json");
    let output = msglog(&["--config", &missing.to_string_lossy(), "config", "show"], &[])?;
    assert_eq!(output.status.code(), Some(3));

    let output = msglog(&["config", "show"], &[("MSGLOG_INCLUDE_LOCATION", "sometimes")])?;
    assert_eq!(output.status.code(), Some(2));
    Ok(())
}

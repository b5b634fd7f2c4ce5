//! CLI E2E tests for record emission and resolution.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn fixture_config() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../crates/testkit/fixtures/config/logger-config.valid.json")
}

fn msglog(args: &[&str]) -> io::Result<Output> {
    let config = fixture_config();
    Command::new(env!("CARGO_BIN_EXE_msglog"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("MSGLOG_LEVEL")
        .env_remove("MSGLOG_FORMAT")
        .env_remove("MSGLOG_ID_TEMPLATE")
        .env_remove("MSGLOG_INCLUDE_LOCATION")
        .output()
}

fn stdout(output: &Output) -> io::Result<String> {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(io::Error::other(format!("command failed: {stderr}")));
    }
    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

#[test]
fn emit_renders_json_records() -> io::Result<()> {
    let output = msglog(&["emit", "2000", "abc", "--error", "0019E|Configuration not found"])?;
    assert_eq!(
        stdout(&output)?,
        concat!(
            r#"{"level":"ERROR","id":"senzing-99992000","text":"Value: ","#,
            r#""status":"ERROR_unrecoverable","errors":[{"text":"0019E|Configuration not found"}],"#,
            r#""details":{"1":"abc"}}"#,
            "\n"
        )
    );
    Ok(())
}

#[test]
fn emit_honors_level_override_and_terse_output() -> io::Result<()> {
    let output = msglog(&["--output", "terse", "emit", "1", "Bob", "--level", "warn"])?;
    assert_eq!(
        stdout(&output)?,
        "senzing-99990001: (Status for 0001) Info for Bob {\"1\":\"Bob\"}\n"
    );
    Ok(())
}

#[test]
fn resolve_reports_the_fields() -> Result<(), Box<dyn std::error::Error>> {
    let output = msglog(&["resolve", "1500", "--marker", "1000", "disk"])?;
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)?)?;

    assert_eq!(value["level"], "WARN");
    assert_eq!(value["status"], "WARN");
    assert_eq!(value["text"], "Warning for disk");
    assert_eq!(value["enabled"], true);
    Ok(())
}

#[test]
fn bad_level_is_invalid_input() -> io::Result<()> {
    let output = msglog(&["emit", "1", "--level", "loud"])?;
    assert_eq!(output.status.code(), Some(2));
    Ok(())
}

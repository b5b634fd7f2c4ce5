//! CLI E2E smoke tests.

use std::io;
use std::process::{Command, Output};

fn msglog(args: &[&str]) -> io::Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_msglog"))
        .args(args)
        .env_remove("MSGLOG_LEVEL")
        .env_remove("MSGLOG_FORMAT")
        .env_remove("MSGLOG_ID_TEMPLATE")
        .env_remove("MSGLOG_INCLUDE_LOCATION")
        .env_remove("RUST_LOG")
        .output()
}

fn run_demo() -> io::Result<String> {
    let output = msglog(&["demo"])?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(io::Error::other(format!("demo failed: {stderr}")));
    }
    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

#[test]
fn demo_is_deterministic() -> io::Result<()> {
    let first = run_demo()?;
    let second = run_demo()?;

    assert_eq!(first, second, "demo output should be deterministic");
    assert!(first.ends_with("{\"text\":\"hello\"}\n"), "demo: {first}");
    Ok(())
}

#[test]
fn unknown_subcommand_fails() -> io::Result<()> {
    let output = msglog(&["frobnicate"])?;
    assert!(!output.status.success());
    Ok(())
}

//! Integration tests for env parsing and env-to-config merging.

use msglog_config::{
    ConfigFormat, EnvParseError, LoggerConfig, LoggerEnv, RecordFormat, apply_env_overrides,
    load_logger_config_from_path, load_logger_config_from_sources,
};
use msglog_domain::Severity;
use msglog_shared::{ErrorCode, ErrorEnvelope};
use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| manifest_dir.to_path_buf())
}

fn fixture_path(relative: &str) -> PathBuf {
    workspace_root()
        .join("crates")
        .join("testkit")
        .join("fixtures")
        .join(relative)
}

fn read_env_map(relative: &str) -> Result<BTreeMap<String, String>, Box<dyn Error>> {
    let contents = fs::read_to_string(fixture_path(relative))?;
    Ok(serde_json::from_str(&contents)?)
}

#[test]
fn env_fixtures_merge_into_effective_config() -> Result<(), Box<dyn Error>> {
    let env = LoggerEnv::from_map(&read_env_map("env/logger-env.valid.json")?)?;
    let config = apply_env_overrides(LoggerConfig::default(), &env)?;

    assert_eq!(config.tables().minimum, Severity::Warn);
    assert_eq!(config.output.format, RecordFormat::Terse);
    assert!(config.output.include_location);
    assert_eq!(config.id.template.as_deref(), Some("app-%05d"));
    Ok(())
}

#[test]
fn env_fixture_overrides_file_fixture() -> Result<(), Box<dyn Error>> {
    let env = LoggerEnv::from_map(&read_env_map("env/logger-env.valid.json")?)?;
    let config = load_logger_config_from_path(
        Some(&fixture_path("config/logger-config.valid.json")),
        &env,
    )?;

    assert_eq!(config.tables().minimum, Severity::Warn);
    assert_eq!(config.tables().id_template.as_deref(), Some("app-%05d"));
    assert_eq!(config.tables().templates.len(), 4);
    Ok(())
}

#[test]
fn invalid_env_fixture_is_rejected() -> Result<(), Box<dyn Error>> {
    let map = read_env_map("env/logger-env.invalid.json")?;
    let error = LoggerEnv::from_map(&map)
        .err()
        .ok_or_else(|| std::io::Error::other("expected env error"))?;

    assert!(matches!(error, EnvParseError::InvalidBool { .. }));
    let envelope = ErrorEnvelope::from(error);
    assert_eq!(envelope.code, ErrorCode::new("config", "invalid_env_bool"));
    assert_eq!(
        envelope.metadata.get("value").map(String::as_str),
        Some("sometimes")
    );
    Ok(())
}

#[test]
fn missing_file_maps_to_not_found() {
    let error = load_logger_config_from_path(
        Some(Path::new("/definitely/not/here/logger.json")),
        &LoggerEnv::default(),
    )
    .err();
    assert_eq!(
        error.map(|error| error.code),
        Some(ErrorCode::new("config", "config_file_not_found"))
    );
}

#[test]
fn defaults_load_without_sources() -> Result<(), Box<dyn Error>> {
    let config = load_logger_config_from_sources(None, ConfigFormat::Json, &LoggerEnv::default())?;
    assert_eq!(config.as_ref(), &LoggerConfig::default());
    Ok(())
}

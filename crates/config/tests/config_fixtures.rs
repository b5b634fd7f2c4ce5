//! Integration tests for parsing config fixtures from the workspace testkit.

use msglog_config::{
    CURRENT_CONFIG_VERSION, LevelStrategy, RecordFormat, SinkTarget, StatusStrategy,
    parse_logger_config_json, parse_logger_config_toml,
};
use msglog_domain::{MessageNumber, Severity, Status, StatusBucket};
use msglog_shared::ErrorCode;
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

fn read_fixture(relative: &str) -> Result<String, Box<dyn Error>> {
    let path = workspace_root()
        .join("crates")
        .join("testkit")
        .join("fixtures")
        .join(relative);
    Ok(fs::read_to_string(path)?)
}

#[test]
fn parses_valid_fixture_and_normalizes() -> Result<(), Box<dyn Error>> {
    let contents = read_fixture("config/logger-config.valid.json")?;
    let config = parse_logger_config_json(&contents)?;

    assert_eq!(config.version, CURRENT_CONFIG_VERSION);
    assert_eq!(config.level.strategy, LevelStrategy::Ranges);
    assert_eq!(config.level.minimum, "DEBUG", "minimum should be trimmed");
    assert_eq!(config.status.strategy, StatusStrategy::DomainCode);
    assert_eq!(config.output.sink, SinkTarget::Stdout);

    let tables = config.tables();
    assert_eq!(tables.minimum, Severity::Debug);
    assert_eq!(
        tables.level_ranges.lookup(MessageNumber::new(4001)),
        Some(&Severity::Trace)
    );
    assert_eq!(
        tables.status_ranges.lookup(MessageNumber::new(1500)),
        Some(&Status::Bucket(StatusBucket::Warn))
    );
    assert_eq!(
        tables.id_statuses.get(&MessageNumber::new(2)),
        Some(&Status::from("Status for 0002"))
    );
    assert_eq!(tables.templates.len(), 4);
    assert_eq!(tables.id_template.as_deref(), Some("senzing-9999%04d"));
    assert_eq!(tables.domain_codes.len(), 5);

    Ok(())
}

#[test]
fn parses_default_toml_fixture() -> Result<(), Box<dyn Error>> {
    let contents = read_fixture("config/logger-config.default.toml")?;
    let config = parse_logger_config_toml(&contents)?;

    assert_eq!(config.output.format, RecordFormat::Terse);
    assert!(config.level.use_standard_ranges);
    assert_eq!(
        config.tables().level_ranges.lookup(MessageNumber::new(6001)),
        Some(&Severity::Panic)
    );
    assert!(config.tables().templates.is_empty());

    Ok(())
}

#[test]
fn invalid_fixture_reports_threshold() -> Result<(), Box<dyn Error>> {
    let contents = read_fixture("config/logger-config.invalid.json")?;
    let error = parse_logger_config_json(&contents)
        .err()
        .ok_or_else(|| std::io::Error::other("expected validation error"))?;

    assert_eq!(error.code, ErrorCode::new("config", "invalid_threshold"));
    assert_eq!(
        error.metadata.get("key").map(String::as_str),
        Some("two thousand")
    );
    assert_eq!(
        error.metadata.get("field").map(String::as_str),
        Some("ranges")
    );

    Ok(())
}

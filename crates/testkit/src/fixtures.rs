//! Workspace fixture files and the sample tables the scenarios share.

use msglog_domain::{MessageTemplates, RangeTable, Severity, Status, StatusBucket};
use std::path::{Path, PathBuf};

/// Directory holding `config/` and `env/` fixtures.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Absolute path of a fixture, e.g. `config/logger-config.valid.json`.
pub fn fixture_path(relative: &str) -> PathBuf {
    fixtures_dir().join(relative)
}

/// Read a fixture as text.
pub fn read_fixture(relative: &str) -> std::io::Result<String> {
    std::fs::read_to_string(fixture_path(relative))
}

/// `{0: INFO, 1000: WARN, 2000: ERROR}`
pub fn sample_level_ranges() -> RangeTable<Severity> {
    RangeTable::new()
        .with(0, Severity::Info)
        .with(1000, Severity::Warn)
        .with(2000, Severity::Error)
}

/// Status ranges mirroring [`sample_level_ranges`].
pub fn sample_status_ranges() -> RangeTable<Status> {
    RangeTable::new()
        .with(0, Status::from(StatusBucket::Info))
        .with(1000, Status::from(StatusBucket::Warn))
        .with(2000, Status::from(StatusBucket::Error))
}

/// Templates used across scenario tests.
pub fn sample_templates() -> MessageTemplates {
    MessageTemplates::new()
        .with(0, "Info for %s")
        .with(1, "Info for %s")
        .with(1000, "Warning for %s")
        .with(1500, "Widget %s")
        .with(2000, "Value: %d")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_are_readable() -> Result<(), Box<dyn std::error::Error>> {
        let contents = read_fixture("config/logger-config.valid.json")?;
        assert!(contents.contains("\"version\": 1"));
        Ok(())
    }
}

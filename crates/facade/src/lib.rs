//! # msglog-facade
//!
//! Facade API for consumers (CLI and embedding applications).
//! This crate depends on `adapters`, `config`, and `app`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod global;
pub mod handle;
pub mod wiring;

pub use global::{default_logger, install_default_logger, is_enabled, log, set_level};
pub use handle::MessageLoggerHandle;
pub use wiring::{
    StrategySelection, build_renderer, build_sink, build_stamps, build_strategies,
};

pub use msglog_adapters::IdStatusTable;
pub use msglog_app::{Composed, LeveledLogger, LoggedError, MessageLogger};
pub use msglog_config::{
    LoggerConfig, LoggerEnv, RecordFormat, ValidatedLoggerConfig, load_logger_config_from_path,
    logger_config_schema, parse_logger_config_json, to_pretty_json, to_pretty_toml,
    to_pretty_yaml,
};
pub use msglog_domain::{
    Detail, MessageNumber, MessageTemplates, RangeTable, Severity, Status, StatusBucket,
};
pub use msglog_ports::{Record, RecordRenderer, ResolveError};
pub use msglog_shared::{ErrorEnvelope, ErrorKind};

use std::path::Path;

/// Load the effective config (file, then `MSGLOG_*` env) and build a logger from it.
pub fn load_logger(config_path: Option<&Path>) -> Result<MessageLoggerHandle, ErrorEnvelope> {
    let config = msglog_config::load_logger_config_std_env(config_path)?;
    Ok(MessageLoggerHandle::from_config(&config))
}

/// Returns the facade crate version.
#[must_use]
pub const fn facade_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

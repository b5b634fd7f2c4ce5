//! # msglog-config
//!
//! Logger configuration schema, validation, and loading.
//! This crate depends on `domain` and `shared` only.

/// Environment variable parsing and merging.
pub mod env;
/// JSON Schema export.
pub mod json_schema;
/// Config loading helpers (file + env).
pub mod load;
/// Configuration schema types and helpers.
pub mod schema;

pub use env::{
    ENV_FORMAT, ENV_ID_TEMPLATE, ENV_INCLUDE_LOCATION, ENV_LEVEL, EnvParseError, LoggerEnv,
    apply_env_overrides,
};
pub use json_schema::logger_config_schema;
pub use load::{
    ConfigFormat, load_logger_config_from_path, load_logger_config_from_sources,
    load_logger_config_std_env, to_pretty_json, to_pretty_toml, to_pretty_yaml,
};
pub use schema::{
    CURRENT_CONFIG_VERSION, ConfigSchemaError, IdConfig, LevelConfig, LevelStrategy,
    LoggerConfig, LoggerTables, OutputConfig, RecordFormat, SinkTarget, StatusConfig,
    StatusStrategy, TextConfig, TextStrategy, ValidatedLoggerConfig, parse_logger_config_json,
    parse_logger_config_toml,
};

/// Returns the config crate version.
#[must_use]
pub const fn config_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

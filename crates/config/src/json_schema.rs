//! JSON Schema export for the logger config.

use crate::LoggerConfig;
use schemars::{Schema, schema_for};

/// JSON Schema for `LoggerConfig`.
#[must_use]
pub fn logger_config_schema() -> Schema {
    schema_for!(LoggerConfig)
}

//! Logger configuration schema, defaults, validation, and normalization.
//!
//! - Deserialization uses `serde` (JSON or TOML).
//! - Range tables are keyed by the threshold written as a string, since
//!   neither JSON nor TOML allows integer keys.
//! - Validation is manual and returns typed errors mapped to `ErrorEnvelope`.
//! - A validated config carries the parsed domain tables.

use msglog_domain::{
    DomainCodeTable, MessageNumber, MessageTemplates, RangeTable, Severity, Status, StatusBucket,
    standard_level_ranges,
};
use msglog_shared::{ErrorCode, ErrorEnvelope};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Current supported configuration schema version.
pub const CURRENT_CONFIG_VERSION: u32 = 1;

/// Top-level logger configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct LoggerConfig {
    /// Schema version for forward-compatible migrations.
    pub version: u32,
    /// Level resolution and gating.
    pub level: LevelConfig,
    /// Status resolution.
    pub status: StatusConfig,
    /// Text templates.
    pub text: TextConfig,
    /// Message identifiers.
    pub id: IdConfig,
    /// Rendering and sink selection.
    pub output: OutputConfig,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            version: CURRENT_CONFIG_VERSION,
            level: LevelConfig::default(),
            status: StatusConfig::default(),
            text: TextConfig::default(),
            id: IdConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Level strategy selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum LevelStrategy {
    /// Explicit override, then range table, then default.
    #[default]
    Ranges,
    /// Always the configured default.
    Static,
    /// Explicit override, then the level implied by the resolved status.
    FromStatus,
}

/// Level section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct LevelConfig {
    /// Which level resolver to use.
    pub strategy: LevelStrategy,
    /// Minimum severity that gets emitted.
    pub minimum: String,
    /// Level used when nothing else applies.
    pub default: String,
    /// Start from the standard ranges (explicit `ranges` entries win).
    pub use_standard_ranges: bool,
    /// Threshold to severity name.
    pub ranges: BTreeMap<String, String>,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            strategy: LevelStrategy::Ranges,
            minimum: Severity::Info.as_str().to_string(),
            default: Severity::Info.as_str().to_string(),
            use_standard_ranges: false,
            ranges: BTreeMap::new(),
        }
    }
}

/// Status strategy selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum StatusStrategy {
    /// Records never carry a status.
    Null,
    /// Per-message-number table only.
    ById,
    /// Range table only.
    ByRange,
    /// Domain codes, then per-id table, then ranges.
    #[default]
    DomainCode,
}

/// Status section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct StatusConfig {
    /// Which status resolver to use.
    pub strategy: StatusStrategy,
    /// Separates the domain code from the rest of an error message.
    pub delimiter: String,
    /// Threshold to status text.
    pub ranges: BTreeMap<String, String>,
    /// Message number to status text, used verbatim.
    pub ids: BTreeMap<String, String>,
    /// Domain error code to status bucket; the built-in table when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codes: Option<BTreeMap<String, String>>,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            strategy: StatusStrategy::DomainCode,
            delimiter: msglog_domain::DEFAULT_CODE_DELIMITER.to_string(),
            ranges: BTreeMap::new(),
            ids: BTreeMap::new(),
            codes: None,
        }
    }
}

/// Text strategy selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum TextStrategy {
    /// Records never carry text.
    Null,
    /// Printf-style templates keyed by message number.
    #[default]
    Templated,
}

/// Text section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct TextConfig {
    /// Which text resolver to use.
    pub strategy: TextStrategy,
    /// Message number to template.
    pub templates: BTreeMap<String, String>,
}

/// Id section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct IdConfig {
    /// Printf-style template applied to the message number, e.g. `senzing-9999%04d`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

/// Rendering format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum RecordFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// `id: (status) text {details}`.
    Terse,
}

impl RecordFormat {
    /// Stable string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Terse => "terse",
        }
    }

    /// Parse a format name (case-insensitive).
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "terse" => Some(Self::Terse),
            _ => None,
        }
    }
}

impl fmt::Display for RecordFormat {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Where rendered lines go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum SinkTarget {
    /// Standard error.
    #[default]
    Stderr,
    /// Standard output.
    Stdout,
}

/// Output section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct OutputConfig {
    /// Rendering format.
    pub format: RecordFormat,
    /// Sink selection.
    pub sink: SinkTarget,
    /// Stamp records with the UTC date.
    pub include_date: bool,
    /// Stamp records with the UTC time.
    pub include_time: bool,
    /// Stamp records with the calling `file:line`.
    pub include_location: bool,
}

// =============================================================================
// VALIDATION
// =============================================================================

impl LoggerConfig {
    /// Validate and normalize the config.
    pub fn validate_and_normalize(mut self) -> Result<ValidatedLoggerConfig, ConfigSchemaError> {
        self.validate_version()?;
        self.normalize();

        let tables = LoggerTables::new(&self)?;
        Ok(ValidatedLoggerConfig { raw: self, tables })
    }

    const fn validate_version(&self) -> Result<(), ConfigSchemaError> {
        if self.version != CURRENT_CONFIG_VERSION {
            return Err(ConfigSchemaError::UnsupportedVersion {
                found: self.version,
                supported: CURRENT_CONFIG_VERSION,
            });
        }
        Ok(())
    }

    fn normalize(&mut self) {
        normalize_severity_name(&mut self.level.minimum);
        normalize_severity_name(&mut self.level.default);
        for value in self.level.ranges.values_mut() {
            normalize_severity_name(value);
        }
        if let Some(template) = self.id.template.as_mut() {
            let trimmed = template.trim();
            if trimmed.len() != template.len() {
                *template = trimmed.to_string();
            }
        }
    }
}

/// Validated config wrapper carrying the parsed tables.
#[derive(Debug, Clone)]
pub struct ValidatedLoggerConfig {
    raw: LoggerConfig,
    tables: LoggerTables,
}

impl ValidatedLoggerConfig {
    /// Parsed tables ready for the resolvers.
    #[must_use]
    pub const fn tables(&self) -> &LoggerTables {
        &self.tables
    }

    /// Borrow the raw config.
    #[must_use]
    pub const fn as_ref(&self) -> &LoggerConfig {
        &self.raw
    }

    /// Consume the wrapper and return the raw config.
    #[must_use]
    pub fn into_inner(self) -> LoggerConfig {
        self.raw
    }
}

impl AsRef<LoggerConfig> for ValidatedLoggerConfig {
    fn as_ref(&self) -> &LoggerConfig {
        &self.raw
    }
}

impl std::ops::Deref for ValidatedLoggerConfig {
    type Target = LoggerConfig;

    fn deref(&self) -> &Self::Target {
        &self.raw
    }
}

/// Domain tables parsed out of a validated config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerTables {
    /// Minimum emitted severity.
    pub minimum: Severity,
    /// Fallback level.
    pub default_level: Severity,
    /// Level ranges.
    pub level_ranges: RangeTable<Severity>,
    /// Status ranges.
    pub status_ranges: RangeTable<Status>,
    /// Per-id statuses.
    pub id_statuses: BTreeMap<MessageNumber, Status>,
    /// Domain error codes.
    pub domain_codes: DomainCodeTable,
    /// Text templates.
    pub templates: MessageTemplates,
    /// Id template.
    pub id_template: Option<Box<str>>,
}

impl Default for LoggerTables {
    fn default() -> Self {
        Self {
            minimum: Severity::Info,
            default_level: Severity::Info,
            level_ranges: RangeTable::new(),
            status_ranges: RangeTable::new(),
            id_statuses: BTreeMap::new(),
            domain_codes: DomainCodeTable::default(),
            templates: MessageTemplates::new(),
            id_template: None,
        }
    }
}

impl LoggerTables {
    fn new(config: &LoggerConfig) -> Result<Self, ConfigSchemaError> {
        let minimum = parse_severity("level", "minimum", &config.level.minimum)?;
        let default_level = parse_severity("level", "default", &config.level.default)?;

        let mut level_ranges = if config.level.use_standard_ranges {
            standard_level_ranges()
        } else {
            RangeTable::new()
        };
        for (threshold, severity) in parse_thresholds("level", "ranges", &config.level.ranges)? {
            level_ranges.insert(threshold, parse_severity("level", "ranges", severity)?);
        }

        let status_ranges = parse_thresholds("status", "ranges", &config.status.ranges)?
            .into_iter()
            .map(|(threshold, status)| (threshold, Status::from(status.trim())))
            .collect();

        let id_statuses = parse_thresholds("status", "ids", &config.status.ids)?
            .into_iter()
            .map(|(number, status)| (number, Status::from(status.as_str())))
            .collect();

        let delimiter = config.status.delimiter.as_str();
        if delimiter.is_empty() {
            return Err(ConfigSchemaError::EmptyValue {
                section: "status",
                field: "delimiter",
            });
        }
        let domain_codes = match &config.status.codes {
            None => DomainCodeTable::default().with_delimiter(delimiter),
            Some(codes) => {
                let mut table = DomainCodeTable::empty().with_delimiter(delimiter);
                for (code, bucket) in codes {
                    let code = code.trim();
                    if code.is_empty() {
                        return Err(ConfigSchemaError::EmptyValue {
                            section: "status",
                            field: "codes",
                        });
                    }
                    table.insert(code, parse_bucket("status", "codes", bucket)?);
                }
                table
            },
        };

        let templates = parse_thresholds("text", "templates", &config.text.templates)?
            .into_iter()
            .map(|(number, template)| (number, template.as_str()))
            .collect();

        let id_template = match config.id.template.as_deref() {
            None => None,
            Some("") => {
                return Err(ConfigSchemaError::EmptyValue {
                    section: "id",
                    field: "template",
                });
            },
            Some(template) => Some(template.into()),
        };

        Ok(Self {
            minimum,
            default_level,
            level_ranges,
            status_ranges,
            id_statuses,
            domain_codes,
            templates,
            id_template,
        })
    }
}

/// Parse a logger config from a JSON string, applying validation and normalization.
pub fn parse_logger_config_json(input: &str) -> Result<ValidatedLoggerConfig, ErrorEnvelope> {
    let config: LoggerConfig = serde_json::from_str(input).map_err(|error| {
        ErrorEnvelope::expected(
            ErrorCode::new("config", "invalid_json"),
            format!("invalid config JSON: {error}"),
        )
    })?;

    config.validate_and_normalize().map_err(Into::into)
}

/// Parse a logger config from a TOML string, applying validation and normalization.
pub fn parse_logger_config_toml(input: &str) -> Result<ValidatedLoggerConfig, ErrorEnvelope> {
    let config: LoggerConfig = toml::from_str(input).map_err(|error| {
        ErrorEnvelope::expected(
            ErrorCode::new("config", "invalid_toml"),
            format!("invalid config TOML: {error}"),
        )
    })?;

    config.validate_and_normalize().map_err(Into::into)
}

// =============================================================================
// ERRORS
// =============================================================================

/// Typed validation errors for the configuration schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSchemaError {
    /// The config version is not supported by this binary.
    UnsupportedVersion {
        /// Version found in the config.
        found: u32,
        /// Version supported by this crate.
        supported: u32,
    },
    /// A table key is not an integer message number.
    InvalidThreshold {
        /// Schema section (e.g. `level`).
        section: &'static str,
        /// Field name in the config file (e.g. `ranges`).
        field: &'static str,
        /// Offending key.
        key: String,
    },
    /// Two keys parse to the same message number (e.g. `"1"` and `"01"`).
    DuplicateThreshold {
        /// Schema section.
        section: &'static str,
        /// Field name in the config file.
        field: &'static str,
        /// Message number written twice.
        threshold: i64,
    },
    /// A severity name is unknown.
    InvalidSeverity {
        /// Schema section.
        section: &'static str,
        /// Field name in the config file.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// A status bucket name is unknown.
    InvalidStatus {
        /// Schema section.
        section: &'static str,
        /// Field name in the config file.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// A required string is empty.
    EmptyValue {
        /// Schema section.
        section: &'static str,
        /// Field name in the config file.
        field: &'static str,
    },
}

impl ConfigSchemaError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::UnsupportedVersion { .. } => ErrorCode::new("config", "unsupported_version"),
            Self::InvalidThreshold { .. } => ErrorCode::new("config", "invalid_threshold"),
            Self::DuplicateThreshold { .. } => ErrorCode::new("config", "duplicate_threshold"),
            Self::InvalidSeverity { .. } => ErrorCode::new("config", "invalid_severity"),
            Self::InvalidStatus { .. } => ErrorCode::new("config", "invalid_status"),
            Self::EmptyValue { .. } => ErrorCode::new("config", "empty_value"),
        }
    }
}

impl fmt::Display for ConfigSchemaError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedVersion { found, supported } => {
                write!(
                    formatter,
                    "unsupported config version: {found} (supported: {supported})"
                )
            },
            Self::InvalidThreshold {
                section,
                field,
                key,
            } => write!(
                formatter,
                "{section}.{field} key `{key}` is not an integer message number"
            ),
            Self::DuplicateThreshold {
                section,
                field,
                threshold,
            } => write!(
                formatter,
                "{section}.{field} lists message number {threshold} more than once"
            ),
            Self::InvalidSeverity {
                section,
                field,
                value,
            } => write!(formatter, "{section}.{field} has unknown severity `{value}`"),
            Self::InvalidStatus {
                section,
                field,
                value,
            } => write!(formatter, "{section}.{field} has unknown status `{value}`"),
            Self::EmptyValue { section, field } => {
                write!(formatter, "{section}.{field} must be non-empty")
            },
        }
    }
}

impl std::error::Error for ConfigSchemaError {}

impl From<ConfigSchemaError> for ErrorEnvelope {
    fn from(error: ConfigSchemaError) -> Self {
        let code = error.error_code();
        let message = error.to_string();
        let mut envelope = Self::expected(code, message);

        match error {
            ConfigSchemaError::UnsupportedVersion { found, supported } => {
                envelope = envelope
                    .with_metadata("found", found.to_string())
                    .with_metadata("supported", supported.to_string());
            },
            ConfigSchemaError::InvalidThreshold {
                section,
                field,
                key,
            } => {
                envelope = envelope
                    .with_metadata("section", section)
                    .with_metadata("field", field)
                    .with_metadata("key", key);
            },
            ConfigSchemaError::DuplicateThreshold {
                section,
                field,
                threshold,
            } => {
                envelope = envelope
                    .with_metadata("section", section)
                    .with_metadata("field", field)
                    .with_metadata("threshold", threshold.to_string());
            },
            ConfigSchemaError::InvalidSeverity {
                section,
                field,
                value,
            }
            | ConfigSchemaError::InvalidStatus {
                section,
                field,
                value,
            } => {
                envelope = envelope
                    .with_metadata("section", section)
                    .with_metadata("field", field)
                    .with_metadata("value", value);
            },
            ConfigSchemaError::EmptyValue { section, field } => {
                envelope = envelope
                    .with_metadata("section", section)
                    .with_metadata("field", field);
            },
        }

        envelope
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn normalize_severity_name(value: &mut String) {
    let normalized = value.trim().to_ascii_uppercase();
    if normalized != *value {
        *value = normalized;
    }
}

fn parse_severity(
    section: &'static str,
    field: &'static str,
    value: &str,
) -> Result<Severity, ConfigSchemaError> {
    value
        .parse()
        .map_err(|_| ConfigSchemaError::InvalidSeverity {
            section,
            field,
            value: value.to_string(),
        })
}

fn parse_bucket(
    section: &'static str,
    field: &'static str,
    value: &str,
) -> Result<StatusBucket, ConfigSchemaError> {
    value
        .parse()
        .map_err(|_| ConfigSchemaError::InvalidStatus {
            section,
            field,
            value: value.to_string(),
        })
}

fn parse_thresholds<'a>(
    section: &'static str,
    field: &'static str,
    entries: &'a BTreeMap<String, String>,
) -> Result<BTreeMap<MessageNumber, &'a String>, ConfigSchemaError> {
    let mut parsed = BTreeMap::new();
    for (key, value) in entries {
        let threshold =
            key.trim()
                .parse::<i64>()
                .map_err(|_| ConfigSchemaError::InvalidThreshold {
                    section,
                    field,
                    key: key.clone(),
                })?;
        if parsed.insert(MessageNumber::new(threshold), value).is_some() {
            return Err(ConfigSchemaError::DuplicateThreshold {
                section,
                field,
                threshold,
            });
        }
    }
    Ok(parsed)
}

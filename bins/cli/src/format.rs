//! Output format helpers for CLI commands.

use clap::{Args, ValueEnum};
use msglog_facade::RecordFormat;
use std::path::PathBuf;

/// Record rendering choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per record.
    Json,
    /// `id: (status) text {details}`.
    Terse,
}

impl From<OutputFormat> for RecordFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Json => Self::Json,
            OutputFormat::Terse => Self::Terse,
        }
    }
}

/// Format of the CLI's own diagnostics on stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Serialization used by `config show`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    /// Pretty JSON.
    #[default]
    Json,
    /// TOML.
    Toml,
    /// YAML.
    Yaml,
}

/// Flags shared by every command.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Logger config file (JSON or TOML).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Record format; overrides the config file and `MSGLOG_FORMAT`.
    #[arg(long, global = true, value_enum)]
    pub output: Option<OutputFormat>,
    /// Format of internal diagnostics written to stderr.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

//! Detail arguments shared by `emit` and `resolve`.

use crate::error::CliError;
use clap::Args;
use msglog_facade::{Detail, MessageNumber, Severity};
use std::collections::BTreeMap;
use std::time::Duration;

/// Message number plus the details passed with it.
#[derive(Debug, Clone, Default, Args)]
pub struct DetailArgs {
    /// Message number to compose.
    #[arg(allow_negative_numbers = true)]
    pub number: i64,
    /// Positional details. Integers, floats, and `true`/`false` keep their type.
    #[arg(allow_negative_numbers = true)]
    pub details: Vec<String>,
    /// Wrapped error message, e.g. `0019E|Configuration not found`.
    #[arg(long = "error", value_name = "MESSAGE")]
    pub errors: Vec<String>,
    /// Explicit level override.
    #[arg(long)]
    pub level: Option<String>,
    /// Elapsed time attached as the record duration.
    #[arg(long)]
    pub duration_ms: Option<u64>,
    /// Message number used to pick the template.
    #[arg(long, allow_negative_numbers = true)]
    pub marker: Option<i64>,
    /// Keyed detail `key=value`.
    #[arg(long = "map", value_name = "KEY=VALUE")]
    pub map: Vec<String>,
}

impl DetailArgs {
    /// The message number.
    #[must_use]
    pub const fn message_number(&self) -> MessageNumber {
        MessageNumber::new(self.number)
    }

    /// Details in call order: positionals, keyed map, errors, then controls.
    pub fn to_details(&self) -> Result<Vec<Detail>, CliError> {
        let mut details: Vec<Detail> = self.details.iter().map(|raw| parse_scalar(raw)).collect();

        if !self.map.is_empty() {
            let mut map = BTreeMap::new();
            for entry in &self.map {
                let (key, value) = entry.split_once('=').ok_or_else(|| {
                    CliError::InvalidInput(format!("map entry `{entry}` is not KEY=VALUE"))
                })?;
                map.insert(key.trim().to_string(), value.to_string());
            }
            details.push(Detail::from(map));
        }

        details.extend(self.errors.iter().map(|message| Detail::error_msg(message.as_str())));

        if let Some(marker) = self.marker {
            details.push(Detail::message_number(marker));
        }
        if let Some(level) = self.level.as_deref() {
            let severity: Severity = level
                .parse()
                .map_err(|error| CliError::InvalidInput(format!("{error}")))?;
            details.push(Detail::from(severity));
        }
        if let Some(millis) = self.duration_ms {
            details.push(Detail::from(Duration::from_millis(millis)));
        }
        Ok(details)
    }
}

fn parse_scalar(raw: &str) -> Detail {
    if let Ok(value) = raw.parse::<i64>() {
        return Detail::from(value);
    }
    if raw.contains('.') {
        if let Ok(value) = raw.parse::<f64>() {
            if value.is_finite() {
                return Detail::from(value);
            }
        }
    }
    match raw {
        "true" => Detail::from(true),
        "false" => Detail::from(false),
        _ => Detail::from(raw),
    }
}

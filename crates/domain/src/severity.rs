//! Severity levels for leveled logging.

use msglog_shared::{ErrorCode, ErrorEnvelope};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The seven logging severities, ordered from most verbose to most severe.
///
/// The derived ordering is relied upon for gating (`level >= minimum`) and for
/// comparisons during resolution; do not reorder the variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    /// Finest-grained diagnostics.
    Trace,
    /// Developer diagnostics.
    Debug,
    /// Normal operational messages.
    #[default]
    Info,
    /// Something unexpected that does not stop processing.
    Warn,
    /// A failed operation.
    Error,
    /// The process cannot continue; the sink exits after emitting.
    Fatal,
    /// The process cannot continue; the sink unwinds after emitting.
    Panic,
}

impl Severity {
    /// All severities in ascending order.
    pub const ALL: [Self; 7] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Fatal,
        Self::Panic,
    ];

    /// Upper-case name used in rendered records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
            Self::Panic => "PANIC",
        }
    }

    /// Position in the ascending order (`Trace` is 0).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Severity::rank`].
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(Self::Trace),
            1 => Some(Self::Debug),
            2 => Some(Self::Info),
            3 => Some(Self::Warn),
            4 => Some(Self::Error),
            5 => Some(Self::Fatal),
            6 => Some(Self::Panic),
            _ => None,
        }
    }

    /// Returns true for the two severities whose emission ends the process.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Fatal | Self::Panic)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Unknown severity name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeverityParseError {
    /// Input that failed to parse.
    pub input: String,
}

impl fmt::Display for SeverityParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "unknown severity `{}`; expected one of TRACE, DEBUG, INFO, WARN, ERROR, FATAL, PANIC",
            self.input
        )
    }
}

impl std::error::Error for SeverityParseError {}

impl From<SeverityParseError> for ErrorEnvelope {
    fn from(error: SeverityParseError) -> Self {
        let input = error.input.clone();
        Self::expected(
            ErrorCode::new("domain", "invalid_severity"),
            error.to_string(),
        )
        .with_metadata("input", input)
    }
}

impl FromStr for Severity {
    type Err = SeverityParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let upper = input.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str() == upper)
            .ok_or_else(|| SeverityParseError {
                input: input.to_string(),
            })
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

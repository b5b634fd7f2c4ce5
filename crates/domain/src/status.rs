//! Status precedence buckets and free-form status values.

use crate::severity::Severity;
use msglog_shared::{ErrorCode, ErrorEnvelope};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Named status buckets, ordered by precedence.
///
/// Unlike [`Severity`], the derived ordering here puts the *lowest* precedence
/// first so that `max()` picks the winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatusBucket {
    /// Lowest precedence.
    Trace,
    /// Debug status.
    Debug,
    /// Informational status.
    Info,
    /// Warning status.
    Warn,
    /// Generic error.
    Error,
    /// Transient error; the operation may succeed if repeated.
    ErrorRetryable,
    /// Error caused by caller input.
    ErrorBadUserInput,
    /// Error that will not go away on retry.
    ErrorUnrecoverable,
    /// Fatal status.
    Fatal,
    /// Highest precedence.
    Panic,
}

impl StatusBucket {
    /// Buckets from highest to lowest precedence.
    pub const PRECEDENCE: [Self; 10] = [
        Self::Panic,
        Self::Fatal,
        Self::ErrorUnrecoverable,
        Self::ErrorBadUserInput,
        Self::ErrorRetryable,
        Self::Error,
        Self::Warn,
        Self::Info,
        Self::Debug,
        Self::Trace,
    ];

    /// Rendered status name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Panic => "PANIC",
            Self::Fatal => "FATAL",
            Self::ErrorUnrecoverable => "ERROR_unrecoverable",
            Self::ErrorBadUserInput => "ERROR_bad_user_input",
            Self::ErrorRetryable => "ERROR_retryable",
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }

    /// Severity a record with this status is logged at.
    ///
    /// Every `ERROR_*` bucket collapses to [`Severity::Error`].
    #[must_use]
    pub const fn to_severity(self) -> Severity {
        match self {
            Self::Panic => Severity::Panic,
            Self::Fatal => Severity::Fatal,
            Self::ErrorUnrecoverable
            | Self::ErrorBadUserInput
            | Self::ErrorRetryable
            | Self::Error => Severity::Error,
            Self::Warn => Severity::Warn,
            Self::Info => Severity::Info,
            Self::Debug => Severity::Debug,
            Self::Trace => Severity::Trace,
        }
    }

    /// Highest-precedence bucket among `buckets`; order does not matter.
    pub fn highest(buckets: impl IntoIterator<Item = Self>) -> Option<Self> {
        buckets.into_iter().max()
    }
}

impl fmt::Display for StatusBucket {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Unknown status bucket name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusParseError {
    /// Input that failed to parse.
    pub input: String,
}

impl fmt::Display for StatusParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "unknown status bucket `{}`", self.input)
    }
}

impl std::error::Error for StatusParseError {}

impl From<StatusParseError> for ErrorEnvelope {
    fn from(error: StatusParseError) -> Self {
        let input = error.input.clone();
        Self::expected(ErrorCode::new("domain", "invalid_status"), error.to_string())
            .with_metadata("input", input)
    }
}

impl FromStr for StatusBucket {
    type Err = StatusParseError;

    /// Exact match on the rendered name; the `ERROR_*` suffixes are lower-case.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        Self::PRECEDENCE
            .into_iter()
            .find(|bucket| bucket.as_str() == trimmed)
            .ok_or_else(|| StatusParseError {
                input: input.to_string(),
            })
    }
}

impl From<Severity> for StatusBucket {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Trace => Self::Trace,
            Severity::Debug => Self::Debug,
            Severity::Info => Self::Info,
            Severity::Warn => Self::Warn,
            Severity::Error => Self::Error,
            Severity::Fatal => Self::Fatal,
            Severity::Panic => Self::Panic,
        }
    }
}

/// A resolved status: a known bucket or a free-form string from a per-id table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Status {
    /// One of the precedence buckets.
    Bucket(StatusBucket),
    /// Arbitrary text, rendered verbatim.
    Custom(Box<str>),
}

impl Status {
    /// Rendered status text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Bucket(bucket) => bucket.as_str(),
            Self::Custom(text) => text,
        }
    }

    /// Returns the bucket when this status names one.
    #[must_use]
    pub const fn bucket(&self) -> Option<StatusBucket> {
        match self {
            Self::Bucket(bucket) => Some(*bucket),
            Self::Custom(_) => None,
        }
    }
}

impl From<StatusBucket> for Status {
    fn from(bucket: StatusBucket) -> Self {
        Self::Bucket(bucket)
    }
}

impl From<&str> for Status {
    /// Known bucket names become buckets; anything else is kept verbatim.
    fn from(raw: &str) -> Self {
        raw.parse::<StatusBucket>()
            .map_or_else(|_| Self::Custom(raw.into()), Self::Bucket)
    }
}

impl From<String> for Status {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}

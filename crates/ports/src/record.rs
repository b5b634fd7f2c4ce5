//! The assembled log record.

use msglog_domain::{Severity, Status};
use serde::Serialize;
use std::collections::BTreeMap;

/// Prior errors attached to a record, already converted to JSON.
pub type RecordErrors = Vec<serde_json::Value>;

/// Details keyed by explicit key or 1-based ordinal.
pub type RecordDetails = BTreeMap<String, serde_json::Value>;

/// One composed log record.
///
/// Field order is the canonical render order. `None` and empty collections
/// are left out of every rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Record {
    /// UTC date, `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// UTC time, `HH:MM:SS.nnnnnnnnn`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Resolved severity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Severity>,
    /// Message identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Human-readable text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Resolved status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    /// Elapsed time in microseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    /// Call site, `file:line`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Prior errors.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: RecordErrors,
    /// Remaining details.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub details: RecordDetails,
}

impl Record {
    /// Returns true when every field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

//! Pure record assembly.

use msglog_domain::{Severity, Status};
use msglog_ports::{Record, RecordDetails, RecordErrors};

/// Everything resolved for one call, before the omit-if-empty pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordParts {
    /// UTC date stamp.
    pub date: Option<String>,
    /// UTC time stamp.
    pub time: Option<String>,
    /// Resolved severity.
    pub level: Option<Severity>,
    /// Message identifier.
    pub id: String,
    /// Resolved text.
    pub text: String,
    /// Resolved status; `None` when no resolver step matched.
    pub status: Option<Status>,
    /// Microseconds.
    pub duration: Option<i64>,
    /// Call site.
    pub location: Option<String>,
    /// Prior errors.
    pub errors: RecordErrors,
    /// Keyed details.
    pub details: RecordDetails,
}

/// Merge resolved parts into a record, dropping empty strings and zero durations.
#[must_use]
pub fn assemble_record(parts: RecordParts) -> Record {
    Record {
        date: parts.date.and_then(non_empty),
        time: parts.time.and_then(non_empty),
        level: parts.level,
        id: non_empty(parts.id),
        text: non_empty(parts.text),
        status: parts.status.filter(|status| !status.as_str().is_empty()),
        duration: parts.duration.filter(|duration| *duration != 0),
        location: parts.location.and_then(non_empty),
        errors: parts.errors,
        details: parts.details,
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

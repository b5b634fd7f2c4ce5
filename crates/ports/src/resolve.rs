//! Resolver strategy contracts.
//!
//! Each resolver turns a message number plus its details into one record
//! field. Resolvers are pure: they read configuration captured at
//! construction and never mutate shared state.

use crate::record::{RecordDetails, RecordErrors};
use msglog_domain::{Detail, MessageNumber, Severity, Status};
use msglog_shared::{ErrorCode, ErrorEnvelope};

/// Non-fatal resolution outcome. Callers log it and carry on with a default.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// No value could be derived for the field.
    #[error("no {field} configured for message {message_number}")]
    NotFound {
        /// Record field being resolved.
        field: &'static str,
        /// Message being resolved.
        message_number: MessageNumber,
    },
    /// The message number sits below every configured level threshold.
    #[error("message {message_number} is outside every level range; defaulting to {fallback}")]
    RangeNotFound {
        /// Message being resolved.
        message_number: MessageNumber,
        /// Level used instead.
        fallback: Severity,
    },
}

impl ResolveError {
    /// Shorthand for [`ResolveError::NotFound`].
    #[must_use]
    pub const fn not_found(field: &'static str, message_number: MessageNumber) -> Self {
        Self::NotFound {
            field,
            message_number,
        }
    }

    /// Message the diagnostic refers to.
    #[must_use]
    pub const fn message_number(&self) -> MessageNumber {
        match self {
            Self::NotFound { message_number, .. } | Self::RangeNotFound { message_number, .. } => {
                *message_number
            },
        }
    }
}

impl From<ResolveError> for ErrorEnvelope {
    fn from(error: ResolveError) -> Self {
        let message = error.to_string();
        match error {
            ResolveError::NotFound {
                field,
                message_number,
            } => Self::expected(ErrorCode::new("resolve", "not_found"), message)
                .with_metadata("field", field)
                .with_metadata("message_number", message_number.to_string()),
            ResolveError::RangeNotFound {
                message_number,
                fallback,
            } => Self::expected(ErrorCode::new("resolve", "range_not_found"), message)
                .with_metadata("message_number", message_number.to_string())
                .with_metadata("fallback", fallback.as_str()),
        }
    }
}

/// A value that was resolved, possibly with a diagnostic explaining a fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    /// The resolved (or fallback) value.
    pub value: T,
    /// Set when `value` is a fallback.
    pub diagnostic: Option<ResolveError>,
}

impl<T> Resolved<T> {
    /// A value found without falling back.
    pub const fn found(value: T) -> Self {
        Self {
            value,
            diagnostic: None,
        }
    }

    /// A fallback value with the diagnostic that caused it.
    pub const fn fallback(value: T, diagnostic: ResolveError) -> Self {
        Self {
            value,
            diagnostic: Some(diagnostic),
        }
    }
}

/// Resolves the record's severity.
pub trait LevelResolver: Send + Sync {
    /// Severity for `number`; never fails, but may report a fallback.
    fn resolve_level(&self, number: MessageNumber, details: &[Detail]) -> Resolved<Severity>;
}

/// Resolves the record's status.
pub trait StatusResolver: Send + Sync {
    /// Status for `number`; `NotFound` means the record carries no status.
    fn resolve_status(&self, number: MessageNumber, details: &[Detail])
    -> Result<Status, ResolveError>;
}

/// Resolves the record's human text.
pub trait TextResolver: Send + Sync {
    /// Text for `number`; a missing template yields an empty string.
    fn resolve_text(&self, number: MessageNumber, details: &[Detail])
    -> Result<String, ResolveError>;
}

/// Resolves the record's identifier.
pub trait IdResolver: Send + Sync {
    /// Identifier string for `number`.
    fn resolve_id(&self, number: MessageNumber, details: &[Detail]) -> Result<String, ResolveError>;
}

/// Resolves the record's duration.
pub trait DurationResolver: Send + Sync {
    /// Duration in microseconds, if any detail carries one.
    fn resolve_duration(&self, number: MessageNumber, details: &[Detail]) -> Option<i64>;
}

/// Resolves the record's details map.
pub trait DetailsResolver: Send + Sync {
    /// Details keyed by explicit key or ordinal.
    fn resolve_details(&self, number: MessageNumber, details: &[Detail]) -> RecordDetails;
}

/// Resolves the record's prior-error list.
pub trait ErrorsResolver: Send + Sync {
    /// Errors in supplied order.
    fn resolve_errors(&self, number: MessageNumber, details: &[Detail]) -> RecordErrors;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_errors_map_to_envelopes() {
        let envelope: ErrorEnvelope =
            ResolveError::not_found("status", MessageNumber::new(7)).into();
        assert_eq!(envelope.code.to_string(), "resolve:not_found");
        assert_eq!(envelope.metadata.get("field").map(String::as_str), Some("status"));

        let envelope: ErrorEnvelope = ResolveError::RangeNotFound {
            message_number: MessageNumber::new(-3),
            fallback: Severity::Info,
        }
        .into();
        assert_eq!(envelope.code.code(), "range_not_found");
        assert_eq!(envelope.metadata.get("fallback").map(String::as_str), Some("INFO"));
    }

    #[test]
    fn resolved_tracks_fallbacks() {
        let found = Resolved::found(Severity::Warn);
        assert!(found.diagnostic.is_none());

        let diagnostic = ResolveError::RangeNotFound {
            message_number: MessageNumber::new(5),
            fallback: Severity::Info,
        };
        let fallback = Resolved::fallback(Severity::Info, diagnostic.clone());
        assert_eq!(fallback.diagnostic, Some(diagnostic));
        assert_eq!(
            fallback.diagnostic.map(|error| error.message_number()),
            Some(MessageNumber::new(5))
        );
    }
}

//! # msglog-domain
//!
//! Domain model for composing numbered log messages.
//!
//! - **Severity** - `Severity`, the seven ordered logging levels
//! - **Status** - `StatusBucket` precedence and free-form `Status`
//! - **Ranges** - `RangeTable`, threshold lookup by message number
//! - **Messages** - `MessageNumber`, `MessageTemplates`
//! - **Details** - the `Detail` sum type, `classify`, and scan helpers
//! - **Domain codes** - `DomainErrorCode`, `DomainCodeTable`
//! - **Printf** - positional substitution with verb-error markers
//!
//! ## Dependency Rules
//!
//! - Depends only on `shared` crate
//! - No infrastructure or adapter dependencies
//! - Pure domain logic with no I/O

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

// Re-export shared types for convenience
pub use msglog_shared::shared_crate_version;

// =============================================================================
// DOMAIN MODULES
// =============================================================================

pub mod detail;
pub mod domain_code;
pub mod message;
pub mod printf;
pub mod range;
pub mod severity;
pub mod status;

pub use detail::{
    Detail, DetailKind, Scalar, StringMap, WrappedError, classify, errors_in_order,
    errors_in_reverse, first_duration, first_severity_override, last_message_number_marker,
};
pub use domain_code::{
    DEFAULT_CODE_DELIMITER, DomainCodeTable, DomainErrorCode, MalformedDomainCode,
};
pub use message::{MessageNumber, MessageTemplates};
pub use printf::{
    Arg, Formatted, VERB_ERROR_MARKER, format_details, sprintf, substitute, substitute_details,
};
pub use range::{RangeTable, standard_level_ranges};
pub use severity::{Severity, SeverityParseError};
pub use status::{Status, StatusBucket, StatusParseError};

/// Returns the domain crate version.
#[must_use]
pub const fn domain_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_crate_compiles() {
        let version = domain_crate_version();
        assert!(!version.is_empty());
    }

    #[test]
    fn domain_depends_on_shared() {
        let shared_version = shared_crate_version();
        assert!(!shared_version.is_empty());
    }
}

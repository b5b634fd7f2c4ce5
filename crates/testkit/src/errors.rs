//! Error fixtures: shared error codes and domain-coded wrapped errors.

use msglog_domain::{Detail, WrappedError};
use msglog_shared::{ErrorCode, ErrorEnvelope};

/// Return a list of common error codes used in tests.
pub fn common_error_codes() -> Vec<ErrorCode> {
    vec![
        ErrorCode::invalid_input(),
        ErrorCode::not_found(),
        ErrorCode::io(),
        ErrorCode::internal(),
    ]
}

/// An invalid input error fixture.
pub fn invalid_input_error() -> ErrorEnvelope {
    ErrorEnvelope::expected(ErrorCode::invalid_input(), "invalid input")
}

/// `0019E|Configuration not found` (maps to `ERROR_unrecoverable`).
pub fn configuration_not_found() -> WrappedError {
    WrappedError::msg("0019E|Configuration not found")
}

/// `0037E|Unknown resource` (maps to `ERROR_bad_user_input`).
pub fn unknown_resource() -> WrappedError {
    WrappedError::msg("0037E|Unknown resource")
}

/// An error message without a domain code delimiter.
pub fn uncoded_error() -> WrappedError {
    WrappedError::msg("disk is full")
}

/// The two coded errors in the given order, as details.
pub fn coded_error_details(unrecoverable_first: bool) -> Vec<Detail> {
    let (first, second) = if unrecoverable_first {
        (configuration_not_found(), unknown_resource())
    } else {
        (unknown_resource(), configuration_not_found())
    };
    vec![Detail::from(first), Detail::from(second)]
}

//! Result helpers for shared error handling.

use crate::errors::ErrorEnvelope;

/// Shared result type used across the workspace.
pub type Result<T, E = ErrorEnvelope> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ErrorCode, ErrorEnvelope};

    fn parse_threshold(raw: &str) -> Result<i64> {
        raw.trim().parse::<i64>().map_err(|error| {
            ErrorEnvelope::expected(ErrorCode::invalid_input(), error.to_string())
                .with_metadata("input", raw)
        })
    }

    #[test]
    fn result_alias_defaults_to_envelope() {
        assert!(matches!(parse_threshold(" 1000 "), Ok(1000)));

        let error = parse_threshold("ten").err();
        assert_eq!(
            error
                .as_ref()
                .and_then(|error| error.metadata.get("input"))
                .map(String::as_str),
            Some("ten")
        );
    }
}

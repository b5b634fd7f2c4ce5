//! Domain error codes embedded at the front of wrapped error messages.
//!
//! An error message such as `0019E|Configuration not found` carries the code
//! `0019E`. The code table maps known codes to a status bucket.

use crate::status::StatusBucket;
use std::collections::BTreeMap;
use std::fmt;

/// Delimiter separating the code from the rest of the message.
pub const DEFAULT_CODE_DELIMITER: &str = "|";

/// Code token taken from an error message.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DomainErrorCode(Box<str>);

/// The message did not contain the delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MalformedDomainCode;

impl fmt::Display for MalformedDomainCode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("error message carries no domain code delimiter")
    }
}

impl std::error::Error for MalformedDomainCode {}

impl DomainErrorCode {
    /// Wrap a code token as-is.
    pub fn new(code: impl Into<Box<str>>) -> Self {
        Self(code.into())
    }

    /// Extract the code preceding the first `delimiter` in `message`.
    pub fn parse(message: &str, delimiter: &str) -> Result<Self, MalformedDomainCode> {
        if delimiter.is_empty() {
            return Err(MalformedDomainCode);
        }
        message
            .split_once(delimiter)
            .map(|(code, _)| Self(code.into()))
            .ok_or(MalformedDomainCode)
    }

    /// The code text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DomainErrorCode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// Code to status bucket table plus the delimiter used to find codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainCodeTable {
    delimiter: Box<str>,
    codes: BTreeMap<DomainErrorCode, StatusBucket>,
}

impl Default for DomainCodeTable {
    fn default() -> Self {
        Self::empty()
            .with("0002E", StatusBucket::Info)
            .with("0019E", StatusBucket::ErrorUnrecoverable)
            .with("0037E", StatusBucket::ErrorBadUserInput)
            .with("0063E", StatusBucket::ErrorUnrecoverable)
            .with("30121E", StatusBucket::ErrorBadUserInput)
    }
}

impl DomainCodeTable {
    /// Table with no codes and the default delimiter.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            delimiter: DEFAULT_CODE_DELIMITER.into(),
            codes: BTreeMap::new(),
        }
    }

    /// Replace the delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<Box<str>>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Add or replace one code mapping.
    #[must_use]
    pub fn with(mut self, code: impl Into<Box<str>>, bucket: StatusBucket) -> Self {
        self.insert(code, bucket);
        self
    }

    /// Add or replace one code mapping.
    pub fn insert(&mut self, code: impl Into<Box<str>>, bucket: StatusBucket) {
        self.codes.insert(DomainErrorCode::new(code), bucket);
    }

    /// Delimiter in use.
    #[must_use]
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Bucket for an already extracted code.
    #[must_use]
    pub fn get(&self, code: &DomainErrorCode) -> Option<StatusBucket> {
        self.codes.get(code).copied()
    }

    /// Bucket for the code embedded in `message`; malformed messages never match.
    #[must_use]
    pub fn match_message(&self, message: &str) -> Option<StatusBucket> {
        DomainErrorCode::parse(message, &self.delimiter)
            .ok()
            .and_then(|code| self.get(&code))
    }

    /// Registered codes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (&DomainErrorCode, StatusBucket)> {
        self.codes.iter().map(|(code, bucket)| (code, *bucket))
    }

    /// Number of registered codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns true when no codes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_takes_token_before_first_delimiter() {
        let code = DomainErrorCode::parse("0019E|Configuration not found|extra", "|");
        assert_eq!(code.map(|code| code.to_string()), Ok("0019E".to_string()));
        assert_eq!(
            DomainErrorCode::parse("no delimiter here", "|"),
            Err(MalformedDomainCode)
        );
        assert_eq!(DomainErrorCode::parse("a|b", ""), Err(MalformedDomainCode));
    }

    #[test]
    fn default_table_matches_known_codes() {
        let table = DomainCodeTable::default();
        assert_eq!(
            table.match_message("0019E|Configuration not found"),
            Some(StatusBucket::ErrorUnrecoverable)
        );
        assert_eq!(
            table.match_message("30121E|JSON parsing Failure"),
            Some(StatusBucket::ErrorBadUserInput)
        );
        assert_eq!(table.match_message("0002E|Info"), Some(StatusBucket::Info));
        assert_eq!(table.match_message("9999E|Unknown"), None);
        assert_eq!(table.match_message("0019E"), None);
    }

    #[test]
    fn custom_delimiter_is_honoured() {
        let table = DomainCodeTable::default().with_delimiter("::");
        assert_eq!(
            table.match_message("0037E::bad input"),
            Some(StatusBucket::ErrorBadUserInput)
        );
        assert_eq!(table.match_message("0037E|bad input"), None);
    }
}

//! Level resolver strategies.

use msglog_domain::{Detail, MessageNumber, RangeTable, Severity, first_severity_override};
use msglog_ports::{LevelResolver, ResolveError, Resolved, StatusResolver};
use std::sync::Arc;

/// Explicit override, then the range table, then the default.
#[derive(Debug, Clone, Default)]
pub struct RangeLevelResolver {
    ranges: RangeTable<Severity>,
    default: Severity,
}

impl RangeLevelResolver {
    /// Create a resolver over `ranges` falling back to `default`.
    #[must_use]
    pub const fn new(ranges: RangeTable<Severity>, default: Severity) -> Self {
        Self { ranges, default }
    }

    /// The range table in use.
    #[must_use]
    pub const fn ranges(&self) -> &RangeTable<Severity> {
        &self.ranges
    }
}

impl LevelResolver for RangeLevelResolver {
    fn resolve_level(&self, number: MessageNumber, details: &[Detail]) -> Resolved<Severity> {
        if let Some(severity) = first_severity_override(details) {
            return Resolved::found(severity);
        }
        match self.ranges.lookup(number) {
            Some(severity) => Resolved::found(*severity),
            None => Resolved::fallback(
                self.default,
                ResolveError::RangeNotFound {
                    message_number: number,
                    fallback: self.default,
                },
            ),
        }
    }
}

/// Always the same level; overrides are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticLevelResolver {
    severity: Severity,
}

impl StaticLevelResolver {
    /// Create a resolver that always answers `severity`.
    #[must_use]
    pub const fn new(severity: Severity) -> Self {
        Self { severity }
    }
}

impl LevelResolver for StaticLevelResolver {
    fn resolve_level(&self, _number: MessageNumber, _details: &[Detail]) -> Resolved<Severity> {
        Resolved::found(self.severity)
    }
}

/// Explicit override, then the level implied by the resolved status.
///
/// Error buckets map to `ERROR`; free-form statuses carry no level and fall
/// back to the default.
#[derive(Clone)]
pub struct StatusLevelResolver {
    status: Arc<dyn StatusResolver>,
    default: Severity,
}

impl StatusLevelResolver {
    /// Create a resolver deriving levels from `status`.
    #[must_use]
    pub fn new(status: Arc<dyn StatusResolver>, default: Severity) -> Self {
        Self { status, default }
    }
}

impl std::fmt::Debug for StatusLevelResolver {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("StatusLevelResolver")
            .field("default", &self.default)
            .finish_non_exhaustive()
    }
}

impl LevelResolver for StatusLevelResolver {
    fn resolve_level(&self, number: MessageNumber, details: &[Detail]) -> Resolved<Severity> {
        if let Some(severity) = first_severity_override(details) {
            return Resolved::found(severity);
        }
        let bucket = self
            .status
            .resolve_status(number, details)
            .ok()
            .and_then(|status| status.bucket());
        match bucket {
            Some(bucket) => Resolved::found(bucket.to_severity()),
            None => Resolved::fallback(
                self.default,
                ResolveError::RangeNotFound {
                    message_number: number,
                    fallback: self.default,
                },
            ),
        }
    }
}

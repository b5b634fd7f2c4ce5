//! Status resolver strategies.

use msglog_domain::{
    Detail, DomainCodeTable, MessageNumber, RangeTable, Status, StatusBucket, errors_in_reverse,
};
use msglog_ports::{ResolveError, StatusResolver};
use std::collections::BTreeMap;

/// Per-message-number status table.
pub type IdStatusTable = BTreeMap<MessageNumber, Status>;

/// Records never carry a status.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStatusResolver;

impl StatusResolver for NullStatusResolver {
    fn resolve_status(
        &self,
        number: MessageNumber,
        _details: &[Detail],
    ) -> Result<Status, ResolveError> {
        Err(ResolveError::not_found("status", number))
    }
}

/// Looks the message number up in a per-id table.
#[derive(Debug, Clone, Default)]
pub struct IdStatusResolver {
    statuses: IdStatusTable,
}

impl IdStatusResolver {
    /// Create a resolver over `statuses`.
    #[must_use]
    pub const fn new(statuses: IdStatusTable) -> Self {
        Self { statuses }
    }
}

impl StatusResolver for IdStatusResolver {
    fn resolve_status(
        &self,
        number: MessageNumber,
        _details: &[Detail],
    ) -> Result<Status, ResolveError> {
        self.statuses
            .get(&number)
            .cloned()
            .ok_or_else(|| ResolveError::not_found("status", number))
    }
}

/// Looks the message number up in a range table.
#[derive(Debug, Clone, Default)]
pub struct RangeStatusResolver {
    ranges: RangeTable<Status>,
}

impl RangeStatusResolver {
    /// Create a resolver over `ranges`.
    #[must_use]
    pub const fn new(ranges: RangeTable<Status>) -> Self {
        Self { ranges }
    }
}

impl StatusResolver for RangeStatusResolver {
    fn resolve_status(
        &self,
        number: MessageNumber,
        _details: &[Detail],
    ) -> Result<Status, ResolveError> {
        self.ranges
            .lookup(number)
            .cloned()
            .ok_or_else(|| ResolveError::not_found("status", number))
    }
}

/// Full status resolution.
///
/// 1. Every wrapped error (scanned last to first) whose message starts with a
///    known domain code contributes its bucket; the highest bucket wins.
/// 2. Otherwise the per-id table, verbatim.
/// 3. Otherwise the range table.
#[derive(Debug, Clone, Default)]
pub struct DomainCodeStatusResolver {
    codes: DomainCodeTable,
    ids: IdStatusTable,
    ranges: RangeTable<Status>,
}

impl DomainCodeStatusResolver {
    /// Create a resolver from its three tables.
    #[must_use]
    pub const fn new(
        codes: DomainCodeTable,
        ids: IdStatusTable,
        ranges: RangeTable<Status>,
    ) -> Self {
        Self { codes, ids, ranges }
    }

    /// Highest bucket among the domain codes found in `details`.
    ///
    /// Errors without a delimiter, or with an unknown code, contribute nothing.
    #[must_use]
    pub fn bucket_from_errors(&self, details: &[Detail]) -> Option<StatusBucket> {
        StatusBucket::highest(
            errors_in_reverse(details)
                .filter_map(|error| self.codes.match_message(&error.message())),
        )
    }
}

impl StatusResolver for DomainCodeStatusResolver {
    fn resolve_status(
        &self,
        number: MessageNumber,
        details: &[Detail],
    ) -> Result<Status, ResolveError> {
        if let Some(bucket) = self.bucket_from_errors(details) {
            return Ok(Status::Bucket(bucket));
        }
        if let Some(status) = self.ids.get(&number) {
            return Ok(status.clone());
        }
        self.ranges
            .lookup(number)
            .cloned()
            .ok_or_else(|| ResolveError::not_found("status", number))
    }
}

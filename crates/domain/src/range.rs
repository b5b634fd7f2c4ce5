//! Threshold tables mapping message-number ranges to values.
//!
//! A table entry `T -> v` covers every message number `n` with `T <= n` until
//! the next higher threshold. Numbers below the smallest threshold are not
//! covered; callers apply their own default.

use crate::message::MessageNumber;
use crate::severity::Severity;
use std::collections::BTreeMap;

/// Ordered threshold table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeTable<V> {
    thresholds: BTreeMap<MessageNumber, V>,
}

impl<V> Default for RangeTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> RangeTable<V> {
    /// Empty table; every lookup misses.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            thresholds: BTreeMap::new(),
        }
    }

    /// Add or replace a threshold, returning the table for chaining.
    #[must_use]
    pub fn with(mut self, threshold: impl Into<MessageNumber>, value: V) -> Self {
        self.insert(threshold, value);
        self
    }

    /// Add or replace a threshold.
    pub fn insert(&mut self, threshold: impl Into<MessageNumber>, value: V) {
        self.thresholds.insert(threshold.into(), value);
    }

    /// Value at the greatest threshold not above `number`.
    #[must_use]
    pub fn lookup(&self, number: MessageNumber) -> Option<&V> {
        self.thresholds
            .range(..=number)
            .next_back()
            .map(|(_, value)| value)
    }

    /// Number of thresholds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    /// Returns true when the table has no thresholds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    /// Thresholds in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (MessageNumber, &V)> {
        self.thresholds.iter().map(|(threshold, value)| (*threshold, value))
    }
}

impl<N: Into<MessageNumber>, V> FromIterator<(N, V)> for RangeTable<V> {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (threshold, value) in iter {
            table.insert(threshold, value);
        }
        table
    }
}

/// Level ranges used when a configuration opts into the standard layout.
#[must_use]
pub fn standard_level_ranges() -> RangeTable<Severity> {
    RangeTable::new()
        .with(0, Severity::Info)
        .with(1000, Severity::Warn)
        .with(2000, Severity::Error)
        .with(3000, Severity::Debug)
        .with(4000, Severity::Trace)
        .with(5000, Severity::Fatal)
        .with(6000, Severity::Panic)
}

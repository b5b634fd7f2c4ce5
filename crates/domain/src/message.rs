//! Message numbers and the template table keyed by them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of a message template. Numbers need not be contiguous.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MessageNumber(i64);

impl MessageNumber {
    /// Wrap a raw message number.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for MessageNumber {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<i32> for MessageNumber {
    fn from(value: i32) -> Self {
        Self(i64::from(value))
    }
}

impl From<MessageNumber> for i64 {
    fn from(value: MessageNumber) -> Self {
        value.0
    }
}

impl fmt::Display for MessageNumber {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, formatter)
    }
}

/// Printf-style templates keyed by message number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageTemplates {
    entries: BTreeMap<MessageNumber, Box<str>>,
}

impl MessageTemplates {
    /// Empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add or replace one template, returning the table for chaining.
    #[must_use]
    pub fn with(mut self, number: impl Into<MessageNumber>, template: impl Into<Box<str>>) -> Self {
        self.insert(number, template);
        self
    }

    /// Add or replace one template.
    pub fn insert(&mut self, number: impl Into<MessageNumber>, template: impl Into<Box<str>>) {
        self.entries.insert(number.into(), template.into());
    }

    /// Template for `number`, if any.
    #[must_use]
    pub fn get(&self, number: MessageNumber) -> Option<&str> {
        self.entries.get(&number).map(AsRef::as_ref)
    }

    /// Number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no templates are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Templates in ascending message-number order.
    pub fn iter(&self) -> impl Iterator<Item = (MessageNumber, &str)> {
        self.entries
            .iter()
            .map(|(number, template)| (*number, template.as_ref()))
    }
}

impl<N, T> FromIterator<(N, T)> for MessageTemplates
where
    N: Into<MessageNumber>,
    T: Into<Box<str>>,
{
    fn from_iter<I: IntoIterator<Item = (N, T)>>(iter: I) -> Self {
        let mut templates = Self::new();
        for (number, template) in iter {
            templates.insert(number, template);
        }
        templates
    }
}

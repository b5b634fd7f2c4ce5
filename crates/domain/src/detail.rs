//! Contextual detail values attached to a log call, and their classification.
//!
//! Details are a closed sum type. Callers build them through `From`
//! conversions (or the [`details!`](crate::details) macro); resolvers inspect
//! them through [`classify`] and the scan helpers below.

use crate::message::MessageNumber;
use crate::severity::Severity;
use msglog_shared::ErrorEnvelope;
use std::collections::{BTreeMap, HashMap};
use std::error::Error;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// String-keyed map detail; entries land in the details map under their own keys.
pub type StringMap = BTreeMap<String, String>;

/// Shared handle to an error passed as a detail.
///
/// The message is the error's display text unless one was given with
/// [`WrappedError::with_message`].
#[derive(Clone)]
pub struct WrappedError {
    inner: Arc<dyn Error + Send + Sync>,
    message: Option<Arc<str>>,
}

impl WrappedError {
    /// Wrap any error value.
    pub fn new(error: impl Error + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(error),
            message: None,
        }
    }

    /// Wrap an error whose message differs from its display text.
    pub fn with_message(
        error: impl Error + Send + Sync + 'static,
        message: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            inner: Arc::new(error),
            message: Some(message.into()),
        }
    }

    /// Wrap an envelope by its bare message, without the kind and code prefix.
    pub fn from_envelope(envelope: ErrorEnvelope) -> Self {
        let message = envelope.message.clone();
        Self::with_message(envelope, message)
    }

    /// Wrap a bare message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(MessageError(message.into()))
    }

    /// The error's message.
    #[must_use]
    pub fn message(&self) -> String {
        self.message
            .as_deref()
            .map_or_else(|| self.inner.to_string(), str::to_string)
    }

    /// Borrow the wrapped error.
    #[must_use]
    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.inner.as_ref()
    }
}

impl fmt::Debug for WrappedError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("WrappedError")
            .field(&self.message())
            .finish()
    }
}

impl fmt::Display for WrappedError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message.as_deref() {
            Some(message) => formatter.write_str(message),
            None => fmt::Display::fmt(&self.inner, formatter),
        }
    }
}

impl PartialEq for WrappedError {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.message() == other.message()
    }
}

#[derive(Debug)]
struct MessageError(String);

impl fmt::Display for MessageError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl Error for MessageError {}

/// Plain scalar detail value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Text.
    Str(String),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    Uint(u64),
    /// Floating point number.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// Any other value, already stringified. Embedded as JSON when it parses as JSON.
    Opaque(String),
}

/// One contextual value supplied with a log call.
#[derive(Debug, Clone, PartialEq)]
pub enum Detail {
    /// Explicit severity override.
    Severity(Severity),
    /// An error; feeds the status resolver and the errors list.
    Error(WrappedError),
    /// String-keyed map.
    Map(StringMap),
    /// Selects a different text template.
    MessageNumber(MessageNumber),
    /// Elapsed time reported in the record's duration field.
    Duration(Duration),
    /// Absent value.
    Nil,
    /// Plain value.
    Scalar(Scalar),
}

/// Semantic kind of a detail, as seen by the resolvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailKind<'a> {
    /// Explicit severity override.
    ExplicitSeverity(Severity),
    /// Wrapped error.
    WrappedError(&'a WrappedError),
    /// String-keyed map.
    StringMap(&'a StringMap),
    /// Absent value.
    Nil,
    /// Plain value.
    Scalar(&'a Scalar),
    /// Template-selection marker.
    MessageNumberMarker(MessageNumber),
    /// Elapsed time.
    Duration(Duration),
}

/// Classify one detail.
#[must_use]
pub const fn classify(detail: &Detail) -> DetailKind<'_> {
    match detail {
        Detail::Severity(severity) => DetailKind::ExplicitSeverity(*severity),
        Detail::Error(error) => DetailKind::WrappedError(error),
        Detail::Map(map) => DetailKind::StringMap(map),
        Detail::MessageNumber(number) => DetailKind::MessageNumberMarker(*number),
        Detail::Duration(duration) => DetailKind::Duration(*duration),
        Detail::Nil => DetailKind::Nil,
        Detail::Scalar(scalar) => DetailKind::Scalar(scalar),
    }
}

impl Detail {
    /// Wrap an error value as a detail.
    pub fn error(error: impl Error + Send + Sync + 'static) -> Self {
        Self::Error(WrappedError::new(error))
    }

    /// Wrap a bare error message as a detail.
    pub fn error_msg(message: impl Into<String>) -> Self {
        Self::Error(WrappedError::msg(message))
    }

    /// Marker selecting the text template for `number`.
    pub fn message_number(number: impl Into<MessageNumber>) -> Self {
        Self::MessageNumber(number.into())
    }

    /// An arbitrary value captured through its `Display` output.
    pub fn opaque(value: impl fmt::Display) -> Self {
        Self::Scalar(Scalar::Opaque(value.to_string()))
    }

    /// Semantic kind of this detail.
    #[must_use]
    pub const fn kind(&self) -> DetailKind<'_> {
        classify(self)
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl From<Severity> for Detail {
    fn from(value: Severity) -> Self {
        Self::Severity(value)
    }
}

impl From<WrappedError> for Detail {
    fn from(value: WrappedError) -> Self {
        Self::Error(value)
    }
}

impl From<ErrorEnvelope> for Detail {
    fn from(value: ErrorEnvelope) -> Self {
        Self::Error(WrappedError::from_envelope(value))
    }
}

impl From<StringMap> for Detail {
    fn from(value: StringMap) -> Self {
        Self::Map(value)
    }
}

impl<S: std::hash::BuildHasher> From<HashMap<String, String, S>> for Detail {
    fn from(value: HashMap<String, String, S>) -> Self {
        Self::Map(value.into_iter().collect())
    }
}

impl From<MessageNumber> for Detail {
    fn from(value: MessageNumber) -> Self {
        Self::MessageNumber(value)
    }
}

impl From<Duration> for Detail {
    fn from(value: Duration) -> Self {
        Self::Duration(value)
    }
}

impl From<Scalar> for Detail {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl From<&str> for Detail {
    fn from(value: &str) -> Self {
        Self::Scalar(Scalar::Str(value.to_string()))
    }
}

impl From<String> for Detail {
    fn from(value: String) -> Self {
        Self::Scalar(Scalar::Str(value))
    }
}

impl From<&String> for Detail {
    fn from(value: &String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<i64> for Detail {
    fn from(value: i64) -> Self {
        Self::Scalar(Scalar::Int(value))
    }
}

impl From<i32> for Detail {
    fn from(value: i32) -> Self {
        Self::Scalar(Scalar::Int(i64::from(value)))
    }
}

impl From<u64> for Detail {
    fn from(value: u64) -> Self {
        Self::Scalar(Scalar::Uint(value))
    }
}

impl From<u32> for Detail {
    fn from(value: u32) -> Self {
        Self::Scalar(Scalar::Uint(u64::from(value)))
    }
}

impl From<usize> for Detail {
    fn from(value: usize) -> Self {
        u64::try_from(value).map_or_else(|_| Self::opaque(value), Self::from)
    }
}

impl From<f64> for Detail {
    fn from(value: f64) -> Self {
        Self::Scalar(Scalar::Float(value))
    }
}

impl From<f32> for Detail {
    fn from(value: f32) -> Self {
        Self::Scalar(Scalar::Float(f64::from(value)))
    }
}

impl From<bool> for Detail {
    fn from(value: bool) -> Self {
        Self::Scalar(Scalar::Bool(value))
    }
}

impl<T: Into<Self>> From<Option<T>> for Detail {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nil, Into::into)
    }
}

/// Build a `Vec<Detail>` from heterogeneous values.
///
/// ```
/// use msglog_domain::{Detail, Severity, details};
///
/// let list = details!["Robert Smith", 12345, Severity::Warn];
/// assert_eq!(list.len(), 3);
/// assert_eq!(list[2], Detail::Severity(Severity::Warn));
/// ```
#[macro_export]
macro_rules! details {
    () => {
        ::std::vec::Vec::<$crate::Detail>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Detail::from($value)),+]
    };
}

// =============================================================================
// SCANS
// =============================================================================

/// First explicit severity override, scanning forward.
#[must_use]
pub fn first_severity_override(details: &[Detail]) -> Option<Severity> {
    details.iter().find_map(|detail| match classify(detail) {
        DetailKind::ExplicitSeverity(severity) => Some(severity),
        _ => None,
    })
}

/// Last message-number marker, scanning in reverse.
#[must_use]
pub fn last_message_number_marker(details: &[Detail]) -> Option<MessageNumber> {
    details.iter().rev().find_map(|detail| match classify(detail) {
        DetailKind::MessageNumberMarker(number) => Some(number),
        _ => None,
    })
}

/// Wrapped errors, last supplied first.
pub fn errors_in_reverse(details: &[Detail]) -> impl Iterator<Item = &WrappedError> {
    details.iter().rev().filter_map(|detail| match classify(detail) {
        DetailKind::WrappedError(error) => Some(error),
        _ => None,
    })
}

/// Wrapped errors in supplied order.
pub fn errors_in_order(details: &[Detail]) -> impl Iterator<Item = &WrappedError> {
    details.iter().filter_map(|detail| match classify(detail) {
        DetailKind::WrappedError(error) => Some(error),
        _ => None,
    })
}

/// First duration, scanning forward.
#[must_use]
pub fn first_duration(details: &[Detail]) -> Option<Duration> {
    details.iter().find_map(|detail| match classify(detail) {
        DetailKind::Duration(duration) => Some(duration),
        _ => None,
    })
}

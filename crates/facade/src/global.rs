//! Process-wide default logger.

use crate::handle::MessageLoggerHandle;
use arc_swap::ArcSwap;
use msglog_domain::{Detail, MessageNumber, Severity};
use std::sync::{Arc, LazyLock};

static DEFAULT_LOGGER: LazyLock<ArcSwap<MessageLoggerHandle>> =
    LazyLock::new(|| ArcSwap::from_pointee(MessageLoggerHandle::default()));

/// The current default logger.
#[must_use]
pub fn default_logger() -> Arc<MessageLoggerHandle> {
    DEFAULT_LOGGER.load_full()
}

/// Replace the default logger, returning the previous one.
pub fn install_default_logger(handle: MessageLoggerHandle) -> Arc<MessageLoggerHandle> {
    let previous = DEFAULT_LOGGER.swap(Arc::new(handle));
    tracing::debug!("default message logger installed");
    previous
}

/// Log through the default logger.
#[track_caller]
pub fn log(number: impl Into<MessageNumber>, details: &[Detail]) {
    DEFAULT_LOGGER.load().log(number.into(), details);
}

/// Returns true when the default logger emits `severity`.
#[must_use]
pub fn is_enabled(severity: Severity) -> bool {
    DEFAULT_LOGGER.load().is_enabled(severity)
}

/// Replace the default logger's minimum severity.
pub fn set_level(severity: Severity) {
    DEFAULT_LOGGER.load().set_level(severity);
}

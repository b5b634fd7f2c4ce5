//! Minimum-severity gate.

use msglog_domain::Severity;
use std::sync::atomic::{AtomicU8, Ordering};

/// Holds the minimum emitted severity.
///
/// Setting the level enables that severity and every higher one in a single
/// atomic store, so readers never see a partial update.
#[derive(Debug)]
pub struct LevelGate {
    minimum: AtomicU8,
}

impl Default for LevelGate {
    fn default() -> Self {
        Self::new(Severity::Info)
    }
}

impl LevelGate {
    /// Gate that lets `minimum` and above through.
    #[must_use]
    pub const fn new(minimum: Severity) -> Self {
        Self {
            minimum: AtomicU8::new(minimum.rank()),
        }
    }

    /// Current minimum severity.
    #[must_use]
    pub fn level(&self) -> Severity {
        Severity::from_rank(self.minimum.load(Ordering::Relaxed)).unwrap_or(Severity::Panic)
    }

    /// Replace the minimum severity.
    pub fn set_level(&self, minimum: Severity) {
        self.minimum.store(minimum.rank(), Ordering::Relaxed);
        tracing::debug!(level = %minimum, "log level changed");
    }

    /// Replace the minimum severity by name. Unknown names select `PANIC`.
    pub fn set_level_from_str(&self, name: &str) -> Severity {
        let minimum = name.parse().unwrap_or(Severity::Panic);
        self.set_level(minimum);
        minimum
    }

    /// Returns true when `severity` passes the gate.
    #[must_use]
    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity >= self.level()
    }

    /// `TRACE` passes the gate.
    #[must_use]
    pub fn is_trace(&self) -> bool {
        self.is_enabled(Severity::Trace)
    }

    /// `DEBUG` passes the gate.
    #[must_use]
    pub fn is_debug(&self) -> bool {
        self.is_enabled(Severity::Debug)
    }

    /// `INFO` passes the gate.
    #[must_use]
    pub fn is_info(&self) -> bool {
        self.is_enabled(Severity::Info)
    }

    /// `WARN` passes the gate.
    #[must_use]
    pub fn is_warn(&self) -> bool {
        self.is_enabled(Severity::Warn)
    }

    /// `ERROR` passes the gate.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.is_enabled(Severity::Error)
    }

    /// `FATAL` passes the gate.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        self.is_enabled(Severity::Fatal)
    }

    /// `PANIC` passes the gate.
    #[must_use]
    pub fn is_panic(&self) -> bool {
        self.is_enabled(Severity::Panic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_level_toggles_every_severity() {
        let gate = LevelGate::default();
        assert!(!gate.is_debug());
        assert!(gate.is_info());

        gate.set_level(Severity::Error);
        let enabled: Vec<bool> = Severity::ALL
            .iter()
            .map(|severity| gate.is_enabled(*severity))
            .collect();
        assert_eq!(enabled, [false, false, false, false, true, true, true]);

        gate.set_level(Severity::Trace);
        assert!(gate.is_trace() && gate.is_warn() && gate.is_fatal() && gate.is_panic());
    }

    #[test]
    fn unknown_names_fall_back_to_panic() {
        let gate = LevelGate::default();
        assert_eq!(gate.set_level_from_str("debug"), Severity::Debug);
        assert!(gate.is_debug());

        assert_eq!(gate.set_level_from_str("verbose"), Severity::Panic);
        assert!(!gate.is_fatal());
        assert!(gate.is_panic());
        assert!(!gate.is_error());
    }
}

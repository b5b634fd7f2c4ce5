//! In-memory sink and clock implementations for port contracts.
//!
//! These implementations are intended for:
//! - Unit/integration tests
//! - Deterministic contract tests for the ports layer

use msglog_domain::Severity;
use msglog_ports::{ClockPort, LogSink};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Records written lines and termination requests without terminating.
#[derive(Debug, Default)]
pub struct MemoryLogSink {
    lines: Mutex<Vec<String>>,
    terminations: Mutex<Vec<(Severity, String)>>,
}

impl MemoryLogSink {
    /// Lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|lines| lines.clone()).unwrap_or_default()
    }

    /// Drain the written lines.
    pub fn take(&self) -> Vec<String> {
        let mut guard = self.lines.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *guard)
    }

    /// Last line written, if any.
    pub fn last_line(&self) -> Option<String> {
        self.lines().pop()
    }

    /// Termination requests (`FATAL`/`PANIC`) seen so far.
    pub fn terminations(&self) -> Vec<(Severity, String)> {
        self.terminations
            .lock()
            .map(|terminations| terminations.clone())
            .unwrap_or_default()
    }
}

impl LogSink for MemoryLogSink {
    fn write_line(&self, line: &str, _call_depth: usize) {
        let mut guard = self.lines.lock().unwrap_or_else(PoisonError::into_inner);
        guard.push(line.to_string());
    }

    fn terminate(&self, severity: Severity, line: &str) {
        let mut guard = self.terminations.lock().unwrap_or_else(PoisonError::into_inner);
        guard.push((severity, line.to_string()));
    }
}

/// Clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub SystemTime);

impl FixedClock {
    /// 2021-03-04T05:06:07.000000089Z
    pub fn sample() -> Self {
        Self(UNIX_EPOCH + Duration::new(1_614_834_367, 89))
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::sample()
    }
}

impl ClockPort for FixedClock {
    fn now(&self) -> SystemTime {
        self.0
    }
}

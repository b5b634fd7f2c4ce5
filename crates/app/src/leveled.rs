//! Plain `LEVEL message` lines without message-number resolution.

use crate::gate::LevelGate;
use msglog_domain::{Arg, Detail, Severity, format_details, sprintf};
use msglog_ports::LogSink;
use std::fmt;
use std::sync::Arc;

const LEVELED_CALL_DEPTH: usize = 2;

/// Writes `LEVEL message` lines gated by a [`LevelGate`].
#[derive(Clone)]
pub struct LeveledLogger {
    gate: Arc<LevelGate>,
    sink: Arc<dyn LogSink>,
}

impl fmt::Debug for LeveledLogger {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LeveledLogger")
            .field("gate", &self.gate)
            .finish_non_exhaustive()
    }
}

impl LeveledLogger {
    /// Create a logger writing to `sink`.
    #[must_use]
    pub fn new(gate: Arc<LevelGate>, sink: Arc<dyn LogSink>) -> Self {
        Self { gate, sink }
    }

    /// The gate in use.
    #[must_use]
    pub const fn gate(&self) -> &Arc<LevelGate> {
        &self.gate
    }

    /// Write `details` joined by spaces.
    pub fn log(&self, severity: Severity, details: &[Detail]) {
        if !self.gate.is_enabled(severity) {
            return;
        }
        let message = details
            .iter()
            .map(|detail| sprintf("%v", &[Arg::from(detail)]))
            .collect::<Vec<_>>()
            .join(" ");
        self.emit(severity, &message);
    }

    /// Write `template` with `details` substituted.
    pub fn logf(&self, severity: Severity, template: &str, details: &[Detail]) {
        if !self.gate.is_enabled(severity) {
            return;
        }
        self.emit(severity, &format_details(template, details));
    }

    fn emit(&self, severity: Severity, message: &str) {
        let line = format!("{severity} {message}");
        let line = line.trim_end();
        self.sink.write_line(line, LEVELED_CALL_DEPTH);
        if severity.is_terminal() {
            self.sink.terminate(severity, line);
        }
    }
}

//! Line-oriented output boundary.

use msglog_domain::Severity;
use std::time::SystemTime;

/// Receives rendered lines.
///
/// Writes are fire-and-forget. A sink also owns what happens after a `FATAL`
/// or `PANIC` line has been written.
pub trait LogSink: Send + Sync {
    /// Write one line. `call_depth` counts frames between the caller and the sink.
    fn write_line(&self, line: &str, call_depth: usize);

    /// Called after a `FATAL` or `PANIC` line was written.
    fn terminate(&self, severity: Severity, line: &str) {
        let _ = (severity, line);
    }
}

/// Source of the current time.
pub trait ClockPort: Send + Sync {
    /// Current wall-clock time.
    fn now(&self) -> SystemTime;
}

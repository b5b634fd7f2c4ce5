//! Standard-stream sinks.

use msglog_domain::Severity;
use msglog_ports::LogSink;
use std::io::Write;

/// Log sink that writes to stderr.
#[derive(Debug, Default)]
pub struct StderrLogSink;

impl LogSink for StderrLogSink {
    fn write_line(&self, line: &str, _call_depth: usize) {
        let mut stderr = std::io::stderr().lock();
        if let Err(error) = writeln!(stderr, "{line}") {
            tracing::warn!(%error, "stderr sink write failed");
        }
    }

    fn terminate(&self, severity: Severity, line: &str) {
        terminate_process(severity, line);
    }
}

/// Log sink that writes to stdout.
#[derive(Debug, Default)]
pub struct StdoutLogSink;

impl LogSink for StdoutLogSink {
    fn write_line(&self, line: &str, _call_depth: usize) {
        let mut stdout = std::io::stdout().lock();
        if let Err(error) = writeln!(stdout, "{line}").and_then(|()| stdout.flush()) {
            tracing::warn!(%error, "stdout sink write failed");
        }
    }

    fn terminate(&self, severity: Severity, line: &str) {
        terminate_process(severity, line);
    }
}

/// `FATAL` exits with status 1; `PANIC` unwinds with the line as payload.
pub fn terminate_process(severity: Severity, line: &str) {
    match severity {
        Severity::Fatal => std::process::exit(1),
        Severity::Panic => std::panic::panic_any(line.to_string()),
        _ => {},
    }
}

//! Message logger: gate, resolve, assemble, render, write.

use crate::assemble::{RecordParts, assemble_record};
use crate::gate::LevelGate;
use crate::stamps::{RecordStamps, format_date, format_location, format_time};
use arc_swap::ArcSwap;
use msglog_domain::{Detail, MessageNumber, Severity};
use msglog_ports::{
    ClockPort, DetailsResolver, DurationResolver, ErrorsResolver, IdResolver, LevelResolver,
    LogSink, Record, RecordRenderer, RenderError, ResolveError, StatusResolver, TextResolver,
};
use msglog_shared::{ErrorCode, ErrorEnvelope};
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Frames between a caller of [`MessageLogger::log`] and the sink.
pub const SINK_CALL_DEPTH: usize = 2;

/// One resolver per record field.
///
/// Replaced as a whole; a call never mixes strategies from two generations.
#[derive(Clone)]
pub struct LoggerStrategies {
    /// Level resolver.
    pub level: Arc<dyn LevelResolver>,
    /// Status resolver.
    pub status: Arc<dyn StatusResolver>,
    /// Text resolver.
    pub text: Arc<dyn TextResolver>,
    /// Id resolver.
    pub id: Arc<dyn IdResolver>,
    /// Duration resolver.
    pub duration: Arc<dyn DurationResolver>,
    /// Details resolver.
    pub details: Arc<dyn DetailsResolver>,
    /// Errors resolver.
    pub errors: Arc<dyn ErrorsResolver>,
}

impl fmt::Debug for LoggerStrategies {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("LoggerStrategies").finish_non_exhaustive()
    }
}

/// Dependencies required by [`MessageLogger`].
#[derive(Clone)]
pub struct MessageLoggerDeps {
    /// Field resolvers.
    pub strategies: LoggerStrategies,
    /// Record renderer.
    pub renderer: Arc<dyn RecordRenderer>,
    /// Output sink.
    pub sink: Arc<dyn LogSink>,
    /// Time source for date/time stamps.
    pub clock: Arc<dyn ClockPort>,
    /// Minimum-severity gate, possibly shared with a [`crate::LeveledLogger`].
    pub gate: Arc<LevelGate>,
    /// Optional stamps.
    pub stamps: RecordStamps,
}

/// A composed record plus the non-fatal diagnostics raised while resolving it.
#[derive(Debug, Clone, PartialEq)]
pub struct Composed {
    /// The record.
    pub record: Record,
    /// Fallbacks taken while resolving.
    pub diagnostics: Vec<ResolveError>,
}

/// Composes numbered messages into records and writes them to a sink.
pub struct MessageLogger {
    strategies: ArcSwap<LoggerStrategies>,
    renderer: Arc<dyn RecordRenderer>,
    sink: Arc<dyn LogSink>,
    clock: Arc<dyn ClockPort>,
    gate: Arc<LevelGate>,
    stamps: RecordStamps,
}

impl fmt::Debug for MessageLogger {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MessageLogger")
            .field("level", &self.gate.level())
            .field("stamps", &self.stamps)
            .finish_non_exhaustive()
    }
}

impl MessageLogger {
    /// Create a logger from its dependencies.
    #[must_use]
    pub fn new(deps: MessageLoggerDeps) -> Self {
        Self {
            strategies: ArcSwap::from_pointee(deps.strategies),
            renderer: deps.renderer,
            sink: deps.sink,
            clock: deps.clock,
            gate: deps.gate,
            stamps: deps.stamps,
        }
    }

    /// The gate shared by this logger.
    #[must_use]
    pub const fn gate(&self) -> &Arc<LevelGate> {
        &self.gate
    }

    /// Returns true when `severity` passes the gate.
    #[must_use]
    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.gate.is_enabled(severity)
    }

    /// Replace the minimum severity.
    pub fn set_level(&self, severity: Severity) {
        self.gate.set_level(severity);
    }

    /// Current strategies.
    #[must_use]
    pub fn strategies(&self) -> Arc<LoggerStrategies> {
        self.strategies.load_full()
    }

    /// Swap in a new strategy set.
    pub fn replace_strategies(&self, strategies: LoggerStrategies) {
        self.strategies.store(Arc::new(strategies));
        tracing::debug!("logger strategies replaced");
    }

    /// Resolve every field without gating or writing.
    #[must_use]
    pub fn compose(
        &self,
        number: MessageNumber,
        details: &[Detail],
        location: Option<&Location<'_>>,
    ) -> Composed {
        let strategies = self.strategies.load_full();
        let level = strategies.level.resolve_level(number, details);
        let mut diagnostics: Vec<ResolveError> = level.diagnostic.into_iter().collect();
        let record = self.compose_with_level(
            &strategies,
            level.value,
            number,
            details,
            location,
            &mut diagnostics,
        );
        Composed {
            record,
            diagnostics,
        }
    }

    /// Render the record for `number` without gating or writing.
    #[track_caller]
    pub fn message(
        &self,
        number: MessageNumber,
        details: &[Detail],
    ) -> Result<String, RenderError> {
        let composed = self.compose(number, details, Some(Location::caller()));
        report(&composed.diagnostics);
        self.renderer.render(&composed.record)
    }

    /// Compose, render, and write the record for `number` when its level passes the gate.
    ///
    /// A `FATAL` or `PANIC` record is handed to the sink for termination after it is written.
    #[track_caller]
    pub fn log(&self, number: MessageNumber, details: &[Detail]) {
        let location = Location::caller();
        let strategies = self.strategies.load_full();
        let level = strategies.level.resolve_level(number, details);
        if !self.gate.is_enabled(level.value) {
            return;
        }

        let mut diagnostics: Vec<ResolveError> = level.diagnostic.into_iter().collect();
        let record = self.compose_with_level(
            &strategies,
            level.value,
            number,
            details,
            Some(location),
            &mut diagnostics,
        );
        report(&diagnostics);

        let line = match self.renderer.render(&record) {
            Ok(line) => line,
            Err(error) => {
                tracing::warn!(%error, message_number = %number, "record render failed");
                return;
            },
        };
        self.sink.write_line(&line, SINK_CALL_DEPTH);
        if level.value.is_terminal() {
            self.sink.terminate(level.value, &line);
        }
    }

    /// Build the record for `number` as an error value without writing it.
    #[track_caller]
    pub fn error(&self, number: MessageNumber, details: &[Detail]) -> LoggedError {
        let composed = self.compose(number, details, Some(Location::caller()));
        report(&composed.diagnostics);
        let rendered = match self.renderer.render(&composed.record) {
            Ok(line) => line,
            Err(error) => {
                tracing::warn!(%error, message_number = %number, "record render failed");
                composed
                    .record
                    .text
                    .clone()
                    .unwrap_or_else(|| number.to_string())
            },
        };
        LoggedError {
            number,
            record: composed.record,
            rendered,
        }
    }

    fn compose_with_level(
        &self,
        strategies: &LoggerStrategies,
        level: Severity,
        number: MessageNumber,
        details: &[Detail],
        location: Option<&Location<'_>>,
        diagnostics: &mut Vec<ResolveError>,
    ) -> Record {
        let now = (self.stamps.date || self.stamps.time).then(|| self.clock.now());

        let status = match strategies.status.resolve_status(number, details) {
            Ok(status) => Some(status),
            Err(error) => {
                diagnostics.push(error);
                None
            },
        };
        let text = strategies
            .text
            .resolve_text(number, details)
            .unwrap_or_else(|error| {
                diagnostics.push(error);
                String::new()
            });
        let id = strategies
            .id
            .resolve_id(number, details)
            .unwrap_or_else(|error| {
                diagnostics.push(error);
                number.to_string()
            });

        assemble_record(RecordParts {
            date: now.filter(|_| self.stamps.date).map(format_date),
            time: now.filter(|_| self.stamps.time).map(format_time),
            level: Some(level),
            id,
            text,
            status,
            duration: strategies.duration.resolve_duration(number, details),
            location: location
                .filter(|_| self.stamps.location)
                .map(format_location),
            errors: strategies.errors.resolve_errors(number, details),
            details: strategies.details.resolve_details(number, details),
        })
    }
}

fn report(diagnostics: &[ResolveError]) {
    for diagnostic in diagnostics {
        tracing::debug!(
            %diagnostic,
            message_number = %diagnostic.message_number(),
            "resolution fell back to a default"
        );
    }
}

/// A composed record carried as an error value.
///
/// Its message is the rendered record, so passing it on as a detail embeds
/// the whole record in the next record's `errors` list.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedError {
    number: MessageNumber,
    record: Record,
    rendered: String,
}

impl LoggedError {
    /// Message number the error was built from.
    #[must_use]
    pub const fn message_number(&self) -> MessageNumber {
        self.number
    }

    /// The composed record.
    #[must_use]
    pub const fn record(&self) -> &Record {
        &self.record
    }

    /// The rendered record.
    #[must_use]
    pub fn rendered(&self) -> &str {
        &self.rendered
    }
}

impl fmt::Display for LoggedError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.rendered)
    }
}

impl std::error::Error for LoggedError {}

impl From<LoggedError> for ErrorEnvelope {
    fn from(error: LoggedError) -> Self {
        let mut envelope = Self::expected(ErrorCode::new("msglog", "logged_error"), error.rendered)
            .with_metadata("message_number", error.number.to_string());
        if let Some(status) = error.record.status {
            envelope = envelope.with_metadata("status", status.as_str());
        }
        if let Some(level) = error.record.level {
            envelope = envelope.with_metadata("level", level.as_str());
        }
        envelope
    }
}

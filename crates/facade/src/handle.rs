//! Configured logger with independent table replacement.

use crate::wiring::{
    StrategySelection, build_renderer, build_sink, build_stamps, build_strategies,
};
use msglog_adapters::{IdStatusTable, SystemClock};
use msglog_app::{LevelGate, LeveledLogger, LoggedError, MessageLogger, MessageLoggerDeps};
use msglog_config::{LoggerTables, OutputConfig, ValidatedLoggerConfig};
use msglog_domain::{Detail, MessageNumber, MessageTemplates, RangeTable, Severity, Status};
use msglog_ports::{ClockPort, LogSink};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A [`MessageLogger`] plus the tables its strategies were built from.
///
/// Each `set_*` operation replaces one table and swaps in a rebuilt strategy
/// set; concurrent calls to [`MessageLoggerHandle::log`] see either the old
/// set or the new one.
#[derive(Debug)]
pub struct MessageLoggerHandle {
    logger: MessageLogger,
    leveled: LeveledLogger,
    selection: StrategySelection,
    tables: Mutex<LoggerTables>,
}

impl Default for MessageLoggerHandle {
    fn default() -> Self {
        let output = OutputConfig::default();
        Self::from_parts(
            StrategySelection::default(),
            LoggerTables::default(),
            &output,
            build_sink(output.sink),
            Arc::new(SystemClock),
        )
    }
}

impl MessageLoggerHandle {
    /// Build a logger writing to the sink named by `config`.
    #[must_use]
    pub fn from_config(config: &ValidatedLoggerConfig) -> Self {
        let sink = build_sink(config.output.sink);
        Self::from_config_with(config, sink, Arc::new(SystemClock))
    }

    /// Build a logger writing to `sink` with time from `clock`.
    #[must_use]
    pub fn from_config_with(
        config: &ValidatedLoggerConfig,
        sink: Arc<dyn LogSink>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self::from_parts(
            StrategySelection::from_config(config),
            config.tables().clone(),
            &config.output,
            sink,
            clock,
        )
    }

    fn from_parts(
        selection: StrategySelection,
        tables: LoggerTables,
        output: &OutputConfig,
        sink: Arc<dyn LogSink>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let gate = Arc::new(LevelGate::new(tables.minimum));
        let logger = MessageLogger::new(MessageLoggerDeps {
            strategies: build_strategies(selection, &tables),
            renderer: build_renderer(output.format),
            sink: sink.clone(),
            clock,
            gate: gate.clone(),
            stamps: build_stamps(output),
        });
        tracing::debug!(
            level = ?selection.level,
            status = ?selection.status,
            text = ?selection.text,
            format = %output.format,
            "message logger configured"
        );
        Self {
            logger,
            leveled: LeveledLogger::new(gate, sink),
            selection,
            tables: Mutex::new(tables),
        }
    }

    /// The underlying logger.
    #[must_use]
    pub const fn logger(&self) -> &MessageLogger {
        &self.logger
    }

    /// A leveled logger sharing this logger's gate and sink.
    #[must_use]
    pub const fn leveled(&self) -> &LeveledLogger {
        &self.leveled
    }

    /// Snapshot of the current tables.
    #[must_use]
    pub fn tables(&self) -> LoggerTables {
        self.lock_tables().clone()
    }

    /// Compose and write the record for `number`.
    #[track_caller]
    pub fn log(&self, number: MessageNumber, details: &[Detail]) {
        self.logger.log(number, details);
    }

    /// Build the record for `number` as an error value without writing it.
    #[track_caller]
    pub fn error(&self, number: MessageNumber, details: &[Detail]) -> LoggedError {
        self.logger.error(number, details)
    }

    /// Returns true when `severity` passes the gate.
    #[must_use]
    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.logger.is_enabled(severity)
    }

    /// Replace the minimum severity.
    pub fn set_level(&self, severity: Severity) {
        self.logger.set_level(severity);
    }

    /// Replace the text templates.
    pub fn set_text_templates(&self, templates: MessageTemplates) {
        self.update("text templates", |tables| tables.templates = templates);
    }

    /// Replace the level range table.
    pub fn set_level_ranges(&self, ranges: RangeTable<Severity>) {
        self.update("level ranges", |tables| tables.level_ranges = ranges);
    }

    /// Replace the status range table.
    pub fn set_status_ranges(&self, ranges: RangeTable<Status>) {
        self.update("status ranges", |tables| tables.status_ranges = ranges);
    }

    /// Replace the per-message-number status table.
    pub fn set_id_statuses(&self, statuses: IdStatusTable) {
        self.update("id statuses", |tables| tables.id_statuses = statuses);
    }

    /// Replace the id template; `None` restores plain decimal ids.
    pub fn set_id_template(&self, template: Option<&str>) {
        let template = template.map(str::trim).filter(|template| !template.is_empty());
        self.update("id template", |tables| {
            tables.id_template = template.map(Into::into);
        });
    }

    fn update(&self, table: &'static str, apply: impl FnOnce(&mut LoggerTables)) {
        let mut tables = self.lock_tables();
        apply(&mut tables);
        self.logger
            .replace_strategies(build_strategies(self.selection, &tables));
        tracing::debug!(table, "logger table installed");
    }

    fn lock_tables(&self) -> MutexGuard<'_, LoggerTables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use msglog_config::parse_logger_config_json;
    use msglog_testkit::fixtures::{sample_level_ranges, sample_templates};
    use msglog_testkit::in_memory::{FixedClock, MemoryLogSink};
    use std::error::Error;

    fn handle() -> Result<(MessageLoggerHandle, Arc<MemoryLogSink>), Box<dyn Error>> {
        let config = parse_logger_config_json(r#"{"output":{"format":"terse"}}"#)?;
        let sink = Arc::new(MemoryLogSink::default());
        let handle = MessageLoggerHandle::from_config_with(
            &config,
            sink.clone(),
            Arc::new(FixedClock::sample()),
        );
        Ok((handle, sink))
    }

    #[test]
    fn installs_replace_one_table_each() -> Result<(), Box<dyn Error>> {
        let (handle, sink) = handle()?;
        handle.log(MessageNumber::new(1500), &[Detail::from("spun")]);

        handle.set_text_templates(sample_templates());
        handle.set_level_ranges(sample_level_ranges());
        handle.set_status_ranges(RangeTable::new().with(0, Status::from("OK")));
        handle.set_id_statuses(IdStatusTable::from([(
            MessageNumber::new(1500),
            Status::from("Status for 1500"),
        )]));
        handle.set_id_template(Some(" widget-%d "));
        handle.log(MessageNumber::new(1500), &[Detail::from("spun")]);
        handle.log(MessageNumber::new(10), &[]);

        assert_eq!(sink.lines(), vec![
            r#"1500: {"1":"spun"}"#.to_string(),
            r#"widget-1500: (Status for 1500) Widget spun {"1":"spun"}"#.to_string(),
            "widget-10: (OK)".to_string(),
        ]);
        assert_eq!(handle.tables().level_ranges, sample_level_ranges());
        Ok(())
    }

    #[test]
    fn clearing_the_id_template_restores_plain_ids() -> Result<(), Box<dyn Error>> {
        let (handle, sink) = handle()?;
        handle.set_id_template(Some("x-%d"));
        handle.set_id_template(None);
        handle.log(MessageNumber::new(7), &[]);
        assert_eq!(sink.last_line().as_deref(), Some("7:"));
        Ok(())
    }

    #[test]
    fn level_changes_reach_the_leveled_logger() -> Result<(), Box<dyn Error>> {
        let (handle, sink) = handle()?;
        handle.leveled().log(Severity::Debug, &[Detail::from("hidden")]);
        handle.set_level(Severity::Debug);
        handle.leveled().log(Severity::Debug, &[Detail::from("shown")]);

        assert!(handle.is_enabled(Severity::Debug));
        assert_eq!(sink.lines(), vec!["DEBUG shown".to_string()]);
        Ok(())
    }
}

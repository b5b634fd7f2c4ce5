//! Strategy and output selection from configuration.

use msglog_adapters::{
    DefaultIdResolver, DomainCodeStatusResolver, IdStatusResolver, JsonErrorsResolver,
    JsonRenderer, KeyedDetailsResolver, MicrosDurationResolver, NullStatusResolver,
    NullTextResolver, RangeLevelResolver, RangeStatusResolver, StaticLevelResolver,
    StatusLevelResolver, StderrLogSink, StdoutLogSink, TemplatedIdResolver,
    TemplatedTextResolver, TerseRenderer,
};
use msglog_app::{LoggerStrategies, RecordStamps};
use msglog_config::{
    LevelStrategy, LoggerConfig, LoggerTables, OutputConfig, RecordFormat, SinkTarget,
    StatusStrategy, TextStrategy,
};
use msglog_ports::{
    IdResolver, LevelResolver, LogSink, RecordRenderer, StatusResolver, TextResolver,
};
use std::sync::Arc;

/// Which resolver family fills each strategy slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrategySelection {
    /// Level resolver family.
    pub level: LevelStrategy,
    /// Status resolver family.
    pub status: StatusStrategy,
    /// Text resolver family.
    pub text: TextStrategy,
}

impl StrategySelection {
    /// Selection named by `config`.
    #[must_use]
    pub const fn from_config(config: &LoggerConfig) -> Self {
        Self {
            level: config.level.strategy,
            status: config.status.strategy,
            text: config.text.strategy,
        }
    }
}

/// Build a full strategy set over `tables`.
#[must_use]
pub fn build_strategies(selection: StrategySelection, tables: &LoggerTables) -> LoggerStrategies {
    let status = build_status(selection.status, tables);
    let level: Arc<dyn LevelResolver> = match selection.level {
        LevelStrategy::Ranges => Arc::new(RangeLevelResolver::new(
            tables.level_ranges.clone(),
            tables.default_level,
        )),
        LevelStrategy::Static => Arc::new(StaticLevelResolver::new(tables.default_level)),
        LevelStrategy::FromStatus => {
            Arc::new(StatusLevelResolver::new(status.clone(), tables.default_level))
        },
    };
    let text: Arc<dyn TextResolver> = match selection.text {
        TextStrategy::Null => Arc::new(NullTextResolver),
        TextStrategy::Templated => Arc::new(TemplatedTextResolver::new(tables.templates.clone())),
    };
    let id: Arc<dyn IdResolver> = match tables.id_template.as_deref() {
        Some(template) => Arc::new(TemplatedIdResolver::new(template)),
        None => Arc::new(DefaultIdResolver),
    };

    LoggerStrategies {
        level,
        status,
        text,
        id,
        duration: Arc::new(MicrosDurationResolver),
        details: Arc::new(KeyedDetailsResolver),
        errors: Arc::new(JsonErrorsResolver),
    }
}

fn build_status(strategy: StatusStrategy, tables: &LoggerTables) -> Arc<dyn StatusResolver> {
    match strategy {
        StatusStrategy::Null => Arc::new(NullStatusResolver),
        StatusStrategy::ById => Arc::new(IdStatusResolver::new(tables.id_statuses.clone())),
        StatusStrategy::ByRange => Arc::new(RangeStatusResolver::new(tables.status_ranges.clone())),
        StatusStrategy::DomainCode => Arc::new(DomainCodeStatusResolver::new(
            tables.domain_codes.clone(),
            tables.id_statuses.clone(),
            tables.status_ranges.clone(),
        )),
    }
}

/// Renderer for `format`.
#[must_use]
pub fn build_renderer(format: RecordFormat) -> Arc<dyn RecordRenderer> {
    match format {
        RecordFormat::Json => Arc::new(JsonRenderer),
        RecordFormat::Terse => Arc::new(TerseRenderer),
    }
}

/// Process sink for `target`.
#[must_use]
pub fn build_sink(target: SinkTarget) -> Arc<dyn LogSink> {
    match target {
        SinkTarget::Stderr => Arc::new(StderrLogSink),
        SinkTarget::Stdout => Arc::new(StdoutLogSink),
    }
}

/// Stamps enabled by `output`.
#[must_use]
pub const fn build_stamps(output: &OutputConfig) -> RecordStamps {
    RecordStamps {
        date: output.include_date,
        time: output.include_time,
        location: output.include_location,
    }
}

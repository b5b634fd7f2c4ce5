//! Integration tests wiring resolver strategies and renderers together.

use msglog_adapters::{
    DefaultIdResolver, DomainCodeStatusResolver, IdStatusTable, JsonErrorsResolver, JsonRenderer,
    KeyedDetailsResolver, RangeLevelResolver, TemplatedTextResolver, TerseRenderer,
};
use msglog_domain::{
    Detail, DomainCodeTable, MessageNumber, MessageTemplates, RangeTable, Severity, Status,
    StatusBucket,
};
use msglog_ports::{
    DetailsResolver, ErrorsResolver, IdResolver, LevelResolver, Record, RecordRenderer,
    StatusResolver, TextResolver,
};
use std::error::Error;

fn compose(number: i64, details: &[Detail]) -> Result<Record, Box<dyn Error>> {
    let number = MessageNumber::new(number);
    let level = RangeLevelResolver::new(
        RangeTable::new()
            .with(0, Severity::Info)
            .with(1000, Severity::Warn)
            .with(2000, Severity::Error),
        Severity::Info,
    );
    let status = DomainCodeStatusResolver::new(
        DomainCodeTable::default(),
        IdStatusTable::new(),
        RangeTable::new()
            .with(0, Status::from(StatusBucket::Info))
            .with(2000, Status::from(StatusBucket::Error)),
    );
    let text = TemplatedTextResolver::new(
        MessageTemplates::new()
            .with(1500, "Widget %s")
            .with(2001, "Value: %d"),
    );

    Ok(Record {
        level: Some(level.resolve_level(number, details).value),
        id: Some(DefaultIdResolver.resolve_id(number, details)?),
        text: Some(text.resolve_text(number, details)?),
        status: status.resolve_status(number, details).ok(),
        errors: JsonErrorsResolver.resolve_errors(number, details),
        details: KeyedDetailsResolver.resolve_details(number, details),
        ..Record::default()
    })
}

#[test]
fn warn_range_message_renders_both_formats() -> Result<(), Box<dyn Error>> {
    let record = compose(1500, &[Detail::from("spun")])?;

    assert_eq!(
        JsonRenderer.render(&record)?,
        r#"{"level":"WARN","id":"1500","text":"Widget spun","status":"INFO","details":{"1":"spun"}}"#
    );
    assert_eq!(
        TerseRenderer.render(&record)?,
        r#"1500: (INFO) Widget spun {"1":"spun"}"#
    );
    Ok(())
}

#[test]
fn override_and_domain_code_shape_the_record() -> Result<(), Box<dyn Error>> {
    let details = [
        Detail::from(Severity::Debug),
        Detail::from("abc"),
        Detail::error_msg("0019E|Configuration not found"),
    ];
    let record = compose(2001, &details)?;

    assert_eq!(record.level, Some(Severity::Debug));
    assert_eq!(record.text.as_deref(), Some("Value: "));
    assert_eq!(
        record.status,
        Some(Status::Bucket(StatusBucket::ErrorUnrecoverable))
    );
    assert_eq!(
        JsonRenderer.render(&record)?,
        concat!(
            r#"{"level":"DEBUG","id":"2001","text":"Value: ","status":"ERROR_unrecoverable","#,
            r#""errors":[{"text":"0019E|Configuration not found"}],"details":{"2":"abc"}}"#
        )
    );
    Ok(())
}

//! Record renderers.

use crate::fields::embedded_json;
use msglog_domain::{Severity, Status};
use msglog_ports::{Record, RecordDetails, RecordErrors, RecordRenderer, RenderError};
use serde::Serialize;
use serde_json::Value;

/// One JSON object per record, fields in canonical order.
///
/// Text that is itself a JSON object or array is embedded rather than quoted.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

#[derive(Serialize)]
#[serde(untagged)]
enum TextField<'a> {
    Embedded(Value),
    Plain(&'a str),
}

#[derive(Serialize)]
struct JsonRecordView<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    level: Option<Severity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<TextField<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'a Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<&'a str>,
    #[serde(skip_serializing_if = "no_errors")]
    errors: &'a RecordErrors,
    #[serde(skip_serializing_if = "no_details")]
    details: &'a RecordDetails,
}

impl<'a> From<&'a Record> for JsonRecordView<'a> {
    fn from(record: &'a Record) -> Self {
        let text = non_empty(record.text.as_deref()).map(|text| {
            embedded_json(text).map_or(TextField::Plain(text), TextField::Embedded)
        });
        Self {
            date: non_empty(record.date.as_deref()),
            time: non_empty(record.time.as_deref()),
            level: record.level,
            id: non_empty(record.id.as_deref()),
            text,
            status: record.status.as_ref().filter(|status| !status.as_str().is_empty()),
            duration: record.duration.filter(|duration| *duration != 0),
            location: non_empty(record.location.as_deref()),
            errors: &record.errors,
            details: &record.details,
        }
    }
}

impl RecordRenderer for JsonRenderer {
    fn render(&self, record: &Record) -> Result<String, RenderError> {
        serde_json::to_string(&JsonRecordView::from(record))
            .map_err(|error| RenderError::Serialize(error.to_string()))
    }
}

/// `id: (status) text {details}`, each segment only when non-empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerseRenderer;

impl RecordRenderer for TerseRenderer {
    fn render(&self, record: &Record) -> Result<String, RenderError> {
        let mut line = String::new();
        if let Some(id) = non_empty(record.id.as_deref()) {
            line.push_str(id);
            line.push_str(": ");
        }
        if let Some(status) = record.status.as_ref().filter(|status| !status.as_str().is_empty()) {
            line.push('(');
            line.push_str(status.as_str());
            line.push_str(") ");
        }
        if let Some(text) = non_empty(record.text.as_deref()) {
            line.push_str(text);
            line.push(' ');
        }
        if !record.details.is_empty() {
            let details = serde_json::to_string(&record.details)
                .map_err(|error| RenderError::Serialize(error.to_string()))?;
            line.push_str(&details);
        }
        Ok(line.trim_end().to_string())
    }
}

fn no_errors(errors: &&RecordErrors) -> bool {
    errors.is_empty()
}

fn no_details(details: &&RecordDetails) -> bool {
    details.is_empty()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use msglog_domain::StatusBucket;
    use serde_json::json;
    use std::error::Error;

    fn text_only() -> Record {
        Record {
            text: Some("hello".to_string()),
            ..Record::default()
        }
    }

    #[test]
    fn text_only_record_renders_minimally() -> Result<(), Box<dyn Error>> {
        assert_eq!(JsonRenderer.render(&text_only())?, r#"{"text":"hello"}"#);
        assert_eq!(TerseRenderer.render(&text_only())?, "hello");
        Ok(())
    }

    #[test]
    fn json_does_not_escape_html() -> Result<(), Box<dyn Error>> {
        let record = Record {
            text: Some("<a href=\"x\">&</a>".to_string()),
            ..Record::default()
        };
        assert_eq!(
            JsonRenderer.render(&record)?,
            r#"{"text":"<a href=\"x\">&</a>"}"#
        );
        Ok(())
    }

    #[test]
    fn json_text_is_embedded() -> Result<(), Box<dyn Error>> {
        let record = Record {
            id: Some("7".to_string()),
            text: Some(r#"{"nested":true}"#.to_string()),
            ..Record::default()
        };
        assert_eq!(
            JsonRenderer.render(&record)?,
            r#"{"id":"7","text":{"nested":true}}"#
        );
        Ok(())
    }

    #[test]
    fn empty_strings_and_zero_duration_are_omitted() -> Result<(), Box<dyn Error>> {
        let record = Record {
            id: Some(String::new()),
            text: Some(String::new()),
            duration: Some(0),
            level: Some(Severity::Info),
            ..Record::default()
        };
        assert_eq!(JsonRenderer.render(&record)?, r#"{"level":"INFO"}"#);
        assert_eq!(TerseRenderer.render(&record)?, "");
        Ok(())
    }

    #[test]
    fn full_record_keeps_canonical_order() -> Result<(), Box<dyn Error>> {
        let record = Record {
            date: Some("2026-01-02".to_string()),
            time: Some("03:04:05.000000006".to_string()),
            level: Some(Severity::Error),
            id: Some("2001".to_string()),
            text: Some("Value: ".to_string()),
            status: Some(Status::Bucket(StatusBucket::ErrorUnrecoverable)),
            duration: Some(1500),
            location: Some("main.rs:10".to_string()),
            errors: vec![json!({"text": "0019E|gone"})],
            details: RecordDetails::from([("1".to_string(), json!("abc"))]),
        };

        assert_eq!(
            JsonRenderer.render(&record)?,
            concat!(
                r#"{"date":"2026-01-02","time":"03:04:05.000000006","level":"ERROR","#,
                r#""id":"2001","text":"Value: ","status":"ERROR_unrecoverable","#,
                r#""duration":1500,"location":"main.rs:10","#,
                r#""errors":[{"text":"0019E|gone"}],"details":{"1":"abc"}}"#
            )
        );
        assert_eq!(
            TerseRenderer.render(&record)?,
            r#"2001: (ERROR_unrecoverable) Value:  {"1":"abc"}"#
        );
        let trailing = Record {
            details: RecordDetails::new(),
            ..record
        };
        assert_eq!(
            TerseRenderer.render(&trailing)?,
            "2001: (ERROR_unrecoverable) Value:"
        );
        Ok(())
    }
}

//! Demo command: a scripted walkthrough of resolution rules.

use crate::CliOutput;
use crate::commands::emit::render_enabled;
use crate::error::{CliError, ExitCode};
use crate::format::OutputFormat;
use msglog_facade::{
    Detail, ErrorEnvelope, MessageLoggerHandle, MessageNumber, Record, RecordFormat,
    RecordRenderer, Severity, build_renderer, parse_logger_config_json,
};
use std::fmt::Write as _;

const DEMO_CONFIG: &str = r#"{
  "level": {
    "minimum": "TRACE",
    "ranges": { "0": "INFO", "1000": "WARN", "2000": "ERROR" }
  },
  "status": {
    "ranges": { "0": "INFO", "1000": "WARN", "2000": "ERROR" }
  },
  "text": {
    "templates": {
      "1": "Info for %s",
      "1000": "Warning for %s",
      "1500": "Widget %s",
      "2000": "Value: %d"
    }
  }
}"#;

struct Scenario {
    title: &'static str,
    number: i64,
    details: Vec<Detail>,
}

fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            title: "1500 sits in [1000, 2000): WARN",
            number: 1500,
            details: vec![Detail::from("spun")],
        },
        Scenario {
            title: "an explicit DEBUG override beats the range",
            number: 1500,
            details: vec![Detail::from("spun"), Detail::from(Severity::Debug)],
        },
        Scenario {
            title: "50 sits in [0, 1000): INFO",
            number: 50,
            details: Vec::new(),
        },
        Scenario {
            title: "with overrides [WARN, DEBUG] the first wins",
            number: 1,
            details: vec![
                Detail::from("Bob"),
                Detail::from(Severity::Warn),
                Detail::from(Severity::Debug),
            ],
        },
        Scenario {
            title: "ERROR_unrecoverable outranks ERROR_bad_user_input in any order",
            number: 1,
            details: vec![
                Detail::from("Bob"),
                Detail::error_msg("0037E|Unknown resource"),
                Detail::error_msg("0019E|Configuration not found"),
            ],
        },
        Scenario {
            title: "a domain code decides the status regardless of ranges",
            number: 1500,
            details: vec![Detail::error_msg("0019E|Configuration not found")],
        },
        Scenario {
            title: "an unknown message number has no text",
            number: 999,
            details: Vec::new(),
        },
        Scenario {
            title: "\"Value: %d\" given a string stops at the verb error",
            number: 2000,
            details: vec![Detail::from("abc")],
        },
    ]
}

/// Run the walkthrough.
pub fn run_demo(output: Option<OutputFormat>) -> Result<CliOutput, CliError> {
    let mut raw = parse_logger_config_json(DEMO_CONFIG)?.into_inner();
    raw.output.format = output.map_or(RecordFormat::Json, RecordFormat::from);
    let config = raw.validate_and_normalize().map_err(ErrorEnvelope::from)?;

    let handle = MessageLoggerHandle::from_config(&config);
    let renderer = build_renderer(config.output.format);

    let mut stdout = String::new();
    for scenario in scenarios() {
        let line = render_enabled(
            &handle,
            renderer.as_ref(),
            MessageNumber::new(scenario.number),
            &scenario.details,
        )?
        .unwrap_or_default();
        let _ = writeln!(stdout, "# {}\n{line}", scenario.title);
    }

    let text_only = Record {
        text: Some("hello".to_string()),
        ..Record::default()
    };
    let line = renderer
        .render(&text_only)
        .map_err(|error| CliError::Render(error.to_string()))?;
    let _ = writeln!(stdout, "# a record with only text\n{line}");

    Ok(CliOutput {
        stdout,
        stderr: String::new(),
        exit_code: ExitCode::Ok,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_walks_every_scenario() -> Result<(), CliError> {
        let output = run_demo(None)?;
        let lines: Vec<&str> = output.stdout.lines().collect();

        assert_eq!(lines.len(), 18);
        assert_eq!(
            lines.get(1).copied(),
            Some(r#"{"level":"WARN","id":"1500","text":"Widget spun","status":"WARN","details":{"1":"spun"}}"#)
        );
        assert!(lines.get(3).is_some_and(|line| line.contains(r#""level":"DEBUG""#)));
        assert!(lines.get(7).is_some_and(|line| line.contains(r#""level":"WARN""#)));
        assert!(lines.get(9).is_some_and(|line| line.contains("ERROR_unrecoverable")));
        assert!(lines.get(15).is_some_and(|line| line.contains(r#""text":"Value: ""#)));
        assert_eq!(lines.last().copied(), Some(r#"{"text":"hello"}"#));
        Ok(())
    }

    #[test]
    fn terse_demo_ends_with_bare_text() -> Result<(), CliError> {
        let output = run_demo(Some(OutputFormat::Terse))?;
        assert_eq!(output.stdout.lines().last(), Some("hello"));
        Ok(())
    }
}

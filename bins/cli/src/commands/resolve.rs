//! Resolve command handler.

use crate::CliOutput;
use crate::commands::emit::compose;
use crate::details::DetailArgs;
use crate::error::{CliError, ExitCode};
use msglog_facade::{MessageLoggerHandle, Severity, Status, ValidatedLoggerConfig};

/// Print the resolved fields and diagnostics as JSON.
pub fn run_resolve(
    config: &ValidatedLoggerConfig,
    args: &DetailArgs,
) -> Result<CliOutput, CliError> {
    let details = args.to_details()?;
    let handle = MessageLoggerHandle::from_config(config);
    let composed = compose(&handle, args.message_number(), &details);
    let record = &composed.record;

    let diagnostics: Vec<String> = composed.diagnostics.iter().map(ToString::to_string).collect();
    let payload = serde_json::json!({
        "messageNumber": args.number,
        "level": record.level.map(Severity::as_str),
        "enabled": record.level.is_none_or(|level| handle.is_enabled(level)),
        "id": record.id,
        "status": record.status.as_ref().map(Status::as_str),
        "text": record.text,
        "diagnostics": diagnostics,
    });

    let mut stdout = serde_json::to_string_pretty(&payload)?;
    stdout.push('\n');
    Ok(CliOutput {
        stdout,
        stderr: String::new(),
        exit_code: ExitCode::Ok,
    })
}

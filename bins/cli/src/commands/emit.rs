//! Emit command handler.

use crate::CliOutput;
use crate::details::DetailArgs;
use crate::error::{CliError, ExitCode};
use msglog_facade::{
    Composed, Detail, MessageLoggerHandle, MessageNumber, RecordRenderer, ValidatedLoggerConfig,
    build_renderer,
};

/// Compose one record and print it to stdout.
pub fn run_emit(config: &ValidatedLoggerConfig, args: &DetailArgs) -> Result<CliOutput, CliError> {
    let details = args.to_details()?;
    let handle = MessageLoggerHandle::from_config(config);
    let renderer = build_renderer(config.output.format);

    let rendered = render_enabled(&handle, renderer.as_ref(), args.message_number(), &details)?;
    let (stdout, stderr) = match rendered {
        Some(line) => (format!("{line}\n"), String::new()),
        None => (
            String::new(),
            format!(
                "info: message {} is below the minimum level {}\n",
                args.number,
                handle.logger().gate().level()
            ),
        ),
    };

    Ok(CliOutput {
        stdout,
        stderr,
        exit_code: ExitCode::Ok,
    })
}

/// Render the record for `number`, or `None` when its level is gated off.
pub fn render_enabled(
    handle: &MessageLoggerHandle,
    renderer: &dyn RecordRenderer,
    number: MessageNumber,
    details: &[Detail],
) -> Result<Option<String>, CliError> {
    let composed = compose(handle, number, details);
    let enabled = composed
        .record
        .level
        .is_none_or(|level| handle.is_enabled(level));
    if !enabled {
        return Ok(None);
    }
    renderer
        .render(&composed.record)
        .map(Some)
        .map_err(|error| CliError::Render(error.to_string()))
}

/// Compose without writing, reporting fallbacks as debug diagnostics.
pub fn compose(
    handle: &MessageLoggerHandle,
    number: MessageNumber,
    details: &[Detail],
) -> Composed {
    let composed = handle.logger().compose(number, details, None);
    for diagnostic in &composed.diagnostics {
        tracing::debug!(%diagnostic, "resolution fell back to a default");
    }
    composed
}

//! Config command handlers.

use crate::CliOutput;
use crate::error::{CliError, ExitCode};
use crate::format::ConfigFormat;
use msglog_facade::{
    ValidatedLoggerConfig, logger_config_schema, to_pretty_json, to_pretty_toml, to_pretty_yaml,
};

/// Print the effective config.
pub fn run_config_show(
    config: &ValidatedLoggerConfig,
    format: ConfigFormat,
) -> Result<CliOutput, CliError> {
    let raw = config.as_ref();
    let stdout = match format {
        ConfigFormat::Json => to_pretty_json(raw)?,
        ConfigFormat::Toml => to_pretty_toml(raw)?,
        ConfigFormat::Yaml => to_pretty_yaml(raw)?,
    };
    Ok(CliOutput {
        stdout,
        stderr: String::new(),
        exit_code: ExitCode::Ok,
    })
}

/// Print the JSON Schema of the config file.
pub fn run_config_schema() -> Result<CliOutput, CliError> {
    let mut stdout = serde_json::to_string_pretty(&logger_config_schema())?;
    stdout.push('\n');
    Ok(CliOutput {
        stdout,
        stderr: String::new(),
        exit_code: ExitCode::Ok,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use msglog_facade::parse_logger_config_json;

    #[test]
    fn show_round_trips_through_json() -> Result<(), Box<dyn std::error::Error>> {
        let config = parse_logger_config_json(r#"{"id":{"template":"x-%d"}}"#)?;
        let output = run_config_show(&config, ConfigFormat::Json)?;
        let reparsed = parse_logger_config_json(&output.stdout)?;

        assert_eq!(reparsed.as_ref(), config.as_ref());
        Ok(())
    }

    #[test]
    fn toml_and_yaml_name_the_sections() -> Result<(), Box<dyn std::error::Error>> {
        let config = parse_logger_config_json("{}")?;
        let toml = run_config_show(&config, ConfigFormat::Toml)?.stdout;
        let yaml = run_config_show(&config, ConfigFormat::Yaml)?.stdout;

        assert!(toml.contains("[level]"), "toml: {toml}");
        assert!(yaml.contains("level:"), "yaml: {yaml}");
        Ok(())
    }

    #[test]
    fn schema_describes_the_config() -> Result<(), Box<dyn std::error::Error>> {
        let output = run_config_schema()?;
        let schema: serde_json::Value = serde_json::from_str(&output.stdout)?;
        assert!(schema["properties"]["level"].is_object());
        Ok(())
    }
}

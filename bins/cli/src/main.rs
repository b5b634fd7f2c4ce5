//! CLI binary entrypoint.

mod commands;
mod details;
mod diagnostics;
mod error;
mod format;

use clap::{Parser, Subcommand};
use commands::{run_config_schema, run_config_show, run_demo, run_emit, run_resolve};
use details::DetailArgs;
use error::{CliError, ExitCode};
use format::{ConfigFormat, GlobalArgs};
use msglog_facade::{ErrorEnvelope, LoggerEnv, ValidatedLoggerConfig, load_logger_config_from_path};
use std::io::{self, Write};

#[derive(Debug, Parser)]
#[command(
    name = "msglog",
    version,
    about = "Compose numbered, structured log records",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compose one record and print it.
    Emit(DetailArgs),
    /// Show how each field of a record resolves.
    Resolve(DetailArgs),
    /// Config-related commands.
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Walk through the resolution rules with a built-in config.
    Demo,
}

#[derive(Debug, Subcommand)]
enum ConfigCommands {
    /// Print the effective config (file, then `MSGLOG_*` env, then flags).
    Show {
        /// Serialization format.
        #[arg(long, value_enum, default_value_t = ConfigFormat::Json)]
        format: ConfigFormat,
    },
    /// Print the JSON Schema of the config file.
    Schema,
}

pub(crate) struct CliOutput {
    stdout: String,
    stderr: String,
    exit_code: ExitCode,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    diagnostics::init_tracing(cli.global.log_format);

    match run(&cli) {
        Ok(output) => match write_output(&output) {
            Ok(()) => std::process::ExitCode::from(output.exit_code.as_u8()),
            Err(error) => exit_with_error(&error),
        },
        Err(error) => exit_with_error(&error),
    }
}

fn exit_with_error(error: &CliError) -> std::process::ExitCode {
    let _ = writeln!(io::stderr(), "error: {error}");
    std::process::ExitCode::from(error.exit_code().as_u8())
}

fn run(cli: &Cli) -> Result<CliOutput, CliError> {
    match &cli.command {
        Commands::Emit(args) => run_emit(&load_config(&cli.global)?, args),
        Commands::Resolve(args) => run_resolve(&load_config(&cli.global)?, args),
        Commands::Config { command } => match command {
            ConfigCommands::Show { format } => run_config_show(&load_config(&cli.global)?, *format),
            ConfigCommands::Schema => run_config_schema(),
        },
        Commands::Demo => run_demo(cli.global.output),
    }
}

fn load_config(global: &GlobalArgs) -> Result<ValidatedLoggerConfig, CliError> {
    let env = LoggerEnv::from_std_env().map_err(ErrorEnvelope::from)?;
    load_config_with_env(global, env)
}

fn load_config_with_env(
    global: &GlobalArgs,
    mut env: LoggerEnv,
) -> Result<ValidatedLoggerConfig, CliError> {
    if let Some(output) = global.output {
        env.format = Some(output.into());
    }
    Ok(load_logger_config_from_path(global.config.as_deref(), &env)?)
}

fn write_output(output: &CliOutput) -> Result<(), CliError> {
    let mut stdout = io::stdout();
    stdout.write_all(output.stdout.as_bytes())?;
    stdout.flush()?;

    if !output.stderr.is_empty() {
        let mut stderr = io::stderr();
        stderr.write_all(output.stderr.as_bytes())?;
        stderr.flush()?;
    }

    Ok(())
}

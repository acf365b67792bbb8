mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{completions, filter, lookup, timezones, validate, Context};
use crate::error::{exit_code_for, report_error};
use dialzone_config as config;

#[derive(Debug, Parser)]
#[command(name = "dialzone", version, about = "dialzone CLI")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
    /// Keep the phone numbers that belong to one timezone
    Filter(filter::FilterArgs),
    /// Keep the phone numbers with a known area code
    Validate(validate::ValidateArgs),
    /// Show the area code and timezone of each phone number
    Lookup(lookup::LookupArgs),
    /// List the timezones of the area code table
    Timezones(timezones::TimezonesArgs),
    /// List the area codes of one timezone
    #[command(name = "area-codes")]
    AreaCodes(timezones::AreaCodesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    if let Command::Completions(args) = command {
        return completions::emit(args);
    }

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let table = app_config
        .area_code_table()
        .with_context(|| "build area code table")?;
    debug!(
        custom = app_config.area_codes.is_some(),
        area_codes = table.len(),
        "area code table ready"
    );

    let ctx = Context {
        json,
        config: &app_config,
        table: &table,
    };

    match command {
        Command::Filter(args) => filter::filter(&ctx, args),
        Command::Validate(args) => validate::validate(&ctx, args),
        Command::Lookup(args) => lookup::lookup(&ctx, args),
        Command::Timezones(args) => timezones::list_timezones(&ctx, args),
        Command::AreaCodes(args) => timezones::list_area_codes(&ctx, args),
        Command::Completions(_) => unreachable!("completions handled before config load"),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}

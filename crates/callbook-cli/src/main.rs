mod commands;
mod error;
mod repl;
mod util;

use anyhow::{Context as _, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::Context;
use crate::error::{exit_code_for, report_error};
use crate::util::{check_window_days, parse_today};
use callbook_config as config;

#[derive(Debug, Parser)]
#[command(name = "callbook", version, about = "callbook contact assistant")]
struct Cli {
    #[arg(long)]
    config: Option<PathBuf>,
    /// Reference date for `birthdays` (YYYY-MM-DD); defaults to the local date
    #[arg(long, value_name = "DATE")]
    today: Option<String>,
    /// How many days ahead `birthdays` looks
    #[arg(long, value_name = "DAYS")]
    window_days: Option<i64>,
    #[arg(long, short)]
    verbose: bool,
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
        today,
        window_days,
        verbose,
    } = cli;

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

    let today = today.as_deref().map(parse_today).transpose()?;
    let mut window = app_config.birthday_window();
    if let Some(days) = window_days {
        window.days = check_window_days(days)?;
    }
    debug!(
        window_days = window.days,
        leap_day = window.leap_day.as_str(),
        today = ?today,
        "birthday window resolved"
    );

    let mut ctx = Context::new(window, today);
    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(&mut ctx, stdin.lock(), stdout.lock()).with_context(|| "command loop")?;
    Ok(())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

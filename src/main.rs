//! adp binary entry point.

mod cli;
mod commands;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use adp::config::Config;

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    // The guard flushes buffered log lines when main returns.
    let _log_guard = init_logging(cli.log_file.as_deref().or(config.log_file.as_deref()))?;

    match &cli.command {
        Some(Command::Check { script }) => commands::check::handle(script),
        Some(Command::Config) => commands::config::handle(),
        Some(Command::Completions { shell }) => commands::completions::handle(*shell),
        None => commands::play::handle(cli.script.as_deref(), cli.theme.as_deref(), &config),
    }
}

/// Install a file-backed tracing subscriber when a log file is configured.
///
/// Logs go to a file rather than stdout so they never corrupt the
/// alternate screen.
fn init_logging(path: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .with_context(|| format!("log file path {} has no file name", path.display()))?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("adp=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}

//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Looping scripted AI-agent terminal demo in a floating window.
#[derive(Debug, Parser)]
#[command(name = "adp", version, about)]
pub struct Cli {
    /// Script file to play (TOML or JSON); defaults to the built-in catalog
    pub script: Option<PathBuf>,

    /// Theme name: terminal, classic, or ocean
    #[arg(long)]
    pub theme: Option<String>,

    /// Append tracing output to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a script file and print a summary
    Check {
        /// Script file to validate
        script: PathBuf,
    },
    /// Print the effective configuration as TOML
    Config,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

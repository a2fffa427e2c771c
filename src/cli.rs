//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Claude Code hook that blocks direct pushes to the main branch
#[derive(Parser)]
#[command(
    name = "main-push-guard",
    version,
    about = "Claude Code hook that blocks direct pushes to the main branch",
    long_about = "Reads a PreToolUse event from stdin and exits with status 2 when the \
                  Bash command pushes straight to `main`. Any other command, and any \
                  malformed input, is allowed with status 0."
)]
pub struct Cli {
    /// Subcommand to run (defaults to `hook`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Process a hook event from stdin (alias: run)
    #[command(alias = "run")]
    Hook,
    /// Generate default configuration file
    Init {
        /// Path where to create the configuration file
        #[arg(long, short = 'p')]
        path: Option<PathBuf>,
    },
    /// Validate configuration file
    Check,
    /// Display version information
    Version,
}

//! main-push-guard: blocks direct pushes to `main` from AI coding agents
//!
//! A Claude Code `PreToolUse` hook. It reads the event JSON from stdin and
//! exits with status 2 when the Bash command pushes straight to `main`.
//! Everything else, including malformed input, exits with status 0.

mod cli;
mod config;
mod domain;
mod service;

use std::path::Path;
use std::process;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use config::ConfigService;
use service::HookService;

fn main() {
    // Argument errors must not block the agent.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            process::exit(0);
        }
    };

    let code = match &cli.command {
        None | Some(Commands::Hook) => run_hook(&cli),
        Some(Commands::Init { path }) => report(init(&cli, path.as_deref())),
        Some(Commands::Check) => report(check(&cli)),
        Some(Commands::Version) => {
            println!("main-push-guard {}", env!("CARGO_PKG_VERSION"));
            0
        }
    };

    process::exit(code);
}

/// Run the hook. Config and logger failures fall back to defaults.
fn run_hook(cli: &Cli) -> i32 {
    let config = ConfigService::load(cli.config.as_deref()).unwrap_or_default();

    if cli.debug || config.debug {
        let _ = domain::logger::init(&config);
    }

    HookService::new().run()
}

fn init(cli: &Cli, path: Option<&Path>) -> Result<()> {
    let config_path = match path {
        Some(p) => {
            ConfigService::generate_at(p)?;
            p.to_path_buf()
        }
        None => ConfigService::generate_default()?,
    };
    if !cli.quiet {
        eprintln!("Configuration file created at: {}", config_path.display());
    }
    Ok(())
}

fn check(cli: &Cli) -> Result<()> {
    let config = ConfigService::load(cli.config.as_deref())?;
    if cli.debug || config.debug {
        domain::logger::init(&config)?;
    }
    config::validate(&config)?;
    if !cli.quiet {
        eprintln!("Configuration is valid.");
    }
    Ok(())
}

fn report(result: Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

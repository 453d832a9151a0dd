//! Graft CLI
//!
//! The command-line interface for importing marked content between
//! documents.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            // No command provided - show help hint
            println!("{} Graft CLI", "graft".green().bold());
            println!();
            println!("Run {} for available commands.", "graft --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Preview {
            file,
            purge,
            update,
            lines,
            diff,
        } => commands::run_preview(&file, purge, update, lines, diff),
        Commands::Update { file } => commands::run_update(&file),
        Commands::Purge { file } => commands::run_purge(&file),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if verbose {
        tracing::debug!("Verbose mode enabled");
    }
}

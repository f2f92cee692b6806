//! Main entry point for the wtf CLI.
//!
//! This is the command-line interface over wtfile path values:
//! - `info`: Describe a path
//! - `rename`: Rename a file through its name, stem or extension
//! - `cd`: Navigate from a path without touching the disk
//! - `ls`, `glob`: List and search directories
//! - `size`: Sum file sizes under a directory
//! - `clear`: Remove and recreate a path empty
//! - `match`: Test a path against a shell pattern

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    if let Err(e) = wtfile::init_logger(cli.verbose, cli.quiet).install() {
        eprintln!("Warning: logging unavailable: {e}");
    }

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        quiet: cli.quiet,
        config: cli.config,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Info(cmd) => cmd.execute(&global),
        cli::Command::Rename(cmd) => cmd.execute(&global),
        cli::Command::Cd(cmd) => cmd.execute(&global),
        cli::Command::Ls(cmd) => cmd.execute(&global),
        cli::Command::Glob(cmd) => cmd.execute(&global),
        cli::Command::Size(cmd) => cmd.execute(&global),
        cli::Command::Clear(cmd) => cmd.execute(&global),
        cli::Command::Match(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

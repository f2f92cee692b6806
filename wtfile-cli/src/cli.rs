//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CdCommand, ClearCommand, GlobCommand, InfoCommand, LsCommand, MatchCommand, RenameCommand,
    SizeCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for string-like path values.
#[derive(Parser)]
#[command(name = "wtf")]
#[command(version, about = "Inspect, rename and tidy files by path", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read configuration from this file on top of ~/.wtfile/config.yaml
    #[arg(long, value_name = "PATH", global = true, env = "WTFILE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Describe a path
    Info(InfoCommand),

    /// Rename a file through its name, stem or extension
    Rename(RenameCommand),

    /// Navigate from a path (`..` parent, `...` grandparent)
    Cd(CdCommand),

    /// List the entries of a directory
    Ls(LsCommand),

    /// Find paths matching a glob pattern
    Glob(GlobCommand),

    /// Sum the sizes of files in a directory
    Size(SizeCommand),

    /// Remove a path and recreate it empty
    Clear(ClearCommand),

    /// Test a path against a shell pattern
    Match(MatchCommand),
}

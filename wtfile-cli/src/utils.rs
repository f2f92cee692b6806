//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading and path construction.

use crate::error::CliError;
use std::path::PathBuf;
use wtfile::{Config, ConfigBuilder, FilePath};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. The `--config` file
/// 3. `~/.wtfile/config.yaml`
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref path) = global.config {
        builder = builder.with_file(path);
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Build a path value carrying the configured mode.
///
/// `~` and `$VAR` references are expanded, the way a shell would have.
pub fn path_value(config: &Config, text: &str) -> FilePath {
    FilePath::configured(config, [text]).expanduser().expandvars()
}

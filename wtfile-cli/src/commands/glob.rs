//! Glob command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, path_value, GlobalOptions};
use clap::Args;
use wtfile::GlobOptions;

/// Find paths matching a glob pattern below a directory.
#[derive(Args)]
pub struct GlobCommand {
    /// Pattern to search for, e.g. `*.rs` or `src/**/*.rs`
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Directory to search (defaults to the current directory)
    #[arg(long, value_name = "PATH")]
    pub dir: Option<String>,

    /// Print matches relative to the searched directory
    #[arg(long)]
    pub relative: bool,

    /// Let `**` match across directories
    #[arg(long)]
    pub recursive: bool,
}

impl GlobCommand {
    /// Execute the glob command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let dir = path_value(&config, self.dir.as_deref().unwrap_or_default());

        let mut options = GlobOptions::new();
        if self.relative {
            options = options.relative();
        }
        if self.recursive {
            options = options.recursive();
        }

        for found in dir.iglob(&self.pattern, options)? {
            println!("{}", found?);
        }
        Ok(())
    }
}

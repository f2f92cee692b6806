//! Clear command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, path_value, GlobalOptions};
use clap::Args;

/// Remove a path and recreate it empty.
///
/// A file comes back as an empty file; anything else (including a missing
/// path) comes back as an empty directory.
#[derive(Args)]
pub struct ClearCommand {
    /// Path to clear
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Clear this child of PATH instead
    #[arg(long, value_name = "NAME")]
    pub target: Option<String>,

    /// Make read-only entries writable and retry
    #[arg(long)]
    pub force: bool,
}

impl ClearCommand {
    /// Execute the clear command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let path = path_value(&config, &self.path);
        let cleared = path.clear_with(self.target.as_deref(), self.force, &config)?;
        if !global.quiet {
            println!("{cleared}");
        }
        Ok(())
    }
}

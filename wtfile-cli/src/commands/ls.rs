//! Ls command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, path_value, GlobalOptions};
use clap::Args;

/// List the entries of a directory.
#[derive(Args)]
pub struct LsCommand {
    /// Directory to list (defaults to the current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Only names matching this shell pattern
    #[arg(long, value_name = "PATTERN")]
    pub pattern: Option<String>,
}

impl LsCommand {
    /// Execute the ls command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let dir = path_value(&config, self.path.as_deref().unwrap_or_default());
        for name in dir.listdir(self.pattern.as_deref())? {
            println!("{name}");
        }
        Ok(())
    }
}

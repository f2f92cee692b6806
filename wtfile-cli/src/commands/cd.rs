//! Cd command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, path_value, GlobalOptions};
use clap::Args;

/// Print where navigating from a path leads.
///
/// Purely lexical; nothing on disk is consulted.
#[derive(Args)]
pub struct CdCommand {
    /// Starting path
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Where to go: `..`, `...` or a relative path
    #[arg(value_name = "TARGET", allow_hyphen_values = true)]
    pub target: String,
}

impl CdCommand {
    /// Execute the cd command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let path = path_value(&config, &self.path);
        println!("{}", path.cd(&self.target));
        Ok(())
    }
}

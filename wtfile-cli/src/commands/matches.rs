//! Match command implementation.
//!
//! Exits 0 when the path matches and 1 when it does not, so it can drive
//! shell conditionals.

use crate::error::CliError;
use crate::utils::{load_configuration, path_value, GlobalOptions};
use clap::Args;

/// Test a path against a shell pattern.
#[derive(Args)]
pub struct MatchCommand {
    /// Path to test
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Shell pattern (`*`, `?`, `[...]`)
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Compare case-sensitively regardless of configuration
    #[arg(long)]
    pub case: bool,
}

impl MatchCommand {
    /// Execute the match command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let path = path_value(&config, &self.path);

        let matched = if self.case {
            path.matches_case(&self.pattern)?
        } else {
            path.matches_with_config(&self.pattern, &config)?
        };

        if matched {
            if !global.quiet {
                println!("{path}");
            }
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "{path} does not match {}",
                self.pattern
            )))
        }
    }
}

//! Rename command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, path_value, GlobalOptions};
use clap::{ArgGroup, Args};
use log::info;

/// Rename a file through one of its fragments.
#[derive(Args)]
#[command(group(ArgGroup::new("fragment").required(true).args(["name", "stem", "ext"])))]
pub struct RenameCommand {
    /// File to rename
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Replace the whole final component
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Replace the component without its extension
    #[arg(long, value_name = "STEM")]
    pub stem: Option<String>,

    /// Replace the extension (leading dot optional)
    #[arg(long, value_name = "EXT")]
    pub ext: Option<String>,

    /// Print the new path without renaming
    #[arg(long)]
    pub dry: bool,
}

impl RenameCommand {
    /// Execute the rename command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let path = path_value(&config, &self.path);

        let fragment = if let Some(ref name) = self.name {
            path.name().call(name, self.dry)
        } else if let Some(ref stem) = self.stem {
            path.stem().call(stem, self.dry)
        } else if let Some(ref ext) = self.ext {
            path.extension().call(ext, self.dry)
        } else {
            return Err(CliError::InvalidArguments(
                "one of --name, --stem or --ext is required".to_string(),
            ));
        };
        let renamed = fragment?;

        if self.dry {
            info!("dry run, {path} left in place");
        }
        println!("{renamed}");
        Ok(())
    }
}

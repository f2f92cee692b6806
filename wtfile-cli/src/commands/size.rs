//! Size command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, path_value, GlobalOptions};
use clap::Args;
use wtfile::SizeOptions;

/// Sum the sizes of the files in a directory.
#[derive(Args)]
pub struct SizeCommand {
    /// Directory or file (defaults to the current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Descend into subdirectories
    #[arg(long)]
    pub deep: bool,

    /// Also count directory entries themselves
    #[arg(long)]
    pub inode: bool,
}

impl SizeCommand {
    /// Execute the size command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let path = path_value(&config, self.path.as_deref().unwrap_or_default());
        let total = path.get_size(SizeOptions {
            inode: self.inode,
            deep: self.deep,
        })?;
        println!("{total}");
        Ok(())
    }
}

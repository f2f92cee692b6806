//! Layered configuration assembly.

use std::path::{Path, PathBuf};

use log::debug;

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds a resolved [`Config`] from files, environment and overrides.
///
/// Sources apply lowest to highest: user file, explicit file, `WTFILE_*`
/// environment, programmatic overrides. The result is validated.
///
/// # Examples
///
/// ```
/// use wtfile::{Config, ConfigBuilder, Mode};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { mode: Some(Mode::Binary), ..Default::default() })
///     .build()
///     .unwrap();
/// assert_eq!(config.mode(), Mode::Binary);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    user_dir: Option<PathBuf>,
    explicit_file: Option<PathBuf>,
    overrides: Option<Config>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Create a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `path` on top of the user config. The file must exist.
    #[must_use]
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.explicit_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Look for `config.yaml` in `dir` instead of `~/.wtfile`.
    #[must_use]
    pub fn with_user_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.user_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Ignore every configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `WTFILE_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply `config` last, above every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Merge the sources and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be loaded, an environment value is
    /// malformed, or the merged configuration fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else {
            let sources = ConfigLoader::load_all(
                self.user_dir.as_deref(),
                self.explicit_file.as_deref(),
            )?;
            for source in &sources {
                debug!(
                    "config source {} (precedence {})",
                    source.path.display(),
                    source.precedence
                );
            }
            ConfigMerger::merge(sources)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

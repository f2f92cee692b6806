//! Configuration file discovery and loading.
//!
//! Two file sources exist: the user file `~/.wtfile/config.yaml`, which is
//! optional, and an explicit file named by the caller, which must exist.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Directory under the home directory holding the user config.
pub const USER_DIR_NAME: &str = ".wtfile";

/// File name of the user config.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
///
/// # Examples
///
/// ```
/// use wtfile::config::ConfigSource;
/// use std::path::PathBuf;
///
/// let user_config = ConfigSource {
///     path: PathBuf::from("~/.wtfile/config.yaml"),
///     precedence: 1,
///     config: Default::default(),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load every file source, sorted from lowest to highest precedence.
    ///
    /// - the user config in `user_dir` (or `~/.wtfile`) at precedence 1,
    ///   skipped when absent;
    /// - `explicit`, if given, at precedence 2.
    ///
    /// # Errors
    ///
    /// Returns an error if a file that should be read cannot be read or
    /// parsed, or if `explicit` does not exist.
    pub fn load_all(user_dir: Option<&Path>, explicit: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(user_dir)? {
            sources.push(user_config);
        }

        if let Some(path) = explicit {
            sources.push(ConfigSource {
                path: path.to_path_buf(),
                precedence: 2,
                config: Self::load_file(path)?,
            });
        }

        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    fn load_user_config(user_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match user_dir {
            Some(dir) => dir.join(CONFIG_FILE_NAME),
            None => match Self::user_config_path() {
                Some(path) => path,
                None => {
                    debug!("no home directory; skipping user config");
                    return Ok(None);
                }
            },
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(Error::io("read config", path))?;
        debug!("loaded configuration from {}", path.display());
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// The default user config location, `~/.wtfile/config.yaml`.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(USER_DIR_NAME).join(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Mode;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load_file(Path::new("/nonexistent/path/config.yaml"));
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "invalid: yaml: syntax:").unwrap();

        let result = ConfigLoader::load_file(&config_path);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_load_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "mode: binary\n").unwrap();

        let config = ConfigLoader::load_file(&config_path).unwrap();
        assert_eq!(config.mode, Some(Mode::Binary));
    }

    #[test]
    fn test_missing_user_config_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let sources = ConfigLoader::load_all(Some(temp_dir.path()), None).unwrap();
        assert!(sources.is_empty());
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.yaml");
        assert!(ConfigLoader::load_all(Some(temp_dir.path()), Some(&missing)).is_err());
    }

    #[test]
    fn test_load_all_sorts_by_precedence() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "mode: text\n").unwrap();
        let explicit = temp_dir.path().join("explicit.yaml");
        fs::write(&explicit, "mode: binary\n").unwrap();

        let sources = ConfigLoader::load_all(Some(temp_dir.path()), Some(&explicit)).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].precedence, 1);
        assert_eq!(sources[1].precedence, 2);
        assert_eq!(sources[1].config.mode, Some(Mode::Binary));
    }

    #[test]
    fn test_user_config_path_shape() {
        if let Some(path) = ConfigLoader::user_config_path() {
            assert!(path.ends_with(".wtfile/config.yaml"));
        }
    }
}

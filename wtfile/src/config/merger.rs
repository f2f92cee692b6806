//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use wtfile::config::{Config, ConfigMerger};
/// use wtfile::Mode;
///
/// let low = Config { mode: Some(Mode::Text), ..Default::default() };
/// let high = Config { mode: Some(Mode::Binary), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.mode, Some(Mode::Binary));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target; every field set in `source` wins.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.mode.is_some() {
            target.mode = source.mode;
        }

        if source.newline.is_some() {
            target.newline = source.newline;
        }

        if source.dir_permissions.is_some() {
            target.dir_permissions = source.dir_permissions;
        }

        if source.file_permissions.is_some() {
            target.file_permissions = source.file_permissions;
        }

        if source.case_sensitive.is_some() {
            target.case_sensitive = source.case_sensitive;
        }
    }
}

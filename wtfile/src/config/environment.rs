//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `WTFILE_*` environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::{parse_octal, Config};
use crate::error::{Error, Result};

/// Overrides the I/O mode (`text` or `binary`).
pub const MODE_ENV: &str = "WTFILE_MODE";
/// Overrides newline translation (`native`, `lf`, `crlf`, `cr`).
pub const NEWLINE_ENV: &str = "WTFILE_NEWLINE";
/// Overrides directory permissions (octal).
pub const DIR_PERMISSIONS_ENV: &str = "WTFILE_DIR_PERMISSIONS";
/// Overrides file permissions (octal).
pub const FILE_PERMISSIONS_ENV: &str = "WTFILE_FILE_PERMISSIONS";
/// Overrides pattern-match case sensitivity (boolean).
pub const CASE_SENSITIVE_ENV: &str = "WTFILE_CASE_SENSITIVE";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use wtfile::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns a validation error if any variable holds an unparsable value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(MODE_ENV) {
            config.mode = Some(val.parse().map_err(|message| Error::Validation {
                field: MODE_ENV.into(),
                message,
            })?);
        }

        if let Ok(val) = env::var(NEWLINE_ENV) {
            config.newline = Some(val.parse().map_err(|message| Error::Validation {
                field: NEWLINE_ENV.into(),
                message,
            })?);
        }

        if let Ok(val) = env::var(DIR_PERMISSIONS_ENV) {
            config.dir_permissions = Some(Self::parse_permissions(DIR_PERMISSIONS_ENV, &val)?);
        }

        if let Ok(val) = env::var(FILE_PERMISSIONS_ENV) {
            config.file_permissions = Some(Self::parse_permissions(FILE_PERMISSIONS_ENV, &val)?);
        }

        if let Ok(val) = env::var(CASE_SENSITIVE_ENV) {
            config.case_sensitive = Some(Self::parse_bool(CASE_SENSITIVE_ENV, &val)?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }

    fn parse_permissions(field: &str, s: &str) -> Result<u32> {
        parse_octal(s).ok_or_else(|| Error::Validation {
            field: field.into(),
            message: format!("Invalid octal permissions: '{s}'"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::Newline;
    use crate::path::Mode;
    use serial_test::serial;

    const ALL: [&str; 5] = [
        MODE_ENV,
        NEWLINE_ENV,
        DIR_PERMISSIONS_ENV,
        FILE_PERMISSIONS_ENV,
        CASE_SENSITIVE_ENV,
    ];

    fn clear_env() {
        for key in ALL {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_parse_bool_true_variants() {
        for s in ["true", "TRUE", "1", "yes", "YES", "on", "ON"] {
            assert!(EnvironmentConfig::parse_bool("test", s).unwrap());
        }
    }

    #[test]
    fn test_parse_bool_false_variants() {
        for s in ["false", "FALSE", "0", "no", "NO", "off", "OFF"] {
            assert!(!EnvironmentConfig::parse_bool("test", s).unwrap());
        }
    }

    #[test]
    fn test_parse_bool_invalid() {
        let result = EnvironmentConfig::parse_bool("test", "maybe");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_permissions() {
        assert_eq!(EnvironmentConfig::parse_permissions("p", "0o750").unwrap(), 0o750);
        assert!(EnvironmentConfig::parse_permissions("p", "999").is_err());
    }

    #[test]
    #[serial]
    fn test_apply_overrides_all_fields() {
        clear_env();
        env::set_var(MODE_ENV, "binary");
        env::set_var(NEWLINE_ENV, "crlf");
        env::set_var(DIR_PERMISSIONS_ENV, "0755");
        env::set_var(FILE_PERMISSIONS_ENV, "644");
        env::set_var(CASE_SENSITIVE_ENV, "no");

        let mut config = Config::default();
        let result = EnvironmentConfig::apply_overrides(&mut config);
        clear_env();
        result.unwrap();

        assert_eq!(config.mode, Some(Mode::Binary));
        assert_eq!(config.newline, Some(Newline::CrLf));
        assert_eq!(config.dir_permissions, Some(0o755));
        assert_eq!(config.file_permissions, Some(0o644));
        assert_eq!(config.case_sensitive, Some(false));
    }

    #[test]
    #[serial]
    fn test_apply_overrides_leaves_unset_fields() {
        clear_env();
        let mut config = Config {
            mode: Some(Mode::Binary),
            ..Default::default()
        };
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.mode, Some(Mode::Binary));
        assert_eq!(config.newline, None);
    }

    #[test]
    #[serial]
    fn test_apply_overrides_invalid_mode() {
        clear_env();
        env::set_var(MODE_ENV, "sideways");
        let mut config = Config::default();
        let result = EnvironmentConfig::apply_overrides(&mut config);
        clear_env();

        match result {
            Err(Error::Validation { field, .. }) => assert_eq!(field, MODE_ENV),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}

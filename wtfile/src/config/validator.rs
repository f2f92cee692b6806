//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Highest value accepted for permission bits (setuid, setgid, sticky and
/// the three rwx triplets).
pub const MAX_PERMISSIONS: u32 = 0o7777;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use wtfile::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(bits) = config.dir_permissions {
            Self::validate_permissions("dir_permissions", bits)?;
        }

        if let Some(bits) = config.file_permissions {
            Self::validate_permissions("file_permissions", bits)?;
        }

        Ok(())
    }

    fn validate_permissions(field: &str, bits: u32) -> Result<()> {
        if bits > MAX_PERMISSIONS {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("{bits:#o} exceeds {MAX_PERMISSIONS:#o}"),
            });
        }
        Ok(())
    }
}

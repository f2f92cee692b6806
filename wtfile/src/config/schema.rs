//! Configuration schema definitions.
//!
//! Every field is optional so that several partial sources can be layered.
//! The resolved accessors on [`Config`] fill in the built-in defaults.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::io::Newline;
use crate::path::Mode;

/// Default permission bits for directories created by `mkdir`.
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o777;

/// Default permission bits for files created by `mkfile`.
pub const DEFAULT_FILE_PERMISSIONS: u32 = 0o600;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use wtfile::{Config, Mode};
///
/// let config = Config {
///     mode: Some(Mode::Binary),
///     dir_permissions: Some(0o755),
///     ..Default::default()
/// };
/// assert_eq!(config.mode(), Mode::Binary);
/// assert_eq!(config.file_permissions(), 0o600);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// I/O mode given to configured paths.
    pub mode: Option<Mode>,

    /// Newline translation applied by text writes.
    pub newline: Option<Newline>,

    /// Permission bits for new directories.
    #[serde(
        default,
        deserialize_with = "deserialize_permissions",
        serialize_with = "serialize_permissions"
    )]
    pub dir_permissions: Option<u32>,

    /// Permission bits for new files.
    #[serde(
        default,
        deserialize_with = "deserialize_permissions",
        serialize_with = "serialize_permissions"
    )]
    pub file_permissions: Option<u32>,

    /// Case sensitivity of configured pattern matches.
    pub case_sensitive: Option<bool>,
}

impl Config {
    /// The configured mode, or text.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode.unwrap_or_default()
    }

    /// The configured newline translation, or the host's.
    #[must_use]
    pub fn newline(&self) -> Newline {
        self.newline.unwrap_or_default()
    }

    /// The configured directory permissions, or `0o777`.
    #[must_use]
    pub fn dir_permissions(&self) -> u32 {
        self.dir_permissions.unwrap_or(DEFAULT_DIR_PERMISSIONS)
    }

    /// The configured file permissions, or `0o600`.
    #[must_use]
    pub fn file_permissions(&self) -> u32 {
        self.file_permissions.unwrap_or(DEFAULT_FILE_PERMISSIONS)
    }

    /// The configured case sensitivity, or the host default
    /// (sensitive everywhere but Windows).
    #[must_use]
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive.unwrap_or(!cfg!(windows))
    }
}

/// Parse octal permission bits: `755`, `0755` or `0o755`.
pub(crate) fn parse_octal(text: &str) -> Option<u32> {
    let digits = text.trim();
    let digits = digits
        .strip_prefix("0o")
        .or_else(|| digits.strip_prefix("0O"))
        .unwrap_or(digits);
    if digits.is_empty() {
        return None;
    }
    u32::from_str_radix(digits, 8).ok()
}

/// Permissions are always read as octal, like `chmod`. YAML scalars are
/// taken as written, so `755` and `0o755` mean the same bits. A decoded
/// integer has lost its spelling and is refused.
fn deserialize_permissions<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OctalVisitor;

    impl Visitor<'_> for OctalVisitor {
        type Value = u32;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("octal permission bits such as \"0755\"")
        }

        fn visit_str<E: de::Error>(self, text: &str) -> Result<u32, E> {
            parse_octal(text)
                .ok_or_else(|| E::custom(format!("invalid octal permissions: '{text}'")))
        }

        fn visit_u64<E: de::Error>(self, bits: u64) -> Result<u32, E> {
            Err(E::custom(format!(
                "ambiguous permissions {bits}: write them as an octal string"
            )))
        }

        fn visit_i64<E: de::Error>(self, bits: i64) -> Result<u32, E> {
            Err(E::custom(format!(
                "ambiguous permissions {bits}: write them as an octal string"
            )))
        }
    }

    struct OptionVisitor;

    impl<'de> Visitor<'de> for OptionVisitor {
        type Value = Option<u32>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("octal permission bits or null")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, inner: D) -> Result<Self::Value, D::Error> {
            inner.deserialize_str(OctalVisitor).map(Some)
        }
    }

    deserializer.deserialize_option(OptionVisitor)
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_permissions<S>(bits: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match bits {
        Some(bits) => serializer.serialize_str(&format!("0o{bits:o}")),
        None => serializer.serialize_none(),
    }
}

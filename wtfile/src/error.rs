//! Error types for the wtfile library.
//!
//! Filesystem failures keep the host's `std::io::Error` untouched as their
//! source and only add the operation and path that produced them. Everything
//! else is a usage error raised by wtfile itself.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::path::FragmentKind;

/// Result type alias for operations that may fail with a wtfile error.
///
/// # Examples
///
/// ```
/// use wtfile::{Error, Result};
///
/// fn example_operation() -> Result<u64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the wtfile library.
#[derive(Debug, Error)]
pub enum Error {
    /// A host filesystem call failed.
    #[error("{operation} failed for {}: {source}", path.display())]
    Io {
        /// The filesystem operation that was attempted.
        operation: &'static str,
        /// The path the operation was applied to.
        path: PathBuf,
        /// The error reported by the host.
        #[source]
        source: io::Error,
    },

    /// A path could not be represented or interpreted.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
        /// Why the path was rejected.
        reason: String,
    },

    /// Division was attempted on a fragment view.
    #[error("cannot join onto {kind} fragment '{fragment}': only full paths support '/'")]
    NotJoinable {
        /// The fragment text.
        fragment: String,
        /// Which fragment view was divided.
        kind: FragmentKind,
    },

    /// A removal was attempted on something that is neither file nor directory.
    #[error("cannot remove {}: not a regular file or directory", path.display())]
    NotRemovable {
        /// The path that could not be removed.
        path: PathBuf,
    },

    /// A directory listing was requested on a non-directory.
    #[error("not a directory: {}", path.display())]
    NotADirectory {
        /// The path that is not a directory.
        path: PathBuf,
    },

    /// A directory scope was exited without having been entered.
    #[error("directory scope for {} was never entered", path.display())]
    ScopeNotEntered {
        /// The scope's target directory.
        path: PathBuf,
    },

    /// A directory scope was entered a second time before exiting.
    #[error("directory scope for {} is already entered", path.display())]
    ScopeAlreadyEntered {
        /// The scope's target directory.
        path: PathBuf,
    },

    /// The accessor is not implemented.
    #[error("{operation} is not supported")]
    Unsupported {
        /// The name of the accessor.
        operation: &'static str,
    },

    /// A glob or match pattern could not be compiled.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Build a closure that attaches an operation and path to an I/O error.
    ///
    /// Meant for `map_err` at each host call site.
    pub(crate) fn io(
        operation: &'static str,
        path: impl Into<PathBuf>,
    ) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io {
            operation,
            path,
            source,
        }
    }

    /// The kind of the underlying host error, if this is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::ErrorKind;
    /// use wtfile::FilePath;
    ///
    /// let err = FilePath::new(["/nonexistent/wtfile/file"]).read_text().unwrap_err();
    /// assert_eq!(err.io_kind(), Some(ErrorKind::NotFound));
    /// ```
    #[must_use]
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }

    /// Check if error indicates a path does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.io_kind() == Some(io::ErrorKind::NotFound)
    }

    /// Check if the error was raised by wtfile because an operation was
    /// applied to the wrong kind of value.
    ///
    /// # Examples
    ///
    /// ```
    /// use wtfile::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::NotRemovable { path: PathBuf::from("/dev/null") };
    /// assert!(err.is_usage_error());
    /// ```
    #[must_use]
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::NotJoinable { .. }
                | Self::NotRemovable { .. }
                | Self::NotADirectory { .. }
                | Self::ScopeNotEntered { .. }
                | Self::ScopeAlreadyEntered { .. }
        )
    }
}

//! Pure navigation: relative moves, normalization, pattern matching and
//! user/variable expansion.
//!
//! Nothing here touches the filesystem except [`FilePath::current_dir`] and
//! [`FilePath::abspath`], which ask the process for its working directory.

use std::env;
use std::sync::OnceLock;

use glob::{MatchOptions, Pattern};
use regex::{Captures, Regex};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::path::rules;
use crate::path::value::{Context, FilePath};

/// Token that climbs two levels in [`FilePath::cd`].
const GRANDPARENT: &str = "...";

fn variable_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"\$(\w+|\{[^}]*\})").ok())
        .as_ref()
}

impl FilePath {
    /// The process working directory.
    ///
    /// # Errors
    ///
    /// Returns the host error if the working directory cannot be read, or
    /// `InvalidPath` if it is not valid UTF-8.
    pub fn current_dir() -> Result<FilePath> {
        let dir = env::current_dir().map_err(Error::io("current_dir", "."))?;
        FilePath::from_host(dir, Context::default())
    }

    /// Move relative to this path without touching the filesystem.
    ///
    /// `"..."` climbs two levels; anything else is joined and normalized.
    ///
    /// # Examples
    ///
    /// ```
    /// use wtfile::FilePath;
    ///
    /// let dir = FilePath::from("/tmp/wtfile/folder");
    /// assert_eq!(dir.cd(".."), "/tmp/wtfile");
    /// assert_eq!(dir.cd("..."), "/tmp");
    /// assert_eq!(dir.cd("sub/./x"), "/tmp/wtfile/folder/sub/x");
    /// assert_eq!(FilePath::from("/").cd("..."), "/");
    /// ```
    #[must_use]
    pub fn cd(&self, target: &str) -> FilePath {
        if target == GRANDPARENT {
            return self.parent().parent();
        }
        self.derive(rules::normpath(&rules::join([self.as_str(), target])))
    }

    /// This path with `.`, `..` and redundant separators collapsed.
    #[must_use]
    pub fn norm(&self) -> FilePath {
        self.derive(rules::normpath(self.as_str()))
    }

    /// Shell-glob match against the full text with the host's default case
    /// sensitivity. `*` also matches separators.
    ///
    /// # Errors
    ///
    /// Returns `Pattern` if `pattern` is malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use wtfile::FilePath;
    ///
    /// let file = FilePath::from("/tmp/wtfile/tmp.file");
    /// assert!(file.matches("*.file").unwrap());
    /// assert!(!file.matches("*.txt").unwrap());
    /// ```
    pub fn matches(&self, pattern: &str) -> Result<bool> {
        self.match_with(pattern, !cfg!(windows))
    }

    /// Case-sensitive shell-glob match.
    ///
    /// # Errors
    ///
    /// Returns `Pattern` if `pattern` is malformed.
    pub fn matches_case(&self, pattern: &str) -> Result<bool> {
        self.match_with(pattern, true)
    }

    /// Shell-glob match with case sensitivity taken from `config`.
    ///
    /// # Errors
    ///
    /// Returns `Pattern` if `pattern` is malformed.
    pub fn matches_with_config(&self, pattern: &str, config: &Config) -> Result<bool> {
        self.match_with(pattern, config.case_sensitive())
    }

    fn match_with(&self, pattern: &str, case_sensitive: bool) -> Result<bool> {
        let options = MatchOptions {
            case_sensitive,
            require_literal_separator: false,
            require_literal_leading_dot: false,
        };
        Ok(Pattern::new(pattern)?.matches_with(self.as_str(), options))
    }

    /// Replace a leading `~` with the current user's home directory.
    ///
    /// `~user` forms and paths without a leading `~` are returned unchanged,
    /// as is everything when the home directory is unknown.
    #[must_use]
    pub fn expanduser(&self) -> FilePath {
        let text = self.as_str();
        let Some(rest) = text.strip_prefix('~') else {
            return self.clone();
        };
        if !(rest.is_empty() || rest.starts_with(std::path::is_separator)) {
            return self.clone();
        }
        let Some(home) = home::home_dir().and_then(|h| h.into_os_string().into_string().ok())
        else {
            return self.clone();
        };
        let expanded = format!("{}{rest}", home.trim_end_matches(std::path::is_separator));
        if expanded.is_empty() {
            self.derive(std::path::MAIN_SEPARATOR.to_string())
        } else {
            self.derive(expanded)
        }
    }

    /// Substitute `$NAME` and `${NAME}` from the environment.
    ///
    /// Unknown variables are left as written.
    ///
    /// # Examples
    ///
    /// ```
    /// use wtfile::FilePath;
    ///
    /// let path = FilePath::from("$WTFILE_SURELY_UNSET/x");
    /// assert_eq!(path.expandvars(), "$WTFILE_SURELY_UNSET/x");
    /// ```
    #[must_use]
    pub fn expandvars(&self) -> FilePath {
        let Some(pattern) = variable_pattern().filter(|_| self.as_str().contains('$')) else {
            return self.clone();
        };
        let expanded = pattern.replace_all(self.as_str(), |caps: &Captures<'_>| {
            let name = caps[1].trim_start_matches('{').trim_end_matches('}');
            env::var(name).unwrap_or_else(|_| caps[0].to_string())
        });
        self.derive(expanded.into_owned())
    }

    /// [`expandvars`](Self::expandvars), then [`expanduser`](Self::expanduser),
    /// then [`norm`](Self::norm).
    #[must_use]
    pub fn expand(&self) -> FilePath {
        self.expandvars().expanduser().norm()
    }

    /// This path made absolute against the working directory and normalized.
    ///
    /// # Errors
    ///
    /// Returns the host error if the working directory cannot be read.
    pub fn abspath(&self) -> Result<FilePath> {
        if self.as_path().is_absolute() {
            return Ok(self.norm());
        }
        let cwd = FilePath::current_dir()?;
        Ok(self.derive(rules::normpath(&rules::join([cwd.as_str(), self.as_str()]))))
    }
}

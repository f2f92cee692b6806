//! Rename machinery behind fragment calls.
//!
//! Every rename computes the target text first and only then, unless `dry`
//! is set, asks the host to move the file. The returned path always carries
//! the context of the path it was renamed from.

use std::fs;

use log::debug;

use crate::error::{Error, Result};
use crate::path::rules;
use crate::path::value::FilePath;

impl FilePath {
    /// Give the final segment a new name, keeping the directory.
    ///
    /// # Errors
    ///
    /// Returns the host error if the rename fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use wtfile::FilePath;
    ///
    /// let file = FilePath::from("/home/sy/test.cc");
    /// assert_eq!(file.rename("main.rs", true).unwrap(), "/home/sy/main.rs");
    /// ```
    pub fn rename(&self, name: &str, dry: bool) -> Result<FilePath> {
        let (head, _) = rules::split(self.as_str());
        self.move_to(rules::join([head, name]), dry)
    }

    /// Replace the final segment; the fragment-call form of [`rename`](Self::rename).
    ///
    /// # Errors
    ///
    /// Returns the host error if the rename fails.
    pub fn with_name(&self, name: &str, dry: bool) -> Result<FilePath> {
        self.rename(name, dry)
    }

    /// Replace the stem, keeping the current extension.
    ///
    /// # Errors
    ///
    /// Returns the host error if the rename fails.
    pub fn with_stem(&self, stem: &str, dry: bool) -> Result<FilePath> {
        let (_, extension) = rules::splitext(self.as_str());
        self.rename(&format!("{stem}{extension}"), dry)
    }

    /// Replace the extension. A leading dot is added when missing.
    ///
    /// # Errors
    ///
    /// Returns the host error if the rename fails.
    pub fn with_extension(&self, extension: &str, dry: bool) -> Result<FilePath> {
        let (root, _) = rules::splitext(self.as_str());
        let target = if extension.starts_with('.') {
            format!("{root}{extension}")
        } else {
            format!("{root}.{extension}")
        };
        self.move_to(target, dry)
    }

    fn move_to(&self, target: String, dry: bool) -> Result<FilePath> {
        if dry {
            debug!("dry rename: {self} -> {target}");
        } else {
            fs::rename(self.as_str(), &target).map_err(Error::io("rename", self.as_path()))?;
            debug!("renamed {self} -> {target}");
        }
        Ok(self.derive(target))
    }
}

//! Fragment views: name, stem and extension snapshots of a full path.
//!
//! A fragment is plain text plus the [`FilePath`] it was extracted from.
//! Calling it with a new value renames its origin, which is how
//! `file.extension().call("h", false)` turns `test.cc` into `test.h`.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::path::value::{FilePath, Mode};

/// Which part of its origin a fragment was cut from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    /// The final path segment.
    Name,
    /// The final segment without its extension.
    Stem,
    /// The extension, including its leading dot.
    Extension,
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Stem => write!(f, "stem"),
            Self::Extension => write!(f, "extension"),
        }
    }
}

/// A name, stem or extension snapshot that remembers its origin path.
///
/// Fragments never update when the file on disk changes; re-derive from the
/// path returned by a rename to see the new value.
///
/// # Examples
///
/// ```
/// use wtfile::{FilePath, FragmentKind};
///
/// let file = FilePath::new(["/home/sy", "test.cc"]);
/// let ext = file.extension();
/// assert_eq!(ext, ".cc");
/// assert_eq!(ext.kind(), FragmentKind::Extension);
///
/// // Preview the rename without touching the filesystem.
/// let renamed = ext.call("h", true).unwrap();
/// assert_eq!(renamed, "/home/sy/test.h");
/// ```
#[derive(Debug, Clone)]
pub struct Fragment {
    text: String,
    kind: FragmentKind,
    origin: Arc<FilePath>,
}

impl Fragment {
    pub(crate) fn new(text: String, kind: FragmentKind, origin: Arc<FilePath>) -> Self {
        Self { text, kind, origin }
    }

    /// Same kind and origin, different text.
    pub(crate) fn derive(&self, text: String) -> Self {
        Self::new(text, self.kind, Arc::clone(&self.origin))
    }

    /// The fragment text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Which part of the origin this fragment is.
    #[must_use]
    pub fn kind(&self) -> FragmentKind {
        self.kind
    }

    /// The path this fragment was extracted from.
    #[must_use]
    pub fn origin(&self) -> &FilePath {
        &self.origin
    }

    /// The I/O mode inherited from the origin.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.origin.mode()
    }

    /// Consume the fragment, returning its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }

    /// Rename the origin by replacing this fragment with `value`.
    ///
    /// - Name: the origin's final segment becomes `value`.
    /// - Stem: the final segment becomes `value` plus the origin's extension.
    /// - Extension: `value` (given a leading dot if missing) replaces the
    ///   origin's extension.
    ///
    /// With `dry` set nothing on disk changes and the returned path is only
    /// the computed candidate.
    ///
    /// # Errors
    ///
    /// Returns the host error if the rename fails.
    pub fn call(&self, value: &str, dry: bool) -> Result<FilePath> {
        match self.kind {
            FragmentKind::Name => self.origin.with_name(value, dry),
            FragmentKind::Stem => self.origin.with_stem(value, dry),
            FragmentKind::Extension => self.origin.with_extension(value, dry),
        }
    }

    /// Fragments cannot be path-joined.
    ///
    /// # Errors
    ///
    /// Always returns `NotJoinable`.
    pub fn join(&self, _segment: impl AsRef<str>) -> Result<FilePath> {
        Err(Error::NotJoinable {
            fragment: self.text.clone(),
            kind: self.kind,
        })
    }
}

impl Deref for Fragment {
    type Target = str;

    fn deref(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for Fragment {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl Borrow<str> for Fragment {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl PartialEq for Fragment {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Fragment {}

impl PartialEq<str> for Fragment {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Fragment {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl PartialEq<String> for Fragment {
    fn eq(&self, other: &String) -> bool {
        &self.text == other
    }
}

impl Hash for Fragment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dry_call_per_kind() {
        let file = FilePath::from("/tmp/wtfile/tmp.file");
        assert_eq!(file.name().call("other.txt", true).unwrap(), "/tmp/wtfile/other.txt");
        assert_eq!(file.stem().call("other", true).unwrap(), "/tmp/wtfile/other.file");
        assert_eq!(file.extension().call("xfile", true).unwrap(), "/tmp/wtfile/tmp.xfile");
    }

    #[test]
    fn test_extension_call_accepts_leading_dot() {
        let file = FilePath::from("/home/sy/test.cc");
        assert_eq!(file.extension().call(".h", true).unwrap(), "/home/sy/test.h");
        assert_eq!(file.extension().call("h", true).unwrap(), "/home/sy/test.h");
    }

    #[test]
    fn test_dry_chain_previews_without_commit() {
        let file = FilePath::from("/home/sy/test.cc");
        let step = file.extension().call("h", true).unwrap();
        let step = step.stem().call("name", true).unwrap();
        assert_eq!(step, "/home/sy/name.h");
        assert_eq!(step.name(), "name.h");
    }

    #[test]
    fn test_call_carries_context_forward() {
        let origin = FilePath::from("/tmp/origin");
        let context = crate::path::Context::new(Mode::Binary).with_origin(origin.clone());
        let file = FilePath::with_context(["/tmp", "a.txt"], context);

        let renamed = file.extension().call("md", true).unwrap();
        assert_eq!(renamed.mode(), Mode::Binary);
        assert_eq!(renamed.origin(), Some(&origin));
    }

    #[test]
    fn test_join_is_rejected() {
        let file = FilePath::from("/tmp/tmp.file");
        let err = file.extension().join("x").unwrap_err();
        assert!(matches!(
            err,
            Error::NotJoinable {
                kind: FragmentKind::Extension,
                ..
            }
        ));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(FragmentKind::Name.to_string(), "name");
        assert_eq!(FragmentKind::Stem.to_string(), "stem");
        assert_eq!(FragmentKind::Extension.to_string(), "extension");
    }
}

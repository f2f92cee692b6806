//! Operator algebra for path values and fragments.
//!
//! - `value + text` appends text (no separator) and keeps the value's kind.
//! - `text + value` prepends text and keeps the value's kind; extensions
//!   splice the text in after their leading dot.
//! - `path / text` path-joins. `fragment / text` is an error.

use std::ops::{Add, Div};

use crate::error::Result;
use crate::path::fragment::{Fragment, FragmentKind};
use crate::path::value::FilePath;

/// Reflected concatenation for a value of the given kind.
///
/// `None` stands for a full path.
fn prepend_text(kind: Option<FragmentKind>, prefix: &str, text: &str) -> String {
    match kind {
        Some(FragmentKind::Extension) => {
            let rest = text.strip_prefix('.').unwrap_or(text);
            format!(".{prefix}{rest}")
        }
        Some(FragmentKind::Name | FragmentKind::Stem) | None => format!("{prefix}{text}"),
    }
}

impl FilePath {
    /// `prefix` followed by this path's text, as a path.
    ///
    /// # Examples
    ///
    /// ```
    /// use wtfile::FilePath;
    ///
    /// assert_eq!(FilePath::from("/wtfile").prepend("/tmp"), "/tmp/wtfile");
    /// ```
    #[must_use]
    pub fn prepend(&self, prefix: &str) -> FilePath {
        self.derive(prepend_text(None, prefix, self.as_str()))
    }
}

impl Fragment {
    /// `prefix` placed before this fragment, keeping the fragment kind.
    ///
    /// For extensions the prefix goes after the leading dot.
    ///
    /// # Examples
    ///
    /// ```
    /// use wtfile::FilePath;
    ///
    /// let ext = FilePath::from("main.cc").extension();
    /// assert_eq!(ext.prepend("x"), ".xcc");
    /// ```
    #[must_use]
    pub fn prepend(&self, prefix: &str) -> Fragment {
        self.derive(prepend_text(Some(self.kind()), prefix, self.as_str()))
    }
}

impl<S: AsRef<str>> Add<S> for &FilePath {
    type Output = FilePath;

    fn add(self, rhs: S) -> FilePath {
        self.derive(format!("{}{}", self.as_str(), rhs.as_ref()))
    }
}

impl<S: AsRef<str>> Add<S> for FilePath {
    type Output = FilePath;

    fn add(self, rhs: S) -> FilePath {
        &self + rhs
    }
}

impl<S: AsRef<str>> Add<S> for &Fragment {
    type Output = Fragment;

    fn add(self, rhs: S) -> Fragment {
        self.derive(format!("{}{}", self.as_str(), rhs.as_ref()))
    }
}

impl<S: AsRef<str>> Add<S> for Fragment {
    type Output = Fragment;

    fn add(self, rhs: S) -> Fragment {
        &self + rhs
    }
}

impl Add<&FilePath> for &str {
    type Output = FilePath;

    fn add(self, rhs: &FilePath) -> FilePath {
        rhs.prepend(self)
    }
}

impl Add<FilePath> for &str {
    type Output = FilePath;

    fn add(self, rhs: FilePath) -> FilePath {
        rhs.prepend(self)
    }
}

impl Add<&Fragment> for &str {
    type Output = Fragment;

    fn add(self, rhs: &Fragment) -> Fragment {
        rhs.prepend(self)
    }
}

impl Add<Fragment> for &str {
    type Output = Fragment;

    fn add(self, rhs: Fragment) -> Fragment {
        rhs.prepend(self)
    }
}

impl<S: AsRef<str>> Div<S> for &FilePath {
    type Output = FilePath;

    fn div(self, rhs: S) -> FilePath {
        self.join(rhs)
    }
}

impl<S: AsRef<str>> Div<S> for FilePath {
    type Output = FilePath;

    fn div(self, rhs: S) -> FilePath {
        self.join(rhs)
    }
}

impl<S: AsRef<str>> Div<S> for &Fragment {
    type Output = Result<FilePath>;

    fn div(self, rhs: S) -> Result<FilePath> {
        self.join(rhs)
    }
}

impl<S: AsRef<str>> Div<S> for Fragment {
    type Output = Result<FilePath>;

    fn div(self, rhs: S) -> Result<FilePath> {
        self.join(rhs)
    }
}

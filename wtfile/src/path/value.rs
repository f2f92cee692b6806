//! The full-path value and the context it carries.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::path::fragment::{Fragment, FragmentKind};
use crate::path::rules;

/// How file contents are read and written.
///
/// # Examples
///
/// ```
/// use wtfile::Mode;
///
/// assert_eq!("binary".parse::<Mode>().unwrap(), Mode::Binary);
/// assert_eq!(Mode::default(), Mode::Text);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Contents are UTF-8 text with newline translation.
    #[default]
    Text,
    /// Contents are raw bytes.
    Binary,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Binary => write!(f, "binary"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "t" => Ok(Self::Text),
            "binary" | "b" => Ok(Self::Binary),
            _ => Err(format!("invalid mode: {s} (expected text or binary)")),
        }
    }
}

/// The context record every derived value inherits from its operand.
///
/// It holds the I/O mode and, when the value was derived from another full
/// path, a reference to that origin.
#[derive(Debug, Clone, Default)]
pub struct Context {
    mode: Mode,
    origin: Option<Arc<FilePath>>,
}

impl Context {
    /// A context with the given mode and no origin.
    #[must_use]
    pub const fn new(mode: Mode) -> Self {
        Self { mode, origin: None }
    }

    /// A context whose mode comes from resolved configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.mode())
    }

    /// This context with `origin` recorded as the parent value.
    #[must_use]
    pub fn with_origin(mut self, origin: FilePath) -> Self {
        self.origin = Some(Arc::new(origin));
        self
    }

    /// The I/O mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// The value this context was derived from, if any.
    #[must_use]
    pub fn origin(&self) -> Option<&FilePath> {
        self.origin.as_deref()
    }
}

/// An immutable, string-like filesystem path.
///
/// Equality, ordering and hashing look at the text only.
///
/// # Examples
///
/// ```
/// use wtfile::FilePath;
///
/// let file = FilePath::new(["/home/sy", "test.cc"]);
/// assert_eq!(file, "/home/sy/test.cc");
/// assert_eq!(file.extension(), ".cc");
/// assert_eq!(file.stem(), "test");
/// assert_eq!(file.parent(), "/home/sy");
/// ```
#[derive(Debug, Clone)]
pub struct FilePath {
    text: String,
    context: Context,
}

impl FilePath {
    /// Join `segments` with the host separator.
    ///
    /// No segments yields the empty path.
    #[must_use]
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_context(segments, Context::default())
    }

    /// The empty path.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_text(String::new(), Context::default())
    }

    /// Join `segments` and attach an explicit context.
    #[must_use]
    pub fn with_context<I, S>(segments: I, context: Context) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_text(rules::join(segments), context)
    }

    /// Join `segments` with the mode taken from `config`.
    #[must_use]
    pub fn configured<I, S>(config: &Config, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_context(segments, Context::from_config(config))
    }

    pub(crate) fn from_text(text: String, context: Context) -> Self {
        Self { text, context }
    }

    /// Convert a path handed back by the host.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPath` if the path is not valid UTF-8.
    pub(crate) fn from_host(path: PathBuf, context: Context) -> Result<Self> {
        match path.into_os_string().into_string() {
            Ok(text) => Ok(Self::from_text(text, context)),
            Err(raw) => Err(Error::InvalidPath {
                path: PathBuf::from(raw),
                reason: "path is not valid UTF-8".to_string(),
            }),
        }
    }

    /// A new value with `text`, inheriting this value's context.
    pub(crate) fn derive(&self, text: String) -> Self {
        Self::from_text(text, self.context.clone())
    }

    /// This path with a different I/O mode.
    #[must_use]
    pub fn with_mode(&self, mode: Mode) -> Self {
        let mut derived = self.clone();
        derived.context.mode = mode;
        derived
    }

    /// The path text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The path as a `std::path::Path`.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.text)
    }

    /// The context carried by this value.
    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// The I/O mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.context.mode
    }

    /// The value this path was derived from, if any.
    #[must_use]
    pub fn origin(&self) -> Option<&FilePath> {
        self.context.origin()
    }

    /// Consume the value, returning its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }

    /// Path-join a single segment.
    ///
    /// Same as the `/` operator.
    #[must_use]
    pub fn join(&self, segment: impl AsRef<str>) -> Self {
        self.join_all([segment])
    }

    /// Path-join several segments at once.
    ///
    /// # Examples
    ///
    /// ```
    /// use wtfile::FilePath;
    ///
    /// let dir = FilePath::new(["/tmp/wtfile"]);
    /// assert_eq!(dir.join_all(["folder", "tmp.file"]), "/tmp/wtfile/folder/tmp.file");
    /// ```
    #[must_use]
    pub fn join_all<I, S>(&self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = self.text.clone();
        for segment in segments {
            text = rules::join([text.as_str(), segment.as_ref()]);
        }
        self.derive(text)
    }

    /// The directory containing this path.
    ///
    /// `/` is its own parent; a single relative segment has the empty path
    /// as parent.
    #[must_use]
    pub fn parent(&self) -> Self {
        self.derive(rules::dirname(&self.text).to_string())
    }

    /// The final path segment, as a Name fragment of this path.
    #[must_use]
    pub fn name(&self) -> Fragment {
        self.fragment(rules::basename(&self.text), FragmentKind::Name)
    }

    /// The extension of the final segment including its leading dot, as an
    /// Extension fragment. Empty when there is none.
    #[must_use]
    pub fn extension(&self) -> Fragment {
        self.fragment(rules::splitext(&self.text).1, FragmentKind::Extension)
    }

    /// The final segment without its extension, as a Stem fragment.
    #[must_use]
    pub fn stem(&self) -> Fragment {
        let name = rules::basename(&self.text);
        let extension = rules::splitext(&self.text).1;
        let stem = name.strip_suffix(extension).unwrap_or(name);
        self.fragment(stem, FragmentKind::Stem)
    }

    fn fragment(&self, text: &str, kind: FragmentKind) -> Fragment {
        Fragment::new(text.to_string(), kind, Arc::new(self.clone()))
    }
}

impl Default for FilePath {
    fn default() -> Self {
        Self::empty()
    }
}

impl Deref for FilePath {
    type Target = str;

    fn deref(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for FilePath {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl AsRef<Path> for FilePath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl Borrow<str> for FilePath {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for FilePath {
    fn from(text: &str) -> Self {
        Self::from_text(text.to_string(), Context::default())
    }
}

impl From<String> for FilePath {
    fn from(text: String) -> Self {
        Self::from_text(text, Context::default())
    }
}

impl PartialEq for FilePath {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for FilePath {}

impl PartialEq<str> for FilePath {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for FilePath {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl PartialEq<String> for FilePath {
    fn eq(&self, other: &String) -> bool {
        &self.text == other
    }
}

impl Hash for FilePath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl PartialOrd for FilePath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FilePath {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

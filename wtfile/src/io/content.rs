//! Reading and writing file contents.
//!
//! Text reads normalize every newline convention to `\n`. Text writes
//! translate `\n` to the configured [`Newline`]. Binary mode moves bytes
//! untouched.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::path::{FilePath, Mode};

/// Line ending written by text writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Newline {
    /// The host convention: `\r\n` on Windows, `\n` elsewhere.
    #[default]
    Native,
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
    /// `\r`
    Cr,
}

impl Newline {
    /// The characters this newline writes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Native => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::Cr => "\r",
        }
    }
}

impl fmt::Display for Newline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => write!(f, "native"),
            Self::Lf => write!(f, "lf"),
            Self::CrLf => write!(f, "crlf"),
            Self::Cr => write!(f, "cr"),
        }
    }
}

impl FromStr for Newline {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "native" => Ok(Self::Native),
            "lf" | "\n" => Ok(Self::Lf),
            "crlf" | "\r\n" => Ok(Self::CrLf),
            "cr" | "\r" => Ok(Self::Cr),
            _ => Err(format!("invalid newline: {s} (expected native, lf, crlf or cr)")),
        }
    }
}

/// Options for [`FilePath::write`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Newline translation for text-mode writes.
    pub newline: Newline,
    /// Append instead of truncating.
    pub append: bool,
}

impl WriteOptions {
    /// Truncating writes with the host newline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Newline translation from resolved configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            newline: config.newline(),
            append: false,
        }
    }

    /// Set the newline translation.
    #[must_use]
    pub fn with_newline(mut self, newline: Newline) -> Self {
        self.newline = newline;
        self
    }

    /// Append instead of truncating.
    #[must_use]
    pub fn appending(mut self) -> Self {
        self.append = true;
        self
    }
}

/// What [`FilePath::read`] and [`FilePath::content`] produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// A text-mode file.
    Text(String),
    /// A binary-mode file.
    Bytes(Vec<u8>),
    /// The child names of a directory.
    Listing(Vec<String>),
}

impl Content {
    /// The text, if this is text content.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The bytes of text or binary content.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Text(text) => Some(text.as_bytes()),
            Self::Bytes(bytes) => Some(bytes),
            Self::Listing(_) => None,
        }
    }
}

fn normalize_newlines(text: &str) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text.to_string()
    }
}

impl FilePath {
    /// Read the whole file in this path's mode.
    ///
    /// # Errors
    ///
    /// Returns the host error if the file cannot be read.
    pub fn read(&self) -> Result<Content> {
        match self.mode() {
            Mode::Text => self.read_text().map(Content::Text),
            Mode::Binary => self.read_bytes().map(Content::Bytes),
        }
    }

    /// Read the whole file as text with newlines normalized to `\n`.
    ///
    /// # Errors
    ///
    /// Returns the host error if the file cannot be read or is not UTF-8.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use wtfile::FilePath;
    ///
    /// let notes = FilePath::from("/tmp/notes.txt");
    /// for line in notes.read_text().unwrap().lines() {
    ///     println!("{line}");
    /// }
    /// ```
    pub fn read_text(&self) -> Result<String> {
        let raw = fs::read_to_string(self).map_err(Error::io("read", self.as_path()))?;
        Ok(normalize_newlines(&raw))
    }

    /// Read the whole file as bytes.
    ///
    /// # Errors
    ///
    /// Returns the host error if the file cannot be read.
    pub fn read_bytes(&self) -> Result<Vec<u8>> {
        fs::read(self).map_err(Error::io("read", self.as_path()))
    }

    /// Write `text`, creating the file if needed.
    ///
    /// In text mode every `\n` is written as `options.newline`; in binary
    /// mode the bytes go out unchanged.
    ///
    /// # Errors
    ///
    /// Returns the host error if the file cannot be opened or written.
    pub fn write(&self, text: &str, options: &WriteOptions) -> Result<()> {
        match self.mode() {
            Mode::Text if options.newline != Newline::Lf && text.contains('\n') => {
                let translated = text.replace('\n', options.newline.as_str());
                self.write_bytes(translated.as_bytes(), options.append)
            }
            Mode::Text | Mode::Binary => self.write_bytes(text.as_bytes(), options.append),
        }
    }

    /// Write raw bytes, creating the file if needed.
    ///
    /// # Errors
    ///
    /// Returns the host error if the file cannot be opened or written.
    pub fn write_bytes(&self, data: &[u8], append: bool) -> Result<()> {
        let mut open = OpenOptions::new();
        open.create(true);
        if append {
            open.append(true);
        } else {
            open.write(true).truncate(true);
        }
        let mut file = open.open(self).map_err(Error::io("write", self.as_path()))?;
        file.write_all(data)
            .map_err(Error::io("write", self.as_path()))
    }
}

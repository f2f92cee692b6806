//! Directory listings, glob traversal and size accounting.

use std::fs;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern, Paths};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::io::content::Content;
use crate::path::FilePath;

/// Options for [`FilePath::glob`] and [`FilePath::iglob`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlobOptions {
    /// Yield matches relative to the searched directory.
    pub relative: bool,
    /// Let `**` match any number of directories. Without it `**` acts
    /// like `*`.
    pub recursive: bool,
}

impl GlobOptions {
    /// Absolute-style, non-recursive matching.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Yield matches relative to the searched directory.
    #[must_use]
    pub fn relative(mut self) -> Self {
        self.relative = true;
        self
    }

    /// Let `**` cross directories.
    #[must_use]
    pub fn recursive(mut self) -> Self {
        self.recursive = true;
        self
    }
}

/// Options for [`FilePath::get_size`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeOptions {
    /// Also count the size of directory entries themselves.
    pub inode: bool,
    /// Descend into subdirectories.
    pub deep: bool,
}

/// Lazy glob results; see [`FilePath::iglob`].
pub struct GlobIter {
    paths: Paths,
    origin: FilePath,
    /// Prefixes cut from matches in relative mode, as written and normalized.
    bases: Vec<PathBuf>,
}

impl Iterator for GlobIter {
    type Item = Result<FilePath>;

    fn next(&mut self) -> Option<Self::Item> {
        let found = self.paths.next()?;
        Some(self.convert(found))
    }
}

impl GlobIter {
    fn convert(&self, found: glob::GlobResult) -> Result<FilePath> {
        let path = found.map_err(|err| {
            let path = err.path().to_path_buf();
            Error::io("glob", path)(err.into())
        })?;
        // glob hands back `./sub` and `sub//` bases as `sub`.
        let relative = self
            .bases
            .iter()
            .find_map(|base| path.strip_prefix(base).ok())
            .map(Path::to_path_buf);
        let text = host_text(relative.unwrap_or(path))?;
        Ok(self.origin.derive(text))
    }
}

fn host_text(path: PathBuf) -> Result<String> {
    path.into_os_string()
        .into_string()
        .map_err(|raw| Error::InvalidPath {
            path: PathBuf::from(raw),
            reason: "path is not valid UTF-8".to_string(),
        })
}

fn listing_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: !cfg!(windows),
        require_literal_separator: true,
        require_literal_leading_dot: false,
    }
}

impl FilePath {
    /// The directory to hand to the host; the empty path lists `.`.
    fn listing_dir(&self) -> &Path {
        if self.is_empty() {
            Path::new(".")
        } else {
            self.as_path()
        }
    }

    /// Names of the entries in this directory, sorted.
    ///
    /// # Errors
    ///
    /// Returns the host error if the directory cannot be read, or
    /// `InvalidPath` for a name that is not UTF-8.
    pub fn children(&self) -> Result<Vec<String>> {
        let dir = self.listing_dir();
        let mut names = Vec::new();
        for entry in fs::read_dir(dir).map_err(Error::io("listdir", dir))? {
            let entry = entry.map_err(Error::io("listdir", dir))?;
            names.push(host_text(PathBuf::from(entry.file_name()))?);
        }
        names.sort();
        Ok(names)
    }

    /// Children whose names match `pattern` (all of them when `None`).
    ///
    /// # Errors
    ///
    /// Returns `Pattern` for a malformed pattern, or the errors of
    /// [`children`](Self::children).
    pub fn listdir(&self, pattern: Option<&str>) -> Result<Vec<String>> {
        let names = self.children()?;
        let Some(pattern) = pattern else {
            return Ok(names);
        };
        let pattern = Pattern::new(pattern)?;
        let options = listing_options();
        Ok(names
            .into_iter()
            .filter(|name| pattern.matches_with(name, options))
            .collect())
    }

    /// Names of the other entries in this path's directory.
    ///
    /// # Errors
    ///
    /// Returns the host error if the parent cannot be read.
    pub fn siblings(&self) -> Result<Vec<String>> {
        let name = self.name();
        Ok(self
            .parent()
            .children()?
            .into_iter()
            .filter(|child| child.as_str() != name.as_str())
            .collect())
    }

    /// Children joined onto this path.
    ///
    /// # Errors
    ///
    /// Returns `NotADirectory` if this path is not a directory.
    pub fn entries(&self) -> Result<Vec<FilePath>> {
        if !self.listing_dir().is_dir() {
            return Err(Error::NotADirectory {
                path: self.as_path().to_path_buf(),
            });
        }
        Ok(self
            .children()?
            .into_iter()
            .map(|child| self.join(child))
            .collect())
    }

    /// The children of a directory, or the contents of a file.
    ///
    /// # Errors
    ///
    /// Returns the host error of the listing or the read.
    pub fn content(&self) -> Result<Content> {
        if self.listing_dir().is_dir() {
            self.children().map(Content::Listing)
        } else {
            self.read()
        }
    }

    /// All matches of `pattern` under this directory.
    ///
    /// # Errors
    ///
    /// Returns `Pattern` for a malformed pattern and the host error for an
    /// unreadable match.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use wtfile::{FilePath, GlobOptions};
    ///
    /// let src = FilePath::from("/project/src");
    /// for file in src.glob("**/*.rs", GlobOptions::new().recursive().relative()).unwrap() {
    ///     println!("{file}");
    /// }
    /// ```
    pub fn glob(&self, pattern: &str, options: GlobOptions) -> Result<Vec<FilePath>> {
        self.iglob(pattern, options)?.collect()
    }

    /// Lazy form of [`glob`](Self::glob).
    ///
    /// # Errors
    ///
    /// Returns `Pattern` for a malformed pattern.
    pub fn iglob(&self, pattern: &str, options: GlobOptions) -> Result<GlobIter> {
        let pattern = if options.recursive {
            pattern.to_string()
        } else {
            pattern.replace("**", "*")
        };

        let base = self.as_str();
        let full = if base.is_empty() {
            pattern
        } else {
            crate::path::rules::join([Pattern::escape(base), pattern])
        };

        let bases = if options.relative && !base.is_empty() {
            vec![PathBuf::from(base), PathBuf::from(crate::path::rules::normpath(base))]
        } else {
            Vec::new()
        };

        let match_options = MatchOptions {
            case_sensitive: !cfg!(windows),
            require_literal_separator: true,
            require_literal_leading_dot: true,
        };
        let paths = glob::glob_with(&full, match_options)?;
        Ok(GlobIter {
            paths,
            origin: self.clone(),
            bases,
        })
    }

    /// Size in bytes of this path, following symlinks.
    ///
    /// # Errors
    ///
    /// Returns the host error if the path cannot be stat'ed.
    pub fn size(&self) -> Result<u64> {
        fs::metadata(self)
            .map(|m| m.len())
            .map_err(Error::io("size", self.as_path()))
    }

    /// Total size of the files in this directory.
    ///
    /// Shallow totals count only immediate files; `deep` descends. `inode`
    /// also counts the directory entries themselves, this one included.
    /// Symlinks count as their own size and are not followed. A file path
    /// reports its own size.
    ///
    /// # Errors
    ///
    /// Returns the host error for any entry that cannot be stat'ed.
    pub fn get_size(&self, options: SizeOptions) -> Result<u64> {
        let root = self.listing_dir();
        let meta = fs::metadata(root).map_err(Error::io("get_size", root))?;
        if !meta.is_dir() {
            return Ok(meta.len());
        }

        let mut total = if options.inode { meta.len() } else { 0 };
        let mut walker = WalkDir::new(root).min_depth(1).follow_links(false);
        if !options.deep {
            walker = walker.max_depth(1);
        }
        for entry in walker {
            let entry = entry.map_err(|err| {
                let path = err.path().unwrap_or(root).to_path_buf();
                Error::io("get_size", path)(err.into())
            })?;
            let file_type = entry.file_type();
            if file_type.is_dir() && !options.inode {
                continue;
            }
            let len = entry
                .metadata()
                .map_err(|err| Error::io("get_size", entry.path())(err.into()))?
                .len();
            total += len;
        }
        Ok(total)
    }
}

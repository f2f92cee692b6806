//! Scoped working-directory changes.
//!
//! A [`DirScope`] records the working directory when entered, switches to
//! its target, and switches back when exited or dropped. The directory
//! primitive is a [`DirectoryChanger`], so scopes can run against the real
//! process ([`ProcessDirectory`]) or an in-memory stand-in
//! ([`RecordingDirectory`]).
//!
//! The working directory is process-global: callers that use scopes from
//! several threads must serialize them.

use std::cell::RefCell;
use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::path::FilePath;

/// Reads and changes a working directory.
#[cfg_attr(test, mockall::automock)]
pub trait DirectoryChanger {
    /// The current working directory.
    ///
    /// # Errors
    ///
    /// Returns the host error if it cannot be determined.
    fn current(&self) -> io::Result<PathBuf>;

    /// Make `dir` the working directory.
    ///
    /// # Errors
    ///
    /// Returns the host error if the change is refused.
    fn change(&self, dir: &Path) -> io::Result<()>;
}

impl<T: DirectoryChanger + ?Sized> DirectoryChanger for &T {
    fn current(&self) -> io::Result<PathBuf> {
        (**self).current()
    }

    fn change(&self, dir: &Path) -> io::Result<()> {
        (**self).change(dir)
    }
}

/// The real process working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessDirectory;

impl DirectoryChanger for ProcessDirectory {
    fn current(&self) -> io::Result<PathBuf> {
        env::current_dir()
    }

    fn change(&self, dir: &Path) -> io::Result<()> {
        env::set_current_dir(dir)
    }
}

#[derive(Debug)]
struct Recording {
    current: PathBuf,
    history: Vec<PathBuf>,
}

/// An in-memory working directory that remembers every change.
///
/// Clones share state, so a test can keep one handle while a scope owns
/// another.
///
/// # Examples
///
/// ```
/// use wtfile::{FilePath, RecordingDirectory};
///
/// let cwd = RecordingDirectory::new("/home/sy");
/// let inside = FilePath::from("/tmp")
///     .within_using(cwd.clone(), |dir| dir.to_string())
///     .unwrap();
///
/// assert_eq!(inside, "/tmp");
/// assert_eq!(cwd.current_dir(), std::path::PathBuf::from("/home/sy"));
/// assert_eq!(cwd.history().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RecordingDirectory {
    state: Rc<RefCell<Recording>>,
}

impl RecordingDirectory {
    /// Start in `dir` with an empty history.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            state: Rc::new(RefCell::new(Recording {
                current: dir.into(),
                history: Vec::new(),
            })),
        }
    }

    /// The directory last changed to.
    #[must_use]
    pub fn current_dir(&self) -> PathBuf {
        self.state.borrow().current.clone()
    }

    /// Every directory changed to, in order.
    #[must_use]
    pub fn history(&self) -> Vec<PathBuf> {
        self.state.borrow().history.clone()
    }
}

impl DirectoryChanger for RecordingDirectory {
    fn current(&self) -> io::Result<PathBuf> {
        Ok(self.current_dir())
    }

    fn change(&self, dir: &Path) -> io::Result<()> {
        let mut state = self.state.borrow_mut();
        state.current = dir.to_path_buf();
        state.history.push(dir.to_path_buf());
        Ok(())
    }
}

/// A working-directory change that is undone on exit or drop.
///
/// Each scope may be entered once at a time. Nested scopes restore in
/// reverse order.
#[derive(Debug)]
pub struct DirScope<C: DirectoryChanger = ProcessDirectory> {
    target: FilePath,
    changer: C,
    saved: Option<PathBuf>,
}

impl DirScope<ProcessDirectory> {
    /// A scope that changes the process working directory to `target`.
    #[must_use]
    pub fn new(target: FilePath) -> Self {
        Self::with_changer(target, ProcessDirectory)
    }
}

impl<C: DirectoryChanger> DirScope<C> {
    /// A scope that changes directory through `changer`.
    #[must_use]
    pub fn with_changer(target: FilePath, changer: C) -> Self {
        Self {
            target,
            changer,
            saved: None,
        }
    }

    /// The directory this scope switches to.
    #[must_use]
    pub fn target(&self) -> &FilePath {
        &self.target
    }

    /// Whether the scope is currently entered.
    #[must_use]
    pub fn is_entered(&self) -> bool {
        self.saved.is_some()
    }

    /// Record the working directory and switch to the target.
    ///
    /// # Errors
    ///
    /// Returns `ScopeAlreadyEntered` on a second enter without exit, or the
    /// host error if the directory cannot be read or changed. A failed
    /// change leaves the scope not entered.
    pub fn enter(&mut self) -> Result<()> {
        if self.saved.is_some() {
            return Err(Error::ScopeAlreadyEntered {
                path: self.target.as_path().to_path_buf(),
            });
        }

        let previous = self
            .changer
            .current()
            .map_err(Error::io("current_dir", self.target.as_path()))?;
        self.changer
            .change(self.target.as_path())
            .map_err(Error::io("chdir", self.target.as_path()))?;

        debug!("entered {} (from {})", self.target, previous.display());
        self.saved = Some(previous);
        Ok(())
    }

    /// Switch back to the directory recorded by [`enter`](Self::enter).
    ///
    /// # Errors
    ///
    /// Returns `ScopeNotEntered` if the scope is not entered, or the host
    /// error if the restore is refused.
    pub fn exit(&mut self) -> Result<()> {
        let Some(previous) = self.saved.take() else {
            return Err(Error::ScopeNotEntered {
                path: self.target.as_path().to_path_buf(),
            });
        };

        self.changer
            .change(&previous)
            .map_err(Error::io("chdir", previous.as_path()))?;
        debug!("left {} (back to {})", self.target, previous.display());
        Ok(())
    }
}

impl<C: DirectoryChanger> Drop for DirScope<C> {
    fn drop(&mut self) {
        if let Some(previous) = self.saved.take() {
            if let Err(err) = self.changer.change(&previous) {
                warn!(
                    "could not restore working directory {}: {err}",
                    previous.display()
                );
            }
        }
    }
}

impl FilePath {
    /// A process working-directory scope targeting this path, not yet
    /// entered.
    #[must_use]
    pub fn scope(&self) -> DirScope {
        DirScope::new(self.clone())
    }

    /// A scope targeting this path that changes directory through `changer`.
    #[must_use]
    pub fn scope_with<C: DirectoryChanger>(&self, changer: C) -> DirScope<C> {
        DirScope::with_changer(self.clone(), changer)
    }

    /// Run `f` with the process working directory set to this path and
    /// restore it afterwards, also when `f` panics.
    ///
    /// # Errors
    ///
    /// Returns the error of entering or exiting the scope; `f`'s own result
    /// is returned untouched inside `Ok`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use wtfile::FilePath;
    ///
    /// let listing = FilePath::from("/tmp").within(|_| FilePath::from("").children()).unwrap();
    /// ```
    pub fn within<T>(&self, f: impl FnOnce(&FilePath) -> T) -> Result<T> {
        self.within_using(ProcessDirectory, f)
    }

    /// [`within`](Self::within) through an explicit `changer`.
    ///
    /// # Errors
    ///
    /// Returns the error of entering or exiting the scope.
    pub fn within_using<C, T>(&self, changer: C, f: impl FnOnce(&FilePath) -> T) -> Result<T>
    where
        C: DirectoryChanger,
    {
        let mut scope = self.scope_with(changer);
        scope.enter()?;
        let result = f(self);
        scope.exit()?;
        Ok(result)
    }
}

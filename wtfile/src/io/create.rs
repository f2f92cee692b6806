//! Creating and removing files and directories.

use std::fs::{self, DirBuilder, OpenOptions};
use std::io;
use std::path::Path;

use log::debug;

#[cfg(unix)]
use crate::config::schema::{DEFAULT_DIR_PERMISSIONS, DEFAULT_FILE_PERMISSIONS};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::path::FilePath;

/// Options for [`FilePath::mkdir_with`] and [`FilePath::mkfile_with`].
///
/// # Examples
///
/// ```no_run
/// use wtfile::{CreateOptions, FilePath};
///
/// let dir = FilePath::from("/tmp/wtfile");
/// let created = dir
///     .mkdir_with(&CreateOptions::new().with_permissions(0o755).with_child("logs"))
///     .unwrap();
/// assert_eq!(created, "/tmp/wtfile/logs");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateOptions {
    /// Unix permission bits, before the umask. `None` uses the default for
    /// the kind of entry being created.
    pub permissions: Option<u32>,
    /// Create this child of the path instead of the path itself.
    pub child: Option<String>,
}

impl CreateOptions {
    /// Defaults: no explicit permissions, no child.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory creation options from resolved configuration.
    #[must_use]
    pub fn directory(config: &Config) -> Self {
        Self::new().with_permissions(config.dir_permissions())
    }

    /// File creation options from resolved configuration.
    #[must_use]
    pub fn file(config: &Config) -> Self {
        Self::new().with_permissions(config.file_permissions())
    }

    /// Set the permission bits.
    #[must_use]
    pub fn with_permissions(mut self, permissions: u32) -> Self {
        self.permissions = Some(permissions);
        self
    }

    /// Create `child` under the path.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<String>) -> Self {
        self.child = Some(child.into());
        self
    }

    fn target(&self, path: &FilePath) -> FilePath {
        match self.child.as_deref() {
            Some(child) if !child.is_empty() => path.join(child),
            _ => path.clone(),
        }
    }
}

impl FilePath {
    /// Create this directory with mode `0o777` (before the umask).
    ///
    /// # Errors
    ///
    /// Returns the host error, e.g. when the directory already exists or the
    /// parent is missing.
    pub fn mkdir(&self) -> Result<FilePath> {
        self.mkdir_with(&CreateOptions::default())
    }

    /// Create a directory according to `options` and return its path.
    ///
    /// # Errors
    ///
    /// Returns the host error if the directory cannot be created.
    pub fn mkdir_with(&self, options: &CreateOptions) -> Result<FilePath> {
        let target = options.target(self);
        let mut builder = DirBuilder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(options.permissions.unwrap_or(DEFAULT_DIR_PERMISSIONS));
        }
        builder
            .create(&target)
            .map_err(Error::io("mkdir", target.as_path()))?;
        debug!("created directory {target}");
        Ok(target)
    }

    /// Create this path as an empty file with mode `0o600` (before the umask).
    ///
    /// Fails if anything already exists at the path.
    ///
    /// # Errors
    ///
    /// Returns the host error if the file cannot be created.
    pub fn mkfile(&self) -> Result<FilePath> {
        self.mkfile_with(&CreateOptions::default())
    }

    /// Alias of [`mkfile`](Self::mkfile).
    ///
    /// # Errors
    ///
    /// Returns the host error if the file cannot be created.
    pub fn touch(&self) -> Result<FilePath> {
        self.mkfile()
    }

    /// Create an empty file according to `options` and return its path.
    ///
    /// # Errors
    ///
    /// Returns the host error if the file cannot be created.
    pub fn mkfile_with(&self, options: &CreateOptions) -> Result<FilePath> {
        let target = options.target(self);
        let mut open = OpenOptions::new();
        open.write(true).create_new(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            open.mode(options.permissions.unwrap_or(DEFAULT_FILE_PERMISSIONS));
        }
        open.open(&target)
            .map_err(Error::io("mkfile", target.as_path()))?;
        debug!("created file {target}");
        Ok(target)
    }

    /// Remove this file, symlink or directory tree.
    ///
    /// With `force`, entries the host refuses with permission-denied are
    /// made writable and retried once.
    ///
    /// # Errors
    ///
    /// Returns `NotRemovable` for anything other than a file, symlink or
    /// directory, and the host error for failed removals (including a
    /// missing path).
    pub fn rm(&self, force: bool) -> Result<()> {
        let meta = fs::symlink_metadata(self).map_err(Error::io("rm", self.as_path()))?;
        let file_type = meta.file_type();

        if file_type.is_dir() {
            if force {
                remove_tree_forced(self.as_path())?;
            } else {
                fs::remove_dir_all(self).map_err(Error::io("rm", self.as_path()))?;
            }
        } else if file_type.is_file() || file_type.is_symlink() {
            if force {
                retry_writable(self.as_path(), || fs::remove_file(self))?;
            } else {
                fs::remove_file(self).map_err(Error::io("rm", self.as_path()))?;
            }
        } else {
            return Err(Error::NotRemovable {
                path: self.as_path().to_path_buf(),
            });
        }

        debug!("removed {self}");
        Ok(())
    }

    /// Remove and recreate this path (or `target` under it) as an empty
    /// entry of the same kind. A missing path is created as a directory.
    ///
    /// # Errors
    ///
    /// Returns the error of the removal or the creation.
    pub fn clear(&self, target: Option<&str>, force: bool) -> Result<FilePath> {
        self.clear_with(target, force, &Config::default())
    }

    /// [`clear`](Self::clear), recreating with the permission bits from
    /// `config`.
    ///
    /// # Errors
    ///
    /// Returns the error of the removal or the creation.
    pub fn clear_with(
        &self,
        target: Option<&str>,
        force: bool,
        config: &Config,
    ) -> Result<FilePath> {
        let path = match target {
            Some(child) if !child.is_empty() => self.join(child),
            _ => self.clone(),
        };

        if path.is_file() {
            path.rm(force)?;
            return path.mkfile_with(&CreateOptions::file(config));
        }
        if path.exists() || path.is_link() {
            path.rm(force)?;
        }
        path.mkdir_with(&CreateOptions::directory(config))
    }
}

/// Remove `dir` and everything below it, making entries writable and
/// retrying once when the host refuses with permission-denied.
fn remove_tree_forced(dir: &Path) -> Result<()> {
    let entries = match fs::read_dir(dir) {
        Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
            make_writable(dir);
            fs::read_dir(dir)
        }
        other => other,
    }
    .map_err(Error::io("rm", dir))?;

    for entry in entries {
        let entry = entry.map_err(Error::io("rm", dir))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(Error::io("rm", &path))?;
        if file_type.is_dir() {
            remove_tree_forced(&path)?;
        } else {
            retry_writable(&path, || fs::remove_file(&path))?;
        }
    }

    retry_writable(dir, || fs::remove_dir(dir))
}

fn retry_writable(path: &Path, mut remove: impl FnMut() -> io::Result<()>) -> Result<()> {
    match remove() {
        Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
            debug!("permission denied removing {}; retrying writable", path.display());
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                make_writable(parent);
            }
            make_writable(path);
            remove().map_err(Error::io("rm", path))
        }
        other => other.map_err(Error::io("rm", path)),
    }
}

/// Best effort: the retry reports the real failure.
fn make_writable(path: &Path) {
    let Ok(meta) = fs::symlink_metadata(path) else {
        return;
    };
    if meta.file_type().is_symlink() {
        return;
    }
    let mut permissions = meta.permissions();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let bits = if meta.is_dir() { 0o700 } else { 0o200 };
        permissions.set_mode(permissions.mode() | bits);
    }
    #[cfg(not(unix))]
    permissions.set_readonly(false);
    if let Err(err) = fs::set_permissions(path, permissions) {
        debug!("could not make {} writable: {err}", path.display());
    }
}

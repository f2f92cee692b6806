//! Existence and type checks, timestamps, and the unsupported root/drive
//! accessors.

use std::fs::{self, Metadata};
use std::io;
use std::time::SystemTime;

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::path::FilePath;

impl FilePath {
    /// Whether something exists at this path, following symlinks.
    #[must_use]
    pub fn exists(&self) -> bool {
        fs::metadata(self).is_ok()
    }

    /// Whether this path is a regular file, following symlinks.
    #[must_use]
    pub fn is_file(&self) -> bool {
        fs::metadata(self).is_ok_and(|m| m.is_file())
    }

    /// Whether this path is a directory, following symlinks.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        fs::metadata(self).is_ok_and(|m| m.is_dir())
    }

    /// Whether this path is itself a symbolic link.
    #[must_use]
    pub fn is_link(&self) -> bool {
        fs::symlink_metadata(self).is_ok_and(|m| m.file_type().is_symlink())
    }

    /// Whether this path is absolute.
    #[must_use]
    pub fn is_abs(&self) -> bool {
        self.as_path().is_absolute()
    }

    /// Whether this path is a mount point.
    ///
    /// A directory is a mount point when it sits on a different device than
    /// its `..`, or when it is its own `..` (the root).
    #[cfg(unix)]
    #[must_use]
    pub fn is_mount(&self) -> bool {
        use std::os::unix::fs::MetadataExt;

        let Ok(own) = fs::symlink_metadata(self) else {
            return false;
        };
        if own.file_type().is_symlink() {
            return false;
        }
        let Ok(up) = fs::symlink_metadata(self.join("..")) else {
            return false;
        };
        own.dev() != up.dev() || own.ino() == up.ino()
    }

    /// Whether this path is a mount point.
    ///
    /// Without device numbers only filesystem roots are recognized.
    #[cfg(not(unix))]
    #[must_use]
    pub fn is_mount(&self) -> bool {
        self.is_dir() && self.as_path().parent().is_none()
    }

    /// Last access time.
    ///
    /// # Errors
    ///
    /// Returns the host error if the path cannot be stat'ed.
    pub fn atime(&self) -> Result<DateTime<Utc>> {
        let accessed = self.stat("atime")?.accessed();
        self.timestamp("atime", accessed)
    }

    /// Last modification time.
    ///
    /// # Errors
    ///
    /// Returns the host error if the path cannot be stat'ed.
    pub fn mtime(&self) -> Result<DateTime<Utc>> {
        let modified = self.stat("mtime")?.modified();
        self.timestamp("mtime", modified)
    }

    /// Last status change time on Unix, creation time elsewhere.
    ///
    /// # Errors
    ///
    /// Returns the host error if the path cannot be stat'ed.
    #[cfg(unix)]
    pub fn ctime(&self) -> Result<DateTime<Utc>> {
        use std::os::unix::fs::MetadataExt;

        let meta = self.stat("ctime")?;
        let nanos = u32::try_from(meta.ctime_nsec()).unwrap_or(0);
        DateTime::from_timestamp(meta.ctime(), nanos).ok_or_else(|| {
            Error::io("ctime", self.as_path())(io::Error::new(
                io::ErrorKind::InvalidData,
                "change time out of range",
            ))
        })
    }

    /// Last status change time on Unix, creation time elsewhere.
    ///
    /// # Errors
    ///
    /// Returns the host error if the path cannot be stat'ed.
    #[cfg(not(unix))]
    pub fn ctime(&self) -> Result<DateTime<Utc>> {
        let created = self.stat("ctime")?.created();
        self.timestamp("ctime", created)
    }

    /// The filesystem root of this path. Not implemented.
    ///
    /// # Errors
    ///
    /// Always returns `Unsupported`.
    pub fn root(&self) -> Result<FilePath> {
        Err(Error::Unsupported { operation: "root" })
    }

    /// The drive of this path. Not implemented.
    ///
    /// # Errors
    ///
    /// Always returns `Unsupported`.
    pub fn drive(&self) -> Result<FilePath> {
        Err(Error::Unsupported { operation: "drive" })
    }

    fn stat(&self, operation: &'static str) -> Result<Metadata> {
        fs::metadata(self).map_err(Error::io(operation, self.as_path()))
    }

    fn timestamp(
        &self,
        operation: &'static str,
        time: io::Result<SystemTime>,
    ) -> Result<DateTime<Utc>> {
        time.map(DateTime::<Utc>::from)
            .map_err(Error::io(operation, self.as_path()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn fixture() -> (tempfile::TempDir, FilePath) {
        let dir = tempdir().unwrap();
        let root = FilePath::from(dir.path().to_str().unwrap());
        (dir, root)
    }

    #[test]
    fn test_type_checks() {
        let (_guard, root) = fixture();
        let file = root.join("tmp.file");
        fs::write(&file, "x").unwrap();

        assert!(root.exists());
        assert!(root.is_dir());
        assert!(!root.is_file());
        assert!(file.is_file());
        assert!(!file.is_dir());
        assert!(!file.is_link());
        assert!(!root.join("missing").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_checks() {
        let (_guard, root) = fixture();
        let target = root.join("target");
        let link = root.join("link");
        fs::write(&target, "x").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        assert!(link.is_link());
        assert!(link.is_file());
        assert!(!target.is_link());

        fs::remove_file(&target).unwrap();
        assert!(link.is_link());
        assert!(!link.exists());
    }

    #[test]
    fn test_is_abs() {
        assert!(FilePath::from("/tmp").is_abs());
        assert!(!FilePath::from("tmp").is_abs());
        assert!(!FilePath::empty().is_abs());
    }

    #[cfg(unix)]
    #[test]
    fn test_is_mount() {
        assert!(FilePath::from("/").is_mount());
        let (_guard, root) = fixture();
        let sub = root.join("sub");
        fs::create_dir(&sub).unwrap();
        assert!(!sub.is_mount());
        assert!(!root.join("missing").is_mount());
    }

    #[test]
    fn test_timestamps() {
        let (_guard, root) = fixture();
        let file = root.join("tmp.file");
        let before = Utc::now() - chrono::Duration::seconds(5);
        fs::write(&file, "x").unwrap();

        assert!(file.mtime().unwrap() >= before);
        assert!(file.atime().unwrap() >= before);
        assert!(file.ctime().unwrap() >= before);
    }

    #[test]
    fn test_timestamps_missing_file() {
        let (_guard, root) = fixture();
        let err = root.join("missing").mtime().unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(err, Error::Io { operation: "mtime", .. }));
    }

    #[test]
    fn test_root_and_drive_unsupported() {
        let file = FilePath::from("/tmp");
        assert!(matches!(file.root(), Err(Error::Unsupported { operation: "root" })));
        assert!(matches!(file.drive(), Err(Error::Unsupported { operation: "drive" })));
    }
}

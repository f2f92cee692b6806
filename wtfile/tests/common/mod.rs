//! Common test utilities for integration tests.
//!
//! Every fixture lives in its own temporary directory so tests can run in
//! parallel without sharing state on disk.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use wtfile::FilePath;

/// A scratch directory holding a single empty `tmp.file`.
pub struct Scarecrow {
    /// Kept alive for the duration of the test.
    _temp_dir: TempDir,
    /// The scratch directory.
    pub dir: FilePath,
    /// `dir/tmp.file`.
    pub file: FilePath,
}

#[allow(dead_code)]
impl Scarecrow {
    /// Creates the scratch directory and its file.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let dir = FilePath::from(utf8(temp_dir.path()));
        let file = dir.join("tmp.file").touch().expect("Failed to touch tmp.file");
        Self {
            _temp_dir: temp_dir,
            dir,
            file,
        }
    }

    /// Names in the scratch directory, sorted.
    pub fn listing(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&self.dir)
            .expect("Failed to read scratch dir")
            .map(|entry| {
                entry
                    .expect("Failed to read entry")
                    .file_name()
                    .into_string()
                    .expect("Non UTF-8 name")
            })
            .collect();
        names.sort();
        names
    }

    /// Writes `contents` to `relative` under the scratch directory,
    /// creating parent directories.
    pub fn write(&self, relative: &str, contents: &[u8]) -> FilePath {
        let path = self.dir.join(relative);
        fs::create_dir_all(path.parent()).expect("Failed to create parents");
        fs::write(&path, contents).expect("Failed to write fixture");
        path
    }
}

/// The UTF-8 text of a host path.
pub fn utf8(path: &Path) -> &str {
    path.to_str().expect("Temp path is not UTF-8")
}

//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builders isolated from the user's configuration

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated home directory.
///
/// `HOME` points into the temporary directory so `~/.wtfile/config.yaml`
/// is never read from the real home, and `WTFILE_*` variables are cleared.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path used as `HOME`
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with an empty `work` directory.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let home = temp_path.join("home");
        std::fs::create_dir_all(&home).expect("Failed to create home");
        std::fs::create_dir_all(temp_path.join("work")).expect("Failed to create work dir");

        Self {
            temp_dir,
            temp_path,
            home,
        }
    }

    /// Get a command builder for the `wtf` binary.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("wtf").expect("Failed to find wtf binary");
        cmd.env("HOME", &self.home)
            .env_remove("WTFILE_CONFIG")
            .env_remove("WTFILE_LOG_MODE")
            .env_remove("WTFILE_MODE")
            .env_remove("WTFILE_NEWLINE")
            .env_remove("WTFILE_DIR_PERMISSIONS")
            .env_remove("WTFILE_FILE_PERMISSIONS")
            .env_remove("WTFILE_CASE_SENSITIVE")
            .current_dir(self.work());
        cmd
    }

    /// The scratch directory commands run in.
    pub fn work(&self) -> PathBuf {
        self.temp_path.join("work")
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file under the work directory, creating parents.
    pub fn create_file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.work().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write `~/.wtfile/config.yaml`.
    pub fn write_user_config(&self, contents: &str) {
        let dir = self.home.join(".wtfile");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        std::fs::write(dir.join("config.yaml"), contents).expect("Failed to write config");
    }

    /// Sorted names in the work directory.
    pub fn listing(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.work())
            .expect("Failed to read work dir")
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

/// The UTF-8 form of a path, for passing as an argument.
#[allow(dead_code)]
pub fn arg(path: &Path) -> &str {
    path.to_str().expect("Temp path is not UTF-8")
}

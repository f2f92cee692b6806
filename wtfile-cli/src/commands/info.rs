//! Info command implementation.
//!
//! This module implements the `info` command, which describes a path in
//! text or JSON form.

use crate::error::CliError;
use crate::utils::{load_configuration, path_value, GlobalOptions};
use clap::{Args, ValueEnum};
use serde::Serialize;
use wtfile::FilePath;

/// Describe a path.
#[derive(Args)]
pub struct InfoCommand {
    /// Path to describe
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,
}

/// Output format for the info command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `key: value` line per field
    Text,
    /// A single JSON object
    Json,
}

/// Everything `info` reports about a path.
#[derive(Debug, Serialize)]
struct PathInfo {
    path: String,
    parent: String,
    name: String,
    stem: String,
    extension: String,
    mode: String,
    absolute: bool,
    exists: bool,
    is_file: bool,
    is_dir: bool,
    is_link: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    modified: Option<String>,
}

impl PathInfo {
    fn collect(path: &FilePath) -> Self {
        Self {
            path: path.to_string(),
            parent: path.parent().into_string(),
            name: path.name().into_string(),
            stem: path.stem().into_string(),
            extension: path.extension().into_string(),
            mode: path.mode().to_string(),
            absolute: path.is_abs(),
            exists: path.exists(),
            is_file: path.is_file(),
            is_dir: path.is_dir(),
            is_link: path.is_link(),
            size: path.is_file().then(|| path.size().ok()).flatten(),
            modified: path.mtime().ok().map(|time| time.to_rfc3339()),
        }
    }

    fn lines(&self) -> Vec<(&'static str, String)> {
        let mut lines = vec![
            ("path", self.path.clone()),
            ("parent", self.parent.clone()),
            ("name", self.name.clone()),
            ("stem", self.stem.clone()),
            ("extension", self.extension.clone()),
            ("mode", self.mode.clone()),
            ("absolute", self.absolute.to_string()),
            ("exists", self.exists.to_string()),
            ("is_file", self.is_file.to_string()),
            ("is_dir", self.is_dir.to_string()),
            ("is_link", self.is_link.to_string()),
        ];
        if let Some(size) = self.size {
            lines.push(("size", size.to_string()));
        }
        if let Some(ref modified) = self.modified {
            lines.push(("modified", modified.clone()));
        }
        lines
    }
}

impl InfoCommand {
    /// Execute the info command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let path = path_value(&config, &self.path);
        let info = PathInfo::collect(&path);

        match self.format {
            OutputFormat::Text => {
                for (key, value) in info.lines() {
                    println!("{key}: {value}");
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&info)
                    .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
                println!("{json}");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_fragments_of_missing_file() {
        let info = PathInfo::collect(&FilePath::from("/nonexistent/wtfile/report.tar.gz"));
        assert_eq!(info.parent, "/nonexistent/wtfile");
        assert_eq!(info.name, "report.tar.gz");
        assert_eq!(info.stem, "report.tar");
        assert_eq!(info.extension, ".gz");
        assert!(info.absolute);
        assert!(!info.exists);
        assert!(info.size.is_none());
        assert!(info.modified.is_none());
    }

    #[test]
    fn test_json_skips_absent_fields() {
        let info = PathInfo::collect(&FilePath::from("relative.txt"));
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["extension"], ".txt");
        assert_eq!(json["mode"], "text");
        assert!(json.get("size").is_none());
    }
}

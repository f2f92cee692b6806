//! Configuration system for wtfile.
//!
//! Configuration only supplies defaults for the ambient knobs of path values:
//! the I/O mode, newline translation, creation permissions and pattern case
//! sensitivity.
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`WTFILE_*`)
//! 3. An explicit file (via `ConfigBuilder::with_file`)
//! 4. User config (`~/.wtfile/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use wtfile::config::ConfigBuilder;
//! use wtfile::FilePath;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let file = FilePath::configured(&config, ["/tmp", "notes.txt"]);
//! println!("{} opens in {} mode", file, file.mode());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;

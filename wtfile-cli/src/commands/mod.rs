//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `info`: Describe a path
//! - `rename`: Rename through a name, stem or extension fragment
//! - `cd`: Lexical navigation
//! - `ls`: List a directory, optionally filtered by pattern
//! - `glob`: Search below a directory
//! - `size`: Sum file sizes
//! - `clear`: Remove and recreate a path empty
//! - `match`: Test a path against a shell pattern

pub mod cd;
pub mod clear;
pub mod glob;
pub mod info;
pub mod ls;
pub mod matches;
pub mod rename;
pub mod size;

pub use cd::CdCommand;
pub use clear::ClearCommand;
pub use glob::GlobCommand;
pub use info::InfoCommand;
pub use ls::LsCommand;
pub use matches::MatchCommand;
pub use rename::RenameCommand;
pub use size::SizeCommand;

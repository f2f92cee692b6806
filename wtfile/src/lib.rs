#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # wtfile
//!
//! String-like path values with an operator algebra, fragment renames and
//! plain filesystem I/O.
//!
//! A [`FilePath`] behaves like the text it holds: it derefs to `str`,
//! compares equal to strings, and concatenates with `+`. On top of that it
//! path-joins with `/`, hands out [`Fragment`] views of its name, stem and
//! extension, and calling a fragment renames the file.
//!
//! ## Core Types
//!
//! - [`FilePath`], [`Context`] and [`Mode`]: path values and what they carry
//! - [`Fragment`] and [`FragmentKind`]: name, stem and extension views
//! - [`DirScope`] and [`DirectoryChanger`]: scoped working-directory changes
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use wtfile::FilePath;
//!
//! let file = FilePath::new(["/home/sy", "test.cc"]);
//! assert_eq!(file.name(), "test.cc");
//! assert_eq!(file.parent() / "main.rs", "/home/sy/main.rs");
//! assert_eq!(file.cd("..."), "/home");
//!
//! // Preview renames without touching the disk.
//! let header = file.extension().call("h", true).unwrap();
//! assert_eq!(header, "/home/sy/test.h");
//! ```

pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use io::{
    Content, CreateOptions, DirScope, DirectoryChanger, GlobIter, GlobOptions, Newline,
    ProcessDirectory, RecordingDirectory, SizeOptions, WriteOptions,
};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{Context, FilePath, Fragment, FragmentKind, Mode};

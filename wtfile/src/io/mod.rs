//! Filesystem operations on path values.
//!
//! Every operation here is a direct, synchronous call into the host
//! filesystem, surfaced as an inherent method on [`FilePath`](crate::FilePath).
//! Host failures keep their `std::io::Error` as the source of
//! [`Error::Io`](crate::Error::Io).

mod content;
mod create;
mod listing;
mod query;
mod scope;

pub use content::{Content, Newline, WriteOptions};
pub use create::CreateOptions;
pub use listing::{GlobIter, GlobOptions, SizeOptions};
pub use scope::{DirScope, DirectoryChanger, ProcessDirectory, RecordingDirectory};

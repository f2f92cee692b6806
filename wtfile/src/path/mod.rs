//! Path values and their operator algebra.
//!
//! A [`FilePath`] is an immutable piece of path text plus a [`Context`]
//! (I/O mode and origin). Asking it for [`name`](FilePath::name),
//! [`stem`](FilePath::stem) or [`extension`](FilePath::extension) yields a
//! [`Fragment`], a snapshot of that part which remembers the path it came
//! from. Calling a fragment renames its origin.
//!
//! # Examples
//!
//! ```
//! use wtfile::FilePath;
//!
//! let file = FilePath::new(["/home/sy", "test.cc"]);
//! assert_eq!(&file / "x", "/home/sy/test.cc/x");
//! assert_eq!(file.clone() + ".bak", "/home/sy/test.cc.bak");
//! assert_eq!("x" + file.extension(), ".xcc");
//!
//! // Fragments cannot be divided.
//! assert!((file.name() / "x").is_err());
//!
//! // Fragment calls rename; `true` only previews.
//! assert_eq!(file.stem().call("main", true).unwrap(), "/home/sy/main.cc");
//! ```
//!
//! Nothing in this module touches the filesystem except non-dry renames
//! and the working-directory lookups in [`FilePath::current_dir`] and
//! [`FilePath::abspath`].

mod algebra;
mod fragment;
mod navigate;
mod rename;
pub mod rules;
mod value;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use fragment::{Fragment, FragmentKind};
pub use value::{Context, FilePath, Mode};

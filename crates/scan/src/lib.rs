//! Structural facts from Lean source files.
//!
//! This crate extracts lightweight structure from a Lean file without any
//! toolchain: it loads the file once, splits it into lines, and records the
//! lines that introduce `structure` types or `declare_syntax` extensions.
//! Matching is strictly per line; a declaration spanning multiple lines is
//! recorded by its opening line only.
#![warn(missing_docs)]

use std::io;
use std::path::PathBuf;

mod report;
mod source;

pub use report::{DeclKind, Declaration, ScanReport, scan, write_report};
pub use source::SourceFile;

/// A convenient type alias for `Result` with `E` = [`enum@crate::Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Possible errors.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
	/// The target path does not resolve to an existing regular file.
	#[error("file not found: {}", .0.display())]
	NotFound(PathBuf),
	/// The target file exists but could not be read.
	#[error("failed to read {}: {source}", .path.display())]
	Io {
		/// Path that failed to read.
		path: PathBuf,
		/// Underlying I/O error.
		#[source]
		source: io::Error,
	},
}

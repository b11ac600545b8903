//! Source file acquisition.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Error, Result};

/// A text file loaded into memory as an ordered sequence of lines.
///
/// Lines are produced by splitting the content on `\n`, so whatever
/// line-ending convention the file uses is preserved verbatim in the line
/// text. The sequence is immutable after load; joining it back with `\n`
/// reproduces the file content exactly. An empty file has no lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
	path: PathBuf,
	byte_size: u64,
	lines: Vec<String>,
}

impl SourceFile {
	/// Load a file from disk.
	///
	/// The byte size comes from a filesystem stat rather than the decoded
	/// content, so it stays accurate when the two differ. Returns
	/// [`Error::NotFound`] when `path` is not an existing regular file, and
	/// [`Error::Io`] on any read failure, including non-UTF-8 content.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let metadata = fs::metadata(path).map_err(|source| match source.kind() {
			io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
			_ => Error::Io {
				path: path.to_path_buf(),
				source,
			},
		})?;
		if !metadata.is_file() {
			return Err(Error::NotFound(path.to_path_buf()));
		}
		let text = fs::read_to_string(path).map_err(|source| Error::Io {
			path: path.to_path_buf(),
			source,
		})?;
		debug!(path = %path.display(), bytes = metadata.len(), "loaded source file");
		Ok(Self {
			path: path.to_path_buf(),
			byte_size: metadata.len(),
			lines: split_lines(&text),
		})
	}

	/// Path the file was loaded from.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// File size in bytes, as reported by the filesystem.
	pub fn byte_size(&self) -> u64 {
		self.byte_size
	}

	/// Number of lines.
	pub fn line_count(&self) -> usize {
		self.lines.len()
	}

	/// Iterate over the lines in order.
	pub fn lines(&self) -> impl Iterator<Item = &str> {
		self.lines.iter().map(String::as_str)
	}

	#[cfg(test)]
	pub(crate) fn from_text(text: &str) -> Self {
		Self {
			path: PathBuf::from("<memory>"),
			byte_size: text.len() as u64,
			lines: split_lines(text),
		}
	}
}

fn split_lines(text: &str) -> Vec<String> {
	if text.is_empty() {
		Vec::new()
	} else {
		text.split('\n').map(str::to_owned).collect()
	}
}

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use clap::Parser;

/// File scanned when no argument is given, resolved against the current
/// working directory.
const DEFAULT_TARGET: &str = "Maze.lean";

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "lintel")]
#[command(about = "Structural facts from a Lean source file, no toolchain required")]
#[command(version)]
pub struct Cli {
	/// Lean file to scan (defaults to Maze.lean in the current directory)
	pub file: Option<PathBuf>,
}

impl Cli {
	/// The file to scan.
	pub fn target(&self) -> PathBuf {
		self.file
			.clone()
			.unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET))
	}
}

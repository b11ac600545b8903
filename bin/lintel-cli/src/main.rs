mod cli;

use std::io::{self, Write};

use clap::Parser;
use cli::Cli;
use lintel_scan::{SourceFile, scan, write_report};
use tracing_subscriber::EnvFilter;

/// How many leading lines to echo before the report.
const PREVIEW_LINES: usize = 10;

fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_writer(io::stderr)
		.init();

	let cli = Cli::parse();
	let target = cli.target();
	tracing::debug!(path = %target.display(), "scanning");

	let file = SourceFile::load(&target)?;
	let report = scan(&file);

	let stdout = io::stdout();
	let mut out = stdout.lock();
	writeln!(out, "Scanning {}", file.path().display())?;
	writeln!(out)?;
	writeln!(out, "File content (first {PREVIEW_LINES} lines):")?;
	for (idx, line) in file.lines().take(PREVIEW_LINES).enumerate() {
		writeln!(out, "{}: {line}", idx + 1)?;
	}
	writeln!(out)?;
	write_report(&report, &mut out)?;
	Ok(())
}

//! Line classification and the scan report.

use std::io;

use crate::SourceFile;

/// Keyword prefix opening a `structure` declaration, including the
/// separating space.
const STRUCTURE_PREFIX: &str = "structure ";

/// Keyword prefix opening a grammar extension. `declare_syntax_cat`,
/// `declare_syntax_rule` and friends all share it, so no separator is
/// required.
const SYNTAX_PREFIX: &str = "declare_syntax";

/// Category of an extracted declaration line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
	/// A line introducing a record-like `structure` type.
	Structure,
	/// A line introducing a custom grammar extension.
	Syntax,
}

impl DeclKind {
	/// Classify a whitespace-trimmed line, or `None` when it opens neither
	/// kind of declaration. A line can never match both prefixes.
	pub fn classify(trimmed: &str) -> Option<Self> {
		if trimmed.starts_with(STRUCTURE_PREFIX) {
			Some(Self::Structure)
		} else if trimmed.starts_with(SYNTAX_PREFIX) {
			Some(Self::Syntax)
		} else {
			None
		}
	}
}

/// One extracted declaration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
	/// 1-based line number in the source file.
	pub line: usize,
	/// The declaration line with surrounding whitespace removed.
	pub text: String,
}

/// Structural facts extracted from a single [`SourceFile`].
///
/// Both declaration lists follow source order and are never deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
	/// Total number of lines in the file.
	pub total_lines: usize,
	/// File size in bytes, from filesystem metadata.
	pub byte_size: u64,
	/// `structure` declarations, in source order.
	pub structures: Vec<Declaration>,
	/// Grammar extension declarations, in source order.
	pub syntax_decls: Vec<Declaration>,
}

/// Extract structural declarations in a single linear pass.
///
/// Each line is trimmed and classified independently; there is no lookahead
/// across lines.
pub fn scan(file: &SourceFile) -> ScanReport {
	let mut report = ScanReport {
		total_lines: file.line_count(),
		byte_size: file.byte_size(),
		..ScanReport::default()
	};
	for (idx, line) in file.lines().enumerate() {
		let trimmed = line.trim();
		match DeclKind::classify(trimmed) {
			Some(DeclKind::Structure) => report.structures.push(Declaration {
				line: idx + 1,
				text: trimmed.to_owned(),
			}),
			Some(DeclKind::Syntax) => report.syntax_decls.push(Declaration {
				line: idx + 1,
				text: trimmed.to_owned(),
			}),
			None => {}
		}
	}
	report
}

/// Render a report as human-readable text.
///
/// Emits the line/size header, then one section per declaration category in
/// source order. A category with no matches is skipped entirely.
pub fn write_report<W: io::Write>(report: &ScanReport, out: &mut W) -> io::Result<()> {
	writeln!(out, "Total lines: {}", report.total_lines)?;
	writeln!(out, "File size: {} bytes", report.byte_size)?;
	if !report.structures.is_empty() {
		writeln!(out)?;
		writeln!(out, "Structures defined in the file:")?;
		for decl in &report.structures {
			writeln!(out, "  - {}", decl.text)?;
		}
	}
	if !report.syntax_decls.is_empty() {
		writeln!(out)?;
		writeln!(out, "Syntax declarations in the file:")?;
		for decl in &report.syntax_decls {
			writeln!(out, "  - {}", decl.text)?;
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests;

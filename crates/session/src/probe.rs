//! Demo sequencer for the language-intelligence contract.
//!
//! Walks the original client-library demo: one session, five requests
//! against a single file, every response printed as it arrives. Responses
//! are never validated, retried, or fed into later steps, and the first
//! collaborator failure aborts the sequence.

use std::io::Write;
use std::path::{Path, PathBuf};

use lsp_types::{Diagnostic, DiagnosticSeverity, Position};
use tracing::debug;

use crate::{DocumentChange, Goal, IntelSession, LanguageIntelligence, Result};

/// What a probe run asks for.
///
/// [`ProbePlan::new`] carries the original demo's constants; adjust the
/// fields to point the requests elsewhere.
#[derive(Debug, Clone)]
pub struct ProbePlan {
	/// File the requests target, relative to the project root.
	pub file: PathBuf,
	/// Position for the goal query.
	pub goal_position: Position,
	/// Position for the term-goal query.
	pub term_goal_position: Position,
	/// Edit applied to the file's in-memory buffer.
	pub edit: DocumentChange,
	/// How many lines of the edited buffer to echo back.
	pub preview_lines: usize,
}

impl ProbePlan {
	/// Plan the original demo sequence against `file`.
	pub fn new(file: impl Into<PathBuf>) -> Self {
		Self {
			file: file.into(),
			goal_position: Position::new(10, 2),
			term_goal_position: Position::new(5, 5),
			edit: DocumentChange::insert("-- Modified by lintel\n", Position::new(1, 0)),
			preview_lines: 5,
		}
	}
}

/// Open a session against `project_root` and run the plan, printing each
/// response to `out`.
///
/// The requests run in a fixed order: goal, term goal, document edit,
/// content read-back, diagnostics. The first failure aborts the run; the
/// session is released either way (explicitly on success, on drop
/// otherwise).
pub fn run<I, W>(intel: &I, project_root: &Path, plan: &ProbePlan, out: &mut W) -> Result<()>
where
	I: LanguageIntelligence,
	W: Write,
{
	debug!(
		root = %project_root.display(),
		file = %plan.file.display(),
		"starting probe"
	);
	let mut session = intel.open_session(project_root)?;

	let goal = session.goal(&plan.file, plan.goal_position)?;
	writeln!(out, "Goal at {}:", describe_position(plan.goal_position))?;
	writeln!(out, "{}", describe_goal(goal.as_ref()))?;

	let mut file = session.file(&plan.file);

	let term_goal = file.term_goal(plan.term_goal_position)?;
	writeln!(out)?;
	writeln!(
		out,
		"Term goal at {}:",
		describe_position(plan.term_goal_position)
	)?;
	writeln!(out, "{}", describe_goal(term_goal.as_ref()))?;

	file.apply_edit(std::slice::from_ref(&plan.edit))?;
	let content = file.content()?;
	writeln!(out)?;
	writeln!(
		out,
		"Buffer after edit (in memory only, first {} lines):",
		plan.preview_lines
	)?;
	for (idx, line) in content.split('\n').take(plan.preview_lines).enumerate() {
		writeln!(out, "{}: {line}", idx + 1)?;
	}

	let diagnostics = file.diagnostics()?;
	writeln!(out)?;
	writeln!(out, "Diagnostics:")?;
	if diagnostics.is_empty() {
		writeln!(out, "  none")?;
	} else {
		for diagnostic in &diagnostics {
			writeln!(out, "  {}", describe_diagnostic(diagnostic))?;
		}
	}

	session.close()
}

fn describe_position(position: Position) -> String {
	format!("line {}, character {}", position.line, position.character)
}

fn describe_goal(goal: Option<&Goal>) -> &str {
	match goal {
		Some(goal) => goal.rendered.as_str(),
		None => "no goal",
	}
}

fn describe_diagnostic(diagnostic: &Diagnostic) -> String {
	let start = diagnostic.range.start;
	format!(
		"{}:{} {}: {}",
		start.line,
		start.character,
		severity_label(diagnostic.severity),
		diagnostic.message
	)
}

fn severity_label(severity: Option<DiagnosticSeverity>) -> &'static str {
	match severity {
		Some(DiagnosticSeverity::ERROR) => "error",
		Some(DiagnosticSeverity::WARNING) => "warning",
		Some(DiagnosticSeverity::INFORMATION) => "info",
		Some(DiagnosticSeverity::HINT) => "hint",
		_ => "diagnostic",
	}
}

//! Scripted in-memory stand-in for the external service.
//!
//! Useful wherever the real toolchain is unavailable: unit tests, demos,
//! dry runs. Goal and diagnostic responses are canned per request kind; the
//! one live behavior is edit application, so content read-back reflects
//! earlier edits the way the real collaborator guarantees. Nothing is
//! computed and nothing touches disk.

use std::path::Path;

use lsp_types::{Diagnostic, Position};
use tracing::debug;

use crate::{DocumentChange, Goal, IntelSession, LanguageIntelligence, Result, ServiceError};

/// A language-intelligence service replaying a fixed script.
///
/// Holds a single document; the file path passed to session operations is
/// accepted and ignored.
#[derive(Debug, Clone, Default)]
pub struct ScriptedIntel {
	content: String,
	goal: Option<Goal>,
	term_goal: Option<Goal>,
	diagnostics: Vec<Diagnostic>,
}

impl ScriptedIntel {
	/// A service whose document starts with `content`.
	pub fn new(content: impl Into<String>) -> Self {
		Self {
			content: content.into(),
			..Self::default()
		}
	}

	/// Respond to goal queries with `goal`.
	pub fn with_goal(mut self, goal: Goal) -> Self {
		self.goal = Some(goal);
		self
	}

	/// Respond to term-goal queries with `goal`.
	pub fn with_term_goal(mut self, goal: Goal) -> Self {
		self.term_goal = Some(goal);
		self
	}

	/// Append a diagnostic to the canned diagnostics response.
	pub fn with_diagnostic(mut self, diagnostic: Diagnostic) -> Self {
		self.diagnostics.push(diagnostic);
		self
	}
}

impl LanguageIntelligence for ScriptedIntel {
	type Session = ScriptedSession;

	fn open_session(&self, project_root: &Path) -> Result<ScriptedSession> {
		debug!(root = %project_root.display(), "opening scripted session");
		Ok(ScriptedSession {
			buffer: self.content.clone(),
			goal: self.goal.clone(),
			term_goal: self.term_goal.clone(),
			diagnostics: self.diagnostics.clone(),
		})
	}
}

/// One open scripted session, owning its in-memory document buffer.
#[derive(Debug)]
pub struct ScriptedSession {
	buffer: String,
	goal: Option<Goal>,
	term_goal: Option<Goal>,
	diagnostics: Vec<Diagnostic>,
}

impl IntelSession for ScriptedSession {
	fn goal(&mut self, _file: &Path, _position: Position) -> Result<Option<Goal>> {
		Ok(self.goal.clone())
	}

	fn term_goal(&mut self, _file: &Path, _position: Position) -> Result<Option<Goal>> {
		Ok(self.term_goal.clone())
	}

	fn apply_edit(&mut self, _file: &Path, changes: &[DocumentChange]) -> Result<()> {
		for change in changes {
			let start = offset_of(&self.buffer, change.range.start)?;
			let end = offset_of(&self.buffer, change.range.end)?;
			if start > end {
				return Err(ServiceError::new("change range is inverted"));
			}
			self.buffer.replace_range(start..end, &change.text);
		}
		Ok(())
	}

	fn content(&mut self, _file: &Path) -> Result<String> {
		Ok(self.buffer.clone())
	}

	fn diagnostics(&mut self, _file: &Path) -> Result<Vec<Diagnostic>> {
		Ok(self.diagnostics.clone())
	}

	fn close(self) -> Result<()> {
		Ok(())
	}
}

/// Byte offset of a line/character position in `text`.
///
/// Characters past the end of their line clamp to the line end, as language
/// servers conventionally allow. A line past the end of the buffer is an
/// error.
fn offset_of(text: &str, position: Position) -> Result<usize> {
	let mut offset = 0;
	for (idx, line) in text.split('\n').enumerate() {
		if idx as u32 == position.line {
			let column = position.character as usize;
			let byte = line
				.char_indices()
				.nth(column)
				.map(|(byte, _)| byte)
				.unwrap_or(line.len());
			return Ok(offset + byte);
		}
		offset += line.len() + 1;
	}
	Err(ServiceError::new(format!(
		"line {} is past the end of the buffer",
		position.line
	)))
}

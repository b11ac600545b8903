//! The external collaborator contract.

use std::path::{Path, PathBuf};

use lsp_types::{Diagnostic, Position};

use crate::{DocumentChange, Goal, Result};

/// A language-intelligence service that can be asked to analyze a project.
///
/// Opening a session binds the service to one project root; everything else
/// happens through the returned [`IntelSession`] value. There is no ambient
/// global client.
pub trait LanguageIntelligence {
	/// Session type produced by this service.
	type Session: IntelSession;

	/// Open a session scoped to `project_root`.
	///
	/// Fails when the project is not analyzable by the underlying toolchain
	/// (for Lean, typically a Lake project that has not been built).
	fn open_session(&self, project_root: &Path) -> Result<Self::Session>;
}

/// One open session against the external service.
///
/// Operations are synchronous and issued one at a time; each call blocks
/// until the service responds. File paths are interpreted relative to the
/// session's project root. Edits apply to the service's in-memory buffers
/// only and are never written back to disk.
///
/// Dropping a session releases it; [`IntelSession::close`] does the same
/// while surfacing shutdown failures.
pub trait IntelSession {
	/// Query the goal state at a position.
	///
	/// `Ok(None)` means the service reports no goal there.
	fn goal(&mut self, file: &Path, position: Position) -> Result<Option<Goal>>;

	/// Query the expected type of the term at a position.
	fn term_goal(&mut self, file: &Path, position: Position) -> Result<Option<Goal>>;

	/// Apply text edits to the file's in-memory buffer.
	fn apply_edit(&mut self, file: &Path, changes: &[DocumentChange]) -> Result<()>;

	/// Current content of the file's in-memory buffer, reflecting every
	/// edit applied so far.
	fn content(&mut self, file: &Path) -> Result<String>;

	/// Diagnostics for the file, in the order the service reports them.
	fn diagnostics(&mut self, file: &Path) -> Result<Vec<Diagnostic>>;

	/// Shut the session down, surfacing any failure doing so.
	fn close(self) -> Result<()>
	where
		Self: Sized;

	/// A view of this session bound to a single file.
	fn file(&mut self, path: impl Into<PathBuf>) -> FileHandle<'_, Self>
	where
		Self: Sized,
	{
		FileHandle {
			session: self,
			path: path.into(),
		}
	}
}

/// Single-file view of an [`IntelSession`].
///
/// Carries the file path so per-file requests do not repeat it.
pub struct FileHandle<'s, S: IntelSession> {
	session: &'s mut S,
	path: PathBuf,
}

impl<S: IntelSession> FileHandle<'_, S> {
	/// The file this handle is bound to.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// See [`IntelSession::goal`].
	pub fn goal(&mut self, position: Position) -> Result<Option<Goal>> {
		self.session.goal(&self.path, position)
	}

	/// See [`IntelSession::term_goal`].
	pub fn term_goal(&mut self, position: Position) -> Result<Option<Goal>> {
		self.session.term_goal(&self.path, position)
	}

	/// See [`IntelSession::apply_edit`].
	pub fn apply_edit(&mut self, changes: &[DocumentChange]) -> Result<()> {
		self.session.apply_edit(&self.path, changes)
	}

	/// See [`IntelSession::content`].
	pub fn content(&mut self) -> Result<String> {
		self.session.content(&self.path)
	}

	/// See [`IntelSession::diagnostics`].
	pub fn diagnostics(&mut self) -> Result<Vec<Diagnostic>> {
		self.session.diagnostics(&self.path)
	}
}

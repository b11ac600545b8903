//! Typed contract for an external Lean language-intelligence service.
//!
//! All substantive behavior — parsing Lean, running the language server,
//! computing goals and diagnostics — belongs to an external collaborator
//! reached through the [`LanguageIntelligence`] and [`IntelSession`] traits.
//! This crate defines that request/response surface, a scripted in-memory
//! backend for tests and demos, and [`probe`], a sequencer that walks the
//! surface against one file and prints each response.
//!
//! Nothing here implements the Language Server Protocol or interprets the
//! collaborator's results.
#![warn(missing_docs)]

/// Re-export of the [`lsp_types`] dependency of this crate.
pub use lsp_types;
pub use serde_json::Value as JsonValue;

mod service;
mod types;

pub mod probe;
pub mod scripted;

pub use service::{FileHandle, IntelSession, LanguageIntelligence};
pub use types::{DocumentChange, Goal};

/// A convenient type alias for `Result` with `E` = [`ServiceError`].
pub type Result<T, E = ServiceError> = std::result::Result<T, E>;

/// An opaque failure surfaced by the language-intelligence collaborator.
///
/// Collaborator failures are reported, never interpreted or classified: a
/// session that will not open, a request the service rejects, and an I/O
/// failure in between all look the same from here.
#[derive(Debug, thiserror::Error)]
#[error("language service: {message}")]
pub struct ServiceError {
	message: String,
}

impl ServiceError {
	/// Wrap a collaborator failure message.
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}

	/// The collaborator's failure message, verbatim.
	pub fn message(&self) -> &str {
		&self.message
	}
}

impl From<std::io::Error> for ServiceError {
	fn from(err: std::io::Error) -> Self {
		Self::new(err.to_string())
	}
}

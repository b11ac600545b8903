//! Request and response payloads for the language-intelligence contract.

use lsp_types::{Position, Range};
use serde::{Deserialize, Serialize};

use crate::JsonValue;

/// A goal state reported by the service at some source position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
	/// Human-readable goal state as the service renders it.
	pub rendered: String,
	/// Raw service payload, preserved for callers that need
	/// service-specific fields.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub data: Option<JsonValue>,
}

impl Goal {
	/// A goal carrying only its rendered form.
	pub fn plain(rendered: impl Into<String>) -> Self {
		Self {
			rendered: rendered.into(),
			data: None,
		}
	}
}

/// One text replacement against a document's in-memory buffer.
///
/// Edits mutate only the buffer held by the service; the file on disk is
/// never touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentChange {
	/// Replacement text.
	pub text: String,
	/// Range whose current content is replaced.
	pub range: Range,
}

impl DocumentChange {
	/// Insert `text` at a position without replacing anything.
	pub fn insert(text: impl Into<String>, at: Position) -> Self {
		Self {
			text: text.into(),
			range: Range { start: at, end: at },
		}
	}

	/// Replace the content of `range` with `text`.
	pub fn replace(text: impl Into<String>, range: Range) -> Self {
		Self {
			text: text.into(),
			range,
		}
	}
}

//! Walk the language-intelligence surface against a scripted backend.
//!
//! The real collaborator would be a running Lean toolchain; the scripted
//! stand-in keeps the walkthrough runnable anywhere:
//!
//! ```sh
//! cargo run -p lintel-session --example probe
//! ```

use std::io;
use std::path::Path;

use lintel_session::lsp_types::{Diagnostic, DiagnosticSeverity, Position, Range};
use lintel_session::probe::{self, ProbePlan};
use lintel_session::scripted::ScriptedIntel;
use lintel_session::{Goal, ServiceError};

const MAZE: &str = "\
/- Escape-the-maze proofs -/

structure Coords where
  x : Nat
  y : Nat

structure GameState where
  position : Coords
  walls : List Coords

declare_syntax_cat game_cell
declare_syntax_cat game_row
";

fn main() -> Result<(), ServiceError> {
	let intel = ScriptedIntel::new(MAZE)
		.with_goal(Goal::plain("⊢ can_escape start"))
		.with_term_goal(Goal::plain("GameState"))
		.with_diagnostic(Diagnostic {
			range: Range::new(Position::new(6, 10), Position::new(6, 19)),
			severity: Some(DiagnosticSeverity::WARNING),
			message: String::from("declaration uses 'sorry'"),
			..Diagnostic::default()
		});

	let plan = ProbePlan::new("Maze.lean");
	probe::run(&intel, Path::new("."), &plan, &mut io::stdout())
}

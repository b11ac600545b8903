use pretty_assertions::assert_eq;

use super::*;

fn file(text: &str) -> SourceFile {
	SourceFile::from_text(text)
}

fn texts(decls: &[Declaration]) -> Vec<&str> {
	decls.iter().map(|decl| decl.text.as_str()).collect()
}

#[test]
fn extracts_both_declaration_kinds() {
	let report = scan(&file("structure Point where\n  x : Nat\ndeclare_syntax_rule foo"));
	assert_eq!(report.total_lines, 3);
	assert_eq!(texts(&report.structures), ["structure Point where"]);
	assert_eq!(texts(&report.syntax_decls), ["declare_syntax_rule foo"]);
}

#[test]
fn records_indented_declarations_trimmed() {
	let report = scan(&file("   structure Foo\t"));
	assert_eq!(texts(&report.structures), ["structure Foo"]);
	assert_eq!(report.structures[0].line, 1);
}

#[test]
fn structure_keyword_requires_separator() {
	let report = scan(&file("structureFoo\nstructure\nstructures are nice"));
	assert!(report.structures.is_empty());
	assert_eq!(report.total_lines, 3);
}

#[test]
fn syntax_prefix_covers_all_declaration_forms() {
	let report = scan(&file("declare_syntax_cat game_cell\ndeclare_syntax_cat game_row"));
	assert_eq!(
		texts(&report.syntax_decls),
		["declare_syntax_cat game_cell", "declare_syntax_cat game_row"]
	);
}

#[test]
fn mid_line_keywords_are_ignored() {
	let text = "inductive Move where\n| east -- structure of a move\ndef s := \"declare_syntax\"";
	let report = scan(&file(text));
	assert!(report.structures.is_empty());
	assert!(report.syntax_decls.is_empty());
}

#[test]
fn keeps_source_order_without_deduplication() {
	let text = "structure A where\ndeclare_syntax_cat one\nstructure A where\nstructure B where";
	let report = scan(&file(text));
	assert_eq!(
		texts(&report.structures),
		["structure A where", "structure A where", "structure B where"]
	);
	assert_eq!(
		report.structures.iter().map(|decl| decl.line).collect::<Vec<_>>(),
		[1, 3, 4]
	);
}

#[test]
fn matches_never_exceed_line_count() {
	let text = "structure A where\n  x : Nat\n\ndeclare_syntax_cat c\n-- comment";
	let report = scan(&file(text));
	assert!(report.structures.len() + report.syntax_decls.len() <= report.total_lines);
}

#[test]
fn scanning_twice_is_idempotent() {
	let source = file("structure A where\ndeclare_syntax_cat c");
	assert_eq!(scan(&source), scan(&source));
}

#[test]
fn empty_file_prints_header_only() {
	let report = scan(&file(""));
	assert_eq!(report.total_lines, 0);
	assert!(report.structures.is_empty());
	assert!(report.syntax_decls.is_empty());

	let mut out = Vec::new();
	write_report(&report, &mut out).unwrap();
	assert_eq!(
		String::from_utf8(out).unwrap(),
		"Total lines: 0\nFile size: 0 bytes\n"
	);
}

#[test]
fn report_sections_are_labeled_and_ordered() {
	let report = scan(&file("structure Coords where\ndeclare_syntax_cat game_cell"));
	let mut out = Vec::new();
	write_report(&report, &mut out).unwrap();
	let expected = concat!(
		"Total lines: 2\n",
		"File size: 51 bytes\n",
		"\n",
		"Structures defined in the file:\n",
		"  - structure Coords where\n",
		"\n",
		"Syntax declarations in the file:\n",
		"  - declare_syntax_cat game_cell\n",
	);
	assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn category_with_no_matches_is_omitted() {
	let report = scan(&file("structure Coords where"));
	let mut out = Vec::new();
	write_report(&report, &mut out).unwrap();
	let text = String::from_utf8(out).unwrap();
	assert!(text.contains("Structures defined in the file:"));
	assert!(!text.contains("Syntax declarations"));
}

#[test]
fn classify_is_exclusive() {
	assert_eq!(DeclKind::classify("structure Foo where"), Some(DeclKind::Structure));
	assert_eq!(DeclKind::classify("declare_syntax_cat c"), Some(DeclKind::Syntax));
	assert_eq!(DeclKind::classify("theorem escape : True"), None);
}

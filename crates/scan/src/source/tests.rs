use std::fs;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use super::*;

#[test]
fn loads_lines_and_stat_size() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("Maze.lean");
	fs::write(&path, "structure Coords where\n  x : Nat\n  y : Nat").unwrap();

	let file = SourceFile::load(&path).unwrap();
	assert_eq!(file.path(), path);
	assert_eq!(file.line_count(), 3);
	assert_eq!(file.byte_size(), 42);
	assert_eq!(
		file.lines().collect::<Vec<_>>(),
		["structure Coords where", "  x : Nat", "  y : Nat"]
	);
}

#[test]
fn empty_file_has_no_lines() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("empty.lean");
	fs::write(&path, "").unwrap();

	let file = SourceFile::load(&path).unwrap();
	assert_eq!(file.line_count(), 0);
	assert_eq!(file.byte_size(), 0);
	assert_eq!(file.lines().next(), None);
}

#[test]
fn joining_lines_reproduces_content() {
	let dir = tempdir().unwrap();
	for content in ["a\nb\nc", "a\nb\nc\n", "\n\n", "one line", "a\r\nb\r\n"] {
		let path = dir.path().join("roundtrip.lean");
		fs::write(&path, content).unwrap();

		let file = SourceFile::load(&path).unwrap();
		assert_eq!(file.lines().collect::<Vec<_>>().join("\n"), content);
	}
}

#[test]
fn carriage_returns_are_not_normalized() {
	let file = SourceFile::from_text("a\r\nb");
	assert_eq!(file.lines().collect::<Vec<_>>(), ["a\r", "b"]);
}

#[test]
fn missing_file_is_not_found() {
	let err = SourceFile::load("/no/such/file.lean").unwrap_err();
	assert!(matches!(err, Error::NotFound(_)));
	assert_eq!(err.to_string(), "file not found: /no/such/file.lean");
}

#[test]
fn directory_is_not_found() {
	let dir = tempdir().unwrap();
	let err = SourceFile::load(dir.path()).unwrap_err();
	assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn non_utf8_content_is_an_io_error() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("binary.lean");
	fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();

	let err = SourceFile::load(&path).unwrap_err();
	assert!(matches!(err, Error::Io { .. }));
}

use proptest::prelude::*;

use super::*;

#[test]
fn single_line_offsets() {
	let text = DocumentText::from("hello world");
	assert_eq!(text.offset_to_position(0, OffsetEncoding::Utf16), Position::new(0, 0));
	assert_eq!(text.offset_to_position(6, OffsetEncoding::Utf16), Position::new(0, 6));
	assert_eq!(text.offset_to_position(11, OffsetEncoding::Utf16), Position::new(0, 11));
}

#[test]
fn multi_line_span() {
	let text = DocumentText::from("fn main() {\n    run();\n}\n");
	// "{" on line 0 through "}" on line 2.
	let range = text.span_to_range(10, 14, OffsetEncoding::Utf8);
	assert_eq!(range.start, Position::new(0, 10));
	assert_eq!(range.end, Position::new(2, 1));
}

#[test]
fn crlf_and_lone_cr_are_line_breaks() {
	let text = DocumentText::from("a\r\nb\rc");
	assert_eq!(text.line_count(), 3);
	assert_eq!(text.offset_to_position(3, OffsetEncoding::Utf8), Position::new(1, 0));
	assert_eq!(text.offset_to_position(5, OffsetEncoding::Utf8), Position::new(2, 0));
}

#[test]
fn utf16_columns_count_surrogate_pairs() {
	// U+1F600 is one scalar value but two UTF-16 code units.
	let text = DocumentText::from("a\u{1F600}b\nc");
	assert_eq!(text.offset_to_position(3, OffsetEncoding::Utf16), Position::new(0, 3));
	assert_eq!(text.offset_to_position(5, OffsetEncoding::Utf16), Position::new(1, 0));
	assert_eq!(text.offset_to_position(2, OffsetEncoding::Utf32), Position::new(0, 2));
}

#[test]
fn offset_inside_character_resolves_to_its_start() {
	let text = DocumentText::from("caf\u{00E9}!");
	// Byte 4 is the second byte of U+00E9, which starts at byte 3.
	assert_eq!(text.offset_to_position(4, OffsetEncoding::Utf8), Position::new(0, 3));
	// Code unit 2 sits inside the surrogate pair starting at 1.
	let emoji = DocumentText::from("a\u{1F600}");
	assert_eq!(emoji.offset_to_position(2, OffsetEncoding::Utf16), Position::new(0, 1));
}

#[test]
fn offsets_past_end_clamp() {
	let text = DocumentText::from("ab\ncd");
	assert_eq!(text.offset_to_position(500, OffsetEncoding::Utf16), Position::new(1, 2));
	let range = text.span_to_range(4, usize::MAX, OffsetEncoding::Utf16);
	assert_eq!(range, TextRange::new(Position::new(1, 1), Position::new(1, 2)));
	let beyond = text.span_to_range(99, 3, OffsetEncoding::Utf16);
	assert!(beyond.is_empty());
	assert_eq!(beyond.start, text.end_position(OffsetEncoding::Utf16));
}

#[test]
fn trailing_newline_ends_on_empty_line() {
	let text = DocumentText::from("x\n");
	assert_eq!(text.end_position(OffsetEncoding::Utf8), Position::new(1, 0));
}

#[test]
fn empty_document() {
	let text = DocumentText::default();
	assert!(text.is_empty());
	assert_eq!(text.span_to_range(3, 3, OffsetEncoding::Utf8), TextRange::default());
}

#[test]
fn zero_length_span_is_a_point() {
	let text = DocumentText::from("one\ntwo");
	let range = text.span_to_range(5, 0, OffsetEncoding::Utf16);
	assert!(range.is_empty());
	assert_eq!(range.start, Position::new(1, 1));
}

#[test]
fn slice_clamps() {
	let text = DocumentText::from("Icon(Icons.add)");
	assert_eq!(text.slice(5, 9, OffsetEncoding::Utf16).to_string(), "Icons.add");
	assert_eq!(text.slice(10, 100, OffsetEncoding::Utf16).to_string(), ".add)");
}

fn arb_text() -> impl Strategy<Value = String> {
	prop::collection::vec(prop_oneof![Just("a"), Just("\u{00E9}"), Just("\u{1F600}"), Just("\n"), Just("\r\n"), Just(" ")], 0..40)
		.prop_map(|parts| parts.concat())
}

fn arb_encoding() -> impl Strategy<Value = OffsetEncoding> {
	prop_oneof![Just(OffsetEncoding::Utf8), Just(OffsetEncoding::Utf16), Just(OffsetEncoding::Utf32)]
}

proptest! {
	/// Every converted span stays inside the document and never inverts.
	#[test]
	fn prop_span_within_document(text in arb_text(), offset in 0usize..200, length in 0usize..200, encoding in arb_encoding()) {
		let doc = DocumentText::from(text.as_str());
		let range = doc.span_to_range(offset, length, encoding);
		prop_assert!(range.start <= range.end);
		prop_assert!(doc.full_range(encoding).contains(&range));
	}

	/// Zero-length spans always produce zero-width ranges.
	#[test]
	fn prop_zero_length_is_point(text in arb_text(), offset in 0usize..200, encoding in arb_encoding()) {
		let doc = DocumentText::from(text.as_str());
		prop_assert!(doc.span_to_range(offset, 0, encoding).is_empty());
	}
}

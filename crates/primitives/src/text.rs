//! Immutable document snapshots.
//!
//! Outline offsets come from an analysis snapshot that may have been computed
//! against a slightly different version of the text, so every conversion here
//! clamps instead of failing: an offset past the end resolves to the end of the
//! document, and an offset inside a multi-unit character resolves to the start
//! of that character.

use ropey::{Rope, RopeSlice};

use crate::{OffsetEncoding, Position, TextRange};

/// A position in the text, measured in characters (not bytes).
pub type CharIdx = usize;

/// Snapshot of a document's text with a precomputed line-break table.
///
/// Lines are split on `\n`, `\r\n` and `\r`. Cloning is cheap: the rope shares
/// its nodes.
#[derive(Debug, Clone, Default)]
pub struct DocumentText {
	rope: Rope,
}

impl DocumentText {
	/// Creates a snapshot from a rope.
	pub fn new(rope: Rope) -> Self {
		Self { rope }
	}

	/// Returns the underlying rope.
	pub fn rope(&self) -> &Rope {
		&self.rope
	}

	/// Returns the document length in the given encoding.
	pub fn len(&self, encoding: OffsetEncoding) -> usize {
		match encoding {
			OffsetEncoding::Utf8 => self.rope.len_bytes(),
			OffsetEncoding::Utf16 => self.rope.len_utf16_cu(),
			OffsetEncoding::Utf32 => self.rope.len_chars(),
		}
	}

	/// Returns true if the document contains no text.
	pub fn is_empty(&self) -> bool {
		self.rope.len_chars() == 0
	}

	/// Returns the number of lines, including the empty line after a trailing break.
	pub fn line_count(&self) -> usize {
		self.rope.len_lines()
	}

	/// Converts an encoded offset to a character index, clamping to the document end.
	pub fn offset_to_char(&self, offset: usize, encoding: OffsetEncoding) -> CharIdx {
		match encoding {
			OffsetEncoding::Utf8 => self.rope.byte_to_char(offset.min(self.rope.len_bytes())),
			OffsetEncoding::Utf16 => self.rope.utf16_cu_to_char(offset.min(self.rope.len_utf16_cu())),
			OffsetEncoding::Utf32 => offset.min(self.rope.len_chars()),
		}
	}

	/// Converts a character index to a line/column position.
	///
	/// The column is measured in `encoding` units from the start of the line.
	pub fn char_to_position(&self, char_idx: CharIdx, encoding: OffsetEncoding) -> Position {
		let char_idx = char_idx.min(self.rope.len_chars());
		let line = self.rope.char_to_line(char_idx);
		let line_start = self.rope.line_to_char(line);
		let column = match encoding {
			OffsetEncoding::Utf8 => self.rope.char_to_byte(char_idx) - self.rope.char_to_byte(line_start),
			OffsetEncoding::Utf16 => self.rope.char_to_utf16_cu(char_idx) - self.rope.char_to_utf16_cu(line_start),
			OffsetEncoding::Utf32 => char_idx - line_start,
		};
		Position::new(line, column)
	}

	/// Converts an encoded offset to a line/column position.
	pub fn offset_to_position(&self, offset: usize, encoding: OffsetEncoding) -> Position {
		self.char_to_position(self.offset_to_char(offset, encoding), encoding)
	}

	/// Converts an `offset`/`length` span to a range.
	///
	/// Both ends clamp independently, so a span that starts past the end of the
	/// document becomes a zero-width range at the end.
	pub fn span_to_range(&self, offset: usize, length: usize, encoding: OffsetEncoding) -> TextRange {
		let start = self.offset_to_position(offset, encoding);
		let end = self.offset_to_position(offset.saturating_add(length), encoding);
		TextRange::new(start, end)
	}

	/// Returns the position just past the last character.
	pub fn end_position(&self, encoding: OffsetEncoding) -> Position {
		self.char_to_position(self.rope.len_chars(), encoding)
	}

	/// Returns the range covering the whole document.
	pub fn full_range(&self, encoding: OffsetEncoding) -> TextRange {
		TextRange::new(Position::default(), self.end_position(encoding))
	}

	/// Returns the text covered by an `offset`/`length` span, clamped to the document.
	pub fn slice(&self, offset: usize, length: usize, encoding: OffsetEncoding) -> RopeSlice<'_> {
		let start = self.offset_to_char(offset, encoding);
		let end = self.offset_to_char(offset.saturating_add(length), encoding);
		self.rope.slice(start..end)
	}
}

impl From<&str> for DocumentText {
	fn from(text: &str) -> Self {
		Self::new(Rope::from_str(text))
	}
}

impl From<String> for DocumentText {
	fn from(text: String) -> Self {
		Self::new(Rope::from(text))
	}
}

impl From<Rope> for DocumentText {
	fn from(rope: Rope) -> Self {
		Self::new(rope)
	}
}

#[cfg(test)]
mod tests;

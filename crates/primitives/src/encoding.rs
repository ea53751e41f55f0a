use std::fmt;
use std::str::FromStr;

/// Unit in which an analysis server measures source offsets.
///
/// Most analysis servers (and LSP by default) count UTF-16 code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OffsetEncoding {
	/// UTF-8 byte offsets.
	Utf8,
	/// UTF-16 code unit offsets.
	#[default]
	Utf16,
	/// UTF-32 / Unicode scalar value offsets.
	Utf32,
}

impl OffsetEncoding {
	/// Returns the canonical name used in configuration files.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Utf8 => "utf-8",
			Self::Utf16 => "utf-16",
			Self::Utf32 => "utf-32",
		}
	}
}

impl fmt::Display for OffsetEncoding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error returned when an encoding name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEncoding(pub String);

impl fmt::Display for UnknownEncoding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "unknown offset encoding '{}' (expected utf-8, utf-16 or utf-32)", self.0)
	}
}

impl std::error::Error for UnknownEncoding {}

impl FromStr for OffsetEncoding {
	type Err = UnknownEncoding;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"utf-8" | "utf8" => Ok(Self::Utf8),
			"utf-16" | "utf16" => Ok(Self::Utf16),
			"utf-32" | "utf32" => Ok(Self::Utf32),
			_ => Err(UnknownEncoding(s.to_string())),
		}
	}
}

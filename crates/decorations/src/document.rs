//! Document identity.

use std::fmt;
use std::path::{Path, PathBuf};

/// Identity of a document, by resource path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentId(PathBuf);

impl DocumentId {
	/// Creates an identifier from a path.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self(path.into())
	}

	/// Returns the resource path.
	pub fn path(&self) -> &Path {
		&self.0
	}

	/// Returns the file extension, if any.
	pub fn extension(&self) -> Option<&str> {
		self.0.extension().and_then(|ext| ext.to_str())
	}
}

impl fmt::Display for DocumentId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.display().fmt(f)
	}
}

impl From<PathBuf> for DocumentId {
	fn from(path: PathBuf) -> Self {
		Self(path)
	}
}

impl From<&Path> for DocumentId {
	fn from(path: &Path) -> Self {
		Self(path.to_path_buf())
	}
}

impl From<&str> for DocumentId {
	fn from(path: &str) -> Self {
		Self(PathBuf::from(path))
	}
}

/// The focused document as reported by the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDocument {
	/// Resource identity.
	pub id: DocumentId,
	/// Editor language identifier (e.g. "dart"), if known.
	pub language_id: Option<String>,
}

impl ActiveDocument {
	/// Creates an active document.
	pub fn new(id: impl Into<DocumentId>, language_id: Option<String>) -> Self {
		Self {
			id: id.into(),
			language_id,
		}
	}
}

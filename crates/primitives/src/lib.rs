//! Core text coordinate types shared by the outline and decoration crates.

/// Offset units reported by analysis servers.
pub mod encoding;
/// Line/column positions and ranges.
pub mod position;
/// Rope-backed document snapshots with clamped offset conversion.
pub mod text;

pub use encoding::OffsetEncoding;
pub use position::{Position, TextRange};
pub use ropey::{Rope, RopeSlice};
pub use text::{CharIdx, DocumentText};

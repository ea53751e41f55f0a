//! Collaborators supplied by the host editor.
//!
//! Lookups are `Send + Sync` so a controller, and the future returned by
//! [`DecorationController::run`](crate::DecorationController::run), can move
//! to any runtime thread.

use std::sync::Arc;

use limn_outline::{IconCategory, OutlineNode};
use limn_primitives::{DocumentText, TextRange};

use crate::{ActiveDocument, DocumentId};

/// Latest outline known for each document.
pub trait OutlineSource: Send + Sync {
	/// Returns the cached outline for `document`, if the analysis server sent one.
	fn cached_outline(&self, document: &DocumentId) -> Option<Arc<OutlineNode>>;
}

/// Current text of open documents.
pub trait DocumentSource: Send + Sync {
	/// Returns a snapshot of `document`'s text, or `None` if it is not open.
	fn text(&self, document: &DocumentId) -> Option<DocumentText>;
}

/// Decides which documents get icons at all.
pub trait Eligibility: Send + Sync {
	/// Returns true if the controller should track `document`.
	fn is_eligible(&self, document: &ActiveDocument) -> bool;
}

impl<F> Eligibility for F
where
	F: Fn(&ActiveDocument) -> bool + Send + Sync,
{
	fn is_eligible(&self, document: &ActiveDocument) -> bool {
		self(document)
	}
}

/// Maps icon categories to icon assets.
///
/// The resolver guarantees the returned path is addressable; the controller
/// does not validate it.
pub trait IconAssetResolver: Send + Sync {
	/// Returns the icon path for `category`.
	fn icon_path(&self, category: &IconCategory) -> String;
}

/// Visual style of one gutter icon family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GutterIconStyle {
	/// Category the style was created for.
	pub category: IconCategory,
	/// Resolved icon asset.
	pub icon_path: String,
	/// Size of the icon within the gutter.
	pub size: String,
}

/// The host view layer that draws gutter icons.
pub trait RenderSurface {
	/// Handle to a decoration style created by the surface.
	type Handle;

	/// Creates a decoration handle for an icon style.
	fn create_handle(&mut self, style: &GutterIconStyle) -> Self::Handle;

	/// Replaces the ranges shown for `handle`.
	///
	/// `target` is the document view to draw into; `None` means no document is
	/// tracked and the surface should clear whatever view it last drew into.
	fn apply(&mut self, target: Option<&DocumentId>, handle: &Self::Handle, ranges: &[TextRange]);
}

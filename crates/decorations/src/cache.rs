//! Host-side stores backing the controller's lookups.

use std::collections::HashMap;
use std::sync::Arc;

use limn_outline::{OutlineNode, OutlineNotification};
use limn_primitives::DocumentText;
use parking_lot::RwLock;
use tracing::trace;

use crate::{DecorationEvent, DocumentId, DocumentSource, OutlineSource};

/// Latest outline per document, replaced wholesale on every notification.
#[derive(Debug, Default)]
pub struct OutlineCache {
	outlines: RwLock<HashMap<DocumentId, Arc<OutlineNode>>>,
}

impl OutlineCache {
	/// Creates an empty cache.
	pub fn new() -> Self {
		Self::default()
	}

	/// Stores a pushed outline and returns the event to forward to the controller.
	pub fn update(&self, notification: OutlineNotification) -> DecorationEvent {
		let document = DocumentId::from(notification.file);
		let outline = Arc::new(notification.outline);
		trace!(document = %document, children = outline.children.len(), "outline cached");
		self.outlines.write().insert(document.clone(), outline.clone());
		DecorationEvent::OutlineUpdated { document, outline }
	}

	/// Drops the outline for a closed document. Returns true if one was cached.
	pub fn remove(&self, document: &DocumentId) -> bool {
		self.outlines.write().remove(document).is_some()
	}

	/// Number of documents with a cached outline.
	pub fn len(&self) -> usize {
		self.outlines.read().len()
	}

	/// Returns true if nothing is cached.
	pub fn is_empty(&self) -> bool {
		self.outlines.read().is_empty()
	}
}

impl OutlineSource for OutlineCache {
	fn cached_outline(&self, document: &DocumentId) -> Option<Arc<OutlineNode>> {
		self.outlines.read().get(document).cloned()
	}
}

/// Text of open documents.
#[derive(Debug, Default)]
pub struct DocumentStore {
	texts: RwLock<HashMap<DocumentId, DocumentText>>,
}

impl DocumentStore {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records the current text of a document, replacing any previous snapshot.
	pub fn set(&self, document: DocumentId, text: impl Into<DocumentText>) {
		self.texts.write().insert(document, text.into());
	}

	/// Forgets a closed document.
	pub fn close(&self, document: &DocumentId) -> bool {
		self.texts.write().remove(document).is_some()
	}
}

impl DocumentSource for DocumentStore {
	fn text(&self, document: &DocumentId) -> Option<DocumentText> {
		self.texts.read().get(document).cloned()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn update_replaces_snapshot() {
		let cache = OutlineCache::new();
		let id = DocumentId::from("/app/lib/main.dart");

		cache.update(OutlineNotification {
			file: "/app/lib/main.dart".into(),
			outline: OutlineNode::root(10, vec![OutlineNode::new("Widget", 0, 4)]),
		});
		let event = cache.update(OutlineNotification {
			file: "/app/lib/main.dart".into(),
			outline: OutlineNode::root(10, Vec::new()),
		});

		assert_eq!(cache.len(), 1);
		let cached = cache.cached_outline(&id).unwrap();
		assert!(cached.children.is_empty());
		match event {
			DecorationEvent::OutlineUpdated { document, outline } => {
				assert_eq!(document, id);
				assert!(Arc::ptr_eq(&outline, &cached));
			}
			other => panic!("unexpected event {other:?}"),
		}
	}

	#[test]
	fn lookup_is_per_document() {
		let cache = OutlineCache::new();
		cache.update(OutlineNotification {
			file: "/a.dart".into(),
			outline: OutlineNode::root(0, Vec::new()),
		});

		assert!(cache.cached_outline(&"/b.dart".into()).is_none());
		assert!(cache.remove(&"/a.dart".into()));
		assert!(cache.is_empty());
	}

	#[test]
	fn document_store_round_trip() {
		let store = DocumentStore::new();
		let id = DocumentId::from("/a.dart");
		store.set(id.clone(), "void main() {}\n");

		assert_eq!(store.text(&id).map(|t| t.line_count()), Some(2));
		assert!(store.close(&id));
		assert!(store.text(&id).is_none());
	}
}

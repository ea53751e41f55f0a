//! Decoration controller state machine and event loop.

use std::sync::Arc;

use indexmap::IndexMap;
use limn_config::DecorationsConfig;
use limn_outline::{CategorizedRanges, IconCategory, IconRangeComputer, OutlineNode};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::{
	ActiveDocument, DocumentId, DocumentSource, Eligibility, GutterIconStyle, IconAssetResolver, LanguageEligibility, OutlineSource,
	PathFormatResolver, RenderSurface,
};


/// Sender half of the controller mailbox.
pub type DecorationEventSender = mpsc::UnboundedSender<DecorationEvent>;

/// Receiver half of the controller mailbox.
pub type DecorationEventReceiver = mpsc::UnboundedReceiver<DecorationEvent>;

/// Inputs driving the controller.
#[derive(Debug, Clone)]
pub enum DecorationEvent {
	/// Editor focus moved to another document, or to none.
	ActiveDocumentChanged(Option<ActiveDocument>),
	/// The analysis server pushed a new outline for a document.
	OutlineUpdated {
		/// Document the outline belongs to.
		document: DocumentId,
		/// Complete outline snapshot.
		outline: Arc<OutlineNode>,
	},
}

/// Which document the controller renders into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TrackingState {
	/// No eligible document is focused.
	#[default]
	Idle,
	/// Rendering into this document.
	Tracking(ActiveDocument),
}

impl TrackingState {
	/// Returns the tracked document, if any.
	pub fn document(&self) -> Option<&ActiveDocument> {
		match self {
			Self::Idle => None,
			Self::Tracking(doc) => Some(doc),
		}
	}
}

/// Keeps gutter icons of the focused document in sync with its outline.
///
/// Handles are created lazily per [`IconCategory`] and never removed; every
/// render applies the computed ranges (or none) to every handle ever created so
/// categories that stopped producing hits are cleared.
pub struct DecorationController<S: RenderSurface> {
	surface: S,
	computer: IconRangeComputer,
	outlines: Arc<dyn OutlineSource>,
	documents: Arc<dyn DocumentSource>,
	eligibility: Box<dyn Eligibility>,
	resolver: Box<dyn IconAssetResolver>,
	gutter_size: String,
	handles: IndexMap<IconCategory, S::Handle>,
	state: TrackingState,
	disposed: bool,
}

impl<S: RenderSurface> DecorationController<S> {
	/// Creates an idle controller configured from `config`.
	pub fn new(surface: S, outlines: Arc<dyn OutlineSource>, documents: Arc<dyn DocumentSource>, config: &DecorationsConfig) -> Self {
		Self {
			surface,
			computer: IconRangeComputer::new(config.rules.clone(), config.encoding),
			outlines,
			documents,
			eligibility: Box::new(LanguageEligibility::from_config(&config.eligible)),
			resolver: Box::new(PathFormatResolver::from_config(&config.icons)),
			gutter_size: config.icons.gutter_size.clone(),
			handles: IndexMap::new(),
			state: TrackingState::Idle,
			disposed: false,
		}
	}

	/// Creates a controller and renders the document focused at startup.
	pub fn attach(
		surface: S,
		outlines: Arc<dyn OutlineSource>,
		documents: Arc<dyn DocumentSource>,
		config: &DecorationsConfig,
		focused: Option<ActiveDocument>,
	) -> Self {
		let mut controller = Self::new(surface, outlines, documents, config);
		controller.on_active_document_changed(focused);
		controller
	}

	/// Replaces the eligibility predicate.
	pub fn with_eligibility(mut self, eligibility: impl Eligibility + 'static) -> Self {
		self.eligibility = Box::new(eligibility);
		self
	}

	/// Replaces the icon asset resolver.
	pub fn with_resolver(mut self, resolver: impl IconAssetResolver + 'static) -> Self {
		self.resolver = Box::new(resolver);
		self
	}

	/// Handles a focus change.
	pub fn on_active_document_changed(&mut self, document: Option<ActiveDocument>) {
		if self.disposed {
			return;
		}

		self.state = match document {
			Some(doc) if self.eligibility.is_eligible(&doc) => TrackingState::Tracking(doc),
			Some(doc) => {
				trace!(document = %doc.id, "document not eligible for outline icons");
				TrackingState::Idle
			}
			None => TrackingState::Idle,
		};
		debug!(tracking = ?self.state.document().map(|doc| &doc.id), "active document changed");

		let outline = self.state.document().and_then(|doc| self.outlines.cached_outline(&doc.id));
		self.render(outline.as_deref());
	}

	/// Handles a pushed outline. Outlines for anything but the tracked document are ignored.
	pub fn on_outline_updated(&mut self, document: &DocumentId, outline: &OutlineNode) {
		if self.disposed {
			return;
		}

		match self.state.document() {
			Some(tracked) if tracked.id == *document => {}
			_ => {
				trace!(document = %document, "ignoring outline for untracked document");
				return;
			}
		}

		self.render(Some(outline));
	}

	/// Dispatches a mailbox event.
	pub fn handle(&mut self, event: DecorationEvent) {
		match event {
			DecorationEvent::ActiveDocumentChanged(document) => self.on_active_document_changed(document),
			DecorationEvent::OutlineUpdated { document, outline } => self.on_outline_updated(&document, &outline),
		}
	}

	/// Drains `events` in order until the channel closes or `cancel` fires, then disposes.
	pub async fn run(mut self, mut events: DecorationEventReceiver, cancel: CancellationToken) -> Self {
		loop {
			let event = tokio::select! {
				biased;
				_ = cancel.cancelled() => break,
				event = events.recv() => match event {
					Some(event) => event,
					None => break,
				},
			};
			self.handle(event);
		}

		self.dispose();
		self
	}

	/// Releases the tracked document. Every handler is a no-op afterwards.
	pub fn dispose(&mut self) {
		if self.disposed {
			return;
		}
		debug!(handles = self.handles.len(), "decoration controller disposed");
		self.state = TrackingState::Idle;
		self.disposed = true;
	}

	/// Returns true once [`dispose`](Self::dispose) ran.
	pub fn is_disposed(&self) -> bool {
		self.disposed
	}

	/// Current tracking state.
	pub fn state(&self) -> &TrackingState {
		&self.state
	}

	/// Categories with a handle, in creation order.
	pub fn categories(&self) -> impl Iterator<Item = &IconCategory> {
		self.handles.keys()
	}

	/// Returns the handle created for `category`.
	pub fn handle_for(&self, category: &str) -> Option<&S::Handle> {
		self.handles.get(category)
	}

	/// Returns the render surface.
	pub fn surface(&self) -> &S {
		&self.surface
	}

	/// Returns the render surface mutably.
	pub fn surface_mut(&mut self) -> &mut S {
		&mut self.surface
	}

	fn render(&mut self, outline: Option<&OutlineNode>) {
		let results = match (self.state.document(), outline) {
			(Some(doc), Some(outline)) => match self.documents.text(&doc.id) {
				Some(text) => self.computer.compute(&text, outline),
				None => {
					trace!(document = %doc.id, "tracked document has no text");
					CategorizedRanges::new()
				}
			},
			_ => CategorizedRanges::new(),
		};

		for category in results.categories() {
			if self.handles.contains_key(category) {
				continue;
			}
			let style = GutterIconStyle {
				category: category.clone(),
				icon_path: self.resolver.icon_path(category),
				size: self.gutter_size.clone(),
			};
			debug!(category = %category, icon = %style.icon_path, "creating gutter icon handle");
			let handle = self.surface.create_handle(&style);
			self.handles.insert(category.clone(), handle);
		}

		let target = self.state.document().map(|doc| &doc.id);
		for (category, handle) in &self.handles {
			self.surface.apply(target, handle, results.ranges_for(category.as_str()));
		}
		trace!(categories = results.len(), ranges = results.range_count(), handles = self.handles.len(), "decorations applied");
	}
}

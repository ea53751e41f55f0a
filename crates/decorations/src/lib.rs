//! Gutter icon decorations for the focused document.
//!
//! [`DecorationController`] keeps the icons shown in the active document's
//! gutter in line with the latest outline the analysis server pushed for that
//! exact document, and clears them when focus moves elsewhere. Everything the
//! controller needs from the host editor is expressed by the traits in
//! [`host`].
//!
//! # Wiring
//!
//! ```ignore
//! let outlines = Arc::new(OutlineCache::new());
//! let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
//! let controller = DecorationController::attach(surface, outlines.clone(), documents, &config, editor.focused());
//! // outline notifications: tx.send(outlines.update(notification))
//! // focus changes:         tx.send(DecorationEvent::ActiveDocumentChanged(doc))
//! controller.run(rx, cancel).await;
//! ```

pub mod cache;
pub mod controller;
pub mod document;
pub mod eligibility;
pub mod host;
pub mod resolver;

pub use cache::{DocumentStore, OutlineCache};
pub use controller::{DecorationController, DecorationEvent, DecorationEventReceiver, DecorationEventSender, TrackingState};
pub use document::{ActiveDocument, DocumentId};
pub use eligibility::LanguageEligibility;
pub use host::{DocumentSource, Eligibility, GutterIconStyle, IconAssetResolver, OutlineSource, RenderSurface};
pub use resolver::PathFormatResolver;

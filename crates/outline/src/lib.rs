//! Outline trees and gutter icon range computation.
//!
//! An analysis server describes the structure of a file as an outline: a tree
//! of nodes carrying a kind, a source span and some qualifiers. This crate maps
//! such a tree, together with the document text it was computed for, to the
//! ranges where each icon category should render.
//!
//! * [`node`]: the outline model and push-notification decoding
//! * [`rules`]: which nodes qualify for an icon and under which category
//! * [`category`]: icon categories and the ordered category to ranges mapping
//! * [`computer`]: the tree walk producing [`CategorizedRanges`]

pub mod category;
pub mod computer;
mod error;
pub mod node;
pub mod rules;

pub use category::{CategorizedRanges, IconCategory};
pub use computer::IconRangeComputer;
pub use error::{OutlineError, Result};
pub use node::{Descendants, OutlineAttribute, OutlineElement, OutlineNode, OutlineNotification};
pub use rules::{CategorySource, IconRule, IconRules, NodeMatcher};

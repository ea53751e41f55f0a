//! Outline to icon range computation.

use limn_primitives::{DocumentText, OffsetEncoding};
use tracing::trace;

use crate::{CategorizedRanges, IconRules, OutlineNode};

/// Maps an outline and the text it describes to icon ranges.
///
/// Stateless between calls: the same `(document, outline)` pair always yields
/// the same mapping.
#[derive(Debug, Clone, Default)]
pub struct IconRangeComputer {
	rules: IconRules,
	encoding: OffsetEncoding,
}

impl IconRangeComputer {
	/// Creates a computer for outlines whose offsets are measured in `encoding`.
	pub fn new(rules: IconRules, encoding: OffsetEncoding) -> Self {
		Self { rules, encoding }
	}

	/// Returns the categorization rules.
	pub fn rules(&self) -> &IconRules {
		&self.rules
	}

	/// Returns the offset encoding of incoming outlines.
	pub fn encoding(&self) -> OffsetEncoding {
		self.encoding
	}

	/// Computes the ranges for every icon category in `outline`.
	///
	/// The root spans the whole file and is never categorized. Descendants are
	/// visited depth-first, parents before children and siblings in
	/// declaration order, which is also the order of each category's ranges.
	/// Offsets outside `document` are clamped to it.
	pub fn compute(&self, document: &DocumentText, outline: &OutlineNode) -> CategorizedRanges {
		let mut result = CategorizedRanges::new();
		let mut visited = 0usize;

		for node in outline.descendants() {
			visited += 1;
			let Some(category) = self.rules.categorize(node, document, self.encoding) else {
				continue;
			};
			let range = document.span_to_range(node.offset, node.length, self.encoding);
			result.push(category, range);
		}

		trace!(nodes = visited, categories = result.len(), ranges = result.range_count(), "computed outline icon ranges");
		result
	}
}

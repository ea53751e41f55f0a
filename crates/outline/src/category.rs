//! Icon categories and their ranges.

use std::borrow::Borrow;
use std::fmt;

use indexmap::IndexMap;
use indexmap::map::Iter;
use limn_primitives::TextRange;

/// Name of an icon family, e.g. `widget` or a material icon name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IconCategory(String);

impl IconCategory {
	/// Creates a category from its name.
	pub fn new(name: impl Into<String>) -> Self {
		Self(name.into())
	}

	/// Returns the category name.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for IconCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl Borrow<str> for IconCategory {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl From<&str> for IconCategory {
	fn from(name: &str) -> Self {
		Self::new(name)
	}
}

impl From<String> for IconCategory {
	fn from(name: String) -> Self {
		Self(name)
	}
}

/// Ranges grouped by icon category.
///
/// Categories keep the order in which they were first seen and ranges keep
/// insertion order, so the result of a tree walk reads in traversal order.
/// Only categories with at least one range are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorizedRanges {
	inner: IndexMap<IconCategory, Vec<TextRange>>,
}

impl CategorizedRanges {
	/// Creates an empty mapping.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a range to a category.
	pub fn push(&mut self, category: IconCategory, range: TextRange) {
		self.inner.entry(category).or_default().push(range);
	}

	/// Returns the ranges of a category, if it had any hits.
	pub fn get(&self, category: &str) -> Option<&[TextRange]> {
		self.inner.get(category).map(Vec::as_slice)
	}

	/// Returns the ranges of a category, or an empty slice.
	pub fn ranges_for(&self, category: &str) -> &[TextRange] {
		self.get(category).unwrap_or(&[])
	}

	/// Returns true if `category` had at least one hit.
	pub fn contains(&self, category: &str) -> bool {
		self.inner.contains_key(category)
	}

	/// Iterates over categories in first-seen order.
	pub fn categories(&self) -> impl Iterator<Item = &IconCategory> {
		self.inner.keys()
	}

	/// Iterates over `(category, ranges)` pairs in first-seen order.
	pub fn iter(&self) -> Iter<'_, IconCategory, Vec<TextRange>> {
		self.inner.iter()
	}

	/// Returns the number of categories.
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Returns true if no category had a hit.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// Returns the total number of ranges across all categories.
	pub fn range_count(&self) -> usize {
		self.inner.values().map(Vec::len).sum()
	}
}

impl<'a> IntoIterator for &'a CategorizedRanges {
	type Item = (&'a IconCategory, &'a Vec<TextRange>);
	type IntoIter = Iter<'a, IconCategory, Vec<TextRange>>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

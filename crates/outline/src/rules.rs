//! Qualification and categorization of outline nodes.
//!
//! Rules are tried in order and the first one that matches decides the
//! category. A node no rule matches gets no icon, but its children are still
//! visited by the computer.

use std::borrow::Cow;

use heck::ToSnakeCase;
use limn_primitives::{DocumentText, OffsetEncoding};
use regex::Regex;

use crate::{IconCategory, OutlineNode};

/// Conjunctive predicate on a node's kind and qualifiers.
///
/// Unset fields match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeMatcher {
	/// Required node kind.
	pub kind: Option<String>,
	/// Required instantiated class name.
	pub class_name: Option<String>,
	/// Required declared element kind.
	pub element_kind: Option<String>,
	/// Required declared element name.
	pub element_name: Option<String>,
}

impl NodeMatcher {
	/// Matches nodes of the given kind.
	pub fn kind(kind: impl Into<String>) -> Self {
		Self {
			kind: Some(kind.into()),
			..Self::default()
		}
	}

	/// Additionally requires the instantiated class name.
	pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
		self.class_name = Some(class_name.into());
		self
	}

	/// Additionally requires the declared element kind and name.
	pub fn with_element(mut self, kind: impl Into<String>, name: impl Into<String>) -> Self {
		self.element_kind = Some(kind.into());
		self.element_name = Some(name.into());
		self
	}

	/// Returns true if `node` satisfies every set field.
	pub fn matches(&self, node: &OutlineNode) -> bool {
		fn check(expected: &Option<String>, actual: Option<&str>) -> bool {
			expected.as_deref().is_none_or(|expected| actual == Some(expected))
		}

		let element = node.element.as_ref();
		check(&self.kind, Some(node.kind.as_str()))
			&& check(&self.class_name, node.class_name.as_deref())
			&& check(&self.element_kind, element.map(|e| e.kind.as_str()))
			&& check(&self.element_name, element.map(|e| e.name.as_str()))
	}
}

/// Where a matching rule takes its category from.
#[derive(Debug, Clone)]
pub enum CategorySource {
	/// A fixed category.
	Fixed(IconCategory),
	/// The snake_case form of the node kind (`BuildMethod` becomes `build_method`).
	FromKind,
	/// Capture group 1 of the first match in the node's source text.
	///
	/// The rule does not match when the pattern finds nothing.
	Capture(Regex),
}

/// One categorization rule.
#[derive(Debug, Clone)]
pub struct IconRule {
	/// Which nodes the rule applies to.
	pub matcher: NodeMatcher,
	/// How the category is derived.
	pub source: CategorySource,
}

impl IconRule {
	/// Creates a rule.
	pub fn new(matcher: NodeMatcher, source: CategorySource) -> Self {
		Self { matcher, source }
	}

	/// Returns the category for `node`, or `None` if the rule does not apply.
	pub fn categorize(&self, node: &OutlineNode, text: &DocumentText, encoding: OffsetEncoding) -> Option<IconCategory> {
		if !self.matcher.matches(node) {
			return None;
		}
		match &self.source {
			CategorySource::Fixed(category) => Some(category.clone()),
			CategorySource::FromKind => Some(IconCategory::new(node.kind.to_snake_case())),
			CategorySource::Capture(pattern) => {
				let source: Cow<'_, str> = text.slice(node.offset, node.length, encoding).into();
				let name = pattern.captures(&source)?.get(1)?.as_str();
				(!name.is_empty()).then(|| IconCategory::new(name))
			}
		}
	}
}

/// Ordered rule list; the first matching rule wins.
#[derive(Debug, Clone)]
pub struct IconRules {
	rules: Vec<IconRule>,
}

impl IconRules {
	/// Creates a rule list.
	pub fn new(rules: Vec<IconRule>) -> Self {
		Self { rules }
	}

	/// Rules for Flutter outlines.
	///
	/// * `Icon(Icons.name)` instances render the material icon `name`
	/// * `build` methods render `build_method`
	/// * any other instance creation renders `widget`
	/// * the generic `Widget` and `BuildMethod` kinds render their snake_case kind
	pub fn flutter() -> Self {
		Self::new(vec![
			IconRule::new(NodeMatcher::kind("NEW_INSTANCE").with_class_name("Icon"), CategorySource::Capture(material_icon_pattern())),
			IconRule::new(NodeMatcher::kind("DART_ELEMENT").with_element("METHOD", "build"), CategorySource::Fixed("build_method".into())),
			IconRule::new(NodeMatcher::kind("NEW_INSTANCE"), CategorySource::Fixed("widget".into())),
			IconRule::new(NodeMatcher::kind("Widget"), CategorySource::FromKind),
			IconRule::new(NodeMatcher::kind("BuildMethod"), CategorySource::FromKind),
		])
	}

	/// Returns the rules in evaluation order.
	pub fn rules(&self) -> &[IconRule] {
		&self.rules
	}

	/// Returns true if there are no rules.
	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}

	/// Returns the category of the first rule matching `node`.
	pub fn categorize(&self, node: &OutlineNode, text: &DocumentText, encoding: OffsetEncoding) -> Option<IconCategory> {
		self.rules.iter().find_map(|rule| rule.categorize(node, text, encoding))
	}
}

impl Default for IconRules {
	fn default() -> Self {
		Self::flutter()
	}
}

/// Pattern for references into Flutter's material `Icons` class.
pub fn material_icon_pattern() -> Regex {
	Regex::new(r"\bIcons\.([A-Za-z0-9_]+)").expect("material icon pattern is valid")
}

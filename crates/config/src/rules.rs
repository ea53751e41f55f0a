//! `rule` node parsing.

use kdl::KdlNode;
use limn_outline::{CategorySource, IconRule, NodeMatcher};
use regex::Regex;

use crate::error::{ConfigError, Result};
use crate::kdl_util::{as_string, children, first_string, unknown};

const MATCHER_FIELDS: &[&str] = &["kind", "class-name", "element-kind", "element-name"];

/// Parses a `rule` node into an icon rule.
///
/// ```kdl
/// rule "build_method" {
///     kind DART_ELEMENT
///     element-kind METHOD
///     element-name build
/// }
/// rule capture=#"\bIcons\.(\w+)"# { kind NEW_INSTANCE; class-name Icon }
/// rule from-kind=#true { kind Widget }
/// ```
pub fn parse_rule(node: &KdlNode) -> Result<IconRule> {
	let source = parse_source(node)?;
	let mut matcher = NodeMatcher::default();

	for child in children(node) {
		let name = child.name().value();
		let value = first_string(child)?;
		let slot = match name {
			"kind" => &mut matcher.kind,
			"class-name" => &mut matcher.class_name,
			"element-kind" => &mut matcher.element_kind,
			"element-name" => &mut matcher.element_name,
			_ => return Err(unknown("rule", name, MATCHER_FIELDS)),
		};
		*slot = Some(value);
	}

	Ok(IconRule::new(matcher, source))
}

fn parse_source(node: &KdlNode) -> Result<CategorySource> {
	let fixed = node.get(0).map(|v| as_string(v, "rule")).transpose()?;
	let capture = node.get("capture").map(|v| as_string(v, "capture")).transpose()?;
	let from_kind = match node.get("from-kind") {
		Some(value) => value.as_bool().ok_or(ConfigError::TypeMismatch {
			field: "from-kind".to_string(),
			expected: "boolean",
		})?,
		None => false,
	};

	match (fixed, capture, from_kind) {
		(Some(name), None, false) => Ok(CategorySource::Fixed(name.into())),
		(None, Some(pattern), false) => compile_capture(pattern).map(CategorySource::Capture),
		(None, None, true) => Ok(CategorySource::FromKind),
		_ => Err(ConfigError::RuleCategory),
	}
}

fn compile_capture(pattern: String) -> Result<Regex> {
	let regex = match Regex::new(&pattern) {
		Ok(regex) => regex,
		Err(error) => return Err(ConfigError::InvalidPattern { pattern, error }),
	};
	if regex.captures_len() < 2 {
		return Err(ConfigError::PatternWithoutGroup(pattern));
	}
	Ok(regex)
}

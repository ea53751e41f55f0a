//! KDL parsing utilities shared across config sections.

use kdl::{KdlDocument, KdlNode, KdlValue};

use crate::error::{ConfigError, Result};

/// Reads a string value, naming `field` in the error.
pub fn as_string(value: &KdlValue, field: &str) -> Result<String> {
	value.as_string().map(String::from).ok_or_else(|| ConfigError::TypeMismatch {
		field: field.to_string(),
		expected: "string",
	})
}

/// Returns the first positional argument of a node as a string.
pub fn first_string(node: &KdlNode) -> Result<String> {
	let name = node.name().value();
	let value = node.get(0).ok_or_else(|| ConfigError::MissingValue(name.to_string()))?;
	as_string(value, name)
}

/// Returns all positional string arguments of a node.
pub fn string_args(node: &KdlNode) -> Result<Vec<String>> {
	let name = node.name().value();
	node.entries()
		.iter()
		.filter(|e| e.name().is_none())
		.map(|e| as_string(e.value(), name))
		.collect()
}

/// Returns the children of a node, or an empty document.
pub fn children(node: &KdlNode) -> impl Iterator<Item = &KdlNode> {
	node.children().map(KdlDocument::nodes).unwrap_or_default().iter()
}

/// Builds an unknown-entry error with a fuzzy suggestion from `known`.
pub fn unknown(scope: &'static str, name: &str, known: &[&str]) -> ConfigError {
	let suggestion = known
		.iter()
		.min_by_key(|k| strsim::levenshtein(name, k))
		.filter(|k| strsim::levenshtein(name, k) <= 3)
		.map(|k| k.to_string());
	ConfigError::Unknown {
		scope,
		name: name.to_string(),
		suggestion,
	}
}

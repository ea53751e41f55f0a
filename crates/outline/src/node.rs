//! Outline model as pushed by the analysis server.

use std::path::PathBuf;

use serde::Deserialize;

use crate::Result;

/// One syntactic element of an outline.
///
/// A node's children lie within its own span. The root spans the whole file.
/// Offsets are measured in the analysis server's
/// [`OffsetEncoding`](limn_primitives::OffsetEncoding).
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineNode {
	/// Element kind, e.g. `NEW_INSTANCE` or `DART_ELEMENT`.
	pub kind: String,
	/// Start offset of the node.
	pub offset: usize,
	/// Length of the node.
	pub length: usize,
	/// Start offset of the code, excluding leading comments.
	#[serde(default)]
	pub code_offset: Option<usize>,
	/// Length of the code, excluding leading comments.
	#[serde(default)]
	pub code_length: Option<usize>,
	/// Display label.
	#[serde(default)]
	pub label: Option<String>,
	/// Class being instantiated, for instance-creation nodes.
	#[serde(default)]
	pub class_name: Option<String>,
	/// Variable name, for variable references.
	#[serde(default)]
	pub variable_name: Option<String>,
	/// Named attributes (constructor arguments and the like).
	#[serde(default)]
	pub attributes: Vec<OutlineAttribute>,
	/// Declared element this node represents, if any.
	#[serde(default, alias = "dartElement")]
	pub element: Option<OutlineElement>,
	/// Child nodes in declaration order.
	#[serde(default)]
	pub children: Vec<OutlineNode>,
}

/// A named attribute of an outline node.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct OutlineAttribute {
	/// Attribute name.
	pub name: String,
	/// Source text of the attribute value.
	#[serde(default)]
	pub label: String,
}

/// A declared element (class, method, field, ...).
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct OutlineElement {
	/// Element kind, e.g. `CLASS` or `METHOD`.
	pub kind: String,
	/// Declared name.
	pub name: String,
}

impl OutlineNode {
	/// Creates a leaf node.
	pub fn new(kind: impl Into<String>, offset: usize, length: usize) -> Self {
		Self {
			kind: kind.into(),
			offset,
			length,
			..Self::default()
		}
	}

	/// Creates a root node spanning `length` units with the given children.
	pub fn root(length: usize, children: Vec<OutlineNode>) -> Self {
		Self::new("COMPILATION_UNIT", 0, length).with_children(children)
	}

	/// Replaces the children.
	pub fn with_children(mut self, children: Vec<OutlineNode>) -> Self {
		self.children = children;
		self
	}

	/// Sets the instantiated class name.
	pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
		self.class_name = Some(class_name.into());
		self
	}

	/// Sets the declared element.
	pub fn with_element(mut self, kind: impl Into<String>, name: impl Into<String>) -> Self {
		self.element = Some(OutlineElement {
			kind: kind.into(),
			name: name.into(),
		});
		self
	}

	/// Returns the end offset, saturating on overflow.
	pub fn end(&self) -> usize {
		self.offset.saturating_add(self.length)
	}

	/// Iterates over all nodes below this one in depth-first pre-order.
	///
	/// Parents come before their children and siblings keep declaration order.
	/// The node itself is not yielded.
	pub fn descendants(&self) -> Descendants<'_> {
		Descendants {
			stack: self.children.iter().rev().collect(),
		}
	}
}

/// Depth-first pre-order iterator over an outline subtree.
///
/// Uses an explicit stack so deeply nested widget trees cannot overflow the
/// call stack.
#[derive(Debug)]
pub struct Descendants<'a> {
	stack: Vec<&'a OutlineNode>,
}

impl<'a> Iterator for Descendants<'a> {
	type Item = &'a OutlineNode;

	fn next(&mut self) -> Option<Self::Item> {
		let node = self.stack.pop()?;
		self.stack.extend(node.children.iter().rev());
		Some(node)
	}
}

/// Outline push notification for a single file.
///
/// Each notification supersedes the previous one for the same file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutlineNotification {
	/// Path of the analyzed file.
	pub file: PathBuf,
	/// Root of the outline.
	pub outline: OutlineNode,
}

impl OutlineNotification {
	/// Decodes a notification from its JSON text.
	///
	/// Nesting depth is unbounded; the stack grows on demand while decoding.
	pub fn from_json(input: &str) -> Result<Self> {
		let mut de = serde_json::Deserializer::from_str(input);
		de.disable_recursion_limit();
		let notification = Self::deserialize(serde_stacker::Deserializer::new(&mut de))?;
		de.end()?;
		Ok(notification)
	}

	/// Decodes a notification from already-parsed notification params.
	pub fn from_value(params: serde_json::Value) -> Result<Self> {
		Ok(Self::deserialize(serde_stacker::Deserializer::new(params))?)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn descendants_are_pre_order() {
		let root = OutlineNode::root(
			100,
			vec![
				OutlineNode::new("A", 0, 50).with_children(vec![OutlineNode::new("A1", 5, 5), OutlineNode::new("A2", 20, 5)]),
				OutlineNode::new("B", 60, 10),
			],
		);
		let kinds: Vec<_> = root.descendants().map(|n| n.kind.as_str()).collect();
		assert_eq!(kinds, vec!["A", "A1", "A2", "B"]);
	}

	#[test]
	fn descendants_of_leaf_is_empty() {
		assert_eq!(OutlineNode::root(0, Vec::new()).descendants().count(), 0);
	}

	#[test]
	fn decodes_flutter_notification() {
		let json = r#"{
			"file": "/work/app/lib/main.dart",
			"outline": {
				"kind": "UNIT", "offset": 0, "length": 120,
				"children": [{
					"kind": "DART_ELEMENT", "offset": 10, "length": 90,
					"codeOffset": 12, "codeLength": 88,
					"dartElement": { "kind": "METHOD", "name": "build", "flags": 0 },
					"children": [{
						"kind": "NEW_INSTANCE", "offset": 40, "length": 15,
						"className": "Icon",
						"attributes": [{ "name": "icon", "label": "Icons.add" }]
					}]
				}]
			}
		}"#;
		let notification = OutlineNotification::from_json(json).unwrap();
		assert_eq!(notification.file, PathBuf::from("/work/app/lib/main.dart"));

		let method = &notification.outline.children[0];
		assert_eq!(method.code_offset, Some(12));
		assert_eq!(
			method.element,
			Some(OutlineElement {
				kind: "METHOD".into(),
				name: "build".into(),
			})
		);

		let icon = &method.children[0];
		assert_eq!(icon.class_name.as_deref(), Some("Icon"));
		assert_eq!(icon.attributes[0].label, "Icons.add");
		assert!(icon.children.is_empty());
	}

	#[test]
	fn rejects_malformed_notification() {
		let err = OutlineNotification::from_json(r#"{ "file": "/a.dart", "outline": { "kind": "UNIT", "offset": -1, "length": 0 } }"#).unwrap_err();
		assert!(err.to_string().starts_with("malformed outline notification"));
	}

	fn nested_instances(depth: usize) -> String {
		let open = r#"{"kind":"NEW_INSTANCE","offset":0,"length":1,"children":["#;
		format!(
			r#"{{"file":"/a.dart","outline":{{"kind":"COMPILATION_UNIT","offset":0,"length":1,"children":[{}{}]}}}}"#,
			open.repeat(depth),
			"]}".repeat(depth)
		)
	}

	#[test]
	fn decodes_deeply_nested_outline() {
		for depth in [62, 63, 100, 2_000] {
			let notification = OutlineNotification::from_json(&nested_instances(depth)).unwrap();
			assert_eq!(notification.outline.descendants().count(), depth);
		}
	}

	#[test]
	fn rejects_trailing_input() {
		let json = format!("{} {{}}", nested_instances(1));
		assert!(OutlineNotification::from_json(&json).is_err());
	}

	#[test]
	fn decodes_deeply_nested_value() {
		let mut node = serde_json::json!({ "kind": "NEW_INSTANCE", "offset": 0, "length": 1 });
		for _ in 1..200 {
			node = serde_json::json!({ "kind": "NEW_INSTANCE", "offset": 0, "length": 1, "children": [node] });
		}
		let value = serde_json::json!({
			"file": "/a.dart",
			"outline": { "kind": "COMPILATION_UNIT", "offset": 0, "length": 1, "children": [node] }
		});
		let notification = OutlineNotification::from_value(value).unwrap();
		assert_eq!(notification.outline.descendants().count(), 200);
	}

	#[test]
	fn decodes_from_value() {
		let value = serde_json::json!({
			"file": "/a.dart",
			"outline": { "kind": "UNIT", "offset": 0, "length": 3 }
		});
		let notification = OutlineNotification::from_value(value).unwrap();
		assert_eq!(notification.outline.end(), 3);
	}
}

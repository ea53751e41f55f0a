//! Error types for configuration parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when parsing the decorations configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing KDL syntax.
	#[error("KDL parse error: {0}")]
	Kdl(#[from] kdl::KdlError),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A node is missing its value.
	#[error("missing value for '{0}'")]
	MissingValue(String),

	/// A value has the wrong type.
	#[error("type mismatch for '{field}': expected {expected}")]
	TypeMismatch {
		/// The KDL node or property name.
		field: String,
		/// The expected type name.
		expected: &'static str,
	},

	/// The offset encoding is not one of `utf-8`, `utf-16`, `utf-32`.
	#[error("invalid encoding: {0}")]
	InvalidEncoding(#[from] limn_primitives::encoding::UnknownEncoding),

	/// A capture pattern does not compile.
	#[error("invalid capture pattern '{pattern}': {error}")]
	InvalidPattern {
		/// The pattern as written.
		pattern: String,
		/// The underlying regex error.
		error: regex::Error,
	},

	/// A capture pattern has no group to take the category from.
	#[error("capture pattern '{0}' has no capture group")]
	PatternWithoutGroup(String),

	/// A rule names zero or several category sources.
	#[error("rule must have exactly one of a category name, capture=\"...\" or from-kind=#true")]
	RuleCategory,

	/// An unknown node was found.
	#[error("unknown {scope} entry: {name}{}", suggestion.as_ref().map(|s| format!(" (did you mean '{s}'?)")).unwrap_or_default())]
	Unknown {
		/// Where the node was found (e.g. "rule").
		scope: &'static str,
		/// The unrecognized node name.
		name: String,
		/// A suggested alternative, if one is close enough.
		suggestion: Option<String>,
	},
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

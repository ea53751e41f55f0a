//! Configuration for outline gutter icons.
//!
//! The configuration is a KDL document. Every section is optional and falls
//! back to the built-in Flutter defaults:
//!
//! ```kdl
//! icons {
//!     path-format "media/icons/$1.png"
//!     gutter-size "75%"
//! }
//! encoding "utf-16"
//! eligible {
//!     languages dart
//!     extensions dart
//! }
//! rule "build_method" {
//!     kind DART_ELEMENT
//!     element-kind METHOD
//!     element-name build
//! }
//! rule from-kind=#true { kind Widget; }
//! ```
//!
//! When at least one `rule` is present the rule list replaces the built-in one,
//! keeping the order in which rules are written.

use std::path::Path;

use kdl::{KdlDocument, KdlNode};
use limn_outline::IconRules;
use limn_primitives::OffsetEncoding;
use tracing::debug;

pub mod error;
mod kdl_util;
mod rules;

pub use error::{ConfigError, Result};
pub use rules::parse_rule;

use crate::kdl_util::{children, first_string, string_args, unknown};

/// Default icon path template; `$1` is replaced by the icon category.
pub const DEFAULT_PATH_FORMAT: &str = "media/icons/$1.png";

/// Default gutter icon size.
pub const DEFAULT_GUTTER_SIZE: &str = "75%";

const SECTIONS: &[&str] = &["icons", "encoding", "eligible", "rule"];
const ICON_FIELDS: &[&str] = &["path-format", "gutter-size"];
const ELIGIBLE_FIELDS: &[&str] = &["languages", "extensions"];

/// Icon asset settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconAssetConfig {
	/// Template for icon paths; `$1` is replaced by the category name.
	pub path_format: String,
	/// Size of the icon within the gutter, passed to the renderer as-is.
	pub gutter_size: String,
}

impl Default for IconAssetConfig {
	fn default() -> Self {
		Self {
			path_format: DEFAULT_PATH_FORMAT.to_string(),
			gutter_size: DEFAULT_GUTTER_SIZE.to_string(),
		}
	}
}

/// Which documents get icons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibilityConfig {
	/// Accepted language identifiers.
	pub languages: Vec<String>,
	/// Accepted file extensions, without the leading dot.
	pub extensions: Vec<String>,
}

impl Default for EligibilityConfig {
	fn default() -> Self {
		Self {
			languages: vec!["dart".to_string()],
			extensions: vec!["dart".to_string()],
		}
	}
}

/// Complete decorations configuration.
#[derive(Debug, Clone, Default)]
pub struct DecorationsConfig {
	/// Icon asset settings.
	pub icons: IconAssetConfig,
	/// Unit of the analysis server's offsets.
	pub encoding: OffsetEncoding,
	/// Which documents get icons.
	pub eligible: EligibilityConfig,
	/// Ordered categorization rules.
	pub rules: IconRules,
}

impl DecorationsConfig {
	/// Parses a configuration from KDL text.
	pub fn parse(input: &str) -> Result<Self> {
		let doc: KdlDocument = input.parse()?;
		let mut config = Self::default();
		let mut rules = Vec::new();

		for node in doc.nodes() {
			match node.name().value() {
				"icons" => parse_icons(node, &mut config.icons)?,
				"encoding" => config.encoding = first_string(node)?.parse()?,
				"eligible" => parse_eligible(node, &mut config.eligible)?,
				"rule" => rules.push(parse_rule(node)?),
				name => return Err(unknown("top-level", name, SECTIONS)),
			}
		}

		if !rules.is_empty() {
			config.rules = IconRules::new(rules);
		}
		Ok(config)
	}

	/// Loads a configuration file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let input = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config = Self::parse(&input)?;
		debug!(path = %path.display(), rules = config.rules.rules().len(), encoding = %config.encoding, "loaded decorations config");
		Ok(config)
	}
}

fn parse_icons(node: &KdlNode, icons: &mut IconAssetConfig) -> Result<()> {
	for child in children(node) {
		match child.name().value() {
			"path-format" => icons.path_format = first_string(child)?,
			"gutter-size" => icons.gutter_size = first_string(child)?,
			name => return Err(unknown("icons", name, ICON_FIELDS)),
		}
	}
	Ok(())
}

fn parse_eligible(node: &KdlNode, eligible: &mut EligibilityConfig) -> Result<()> {
	for child in children(node) {
		match child.name().value() {
			"languages" => eligible.languages = string_args(child)?,
			"extensions" => eligible.extensions = string_args(child)?.into_iter().map(|ext| ext.trim_start_matches('.').to_string()).collect(),
			name => return Err(unknown("eligible", name, ELIGIBLE_FIELDS)),
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests;

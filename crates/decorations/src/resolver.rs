use limn_config::IconAssetConfig;
use limn_outline::IconCategory;

use crate::IconAssetResolver;

/// Resolves icon paths from a template where `$1` stands for the category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathFormatResolver {
	format: String,
}

impl PathFormatResolver {
	/// Creates a resolver from a path template.
	pub fn new(format: impl Into<String>) -> Self {
		Self { format: format.into() }
	}

	/// Creates a resolver from the configured icon assets.
	pub fn from_config(icons: &IconAssetConfig) -> Self {
		Self::new(icons.path_format.clone())
	}
}

impl IconAssetResolver for PathFormatResolver {
	fn icon_path(&self, category: &IconCategory) -> String {
		self.format.replace("$1", category.as_str())
	}
}

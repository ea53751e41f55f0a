use limn_config::EligibilityConfig;

use crate::{ActiveDocument, Eligibility};

/// Accepts documents by language identifier or file extension.
///
/// Both comparisons ignore ASCII case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageEligibility {
	languages: Vec<String>,
	extensions: Vec<String>,
}

impl LanguageEligibility {
	/// Creates a predicate from language identifiers and extensions (without dots).
	pub fn new(languages: Vec<String>, extensions: Vec<String>) -> Self {
		Self { languages, extensions }
	}

	/// Creates a predicate from configuration.
	pub fn from_config(config: &EligibilityConfig) -> Self {
		Self::new(config.languages.clone(), config.extensions.clone())
	}
}

impl Eligibility for LanguageEligibility {
	fn is_eligible(&self, document: &ActiveDocument) -> bool {
		let by_language = document.language_id.as_ref().is_some_and(|id| self.languages.iter().any(|l| l.eq_ignore_ascii_case(id)));
		let by_extension = document.id.extension().is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)));
		by_language || by_extension
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn dart() -> LanguageEligibility {
		LanguageEligibility::from_config(&EligibilityConfig::default())
	}

	#[test]
	fn accepts_by_language() {
		assert!(dart().is_eligible(&ActiveDocument::new("/tmp/untitled-1", Some("dart".into()))));
	}

	#[test]
	fn language_match_ignores_case() {
		assert!(dart().is_eligible(&ActiveDocument::new("/tmp/untitled-2", Some("Dart".into()))));
	}

	#[test]
	fn accepts_by_extension() {
		assert!(dart().is_eligible(&ActiveDocument::new("/app/lib/main.DART", None)));
	}

	#[test]
	fn rejects_other_documents() {
		assert!(!dart().is_eligible(&ActiveDocument::new("/app/pubspec.yaml", Some("yaml".into()))));
		assert!(!dart().is_eligible(&ActiveDocument::new("/app/Makefile", None)));
	}
}

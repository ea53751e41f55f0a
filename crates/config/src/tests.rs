use std::io::Write;

use limn_outline::{CategorySource, NodeMatcher};
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn empty_document_is_default() {
	let config = DecorationsConfig::parse("").unwrap();
	assert_eq!(config.icons, IconAssetConfig::default());
	assert_eq!(config.encoding, OffsetEncoding::Utf16);
	assert_eq!(config.eligible, EligibilityConfig::default());
	assert_eq!(config.rules.rules().len(), IconRules::flutter().rules().len());
}

#[test]
fn full_document() {
	let config = DecorationsConfig::parse(
		r#"
		icons {
			path-format "https://icons.example/material/$1@2x.png"
			gutter-size "60%"
		}
		encoding "utf-8"
		eligible {
			languages dart
			extensions ".dart" dart_tool
		}
		rule "build_method" {
			kind DART_ELEMENT
			element-kind METHOD
			element-name build
		}
		rule from-kind=#true { kind Widget; }
		"#,
	)
	.unwrap();

	assert_eq!(config.icons.path_format, "https://icons.example/material/$1@2x.png");
	assert_eq!(config.icons.gutter_size, "60%");
	assert_eq!(config.encoding, OffsetEncoding::Utf8);
	assert_eq!(config.eligible.languages, vec!["dart"]);
	assert_eq!(config.eligible.extensions, vec!["dart", "dart_tool"]);

	let rules = config.rules.rules();
	assert_eq!(rules.len(), 2);
	assert_eq!(rules[0].matcher, NodeMatcher::kind("DART_ELEMENT").with_element("METHOD", "build"));
	assert!(matches!(rules[1].source, CategorySource::FromKind));
}

#[test]
fn partial_icons_keep_defaults() {
	let config = DecorationsConfig::parse(r#"icons { gutter-size "100%"; }"#).unwrap();
	assert_eq!(config.icons.path_format, DEFAULT_PATH_FORMAT);
	assert_eq!(config.icons.gutter_size, "100%");
}

#[test]
fn invalid_encoding() {
	let err = DecorationsConfig::parse(r#"encoding "latin-1""#).unwrap_err();
	assert!(matches!(err, ConfigError::InvalidEncoding(_)));
}

#[test]
fn unknown_section_suggests() {
	let err = DecorationsConfig::parse(r#"rules "widget""#).unwrap_err();
	assert_eq!(err.to_string(), "unknown top-level entry: rules (did you mean 'rule'?)");
}

#[test]
fn kdl_syntax_error() {
	assert!(matches!(DecorationsConfig::parse("icons {"), Err(ConfigError::Kdl(_))));
}

#[test]
fn load_from_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, r#"encoding "utf-32""#).unwrap();
	let config = DecorationsConfig::load(file.path()).unwrap();
	assert_eq!(config.encoding, OffsetEncoding::Utf32);
}

#[test]
fn load_missing_file() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("decorations.kdl");
	let err = DecorationsConfig::load(&path).unwrap_err();
	assert!(matches!(err, ConfigError::Io { path: p, .. } if p == path));
}

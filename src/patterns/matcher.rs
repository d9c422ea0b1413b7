use crate::config::types::{MergedConfig, PatternWithSource};
use crate::uri::LambdaUri;

/// Every configured pattern that covers `candidate`, in cascade order.
pub fn matching_patterns<'a>(
	config: &'a MergedConfig,
	candidate: &'a LambdaUri,
) -> impl Iterator<Item = &'a PatternWithSource> + 'a {
	config.patterns.iter().filter(move |entry| {
		let matched = candidate.matches(&entry.pattern.uri);
		tracing::debug!(
			candidate = %candidate,
			pattern = %entry.pattern.name,
			matched,
			"checked pattern"
		);
		matched
	})
}

/// Find the first configured pattern that covers `candidate`.
pub fn find_matching_pattern<'a>(
	config: &'a MergedConfig,
	candidate: &'a LambdaUri,
) -> Option<&'a PatternWithSource> {
	matching_patterns(config, candidate).next()
}

/// Look up a configured pattern by name. The most specific config wins.
pub fn find_pattern_by_name<'a>(
	config: &'a MergedConfig,
	name: &str,
) -> Option<&'a PatternWithSource> {
	config
		.patterns
		.iter()
		.find(|entry| entry.pattern.name == name)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::types::NamedPattern;
	use std::path::PathBuf;

	fn entry(name: &str, uri: &str, source: &str) -> PatternWithSource {
		PatternWithSource {
			pattern: NamedPattern {
				name: name.to_string(),
				uri: LambdaUri::parse_from_string(uri).unwrap(),
			},
			source: PathBuf::from(source),
		}
	}

	fn config() -> MergedConfig {
		MergedConfig {
			patterns: vec![
				entry("billing-v1", "prj@pt_pt.billing.1", "inner.toml"),
				entry("billing", "prj@pt_pt.billing", "inner.toml"),
				entry("everything", "prj@pt_pt", "outer.toml"),
				entry("billing", "prj@pt_pt.billing.9", "outer.toml"),
			],
			default_region: None,
		}
	}

	#[test]
	fn test_matching_patterns_in_cascade_order() {
		let config = config();
		let candidate = LambdaUri::parse_from_string("prj@pt_pt.billing.1.3").unwrap();

		let names: Vec<_> = matching_patterns(&config, &candidate)
			.map(|e| e.pattern.name.as_str())
			.collect();
		assert_eq!(names, vec!["billing-v1", "billing", "everything"]);
	}

	#[test]
	fn test_find_matching_pattern_first_wins() {
		let config = config();
		let candidate = LambdaUri::parse_from_string("prj@pt_pt.billing.2.0").unwrap();

		let matched = find_matching_pattern(&config, &candidate).unwrap();
		assert_eq!(matched.pattern.name, "billing");
	}

	#[test]
	fn test_no_pattern_for_other_project() {
		let config = config();
		let candidate = LambdaUri::parse_from_string("other@pt_pt.billing.1.0").unwrap();
		assert!(find_matching_pattern(&config, &candidate).is_none());
	}

	#[test]
	fn test_find_pattern_by_name_prefers_most_specific() {
		let config = config();
		let found = find_pattern_by_name(&config, "billing").unwrap();
		assert_eq!(found.source, PathBuf::from("inner.toml"));
		assert!(find_pattern_by_name(&config, "missing").is_none());
	}
}

use crate::config::types::Config;
use crate::error::{FogUriError, Result};
use std::path::Path;

/// Parse a config file from the given path.
pub fn parse_config_file(path: &Path) -> Result<Config> {
	let content = std::fs::read_to_string(path).map_err(|source| FogUriError::ConfigReadError {
		path: path.to_path_buf(),
		source,
	})?;

	parse_config_str(&content, path)
}

/// Parse a config from a string (useful for testing).
pub fn parse_config_str(content: &str, path: &Path) -> Result<Config> {
	let config: Config =
		toml::from_str(content).map_err(|source| FogUriError::ConfigParseError {
			path: path.to_path_buf(),
			source,
		})?;

	config.validate(path)?;

	Ok(config)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::uri::LambdaUri;
	use std::path::PathBuf;

	#[test]
	fn test_parse_empty_config() {
		let path = PathBuf::from("test.toml");
		let config = parse_config_str("", &path).unwrap();

		assert!(!config.root);
		assert!(!config.no_external_lookup);
		assert!(config.default_region.is_none());
		assert!(config.patterns.is_empty());
	}

	#[test]
	fn test_parse_basic_config() {
		let content = r#"
root = true
no-external-lookup = true
default-region = "pt_pt"
"#;
		let path = PathBuf::from("test.toml");
		let config = parse_config_str(content, &path).unwrap();

		assert!(config.root);
		assert!(config.no_external_lookup);
		assert_eq!(config.default_region, Some("pt_pt".to_string()));
	}

	#[test]
	fn test_parse_patterns_array_of_tables() {
		let content = r#"
[[patterns]]
name = "billing"
uri = "prj@pt_pt.billing"

[[patterns]]
name = "everything"
uri = "fog://prj@pt_pt"
"#;
		let path = PathBuf::from("test.toml");
		let config = parse_config_str(content, &path).unwrap();

		assert_eq!(config.patterns.len(), 2);
		assert_eq!(config.patterns[0].name, "billing");
		assert_eq!(
			config.patterns[0].uri,
			LambdaUri::all_lambda_versions("pt_pt", "prj", "billing")
		);
		assert_eq!(config.patterns[1].uri, LambdaUri::all_lambdas("pt_pt", "prj"));
	}

	#[test]
	fn test_parse_patterns_inline_tables() {
		let content = r#"
patterns = [
    { name = "a", uri = "prj@pt_pt.a.1" },
    { name = "b", uri = "prj@pt_pt.b" },
]
"#;
		let path = PathBuf::from("test.toml");
		let config = parse_config_str(content, &path).unwrap();

		assert_eq!(config.patterns.len(), 2);
	}

	#[test]
	fn test_invalid_pattern_uri() {
		let content = r#"
[[patterns]]
name = "broken"
uri = "pt_pt.billing"
"#;
		let path = PathBuf::from("test.toml");
		let result = parse_config_str(content, &path);

		match result.unwrap_err() {
			FogUriError::ConfigParseError { path, source } => {
				assert_eq!(path, PathBuf::from("test.toml"));
				assert!(source.to_string().contains("Invalid lambda URI"));
			}
			_ => panic!("Expected ConfigParseError"),
		}
	}

	#[test]
	fn test_duplicate_pattern_names() {
		let content = r#"
[[patterns]]
name = "billing"
uri = "prj@pt_pt.billing"

[[patterns]]
name = "billing"
uri = "prj@pt_pt.billing.2"
"#;
		let path = PathBuf::from("test.toml");
		let result = parse_config_str(content, &path);

		match result.unwrap_err() {
			FogUriError::DuplicatePattern { name, .. } => assert_eq!(name, "billing"),
			_ => panic!("Expected DuplicatePattern error"),
		}
	}

	#[test]
	fn test_parse_config_file_not_found() {
		let result = parse_config_file(Path::new("/nonexistent/.fog-uri.toml"));
		assert!(matches!(
			result.unwrap_err(),
			FogUriError::ConfigReadError { .. }
		));
	}
}

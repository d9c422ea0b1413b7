use crate::error::FogUriError;
use crate::uri::LambdaUri;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;

/// Top-level configuration from a `.fog-uri.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
	/// If true, stop directory cascade and jump directly to ~/.fog-uri.toml.
	#[serde(default)]
	pub root: bool,

	/// If true, ignore every other config file, including ~/.fog-uri.toml.
	#[serde(default)]
	pub no_external_lookup: bool,

	/// Region used when deriving addresses from lambda descriptors without
	/// an explicit region.
	#[serde(default)]
	pub default_region: Option<String>,

	/// Named wildcard patterns. Addresses are checked against them in order.
	#[serde(default)]
	pub patterns: Vec<NamedPattern>,
}

/// A lambda URI pattern with a human-readable name.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedPattern {
	pub name: String,

	/// Parsed when the config is loaded; omitted segments become wildcards.
	pub uri: LambdaUri,
}

/// A loaded configuration with its source path for debugging/display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from.
	pub path: PathBuf,
}

/// Merged configuration from multiple config files in the cascade.
#[derive(Debug, Clone, Default)]
pub struct MergedConfig {
	/// All patterns from all configs, in cascade order.
	pub patterns: Vec<PatternWithSource>,

	/// First `default-region` found in cascade order.
	pub default_region: Option<String>,
}

/// A pattern with its source config path for debugging/display.
#[derive(Debug, Clone)]
pub struct PatternWithSource {
	pub pattern: NamedPattern,

	/// The config file this pattern came from.
	pub source: PathBuf,
}

impl Config {
	/// Reject pattern names used twice in the same file.
	pub fn validate(&self, path: &std::path::Path) -> Result<(), FogUriError> {
		let mut seen = HashSet::new();
		for pattern in &self.patterns {
			if !seen.insert(pattern.name.as_str()) {
				return Err(FogUriError::DuplicatePattern {
					name: pattern.name.clone(),
					path: path.to_path_buf(),
				});
			}
		}
		Ok(())
	}
}

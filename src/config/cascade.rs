use crate::config::parser::parse_config_file;
use crate::config::types::{LoadedConfig, MergedConfig, PatternWithSource};
use crate::error::{FogUriError, Result};
use std::path::{Path, PathBuf};

/// File name looked up in every directory of the cascade.
pub const CONFIG_FILE_NAME: &str = ".fog-uri.toml";

/// Discover and load all config files in the cascade.
///
/// The cascade order is:
/// 1. Start from `start_dir` and look for `.fog-uri.toml`
/// 2. If found and `no-external-lookup = true`, use only that file
/// 3. If found and `root = true`, stop walking up
/// 4. Otherwise, continue up the directory tree
/// 5. Finally, append ~/.fog-uri.toml if it exists and was not already seen
///
/// Returns configs in cascade order (most specific first).
pub fn discover_configs(start_dir: &Path) -> Result<Vec<LoadedConfig>> {
	let mut configs = Vec::new();
	let mut current_dir = Some(start_dir);

	while let Some(dir) = current_dir {
		let config_path = dir.join(CONFIG_FILE_NAME);

		if config_path.exists() {
			tracing::trace!(path = %config_path.display(), "loading config");
			let config = parse_config_file(&config_path)?;
			let no_external_lookup = config.no_external_lookup;
			let root = config.root;

			configs.push(LoadedConfig {
				config,
				path: config_path,
			});

			if no_external_lookup {
				return Ok(configs);
			}

			if root {
				break;
			}
		}

		current_dir = dir.parent();
	}

	let user_path = user_config_path()?;
	let already_loaded = configs.iter().any(|loaded| loaded.path == user_path);
	if !already_loaded && user_path.exists() {
		tracing::trace!(path = %user_path.display(), "loading user config");
		let config = parse_config_file(&user_path)?;
		configs.push(LoadedConfig {
			config,
			path: user_path,
		});
	}

	Ok(configs)
}

/// Merge multiple configs into a single effective config.
///
/// Patterns are collected in cascade order. The default region comes from
/// the most specific config that sets one.
pub fn merge_configs(configs: &[LoadedConfig]) -> MergedConfig {
	let mut merged = MergedConfig::default();

	for loaded in configs {
		for pattern in &loaded.config.patterns {
			merged.patterns.push(PatternWithSource {
				pattern: pattern.clone(),
				source: loaded.path.clone(),
			});
		}

		if merged.default_region.is_none() {
			merged.default_region = loaded.config.default_region.clone();
		}
	}

	merged
}

/// Convenience function to discover, load, and merge configs from a directory.
pub fn load_merged_config(start_dir: &Path) -> Result<MergedConfig> {
	let configs = discover_configs(start_dir)?;
	Ok(merge_configs(&configs))
}

/// Get the path to the user's config file.
pub fn user_config_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(FogUriError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(CONFIG_FILE_NAME))
}

use std::path::PathBuf;

/// Library-level structured errors for fog-uri.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum FogUriError {
	#[error("URI is invalid data type/length: {reason}")]
	InvalidInput { reason: String },

	#[error("Invalid lambda URI: {uri} ({reason})")]
	InvalidUri { uri: String, reason: String },

	#[error("Lambda descriptor is not an object: {kind}")]
	NotAnObject { kind: String },

	#[error("Failed to build lambda URI from descriptor: {message}")]
	Construction { message: String },

	#[error("Failed to read lambda descriptor: {path}")]
	DescriptorReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse lambda descriptor: {path}")]
	DescriptorParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Duplicate pattern name in {path}: {name}")]
	DuplicatePattern { name: String, path: PathBuf },

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

impl FogUriError {
	/// True for type/length violations: bad string input or a descriptor that
	/// is not object-shaped.
	pub fn is_type_error(&self) -> bool {
		matches!(
			self,
			FogUriError::InvalidInput { .. } | FogUriError::NotAnObject { .. }
		)
	}

	/// True for structural violations: a string that does not decompose into
	/// an address, or a descriptor whose accessors failed.
	pub fn is_structural_error(&self) -> bool {
		matches!(
			self,
			FogUriError::InvalidUri { .. } | FogUriError::Construction { .. }
		)
	}
}

/// Result type alias using FogUriError.
pub type Result<T> = std::result::Result<T, FogUriError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_error_kinds_are_disjoint() {
		let type_err = FogUriError::InvalidInput {
			reason: "empty".to_string(),
		};
		assert!(type_err.is_type_error());
		assert!(!type_err.is_structural_error());

		let structural = FogUriError::Construction {
			message: "boom".to_string(),
		};
		assert!(structural.is_structural_error());
		assert!(!structural.is_type_error());

		assert!(!FogUriError::HomeDirectoryNotFound.is_type_error());
		assert!(!FogUriError::HomeDirectoryNotFound.is_structural_error());
	}

	#[test]
	fn test_construction_error_keeps_message() {
		let err = FogUriError::Construction {
			message: "getProject exploded".to_string(),
		};
		assert!(err.to_string().contains("getProject exploded"));
	}
}

use crate::error::{FogUriError, Result};
use crate::uri::address::{FOG_PROTO, LambdaUri};
use serde::Deserialize;
use std::convert::Infallible;
use std::fmt;
use std::path::Path;

/// Something that describes a deployed lambda.
///
/// Only these four values are read when deriving an address; everything else
/// about the descriptor is opaque.
pub trait LambdaDescriptor {
	/// Error raised by an accessor.
	type Error: fmt::Display;

	fn project(&self) -> std::result::Result<String, Self::Error>;

	fn id(&self) -> std::result::Result<String, Self::Error>;

	/// Version tag (etag) of the deployed lambda.
	fn etag(&self) -> std::result::Result<String, Self::Error>;

	fn instance_number(&self) -> std::result::Result<u64, Self::Error>;

	/// Name of the descriptor's shape when it is not object-like.
	///
	/// Descriptors built from dynamic data (e.g. a TOML value) return
	/// `Some("string")`, `Some("array")`, ... for non-table values.
	fn non_object_kind(&self) -> Option<&'static str> {
		None
	}
}

/// A lambda descriptor with plain fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Lambda {
	pub project: String,
	pub id: String,
	pub etag: String,
	pub instance_number: u64,
}

impl LambdaDescriptor for Lambda {
	type Error = Infallible;

	fn project(&self) -> std::result::Result<String, Infallible> {
		Ok(self.project.clone())
	}

	fn id(&self) -> std::result::Result<String, Infallible> {
		Ok(self.id.clone())
	}

	fn etag(&self) -> std::result::Result<String, Infallible> {
		Ok(self.etag.clone())
	}

	fn instance_number(&self) -> std::result::Result<u64, Infallible> {
		Ok(self.instance_number)
	}
}

/// Descriptor read from a TOML value with `project`, `id`, `etag` and
/// `instance-number` keys.
impl LambdaDescriptor for toml::Value {
	type Error = String;

	fn project(&self) -> std::result::Result<String, String> {
		string_field(self, "project")
	}

	fn id(&self) -> std::result::Result<String, String> {
		string_field(self, "id")
	}

	fn etag(&self) -> std::result::Result<String, String> {
		string_field(self, "etag")
	}

	fn instance_number(&self) -> std::result::Result<u64, String> {
		let value = field(self, "instance-number")?;
		let number = value
			.as_integer()
			.ok_or_else(|| format!("instance-number must be an integer, got {}", value.type_str()))?;
		u64::try_from(number).map_err(|_| format!("instance-number must not be negative, got {number}"))
	}

	fn non_object_kind(&self) -> Option<&'static str> {
		if self.is_table() {
			None
		} else {
			Some(self.type_str())
		}
	}
}

fn field<'a>(value: &'a toml::Value, key: &str) -> std::result::Result<&'a toml::Value, String> {
	value.get(key).ok_or_else(|| format!("missing {key}"))
}

fn string_field(value: &toml::Value, key: &str) -> std::result::Result<String, String> {
	let raw = field(value, key)?;
	raw.as_str()
		.map(str::to_string)
		.ok_or_else(|| format!("{key} must be a string, got {}", raw.type_str()))
}

impl LambdaUri {
	/// Derive the address of a deployed lambda in `region_country_code`.
	///
	/// # Errors
	///
	/// - [`FogUriError::NotAnObject`] if the descriptor is not object-shaped.
	/// - [`FogUriError::Construction`] if any accessor fails; the accessor's
	///   message is preserved.
	pub fn parse_from_lambda<D: LambdaDescriptor + ?Sized>(
		lambda: &D,
		region_country_code: &str,
	) -> Result<Self> {
		if let Some(kind) = lambda.non_object_kind() {
			return Err(FogUriError::NotAnObject {
				kind: kind.to_string(),
			});
		}

		let construction = |e: D::Error| FogUriError::Construction {
			message: e.to_string(),
		};

		Ok(LambdaUri::new(
			FOG_PROTO,
			region_country_code,
			lambda.project().map_err(construction)?,
			lambda.id().map_err(construction)?,
			lambda.etag().map_err(construction)?,
			lambda.instance_number().map_err(construction)?,
		))
	}

	/// Read a TOML lambda descriptor from `path` and derive its address.
	pub fn parse_from_lambda_file(path: &Path, region_country_code: &str) -> Result<Self> {
		let content =
			std::fs::read_to_string(path).map_err(|source| FogUriError::DescriptorReadError {
				path: path.to_path_buf(),
				source,
			})?;

		let value: toml::Value =
			toml::from_str(&content).map_err(|source| FogUriError::DescriptorParseError {
				path: path.to_path_buf(),
				source,
			})?;

		tracing::debug!(path = %path.display(), region_country_code, "deriving lambda URI from descriptor");
		LambdaUri::parse_from_lambda(&value, region_country_code)
	}
}

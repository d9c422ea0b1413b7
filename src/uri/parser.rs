use crate::error::{FogUriError, Result};
use crate::uri::address::{
	ALL_INSTANCES, ALL_LAMBDAS, ALL_VERSIONS, FOG_PROTO, LambdaUri, MAX_URI_LENGTH, WILD_CARD,
};
use std::ffi::OsStr;
use std::str::FromStr;

impl LambdaUri {
	/// Parse a lambda URI from its string form.
	///
	/// Accepts `[fog://]project@region[.lambdaId[.lambdaVersion[.instance]]]`.
	/// Omitted or empty trailing segments become wildcards, as does an
	/// instance of `*`. The protocol of the result is always `fog://`.
	///
	/// The length bound applies to the text as given. The canonical form adds
	/// the scheme and any omitted segments, so re-parsing `to_string()` only
	/// succeeds while that rendering stays under 255 characters.
	///
	/// # Errors
	///
	/// - [`FogUriError::InvalidInput`] if the input is empty or 255 characters or longer.
	/// - [`FogUriError::InvalidUri`] if project or region is missing, or the
	///   instance is not an unsigned integer.
	pub fn parse_from_string(uri: &str) -> Result<Self> {
		let length = uri.chars().count();
		if length == 0 || length >= MAX_URI_LENGTH {
			tracing::debug!(length, "rejecting lambda URI by length");
			return Err(FogUriError::InvalidInput {
				reason: format!("length {length} outside (0, {MAX_URI_LENGTH})"),
			});
		}

		let rest = uri.strip_prefix(FOG_PROTO).unwrap_or(uri);

		let (project, address) = rest
			.split_once('@')
			.ok_or_else(|| invalid(uri, "missing '@' separator"))?;

		if project.is_empty() {
			return Err(invalid(uri, "empty project"));
		}

		// Segments past the instance are ignored.
		let mut segments = address.split('.');
		let region = segments.next().unwrap_or_default();
		if region.is_empty() {
			return Err(invalid(uri, "empty region"));
		}

		let lambda_id = non_empty(segments.next()).unwrap_or(ALL_LAMBDAS);
		let lambda_version = non_empty(segments.next()).unwrap_or(ALL_VERSIONS);
		let lambda_instance = match non_empty(segments.next()) {
			None => ALL_INSTANCES,
			Some(WILD_CARD) => ALL_INSTANCES,
			Some(instance) => instance
				.parse::<u64>()
				.map_err(|e| invalid(uri, &format!("instance '{instance}': {e}")))?,
		};

		Ok(LambdaUri::new(
			FOG_PROTO,
			region,
			project,
			lambda_id,
			lambda_version,
			lambda_instance,
		))
	}

	/// Parse a lambda URI from an OS string, as handed over by the command line.
	///
	/// Input that is not valid UTF-8 is a type error.
	pub fn parse_from_os_str(uri: &OsStr) -> Result<Self> {
		let uri = uri.to_str().ok_or_else(|| FogUriError::InvalidInput {
			reason: "not valid UTF-8".to_string(),
		})?;
		LambdaUri::parse_from_string(uri)
	}
}

impl FromStr for LambdaUri {
	type Err = FogUriError;

	fn from_str(s: &str) -> Result<Self> {
		LambdaUri::parse_from_string(s)
	}
}

fn non_empty(segment: Option<&str>) -> Option<&str> {
	segment.filter(|s| !s.is_empty())
}

fn invalid(uri: &str, reason: &str) -> FogUriError {
	tracing::debug!(uri, reason, "invalid lambda URI");
	FogUriError::InvalidUri {
		uri: uri.to_string(),
		reason: reason.to_string(),
	}
}

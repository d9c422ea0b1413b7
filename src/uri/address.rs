use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Canonical scheme prefix for every constructed or re-serialized address.
pub const FOG_PROTO: &str = "fog://";

/// Marker meaning "every value at this level".
pub const WILD_CARD: &str = "*";

/// Lambda id standing for every lambda in a project.
pub const ALL_LAMBDAS: &str = WILD_CARD;

/// Lambda version standing for every version of a lambda.
pub const ALL_VERSIONS: &str = WILD_CARD;

/// Instance number standing for every running instance of a lambda version.
pub const ALL_INSTANCES: u64 = u64::MAX;

/// Exclusive upper bound on the length of a parseable URI, in characters.
pub const MAX_URI_LENGTH: usize = 255;

/// Address of a lambda, or of a set of lambdas when wildcarded.
///
/// Canonical form: `fog://project@region.lambdaId.lambdaVersion.instance`.
///
/// Everything except the instance number is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LambdaUri {
	protocol: String,
	region_country_code: String,
	project: String,
	lambda_id: String,
	lambda_version: String,
	lambda_instance: u64,
}

/// How far a wildcard address reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WildcardLevel {
	/// Every lambda in the project.
	Lambdas,
	/// Every version of one lambda.
	Versions,
	/// Every instance of one lambda version.
	Instances,
}

impl WildcardLevel {
	/// Names accepted by `FromStr`, from the widest level down.
	pub const NAMES: [&'static str; 3] = ["lambdas", "versions", "instances"];
}

impl FromStr for WildcardLevel {
	type Err = String;

	fn from_str(s: &str) -> std::result::Result<Self, String> {
		match s {
			"lambdas" => Ok(WildcardLevel::Lambdas),
			"versions" => Ok(WildcardLevel::Versions),
			"instances" => Ok(WildcardLevel::Instances),
			other => Err(format!(
				"unknown wildcard level '{other}', expected one of {}",
				WildcardLevel::NAMES.join(", ")
			)),
		}
	}
}

impl LambdaUri {
	/// Build an address from explicit field values.
	///
	/// No validation is performed: callers supply consistent values.
	pub fn new(
		protocol: impl Into<String>,
		region_country_code: impl Into<String>,
		project: impl Into<String>,
		lambda_id: impl Into<String>,
		lambda_version: impl Into<String>,
		lambda_instance: u64,
	) -> Self {
		LambdaUri {
			protocol: protocol.into(),
			region_country_code: region_country_code.into(),
			project: project.into(),
			lambda_id: lambda_id.into(),
			lambda_version: lambda_version.into(),
			lambda_instance,
		}
	}

	/// Every lambda in `project` within `region_country_code`.
	pub fn all_lambdas(region_country_code: impl Into<String>, project: impl Into<String>) -> Self {
		LambdaUri::new(
			FOG_PROTO,
			region_country_code,
			project,
			ALL_LAMBDAS,
			ALL_VERSIONS,
			ALL_INSTANCES,
		)
	}

	/// Every version of `lambda_id`.
	pub fn all_lambda_versions(
		region_country_code: impl Into<String>,
		project: impl Into<String>,
		lambda_id: impl Into<String>,
	) -> Self {
		LambdaUri::new(
			FOG_PROTO,
			region_country_code,
			project,
			lambda_id,
			ALL_VERSIONS,
			ALL_INSTANCES,
		)
	}

	/// Every running instance of `lambda_id` at `lambda_version`.
	pub fn all_lambda_instances(
		region_country_code: impl Into<String>,
		project: impl Into<String>,
		lambda_id: impl Into<String>,
		lambda_version: impl Into<String>,
	) -> Self {
		LambdaUri::new(
			FOG_PROTO,
			region_country_code,
			project,
			lambda_id,
			lambda_version,
			ALL_INSTANCES,
		)
	}

	pub fn protocol(&self) -> &str {
		&self.protocol
	}

	pub fn region_country_code(&self) -> &str {
		&self.region_country_code
	}

	pub fn project(&self) -> &str {
		&self.project
	}

	pub fn lambda_id(&self) -> &str {
		&self.lambda_id
	}

	pub fn lambda_version(&self) -> &str {
		&self.lambda_version
	}

	pub fn lambda_instance(&self) -> u64 {
		self.lambda_instance
	}

	/// Replace the instance number. Other fields are not re-checked.
	pub fn set_lambda_instance(&mut self, lambda_instance: u64) {
		self.lambda_instance = lambda_instance;
	}

	pub fn is_to_all_lambdas(&self) -> bool {
		self.lambda_id == ALL_LAMBDAS
	}

	pub fn is_to_all_lambda_versions(&self) -> bool {
		self.lambda_version == ALL_VERSIONS
	}

	pub fn is_to_all_lambda_instances(&self) -> bool {
		self.lambda_instance == ALL_INSTANCES
	}

	/// Widen to every lambda of this project.
	pub fn to_all_lambdas(&self) -> Self {
		LambdaUri::all_lambdas(self.region_country_code.as_str(), self.project.as_str())
	}

	/// Widen to every version of this lambda.
	pub fn to_all_lambda_versions(&self) -> Self {
		LambdaUri::all_lambda_versions(
			self.region_country_code.as_str(),
			self.project.as_str(),
			self.lambda_id.as_str(),
		)
	}

	/// Widen to every instance of this lambda version.
	pub fn to_all_lambda_instances(&self) -> Self {
		LambdaUri::all_lambda_instances(
			self.region_country_code.as_str(),
			self.project.as_str(),
			self.lambda_id.as_str(),
			self.lambda_version.as_str(),
		)
	}

	/// Widen to the given level.
	pub fn widen(&self, level: WildcardLevel) -> Self {
		match level {
			WildcardLevel::Lambdas => self.to_all_lambdas(),
			WildcardLevel::Versions => self.to_all_lambda_versions(),
			WildcardLevel::Instances => self.to_all_lambda_instances(),
		}
	}
}

impl fmt::Display for LambdaUri {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}{}@{}.{}.{}.",
			self.protocol, self.project, self.region_country_code, self.lambda_id, self.lambda_version
		)?;
		if self.is_to_all_lambda_instances() {
			f.write_str(WILD_CARD)
		} else {
			write!(f, "{}", self.lambda_instance)
		}
	}
}

impl Serialize for LambdaUri {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for LambdaUri {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		let raw = String::deserialize(deserializer)?;
		LambdaUri::parse_from_string(&raw).map_err(serde::de::Error::custom)
	}
}

use crate::uri::address::LambdaUri;

impl LambdaUri {
	/// Same project in the same region.
	pub fn is_same_project(&self, other: &LambdaUri) -> bool {
		self.project() == other.project()
			&& self.region_country_code() == other.region_country_code()
	}

	/// Same project and lambda id.
	pub fn is_same_lambda(&self, other: &LambdaUri) -> bool {
		self.is_same_project(other) && self.lambda_id() == other.lambda_id()
	}

	/// Same lambda and version.
	pub fn is_same_lambda_version(&self, other: &LambdaUri) -> bool {
		self.is_same_lambda(other) && self.lambda_version() == other.lambda_version()
	}

	/// Same lambda version and instance number.
	pub fn is_same_lambda_instance(&self, other: &LambdaUri) -> bool {
		self.is_same_lambda_version(other) && self.lambda_instance() == other.lambda_instance()
	}

	/// Check whether `self` is covered by `pattern`.
	///
	/// Fields are compared from the least to the most specific. At the first
	/// level that differs, the result is whether `pattern` is a wildcard at
	/// that level. Identical addresses always match.
	///
	/// Wildcards are meant for the pattern side only. With a wildcarded
	/// receiver the result is whatever the field comparisons produce and
	/// should not be relied on.
	pub fn matches(&self, pattern: &LambdaUri) -> bool {
		if !self.is_same_project(pattern) {
			return false;
		}

		if !self.is_same_lambda(pattern) {
			return pattern.is_to_all_lambdas();
		}

		if !self.is_same_lambda_version(pattern) {
			return pattern.is_to_all_lambda_versions();
		}

		if !self.is_same_lambda_instance(pattern) {
			return pattern.is_to_all_lambda_instances();
		}

		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use uuid::Uuid;

	fn concrete(id: &str, instance: u64) -> LambdaUri {
		LambdaUri::parse_from_string(&format!("prj@pt_pt.{id}.1.{instance}")).unwrap()
	}

	#[test]
	fn test_identical_addresses_match() {
		let uri = concrete(&Uuid::new_v4().to_string(), 3);
		assert!(uri.matches(&uri));
		assert!(uri.matches(&uri.clone()));
	}

	#[test]
	fn test_different_project_never_matches() {
		let uri = concrete("billing", 1);
		let pattern = LambdaUri::all_lambdas("pt_pt", "other");
		assert!(!uri.matches(&pattern));
	}

	#[test]
	fn test_different_region_never_matches() {
		let uri = concrete("billing", 1);
		let pattern = LambdaUri::all_lambdas("se_pt", "prj");
		assert!(!uri.matches(&pattern));
		assert!(uri.matches(&LambdaUri::all_lambdas("pt_pt", "prj")));
	}

	#[test]
	fn test_widening_chain_keeps_matching() {
		let id = Uuid::new_v4().to_string();
		let candidate = concrete(&id, 2);

		let instances = LambdaUri::all_lambda_instances("pt_pt", "prj", id.as_str(), "1");
		assert!(candidate.matches(&instances));

		let versions = instances.to_all_lambda_versions();
		assert!(candidate.matches(&versions));

		let lambdas = versions.to_all_lambdas();
		assert!(candidate.matches(&lambdas));
	}

	#[test]
	fn test_other_lambda_only_matches_all_lambdas() {
		let candidate = concrete(&Uuid::new_v4().to_string(), 1);
		let other = concrete(&Uuid::new_v4().to_string(), 1);

		let pattern = other.to_all_lambda_instances();
		assert!(!candidate.matches(&pattern));
		assert!(!candidate.matches(&other.to_all_lambda_versions()));
		assert!(candidate.matches(&pattern.to_all_lambdas()));
	}

	#[test]
	fn test_other_version_needs_version_wildcard() {
		let candidate = concrete("billing", 1);
		let pattern = LambdaUri::all_lambda_instances("pt_pt", "prj", "billing", "2");
		assert!(!candidate.matches(&pattern));
		assert!(candidate.matches(&pattern.to_all_lambda_versions()));
	}

	#[test]
	fn test_other_instance_needs_instance_wildcard() {
		let candidate = concrete("billing", 1);
		let pattern = concrete("billing", 2);
		assert!(!candidate.matches(&pattern));
		assert!(candidate.matches(&pattern.to_all_lambda_instances()));
	}

	#[test]
	fn test_matching_is_not_symmetric() {
		let candidate = concrete("billing", 1);
		let pattern = candidate.to_all_lambdas();
		assert!(candidate.matches(&pattern));
		assert!(!pattern.matches(&candidate));
	}

	#[test]
	fn test_same_comparisons_imply_each_other() {
		let a = concrete("billing", 1);
		let b = concrete("billing", 2);
		assert!(a.is_same_project(&b));
		assert!(a.is_same_lambda(&b));
		assert!(a.is_same_lambda_version(&b));
		assert!(!a.is_same_lambda_instance(&b));
	}
}

//! Lambda URIs: parsing, formatting, wildcards and matching.
//!
//! This module handles:
//! - The `LambdaUri` value type and its wildcard constructors
//! - Parsing the `[fog://]project@region.id.version.instance` form
//! - Pattern matching between a candidate address and a wildcard pattern
//! - Deriving an address from a lambda descriptor

pub mod address;
pub mod descriptor;
pub mod matcher;
pub mod parser;

pub use address::{
	ALL_INSTANCES, ALL_LAMBDAS, ALL_VERSIONS, FOG_PROTO, LambdaUri, MAX_URI_LENGTH, WILD_CARD,
	WildcardLevel,
};
pub use descriptor::{Lambda, LambdaDescriptor};

//! fog-uri - addressing for lambdas deployed on a fog platform.
//!
//! A lambda URI names a lambda by project, region, id, version and running
//! instance, e.g. `fog://prj@pt_pt.billing.3.0`. Trailing parts may be
//! wildcards, turning the address into a pattern for a set of lambdas.
//!
//! This library provides:
//! - Parsing and canonical formatting of lambda URIs
//! - Wildcard construction and candidate/pattern matching
//! - Derivation of an address from a lambda descriptor
//! - Configuration cascade with named patterns for the CLI
//!
//! # Example
//!
//! ```
//! use fog_uri::uri::LambdaUri;
//!
//! let uri = LambdaUri::parse_from_string("prj@pt_pt.billing.1").unwrap();
//! assert_eq!(uri.to_string(), "fog://prj@pt_pt.billing.1.*");
//!
//! let mut instance = uri.clone();
//! instance.set_lambda_instance(4);
//! assert!(instance.matches(&uri));
//! assert!(instance.matches(&uri.to_all_lambdas()));
//! assert!(!uri.matches(&instance));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod patterns;
pub mod uri;

pub use error::{FogUriError, Result};
pub use uri::LambdaUri;

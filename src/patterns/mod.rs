//! Named pattern lookup.
//!
//! Checks a candidate address against the wildcard patterns collected from
//! the config cascade.

pub mod matcher;

pub use matcher::{find_matching_pattern, find_pattern_by_name, matching_patterns};

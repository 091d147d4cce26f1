//! Predicate prelude for convenient imports
//!
//! Re-exports every predicate together with the validator types, so a single
//! glob import is enough to write checks.
//!
//! # Example
//!
//! ```rust
//! use valid::predicate::prelude::*;
//!
//! let mut v = Validator::new();
//! v.check("name", [Case::new(not_empty("tom"), "must not be empty")]);
//! assert!(v.valid());
//! ```

// String predicates
pub use super::string::{
    empty, ends_with, is_date, is_number, matches, max_length, min_length, not_empty,
    range_length, starts_with,
};

// Ordering predicates
pub use super::number::{max, min, range};

// Collection predicates
pub use super::collection::{is_in, unique};

// Validator integration
pub use crate::validator::{Case, Validator};

//! # Valid
//!
//! A small field validation toolkit: pure predicate functions plus an
//! accumulator that collects one human-readable error per failing field check.
//!
//! ## Philosophy
//!
//! - **Predicates** are total functions returning `bool`. They never fail, so
//!   they compose with `&&`, `||` and `!` and drop straight into a [`Case`].
//! - **Cases** are evaluated by the caller before they reach the
//!   [`Validator`]. The validator never calls a predicate itself; it only
//!   decides which message to record.
//! - **Presentation** belongs to the caller. The library hands back structured
//!   [`Errors`] and one default `"field: message"` rendering.
//!
//! ## Quick Example
//!
//! ```rust
//! use valid::{predicate::*, Case, Validator};
//!
//! let username = "tombell";
//! let age = 21;
//!
//! let mut v = Validator::new();
//! v.check("username", [
//!     Case::new(not_empty(username), "must not be empty"),
//!     Case::new(min_length(username, 10), "must be at least 10 characters"),
//! ]);
//! v.check("age", [Case::new(min(age, 18), "must be at least 18")]);
//!
//! if !v.valid() {
//!     assert_eq!(v.errors().to_string(), "username: must be at least 10 characters");
//! }
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events when a field error is recorded.
//! - `serde`: `Serialize`/`Deserialize` for [`FieldError`] and [`Errors`].
//! - `proptest`: `Arbitrary` implementations for [`Case`] and [`FieldError`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod predicate;
pub mod semigroup;
pub mod testing;
pub mod validator;

// Re-exports
pub use semigroup::Semigroup;
pub use validator::{Case, Errors, FieldError, Validator, DEFAULT_SEPARATOR};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::predicate::prelude::*;
    pub use crate::semigroup::Semigroup;
    pub use crate::validator::{Errors, FieldError};
}

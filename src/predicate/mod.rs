//! Pure predicate functions
//!
//! Every predicate takes a value (plus parameters) and returns a plain `bool`.
//! None of them fail or panic: invalid or boundary input is simply `false`.
//! That keeps them usable directly inside boolean expressions and when
//! building a [`Case`](crate::Case) for a [`Validator`](crate::Validator).
//!
//! # Example
//!
//! ```rust
//! use valid::predicate::*;
//!
//! let username = "john_doe";
//! assert!(not_empty(username) && range_length(username, 3, 20));
//!
//! assert!(range(25, 0, 150));
//! assert!(is_in("admin", &["admin", "editor"]));
//! assert!(unique(&[1, 2, 3]));
//! ```
//!
//! # Integration with Validator
//!
//! ```rust
//! use valid::{predicate::*, Case, Validator};
//!
//! let age = 21;
//! let mut v = Validator::new();
//! v.check("age", [Case::new(min(age, 18), "must be at least 18")]);
//! assert!(v.valid());
//! ```

mod collection;
mod number;
mod string;

pub mod prelude;

// Re-export string predicates
pub use string::{
    empty, ends_with, is_date, is_number, matches, max_length, min_length, not_empty,
    range_length, starts_with,
};

// Re-export ordering predicates
pub use number::{max, min, range};

// Re-export collection predicates
pub use collection::{is_in, unique};

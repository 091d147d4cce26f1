//! Testing utilities for code that uses `valid`
//!
//! Assertion macros that print the recorded errors on failure, plus
//! `proptest` strategies behind the `proptest` feature.
//!
//! # Examples
//!
//! ```rust
//! use valid::{assert_field_errors, assert_invalid, assert_valid, Validator};
//!
//! let mut ok = Validator::new();
//! ok.check("name", [(true, "must not be empty")]);
//! assert_valid!(ok);
//!
//! let mut bad = Validator::new();
//! bad.check("name", [(false, "must not be empty")]);
//! assert_invalid!(bad);
//! assert_field_errors!(bad, [("name", "must not be empty")]);
//! ```

/// Assert that a validator recorded no errors.
///
/// # Example
///
/// ```rust
/// use valid::{assert_valid, Validator};
///
/// assert_valid!(Validator::new());
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($validator:expr) => {{
        let validator: &$crate::Validator = &$validator;
        if !validator.valid() {
            panic!("Expected valid, got errors: {}", validator.errors());
        }
    }};
}

/// Assert that a validator recorded at least one error.
///
/// # Example
///
/// ```rust
/// use valid::{assert_invalid, Validator};
///
/// let mut v = Validator::new();
/// v.check("age", [(false, "must be at least 18")]);
/// assert_invalid!(v);
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($validator:expr) => {{
        let validator: &$crate::Validator = &$validator;
        if validator.valid() {
            panic!("Expected errors, got a valid validator");
        }
    }};
}

/// Assert that a validator recorded exactly these `(field, message)` pairs, in order.
///
/// # Example
///
/// ```rust
/// use valid::{assert_field_errors, Validator};
///
/// let mut v = Validator::new();
/// v.check("email", [(false, "is not valid")]);
/// v.check("age", [(false, "must be at least 18")]);
/// assert_field_errors!(v, [("email", "is not valid"), ("age", "must be at least 18")]);
/// ```
#[macro_export]
macro_rules! assert_field_errors {
    ($validator:expr, [$(($field:expr, $message:expr)),* $(,)?]) => {{
        let validator: &$crate::Validator = &$validator;
        let actual: ::std::vec::Vec<(&str, &str)> = validator
            .errors()
            .iter()
            .map(|error| (error.field(), error.message()))
            .collect();
        let expected: ::std::vec::Vec<(&str, &str)> = ::std::vec![$(($field, $message)),*];
        assert_eq!(actual, expected, "Expected field errors {:?}, got {:?}", expected, actual);
    }};
}

#[cfg(feature = "proptest")]
use crate::{Case, FieldError};
#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for Case {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (any::<bool>(), "[a-z ]{1,32}")
            .prop_map(|(condition, message)| Case::new(condition, message))
            .boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for FieldError {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        ("[a-z_]{1,16}", "[a-z ]{1,32}")
            .prop_map(|(field, message)| FieldError::new(field, message))
            .boxed()
    }
}

//! Semigroup trait for associative combination
//!
//! A Semigroup is a type with an associative binary operation. Here it is how
//! error lists produced independently (for example, one [`Validator`] per
//! thread) are merged into a single report.
//!
//! For a valid implementation, `combine` must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use valid::{Errors, FieldError, Semigroup};
//!
//! let left: Errors = vec![FieldError::new("name", "must not be empty")].into();
//! let right: Errors = vec![FieldError::new("age", "must be at least 18")].into();
//!
//! let all = left.combine(right);
//! assert_eq!(all.to_string(), "name: must not be empty, age: must be at least 18");
//! ```
//!
//! [`Validator`]: crate::Validator

/// A type that supports an associative binary operation
///
/// `combine` takes `self` by value; clone first if the originals are still
/// needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    ///
    /// # Examples
    ///
    /// ```
    /// use valid::Semigroup;
    ///
    /// let v1 = vec![1, 2];
    /// let v2 = vec![3, 4];
    /// assert_eq!(v1.combine(v2), vec![1, 2, 3, 4]);
    /// ```
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

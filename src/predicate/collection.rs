//! Collection predicates
//!
//! This module provides membership and uniqueness checks over slices.

/// Check that no two elements of `values` are equal.
///
/// Empty and single-element slices are trivially unique. Only `PartialEq` is
/// required, so the scan is pairwise.
///
/// # Example
///
/// ```rust
/// use valid::predicate::*;
///
/// assert!(unique(&[30, 910, 0, -1]));
/// assert!(!unique(&["one", "two", "three", "three"]));
/// assert!(unique::<i32>(&[]));
/// ```
pub fn unique<T: PartialEq>(values: &[T]) -> bool {
    values
        .iter()
        .enumerate()
        .all(|(i, item)| !values[i + 1..].contains(item))
}

/// Check that `value` equals at least one of `candidates`.
///
/// An empty candidate list never matches.
///
/// # Example
///
/// ```rust
/// use valid::predicate::*;
///
/// assert!(is_in("orange", &["apple", "banana", "orange"]));
/// assert!(!is_in(-5, &[0, 2, 0, 4]));
/// assert!(!is_in(1, &[] as &[i32]));
/// ```
#[inline]
pub fn is_in<T: PartialEq>(value: T, candidates: &[T]) -> bool {
    candidates.contains(&value)
}

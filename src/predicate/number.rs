//! Ordering predicates
//!
//! Generic over anything `PartialOrd`: integers, floats, strings, timestamps.

/// Check if `value` is less than or equal to `max`.
///
/// # Example
///
/// ```rust
/// use valid::predicate::*;
///
/// assert!(max(0, 5));
/// assert!(max(8, 8));
/// assert!(!max(5, 3));
/// assert!(max("apple", "banana"));
/// ```
#[inline]
pub fn max<T: PartialOrd>(value: T, max: T) -> bool {
    value <= max
}

/// Check if `value` is greater than or equal to `min`.
///
/// # Example
///
/// ```rust
/// use valid::predicate::*;
///
/// assert!(min(21, 18));
/// assert!(min(91, 91));
/// assert!(!min(-1, 5));
/// ```
#[inline]
pub fn min<T: PartialOrd>(value: T, min: T) -> bool {
    value >= min
}

/// Check if `min <= value <= max`.
///
/// Same as `min(value, min) && max(value, max)`; inverted bounds are never
/// satisfied.
///
/// # Example
///
/// ```rust
/// use valid::predicate::*;
///
/// assert!(range(5, 2, 7));
/// assert!(range(7, 7, 30));
/// assert!(!range(7, 11, 18));
/// ```
#[inline]
pub fn range<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    value >= min && value <= max
}

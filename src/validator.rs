//! Field validator that accumulates one error per failing check
//!
//! A [`Validator`] is a single-use accumulator. Each call to
//! [`Validator::check`] names a field and supplies a list of [`Case`]s whose
//! conditions the caller has already evaluated. The first case whose
//! condition is `false` records a [`FieldError`]; the remaining cases for that
//! call are not inspected. Separate `check` calls are independent, even for
//! the same field name.
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```
//! use valid::{predicate::*, Case, Validator};
//!
//! let username = "tombell";
//!
//! let mut v = Validator::new();
//! v.check("username", [
//!     Case::new(not_empty(username), "must not be empty"),
//!     Case::new(min_length(username, 10), "must be at least 10 characters"),
//! ]);
//!
//! assert!(!v.valid());
//! assert_eq!(v.errors().to_string(), "username: must be at least 10 characters");
//! ```
//!
//! ## Converting to a `Result`
//!
//! ```
//! use valid::{predicate::*, Errors, Validator};
//!
//! fn validate_age(age: u32) -> Result<u32, Errors> {
//!     let mut v = Validator::new();
//!     v.check("age", [(min(age, 18), "must be at least 18")]);
//!     v.into_result().map(|()| age)
//! }
//!
//! assert_eq!(validate_age(21), Ok(21));
//! assert!(validate_age(12).is_err());
//! ```

use std::error::Error as StdError;
use std::fmt;
use std::slice;
use std::vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Semigroup;

/// Separator used by the `Display` rendering of [`Errors`].
pub const DEFAULT_SEPARATOR: &str = ", ";

/// One validation rule, already evaluated by the caller.
///
/// The condition is a plain `bool`, not a closure: every case passed to
/// [`Validator::check`] has been computed before the call.
///
/// A `(bool, message)` tuple converts into a `Case`, so the two forms below
/// are equivalent:
///
/// ```
/// use valid::Case;
///
/// let a = Case::new(false, "must not be empty");
/// let b: Case = (false, "must not be empty").into();
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    condition: bool,
    message: String,
}

impl Case {
    /// Create a case from a condition and the message to record if it is `false`.
    #[inline]
    pub fn new(condition: bool, message: impl Into<String>) -> Self {
        Case {
            condition,
            message: message.into(),
        }
    }

    /// The pre-evaluated condition.
    #[inline]
    pub fn condition(&self) -> bool {
        self.condition
    }

    /// The message recorded when the condition is `false`.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether this case would record an error.
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.condition
    }
}

impl From<(bool, &str)> for Case {
    fn from((condition, message): (bool, &str)) -> Self {
        Case::new(condition, message)
    }
}

impl From<(bool, String)> for Case {
    fn from((condition, message): (bool, String)) -> Self {
        Case::new(condition, message)
    }
}

/// A recorded failure for a field, carrying the first failing case's message.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldError {
    field: String,
    message: String,
}

impl FieldError {
    /// Create a field error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        FieldError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The field name.
    #[inline]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The failure message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl StdError for FieldError {}

/// Ordered list of [`FieldError`]s, in the order their `check` calls were made.
///
/// `Display` joins entries with [`DEFAULT_SEPARATOR`]; a single error renders
/// as exactly `"<field>: <message>"`. Use [`Errors::join`] for a different
/// separator.
///
/// # Examples
///
/// ```
/// use valid::Validator;
///
/// let mut v = Validator::new();
/// v.check("email", [(false, "is not valid")]);
/// v.check("age", [(false, "must be at least 18")]);
///
/// let errors = v.errors();
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.to_string(), "email: is not valid, age: must be at least 18");
/// assert_eq!(errors.join("\n"), "email: is not valid\nage: must be at least 18");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Errors(Vec<FieldError>);

impl Errors {
    /// Create an empty error list.
    pub fn new() -> Self {
        Errors(Vec::new())
    }

    /// Number of recorded errors.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no errors are recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the errors in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// View the errors as a slice.
    pub fn as_slice(&self) -> &[FieldError] {
        &self.0
    }

    /// Iterate over the errors recorded for `field`, in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid::Validator;
    ///
    /// let mut v = Validator::new();
    /// v.check("password", [(false, "is too short")]);
    /// v.check("email", [(false, "is not valid")]);
    /// v.check("password", [(false, "must contain a digit")]);
    ///
    /// let messages: Vec<_> = v.errors().field("password").map(|e| e.message()).collect();
    /// assert_eq!(messages, vec!["is too short", "must contain a digit"]);
    /// ```
    pub fn field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.0.iter().filter(move |error| error.field == field)
    }

    /// Render every error as `"<field>: <message>"`, joined by `separator`.
    pub fn join(&self, separator: &str) -> String {
        let mut out = String::new();
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            out.push_str(&error.field);
            out.push_str(": ");
            out.push_str(&error.message);
        }
        out
    }

    pub(crate) fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(DEFAULT_SEPARATOR)?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl StdError for Errors {}

impl Semigroup for Errors {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Errors(self.0.combine(other.0))
    }
}

impl From<Vec<FieldError>> for Errors {
    fn from(errors: Vec<FieldError>) -> Self {
        Errors(errors)
    }
}

impl FromIterator<FieldError> for Errors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Errors(iter.into_iter().collect())
    }
}

impl IntoIterator for Errors {
    type Item = FieldError;
    type IntoIter = vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a FieldError;
    type IntoIter = slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Accumulator of field errors for one validation pass.
///
/// Created empty, mutated only by [`check`](Validator::check) and
/// [`merge`](Validator::merge), then queried and discarded. There is no
/// internal synchronization; validate on separate threads with one
/// `Validator` each and merge the results afterward.
///
/// # Examples
///
/// ```
/// use valid::{predicate::*, Case, Validator};
///
/// let mut v = Validator::new();
/// v.check("age", [Case::new(min(21, 18), "must be at least 18")]);
///
/// assert!(v.valid());
/// assert!(v.errors().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validator {
    errors: Errors,
}

impl Validator {
    /// Create a validator with no errors.
    pub fn new() -> Self {
        Validator {
            errors: Errors::new(),
        }
    }

    /// Check a field against a list of pre-evaluated cases.
    ///
    /// The first case whose condition is `false` records a [`FieldError`]
    /// with its message, and later cases are not inspected. If every
    /// condition holds, or there are no cases, nothing is recorded.
    ///
    /// `cases` can be anything iterable over [`Case`] or `(bool, message)`
    /// tuples.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid::{predicate::*, Validator};
    ///
    /// let code = "12a";
    ///
    /// let mut v = Validator::new();
    /// v.check("code", [
    ///     (not_empty(code), "must not be empty"),
    ///     (is_number(code), "must be numeric"),
    ///     (max_length(code, 2), "must be at most 2 characters"),
    /// ]);
    ///
    /// // Only the first failure is recorded
    /// assert_eq!(v.errors().to_string(), "code: must be numeric");
    /// ```
    pub fn check<I>(&mut self, field: impl Into<String>, cases: I)
    where
        I: IntoIterator,
        I::Item: Into<Case>,
    {
        let failed = cases.into_iter().map(Into::<Case>::into).find(Case::is_failure);

        if let Some(case) = failed {
            let error = FieldError {
                field: field.into(),
                message: case.message,
            };

            #[cfg(feature = "tracing")]
            tracing::debug!(
                field = %error.field,
                message = %error.message,
                "field validation failed"
            );

            self.errors.push(error);
        }
    }

    /// True when no errors have been recorded.
    #[inline]
    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The errors recorded so far.
    #[inline]
    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    /// Consume the validator, returning its errors.
    pub fn into_errors(self) -> Errors {
        self.errors
    }

    /// Consume the validator, returning `Ok(())` if it is valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid::Validator;
    ///
    /// let mut v = Validator::new();
    /// v.check("name", [(false, "must not be empty")]);
    ///
    /// let err = v.into_result().unwrap_err();
    /// assert_eq!(err.to_string(), "name: must not be empty");
    /// ```
    pub fn into_result(self) -> Result<(), Errors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }

    /// Append another validator's errors after this one's.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::thread;
    /// use valid::{predicate::*, Validator};
    ///
    /// let name = thread::spawn(|| {
    ///     let mut v = Validator::new();
    ///     v.check("name", [(not_empty(""), "must not be empty")]);
    ///     v
    /// });
    ///
    /// let mut v = Validator::new();
    /// v.check("age", [(min(12, 18), "must be at least 18")]);
    /// v.merge(name.join().unwrap());
    ///
    /// assert_eq!(v.errors().to_string(), "age: must be at least 18, name: must not be empty");
    /// ```
    pub fn merge(&mut self, other: Validator) {
        #[cfg(feature = "tracing")]
        tracing::trace!(count = other.errors.len(), "merging validator errors");

        let errors = std::mem::take(&mut self.errors);
        self.errors = errors.combine(other.errors);
    }
}

//! String predicates
//!
//! Length predicates count Unicode scalar values (`char`s), not bytes, so
//! multi-byte UTF-8 text is measured the way a reader would count it.
//! Prefix, suffix and emptiness checks are byte-exact and case-sensitive.

use chrono::DateTime;
use regex::Regex;

/// Check if a string has zero length.
///
/// # Example
///
/// ```rust
/// use valid::predicate::*;
///
/// assert!(empty(""));
/// assert!(!empty(" "));
/// ```
#[inline]
pub fn empty(value: &str) -> bool {
    value.is_empty()
}

/// Check if a string has at least one byte.
///
/// Always the negation of [`empty`].
///
/// # Example
///
/// ```rust
/// use valid::predicate::*;
///
/// assert!(not_empty("hello"));
/// assert!(!not_empty(""));
/// ```
#[inline]
pub fn not_empty(value: &str) -> bool {
    !empty(value)
}

/// Check if a string begins with `prefix`.
///
/// # Example
///
/// ```rust
/// use valid::predicate::*;
///
/// assert!(starts_with("https://example.com", "https"));
/// assert!(!starts_with("hello world", "Hello"));
/// ```
#[inline]
pub fn starts_with(value: &str, prefix: &str) -> bool {
    value.starts_with(prefix)
}

/// Check if a string ends with `suffix`.
///
/// # Example
///
/// ```rust
/// use valid::predicate::*;
///
/// assert!(ends_with("main.rs", ".rs"));
/// assert!(!ends_with("hello world", "World"));
/// ```
#[inline]
pub fn ends_with(value: &str, suffix: &str) -> bool {
    value.ends_with(suffix)
}

/// Check if a string is at most `max` characters long.
///
/// # Example
///
/// ```rust
/// use valid::predicate::*;
///
/// assert!(max_length("やばい", 3));  // 3 chars, 9 bytes
/// assert!(!max_length("やばい", 2));
/// ```
#[inline]
pub fn max_length(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}

/// Check if a string is at least `min` characters long.
///
/// # Example
///
/// ```rust
/// use valid::predicate::*;
///
/// assert!(min_length("やばい", 3));
/// assert!(!min_length("asdf", 5));
/// ```
#[inline]
pub fn min_length(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// Check if a string's character count is within `[min, max]`.
///
/// This is exactly `min_length(value, min) && max_length(value, max)`.
/// Bounds are not checked against each other, so `min > max` is never
/// satisfied rather than rejected.
///
/// # Example
///
/// ```rust
/// use valid::predicate::*;
///
/// assert!(range_length("hello", 5, 8));
/// assert!(range_length("some text", 3, 9));
/// assert!(!range_length("やばい", 1, 2));
/// ```
#[inline]
pub fn range_length(value: &str, min: usize, max: usize) -> bool {
    min_length(value, min) && max_length(value, max)
}

/// Check if `pattern` matches anywhere in the string.
///
/// The match is unanchored unless the pattern anchors itself.
///
/// # Example
///
/// ```rust
/// use regex::Regex;
/// use valid::predicate::*;
///
/// let digits = Regex::new("[0-9]+").unwrap();
/// assert!(matches("abc123", &digits));
/// assert!(!matches("abc", &digits));
/// ```
#[inline]
pub fn matches(value: &str, pattern: &Regex) -> bool {
    pattern.is_match(value)
}

/// Check if a string is made only of ASCII decimal digits.
///
/// The empty string is not a number.
///
/// # Example
///
/// ```rust
/// use valid::predicate::*;
///
/// assert!(is_number("1234567890"));
/// assert!(!is_number("12a"));
/// assert!(!is_number(""));
/// ```
#[inline]
pub fn is_number(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Check if a string is an RFC 3339 timestamp such as `2024-03-18T13:34:15Z`.
///
/// The date and time must be separated by `T` or `t`; a space is rejected.
///
/// # Example
///
/// ```rust
/// use valid::predicate::*;
///
/// assert!(is_date("2024-03-18T13:34:15Z"));
/// assert!(is_date("2024-03-18T13:34:15+09:00"));
/// assert!(!is_date("2024-03-18"));
/// assert!(!is_date("2024-03-18 13:34:15Z"));
/// assert!(!is_date(""));
/// ```
pub fn is_date(value: &str) -> bool {
    // chrono also accepts a space separator, which RFC 3339 does not
    let separator_ok = value
        .as_bytes()
        .get(10)
        .is_some_and(|b| matches!(b, b'T' | b't'));

    separator_ok && DateTime::parse_from_rfc3339(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(empty(""));
        assert!(!empty("hello world"));
    }

    #[test]
    fn test_not_empty() {
        assert!(not_empty("hello world"));
        assert!(!not_empty(""));
    }

    #[test]
    fn test_empty_counts_bytes_not_graphemes() {
        // Combining acute accent alone is still one non-empty char
        assert!(!empty("\u{301}"));
    }

    #[test]
    fn test_starts_with() {
        assert!(starts_with("hello world", "hello"));
        assert!(!starts_with("hello world", "Hello"));
        assert!(starts_with("hello", ""));
    }

    #[test]
    fn test_starts_with_longer_prefix() {
        assert!(!starts_with("he", "hello"));
    }

    #[test]
    fn test_ends_with() {
        assert!(ends_with("hello world", "world"));
        assert!(!ends_with("hello world", "World"));
        assert!(!ends_with("ld", "world"));
    }

    #[test]
    fn test_max_length() {
        assert!(max_length("asdf", 5));
        assert!(max_length("asdf", 4));
        assert!(!max_length("asdfasdfasdf", 6));
    }

    #[test]
    fn test_min_length() {
        assert!(!min_length("asdf", 5));
        assert!(min_length("asdf", 4));
        assert!(min_length("asdfasdfasdf", 6));
    }

    #[test]
    fn test_length_counts_chars() {
        let s = "やばい";
        assert_eq!(s.len(), 9);
        assert!(max_length(s, 3));
        assert!(!max_length(s, 2));
        assert!(min_length(s, 3));
        assert!(!min_length(s, 4));
    }

    #[test]
    fn test_range_length() {
        assert!(range_length("123", 1, 4));
        assert!(range_length("boom!", 5, 9));
        assert!(range_length("hello", 5, 8));
        assert!(range_length("some text", 3, 9));
        assert!(!range_length("toolong", 1, 3));
    }

    #[test]
    fn test_range_length_utf8() {
        assert!(range_length("やばい", 3, 6));
        assert!(!range_length("やばい", 1, 2));
        assert!(range_length("やばい", 3, 10));
        assert!(range_length("やばい", 2, 3));
    }

    #[test]
    fn test_range_length_inverted_bounds() {
        // No bounds validation: inverted range is just an unsatisfiable conjunction
        assert!(!range_length("abc", 5, 1));
        assert!(!range_length("", 1, 0));
    }

    #[test]
    fn test_matches() {
        let numbers = Regex::new(r"[0-9]+").unwrap();
        assert!(matches("5432", &numbers));
        assert!(matches("abc5", &numbers));
        assert!(!matches("abc", &numbers));

        let upper = Regex::new(r"^\P{L}*\p{Lu}\P{Ll}*$").unwrap();
        assert!(matches("HELLO WORLD", &upper));
        assert!(!matches("hello", &upper));
    }

    #[test]
    fn test_is_number() {
        assert!(is_number("1234567890"));
        assert!(!is_number("!p4ssw0rd"));
        assert!(!is_number(""));
        assert!(!is_number("-1"));
        assert!(!is_number("1.5"));
    }

    #[test]
    fn test_is_number_rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not ASCII
        assert!(!is_number("١٢٣"));
    }

    #[test]
    fn test_is_date() {
        assert!(is_date("2024-03-18T13:34:15Z"));
        assert!(is_date("2024-03-18T13:34:15.123+02:00"));
        assert!(!is_date(""));
        assert!(!is_date("202aana"));
        assert!(!is_date("2024-13-18T13:34:15Z"));
    }

    #[test]
    fn test_is_date_separator() {
        assert!(is_date("2024-03-18t13:34:15Z"));
        assert!(!is_date("2024-03-18 13:34:15Z"));
        assert!(!is_date("2024-03-18_13:34:15Z"));
    }

    #[test]
    fn test_is_date_rejects_impossible_values() {
        assert!(!is_date("2024-02-30T00:00:00Z"));
        assert!(!is_date("2024-03-18T13:34:15.Z"));
    }
}

//! Sequence and string helpers.
//!
//! Small unary functions that are convenient building blocks for
//! composition: each takes its argument by value and returns a new value, so
//! they slot directly into [`compose!`](crate::compose!) or, for
//! [`first`], into [`try_compose!`](crate::try_compose!).

/// Error returned by [`first`] when the sequence has no elements.
///
/// # Examples
///
/// ```rust
/// use flowright::sequence::EmptySequenceError;
///
/// assert_eq!(
///     EmptySequenceError.to_string(),
///     "sequence is empty: there is no first element"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptySequenceError;

impl std::fmt::Display for EmptySequenceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "sequence is empty: there is no first element")
    }
}

impl std::error::Error for EmptySequenceError {}

/// Returns the items in reverse order.
///
/// # Examples
///
/// ```
/// use flowright::sequence::reverse;
///
/// assert_eq!(reverse(vec!["one", "two", "three"]), vec!["three", "two", "one"]);
/// ```
pub fn reverse<T>(mut items: Vec<T>) -> Vec<T> {
    items.reverse();
    items
}

/// Returns the first item.
///
/// # Errors
///
/// Returns [`EmptySequenceError`] if `items` is empty.
///
/// # Examples
///
/// ```
/// use flowright::sequence::{EmptySequenceError, first};
///
/// assert_eq!(first(vec![3, 2, 1]), Ok(3));
/// assert_eq!(first(Vec::<i32>::new()), Err(EmptySequenceError));
/// ```
pub fn first<T>(items: Vec<T>) -> Result<T, EmptySequenceError> {
    items.into_iter().next().ok_or(EmptySequenceError)
}

/// Returns the text in uppercase, following Unicode case mapping.
///
/// # Examples
///
/// ```
/// use flowright::sequence::to_upper;
///
/// assert_eq!(to_upper("three".to_string()), "THREE");
/// assert_eq!(to_upper("straße".to_string()), "STRASSE");
/// ```
#[allow(clippy::needless_pass_by_value)]
pub fn to_upper(text: String) -> String {
    text.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_empty() {
        assert_eq!(reverse(Vec::<u8>::new()), Vec::<u8>::new());
    }

    #[test]
    fn test_first_takes_ownership_of_head() {
        let words = vec![String::from("head"), String::from("tail")];
        assert_eq!(first(words), Ok(String::from("head")));
    }

    #[test]
    fn test_to_upper_keeps_non_letters() {
        assert_eq!(to_upper("a1-b2".to_string()), "A1-B2");
    }
}

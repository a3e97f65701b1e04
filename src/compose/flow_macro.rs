//! The `flow!` macro for left-to-right function composition.

/// Composes functions from left to right.
///
/// `flow!(f, g, h)(x)` is equivalent to `h(g(f(x)))`, and therefore to
/// `compose!(h, g, f)(x)`. Unlike a pipeline that applies functions to a
/// value immediately, `flow!` builds a reusable function.
///
/// # Syntax
///
/// - `flow!()` - The [`identity`](crate::compose::identity) function
/// - `flow!(f)` - Returns `f` unchanged
/// - `flow!(f, g, ...)` - Returns `|x| ...g(f(x))`
///
/// # Examples
///
/// ```
/// use flowright::flow;
///
/// fn trim(text: String) -> String { text.trim().to_string() }
/// fn length(text: String) -> usize { text.len() }
/// fn is_short(count: usize) -> bool { count < 5 }
///
/// let short_after_trim = flow!(trim, length, is_short);
/// assert!(short_after_trim("  abc  ".to_string()));
/// assert!(!short_after_trim("abcdef".to_string()));
/// ```
///
/// ## Equivalence with compose
///
/// ```
/// use flowright::{compose, flow};
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// assert_eq!(flow!(f, g, h)(10), compose!(h, g, f)(10));
/// ```
#[macro_export]
macro_rules! flow {
    () => {
        $crate::compose::identity
    };

    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let remaining_flowed = $crate::flow!($($remaining_functions),+);
        move |input| remaining_flowed(first(input))
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_flow_empty_is_identity() {
        let flowed = flow!();
        assert_eq!(flowed(7), 7);
    }

    #[test]
    fn test_flow_two() {
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        let flowed = flow!(add_one, double);
        assert_eq!(flowed(5), 12);
    }

    #[test]
    fn test_flow_three_with_type_changes() {
        let to_string = |x: i32| x.to_string();
        let length = |text: String| text.len();
        let is_even = |count: usize| count % 2 == 0;
        let flowed = flow!(to_string, length, is_even);
        assert!(flowed(1234));
        assert!(!flowed(123));
    }
}

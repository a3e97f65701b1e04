//! The `try_compose!` macro for right-to-left composition of fallible functions.

/// Composes fallible functions from right to left.
///
/// Every function takes one argument and returns `Result<_, E>` with the same
/// error type `E`. `try_compose!(f, g, h)(x)` is equivalent to
/// `h(x).and_then(g).and_then(f)`.
///
/// The first `Err` is returned exactly as the failing function produced it,
/// and none of the functions to its left are called.
///
/// Infallible functions can join the chain through
/// [`lift`](crate::compose::lift).
///
/// # Syntax
///
/// - `try_compose!()` - [`try_identity`](crate::compose::try_identity), which wraps its input in `Ok`
/// - `try_compose!(f)` - Returns `f` unchanged
/// - `try_compose!(f, g, ...)` - Returns `|x| g(x).and_then(f)`, and so on
///
/// # Examples
///
/// ```
/// use flowright::try_compose;
///
/// fn parse(text: &str) -> Result<i32, String> {
///     text.parse().map_err(|_| format!("not a number: {text}"))
/// }
///
/// fn positive(number: i32) -> Result<i32, String> {
///     if number > 0 { Ok(number) } else { Err(format!("not positive: {number}")) }
/// }
///
/// let parse_positive = try_compose!(positive, parse);
///
/// assert_eq!(parse_positive("42"), Ok(42));
/// assert_eq!(parse_positive("-1"), Err("not positive: -1".to_string()));
/// assert_eq!(parse_positive("x"), Err("not a number: x".to_string()));
/// ```
#[macro_export]
macro_rules! try_compose {
    () => {
        $crate::compose::try_identity
    };

    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::try_compose!($($remaining_functions),+);
        move |input| inner_composed(input).and_then(&outer)
    }};
}

//! The `compose!` macro for right-to-left function composition.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is equivalent to `f(g(h(x)))`: the rightmost
/// function is applied first and each result is passed to the function on
/// its left.
///
/// # Syntax
///
/// - `compose!()` - The [`identity`](crate::compose::identity) function
/// - `compose!(f)` - Returns `f` unchanged
/// - `compose!(f, g)` - Returns `|x| f(g(x))`
/// - `compose!(f, g, h, ...)` - Composes any number of functions
///
/// # Type Requirements
///
/// All functions must implement [`Fn`]. The output type of each function must
/// match the input type of the function on its left. A mismatch is a compile
/// error, not a run-time failure.
///
/// A panic raised by any function unwinds through the composed closure
/// unchanged, and functions to its left are not called.
///
/// # Examples
///
/// ```
/// use flowright::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn square(x: i32) -> i32 { x * x }
///
/// // add_one(double(square(3))) = add_one(double(9)) = add_one(18) = 19
/// let composed = compose!(add_one, double, square);
/// assert_eq!(composed(3), 19);
/// ```
///
/// ## Types change along the chain
///
/// ```
/// use flowright::compose;
///
/// let reverse = |mut words: Vec<String>| { words.reverse(); words };
/// let first = |words: Vec<String>| words.into_iter().next().unwrap_or_default();
/// let to_upper = |word: String| word.to_uppercase();
///
/// let shout_last = compose!(to_upper, first, reverse);
///
/// let words = vec!["one".to_string(), "two".to_string(), "three".to_string()];
/// assert_eq!(shout_last(words), "THREE");
/// ```
///
/// ## Composing nothing
///
/// ```
/// use flowright::compose;
///
/// let nothing = compose!();
/// assert_eq!(nothing(42), 42);
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        $crate::compose::identity
    };

    ($function:expr $(,)?) => {
        $function
    };

    // compose!(f, g, h, ...) = compose!(f, compose!(g, h, ...))
    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}

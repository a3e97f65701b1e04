//! Helper functions for function composition.
//!
//! - [`identity`]: The unit of composition, returned by `compose!()` and `flow!()`
//! - [`try_identity`]: The unit of fallible composition, returned by `try_compose!()`
//! - [`lift`]: Makes an infallible function usable inside `try_compose!`

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// - `compose!(identity, f)` is equivalent to `f`
/// - `compose!(f, identity)` is equivalent to `f`
/// - `compose!()` is `identity`
///
/// # Examples
///
/// ```
/// use flowright::compose::identity;
/// use flowright::compose;
///
/// fn double(x: i32) -> i32 { x * 2 }
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(compose!(identity, double)(5), double(5));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Wraps the value in `Ok`.
///
/// This is the identity of fallible composition: composing it with any
/// fallible `f` on either side behaves like `f`.
///
/// # Examples
///
/// ```
/// use flowright::compose::try_identity;
///
/// let result: Result<i32, String> = try_identity(7);
/// assert_eq!(result, Ok(7));
/// ```
#[inline]
pub const fn try_identity<T, E>(value: T) -> Result<T, E> {
    Ok(value)
}

/// Turns an infallible function into one returning `Ok`.
///
/// The error type `E` is chosen by the surrounding fallible chain.
///
/// # Examples
///
/// ```
/// use flowright::compose::lift;
/// use flowright::try_compose;
///
/// fn checked_half(x: i32) -> Result<i32, String> {
///     if x % 2 == 0 { Ok(x / 2) } else { Err(format!("{x} is odd")) }
/// }
///
/// let half_then_increment = try_compose!(lift(|x: i32| x + 1), checked_half);
///
/// assert_eq!(half_then_increment(10), Ok(6));
/// assert_eq!(half_then_increment(7), Err("7 is odd".to_string()));
/// ```
#[inline]
pub fn lift<A, B, E, F>(function: F) -> impl Fn(A) -> Result<B, E>
where
    F: Fn(A) -> B,
{
    move |input| Ok(function(input))
}

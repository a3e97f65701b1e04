//! Right-to-left composition of a run-time list of fallible functions.

use smallvec::SmallVec;

use super::composition::INLINE_FUNCTIONS;

type BoxedTryFunction<'a, T, E> = Box<dyn Fn(T) -> Result<T, E> + 'a>;

/// An ordered list of `T -> Result<T, E>` functions applied right-to-left.
///
/// The fallible counterpart of [`Composition`](super::Composition).
/// [`apply`](Self::apply) threads the value from the last function to the
/// first and returns the first `Err` unchanged. Functions declared before
/// the failing one are not called.
///
/// # Examples
///
/// ```
/// use flowright::compose::TryComposition;
///
/// let checked = TryComposition::new()
///     .then(|x: u8| x.checked_mul(2).ok_or("overflow in double"))
///     .then(|x: u8| x.checked_add(100).ok_or("overflow in add"));
///
/// assert_eq!(checked.apply(10), Ok(220));
/// assert_eq!(checked.apply(100), Err("overflow in double"));
/// assert_eq!(checked.apply(200), Err("overflow in add"));
/// ```
pub struct TryComposition<'a, T, E> {
    functions: SmallVec<[BoxedTryFunction<'a, T, E>; INLINE_FUNCTIONS]>,
}

impl<'a, T, E> TryComposition<'a, T, E> {
    /// Creates an empty composition, which wraps its input in `Ok`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            functions: SmallVec::new(),
        }
    }

    /// Creates a composition from functions in declaration order.
    pub fn from_functions<I, F>(functions: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Fn(T) -> Result<T, E> + 'a,
    {
        functions.into_iter().fold(Self::new(), Self::then)
    }

    /// Appends a function as the new last element, which runs first.
    pub fn push<F>(&mut self, function: F)
    where
        F: Fn(T) -> Result<T, E> + 'a,
    {
        self.functions.push(Box::new(function));
    }

    /// Builder form of [`push`](Self::push).
    #[must_use]
    pub fn then<F>(mut self, function: F) -> Self
    where
        F: Fn(T) -> Result<T, E> + 'a,
    {
        self.push(function);
        self
    }

    /// Returns the number of composed functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Returns `true` if no function has been composed.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Applies the composed functions to `value`, last function first.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by a composed function, unchanged.
    pub fn apply(&self, value: T) -> Result<T, E> {
        self.functions
            .iter()
            .rev()
            .try_fold(value, |accumulator, function| function(accumulator))
    }

    /// Converts the composition into a plain closure.
    pub fn into_fn(self) -> impl Fn(T) -> Result<T, E> + 'a
    where
        T: 'a,
        E: 'a,
    {
        move |value| self.apply(value)
    }
}

impl<T, E> Default for TryComposition<'_, T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> std::fmt::Debug for TryComposition<'_, T, E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("TryComposition")
            .field("functions", &self.functions.len())
            .finish()
    }
}

impl<'a, T, E> FromIterator<BoxedTryFunction<'a, T, E>> for TryComposition<'a, T, E> {
    fn from_iter<I: IntoIterator<Item = BoxedTryFunction<'a, T, E>>>(iterator: I) -> Self {
        Self {
            functions: iterator.into_iter().collect(),
        }
    }
}

impl<'a, T, E> Extend<BoxedTryFunction<'a, T, E>> for TryComposition<'a, T, E> {
    fn extend<I: IntoIterator<Item = BoxedTryFunction<'a, T, E>>>(&mut self, iterator: I) {
        self.functions.extend(iterator);
    }
}

//! Right-to-left composition of a run-time list of functions.
//!
//! [`compose!`](crate::compose!) needs every function at compile time. When
//! the number of steps is only known at run time (read from configuration,
//! built in a loop, filtered by a flag), [`Composition`] holds them instead.
//! All functions share the type `T -> T`.

use smallvec::SmallVec;

/// Number of functions stored inline before spilling to the heap.
pub(super) const INLINE_FUNCTIONS: usize = 4;

type BoxedFunction<'a, T> = Box<dyn Fn(T) -> T + 'a>;

/// An ordered list of `T -> T` functions applied right-to-left.
///
/// For functions `[f1, f2, ..., fn]` in declaration order,
/// [`apply`](Self::apply) computes `f1(f2(...fn(value)))`. An empty
/// composition is the identity.
///
/// Applying a composition never modifies it, so it can be applied any number
/// of times with the same result for the same input.
///
/// # Examples
///
/// ```
/// use flowright::compose::Composition;
///
/// let composition = Composition::new()
///     .then(|x: i32| x + 1)
///     .then(|x: i32| x * 2);
///
/// // (x * 2) + 1
/// assert_eq!(composition.apply(5), 11);
/// assert_eq!(composition.apply(5), 11);
/// ```
pub struct Composition<'a, T> {
    functions: SmallVec<[BoxedFunction<'a, T>; INLINE_FUNCTIONS]>,
}

impl<'a, T> Composition<'a, T> {
    /// Creates an empty composition, which behaves as the identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowright::compose::Composition;
    ///
    /// let empty: Composition<'_, &str> = Composition::new();
    /// assert!(empty.is_empty());
    /// assert_eq!(empty.apply("same"), "same");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            functions: SmallVec::new(),
        }
    }

    /// Creates a composition from functions in declaration order.
    ///
    /// The first function of the iterator is applied last.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowright::compose::Composition;
    ///
    /// let offsets = [1, 10, 100];
    /// let composition = Composition::from_functions(
    ///     offsets.iter().map(|offset| move |x: i32| x * 2 + offset),
    /// );
    ///
    /// // ((0 * 2 + 100) * 2 + 10) * 2 + 1
    /// assert_eq!(composition.apply(0), 421);
    /// ```
    pub fn from_functions<I, F>(functions: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Fn(T) -> T + 'a,
    {
        functions.into_iter().fold(Self::new(), Self::then)
    }

    /// Appends a function as the new last element.
    ///
    /// The last function is the innermost one: it runs first on
    /// [`apply`](Self::apply).
    pub fn push<F>(&mut self, function: F)
    where
        F: Fn(T) -> T + 'a,
    {
        self.functions.push(Box::new(function));
    }

    /// Builder form of [`push`](Self::push).
    #[must_use]
    pub fn then<F>(mut self, function: F) -> Self
    where
        F: Fn(T) -> T + 'a,
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
    /// A panic in any function propagates unchanged, and the functions
    /// declared before it are not called.
    pub fn apply(&self, value: T) -> T {
        self.functions
            .iter()
            .rev()
            .fold(value, |accumulator, function| function(accumulator))
    }

    /// Converts the composition into a plain closure.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowright::compose::Composition;
    ///
    /// let shout = Composition::new()
    ///     .then(|text: String| format!("{text}!"))
    ///     .then(|text: String| text.to_uppercase())
    ///     .into_fn();
    ///
    /// let shouted: Vec<String> = vec!["hi".to_string(), "yo".to_string()]
    ///     .into_iter()
    ///     .map(shout)
    ///     .collect();
    /// assert_eq!(shouted, vec!["HI!", "YO!"]);
    /// ```
    pub fn into_fn(self) -> impl Fn(T) -> T + 'a
    where
        T: 'a,
    {
        move |value| self.apply(value)
    }
}

impl<T> Default for Composition<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Composition<'_, T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Composition")
            .field("functions", &self.functions.len())
            .finish()
    }
}

impl<'a, T> FromIterator<BoxedFunction<'a, T>> for Composition<'a, T> {
    fn from_iter<I: IntoIterator<Item = BoxedFunction<'a, T>>>(iterator: I) -> Self {
        Self {
            functions: iterator.into_iter().collect(),
        }
    }
}

impl<'a, T> Extend<BoxedFunction<'a, T>> for Composition<'a, T> {
    fn extend<I: IntoIterator<Item = BoxedFunction<'a, T>>>(&mut self, iterator: I) {
        self.functions.extend(iterator);
    }
}

/// Composes any number of `T -> T` functions right-to-left into a closure.
///
/// `compose_all([f1, f2, ..., fn])(x)` is `f1(f2(...fn(x)))`. An empty input
/// yields the identity.
///
/// # Examples
///
/// ```
/// use flowright::compose::compose_all;
///
/// let add = |amount: i32| move |x: i32| x + amount;
/// let composed = compose_all((1..=4).map(add));
/// assert_eq!(composed(0), 10);
///
/// let nothing = compose_all(Vec::<fn(i32) -> i32>::new());
/// assert_eq!(nothing(9), 9);
/// ```
pub fn compose_all<'a, T, I, F>(functions: I) -> impl Fn(T) -> T + 'a
where
    T: 'a,
    I: IntoIterator<Item = F>,
    F: Fn(T) -> T + 'a,
{
    Composition::from_functions(functions).into_fn()
}

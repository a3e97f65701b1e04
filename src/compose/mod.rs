//! Function composition utilities.
//!
//! This module chains unary functions into a single callable. It covers the
//! `flowRight` pattern (right-to-left, mathematical composition) and its
//! `flow` counterpart (left-to-right, data flow order).
//!
//! # Overview
//!
//! - [`compose!`]: Compose functions right-to-left
//! - [`flow!`]: Compose functions left-to-right
//! - [`try_compose!`]: Compose fallible functions right-to-left, stopping at the first error
//! - [`Composition`]: Right-to-left composition of a run-time list of `T -> T` functions
//! - [`TryComposition`]: The fallible form of [`Composition`]
//! - [`compose_all`]: Compose any iterable of `T -> T` functions into a closure
//!
//! # Helper Functions
//!
//! - [`identity`]: The identity function, the result of composing nothing
//! - [`try_identity`]: The identity of fallible composition
//! - [`lift`]: Turns an infallible function into a fallible one
//!
//! # Examples
//!
//! ## Function Composition (right-to-left)
//!
//! ```
//! use flowright::compose;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // compose!(f, g)(x) = f(g(x))
//! let composed = compose!(add_one, double);
//! assert_eq!(composed(5), 11);
//! ```
//!
//! ## Flow (left-to-right)
//!
//! ```
//! use flowright::flow;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // flow!(f, g)(x) = g(f(x))
//! let flowed = flow!(add_one, double);
//! assert_eq!(flowed(5), 12);
//! ```
//!
//! ## Run-time composition
//!
//! ```
//! use flowright::compose::Composition;
//!
//! let steps: Vec<i32> = vec![1, 2, 3];
//! let composition: Composition<'_, i32> = steps
//!     .into_iter()
//!     .map(|step| Box::new(move |x: i32| x * 10 + step) as Box<dyn Fn(i32) -> i32>)
//!     .collect();
//!
//! // The last function runs first: ((0 * 10 + 3) * 10 + 2) * 10 + 1
//! assert_eq!(composition.apply(0), 321);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(f, g, h) == compose!(compose!(f, g), h)`
//! - **Left Identity**: `compose!(identity, f) == f`
//! - **Right Identity**: `compose!(f, identity) == f`
//! - **Empty Composition**: `compose!()(x) == x`
//! - **Flow Duality**: `flow!(f, g, h) == compose!(h, g, f)`

mod compose_macro;
mod composition;
mod flow_macro;
mod try_compose_macro;
mod try_composition;
mod utils;

pub use composition::{Composition, compose_all};
pub use try_composition::TryComposition;
pub use utils::{identity, lift, try_identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::flow;
pub use crate::try_compose;

//! # flowright
//!
//! Function composition for Rust in the style of `flowRight` / `flow` from
//! functional-programming utility libraries.
//!
//! ## Overview
//!
//! - **Composition**: [`compose!`] chains functions right-to-left,
//!   [`flow!`] chains them left-to-right, [`try_compose!`] chains fallible
//!   functions and stops at the first error.
//! - **Run-time composition**: [`compose::Composition`] and
//!   [`compose::TryComposition`] hold a list of functions whose length is
//!   only known at run time.
//! - **Sequence helpers**: [`sequence::reverse`], [`sequence::first`] and
//!   [`sequence::to_upper`].
//!
//! ## Feature Flags
//!
//! - `compose`: Function composition utilities
//! - `sequence`: Sequence and string helpers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use flowright::prelude::*;
//!
//! let shout_last = try_compose!(lift(to_upper), first, lift(reverse));
//!
//! let words = vec!["one".to_string(), "two".to_string(), "three".to_string()];
//! assert_eq!(shout_last(words), Ok("THREE".to_string()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use flowright::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "sequence")]
pub mod sequence;

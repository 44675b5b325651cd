//! Algebraic abstractions used to combine accumulated arguments.
//!
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! The dictionary merge curry folds its collected inputs with
//! [`Monoid::combine_all`], so any monoid (not only
//! [`Dictionary`](crate::value::Dictionary)) can be accumulated.
//!
//! # Examples
//!
//! ```rust
//! use keyword_curry::dictionary;
//! use keyword_curry::typeclass::{Monoid, Semigroup};
//! use keyword_curry::value::Dictionary;
//!
//! let merged = Dictionary::combine_all([
//!     dictionary! { "one" => 1 },
//!     dictionary! { "two" => 2 },
//! ]);
//! assert_eq!(merged, dictionary! { "one" => 1, "two" => 2 });
//!
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//! ```

mod monoid;
mod semigroup;

pub use monoid::Monoid;
pub use semigroup::Semigroup;

//! # keyword-curry
//!
//! Keyword-aware partial application for Rust.
//!
//! ## Overview
//!
//! Classical currying only counts positional arguments. This library curries
//! callables that also declare **named** parameters: a curried wrapper can be
//! called any number of times with partial argument sets, and it forwards to
//! the target only once every required positional value and every required
//! named key has been supplied.
//!
//! - **Signature classification**: [`signature::classify`] reduces declared
//!   parameters to an arity and a set of required named keys
//! - **Keyword currying**: [`keyword::curry`] accumulates positional and
//!   named arguments across calls
//! - **Merge currying**: [`merge::merge_curry`] collects `n` dictionaries and
//!   calls its target with their left-to-right merge
//! - **Persistent state**: every partial call returns a fresh, independent
//!   wrapper; nothing is mutated in place
//!
//! ## Feature Flags
//!
//! - `keyword`: Signature classification and keyword currying
//! - `merge`: Merge currying
//! - `serde`: Serialization of values, dictionaries and signatures
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use keyword_curry::prelude::*;
//! use keyword_curry::{args, dictionary};
//!
//! let area = Target::new(
//!     ParameterList::new()
//!         .positional("width")
//!         .named_required("height")
//!         .named_optional("unit"),
//!     |arguments: Arguments| {
//!         let width = arguments.positional_value(0).and_then(Value::as_integer).unwrap_or(0);
//!         let height = arguments.named_value("height").and_then(Value::as_integer).unwrap_or(0);
//!         width * height
//!     },
//! );
//!
//! let pending = curry(area).call(args![3]).unwrap().partial().unwrap();
//! let result = pending.call_named(dictionary! { "height" => 4 }).unwrap();
//! assert_eq!(result.complete(), Some(12));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// The version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use keyword_curry::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::CurryError;
    pub use crate::step::Step;
    pub use crate::typeclass::{Monoid, Semigroup};
    pub use crate::value::{Dictionary, Key, Value};

    #[cfg(feature = "keyword")]
    pub use crate::ext::KeywordCurryExt;
    #[cfg(feature = "keyword")]
    pub use crate::keyword::{KeywordCurry, Rejected, curry};
    #[cfg(feature = "keyword")]
    pub use crate::signature::{Arity, ParameterList, Signature, classify};
    #[cfg(feature = "keyword")]
    pub use crate::target::{Arguments, Target};

    #[cfg(feature = "merge")]
    pub use crate::ext::HashCurryExt;
    #[cfg(feature = "merge")]
    pub use crate::merge::{MergeCurry, merge_curry};
}

pub mod error;
pub mod ext;
pub mod step;
pub mod typeclass;
pub mod value;

#[cfg(feature = "keyword")]
pub mod keyword;

#[cfg(feature = "keyword")]
pub mod signature;

#[cfg(feature = "keyword")]
pub mod target;

#[cfg(feature = "merge")]
pub mod merge;

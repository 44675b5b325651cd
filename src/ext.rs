//! Opt-in method syntax for currying.
//!
//! Importing these traits gives targets and plain functions `.keyword_curry()`
//! and `.hash_curry(count)` methods. Nothing is installed globally; the
//! behavior exists only where the trait is in scope.
//!
//! # Examples
//!
//! ```rust
//! use keyword_curry::dictionary;
//! use keyword_curry::ext::HashCurryExt;
//! use keyword_curry::value::Dictionary;
//!
//! let count_keys = (|merged: Dictionary| merged.len()).hash_curry(2);
//! let count_keys = count_keys.call([dictionary! { "one" => 1 }]).partial().unwrap();
//! assert_eq!(count_keys.call([dictionary! { "two" => 2 }]).complete(), Some(2));
//! ```

#[cfg(feature = "keyword")]
use crate::keyword::KeywordCurry;
#[cfg(feature = "merge")]
use crate::merge::MergeCurry;
#[cfg(feature = "keyword")]
use crate::target::Target;
#[cfg(feature = "merge")]
use crate::typeclass::Monoid;

/// Adds `.keyword_curry()` to [`Target`].
#[cfg(feature = "keyword")]
pub trait KeywordCurryExt<R> {
    /// Curries `self`; see [`crate::keyword::curry`].
    fn keyword_curry(self) -> KeywordCurry<R>;
}

#[cfg(feature = "keyword")]
impl<R> KeywordCurryExt<R> for Target<R> {
    fn keyword_curry(self) -> KeywordCurry<R> {
        KeywordCurry::new(self)
    }
}

/// Adds `.hash_curry(count)` to every function of one monoid value.
#[cfg(feature = "merge")]
pub trait HashCurryExt<M, R> {
    /// Curries `self` over `count` merged inputs; see [`crate::merge::merge_curry`].
    fn hash_curry(self, count: usize) -> MergeCurry<R, M>;
}

#[cfg(feature = "merge")]
impl<F, M, R> HashCurryExt<M, R> for F
where
    F: Fn(M) -> R + 'static,
    M: Monoid + Clone,
{
    fn hash_curry(self, count: usize) -> MergeCurry<R, M> {
        MergeCurry::new(self, count)
    }
}

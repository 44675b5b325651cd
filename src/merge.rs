//! N-ary merge currying.
//!
//! [`merge_curry`] wraps a function of one [`Dictionary`] so that it can be
//! fed several dictionaries, over as many calls as convenient. Once at least
//! `count` dictionaries have arrived they are merged left to right (later
//! keys overwrite earlier ones) and the function is called with the result.
//!
//! The wrapper is generic over any [`Monoid`], with [`Dictionary`] as the
//! default, because the merge is nothing more than [`Monoid::combine_all`].
//!
//! # Examples
//!
//! ```rust
//! use keyword_curry::dictionary;
//! use keyword_curry::merge::merge_curry;
//! use keyword_curry::value::Dictionary;
//!
//! let curried = merge_curry(|merged: Dictionary| merged, 3);
//!
//! let curried = curried.call([dictionary! { "overwrite_me" => "a" }]).partial().unwrap();
//! let curried = curried.call([dictionary! { "other" => "b" }]).partial().unwrap();
//! let merged = curried
//!     .call([dictionary! { "overwrite_me" => "c" }])
//!     .complete()
//!     .unwrap();
//!
//! assert_eq!(merged, dictionary! { "other" => "b", "overwrite_me" => "c" });
//! ```

use std::fmt;
use std::rc::Rc;

use crate::step::Step;
use crate::typeclass::Monoid;
use crate::value::Dictionary;

/// A persistent accumulator of `count` monoid values.
pub struct MergeCurry<R, M = Dictionary> {
    function: Rc<dyn Fn(M) -> R>,
    collected: Rc<Vec<M>>,
    count: usize,
}

/// Curries `function` over `count` merged inputs. See the [module documentation](self).
///
/// A `count` of zero dispatches on the first call.
pub fn merge_curry<R, M, F>(function: F, count: usize) -> MergeCurry<R, M>
where
    F: Fn(M) -> R + 'static,
    M: Monoid + Clone,
{
    MergeCurry::new(function, count)
}

impl<R, M> MergeCurry<R, M>
where
    M: Monoid + Clone,
{
    /// Creates a wrapper with nothing collected yet.
    pub fn new<F>(function: F, count: usize) -> Self
    where
        F: Fn(M) -> R + 'static,
    {
        Self {
            function: Rc::new(function),
            collected: Rc::default(),
            count,
        }
    }

    /// Returns the number of inputs required before dispatch.
    #[inline]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns the inputs collected so far, in arrival order.
    #[inline]
    pub fn collected(&self) -> &[M] {
        &self.collected
    }

    /// Returns how many more inputs are needed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.count.saturating_sub(self.collected.len())
    }

    /// Appends every supplied input, then dispatches if enough have arrived.
    ///
    /// All inputs of the completing call are merged, even beyond `count`.
    pub fn call<I>(mut self, inputs: I) -> Step<Self, R>
    where
        I: IntoIterator<Item = M>,
    {
        let mut inputs = inputs.into_iter().peekable();
        if inputs.peek().is_some() {
            Rc::make_mut(&mut self.collected).extend(inputs);
        }

        if self.collected.len() < self.count {
            tracing::trace!(
                collected = self.collected.len(),
                count = self.count,
                "awaiting merge inputs"
            );
            return Step::Partial(self);
        }

        tracing::debug!(
            collected = self.collected.len(),
            count = self.count,
            "dispatching merged input"
        );
        let merged = M::combine_all(Rc::unwrap_or_clone(self.collected));
        Step::Complete((self.function)(merged))
    }

    /// Calls the wrapper with a single input.
    pub fn call_one(self, input: M) -> Step<Self, R> {
        self.call([input])
    }
}

impl<R, M> Clone for MergeCurry<R, M> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
            collected: Rc::clone(&self.collected),
            count: self.count,
        }
    }
}

impl<R, M: fmt::Debug> fmt::Debug for MergeCurry<R, M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MergeCurry")
            .field("collected", &self.collected)
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}

//! The outcome of a single curried call.
//!
//! Every invocation of a curry wrapper either needs more input, and hands
//! back a new wrapper, or has dispatched to the target and hands back its
//! result. [`Step`] names those two cases.
//!
//! # Examples
//!
//! ```rust
//! use keyword_curry::step::Step;
//!
//! let pending: Step<&str, i32> = Step::Partial("more please");
//! let done: Step<&str, i32> = Step::Complete(42);
//!
//! assert!(pending.is_partial());
//! assert_eq!(done.complete(), Some(42));
//! ```

/// Either a wrapper awaiting more input or the target's result.
///
/// # Type Parameters
///
/// * `W` - The wrapper type returned while input is still missing
/// * `R` - The target callable's return type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step<W, R> {
    /// More input is needed; call the wrapper again.
    Partial(W),
    /// The target was dispatched and returned this value.
    Complete(R),
}

impl<W, R> Step<W, R> {
    /// Returns `true` if more input is needed.
    #[inline]
    pub const fn is_partial(&self) -> bool {
        matches!(self, Self::Partial(_))
    }

    /// Returns `true` if the target was dispatched.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// Returns the wrapper, discarding a completed result.
    pub fn partial(self) -> Option<W> {
        match self {
            Self::Partial(wrapper) => Some(wrapper),
            Self::Complete(_) => None,
        }
    }

    /// Returns the completed result, discarding a pending wrapper.
    pub fn complete(self) -> Option<R> {
        match self {
            Self::Partial(_) => None,
            Self::Complete(result) => Some(result),
        }
    }

    /// Maps the completed result, leaving a pending wrapper untouched.
    pub fn map_complete<T, F>(self, function: F) -> Step<W, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Partial(wrapper) => Step::Partial(wrapper),
            Self::Complete(result) => Step::Complete(function(result)),
        }
    }

    /// Maps the pending wrapper, leaving a completed result untouched.
    pub fn map_partial<V, F>(self, function: F) -> Step<V, R>
    where
        F: FnOnce(W) -> V,
    {
        match self {
            Self::Partial(wrapper) => Step::Partial(function(wrapper)),
            Self::Complete(result) => Step::Complete(result),
        }
    }

    /// Collapses both cases into one value.
    pub fn fold<T, F, G>(self, partial_function: F, complete_function: G) -> T
    where
        F: FnOnce(W) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Partial(wrapper) => partial_function(wrapper),
            Self::Complete(result) => complete_function(result),
        }
    }
}

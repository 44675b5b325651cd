//! Keyword-aware currying.
//!
//! [`curry`] turns a [`Target`] into a [`KeywordCurry`] wrapper. Each call
//! of the wrapper either returns a new wrapper, while input is still
//! missing, or dispatches to the target once every required positional and
//! named parameter has been supplied.
//!
//! # Protocol
//!
//! A target without required named parameters is curried classically:
//! positional values are collected, left to right, until the fixed arity is
//! reached (a variadic target dispatches on the first call).
//!
//! A target with required named parameters goes through two stages:
//!
//! 1. **Positional extraction.** With a fixed arity `k`, calls fill the `k`
//!    positional slots; the call that fills the last slot hands the entry
//!    following it, if any, to the keyword stage. With a variadic arity,
//!    the first call is split: a trailing dictionary is named input and the
//!    rest is positional. With `k = 0` this stage is skipped.
//! 2. **Keyword accumulation.** Every later call must supply exactly one
//!    dictionary. It is merged into the named arguments collected so far,
//!    later keys overwriting earlier ones. Once no required key is
//!    outstanding the target is dispatched.
//!
//! A dictionary that lands in a positional slot is a positional value; it
//! cannot be told apart from named input by shape alone.
//!
//! # Persistence
//!
//! Wrappers are immutable snapshots. `call` consumes the wrapper it is
//! invoked on, so a dispatched wrapper cannot be called again; clone a
//! wrapper to branch, and the branches never observe each other. A
//! rejected call hands the wrapper back inside [`Rejected`], holding the
//! state it had before the call.
//!
//! # Examples
//!
//! ```rust
//! use keyword_curry::keyword::curry;
//! use keyword_curry::signature::ParameterList;
//! use keyword_curry::target::{Arguments, Target};
//! use keyword_curry::value::Key;
//! use keyword_curry::{args, dictionary};
//!
//! let target = Target::new(
//!     ParameterList::new()
//!         .positional("pos1")
//!         .positional("pos2")
//!         .named_required("key1")
//!         .named_required("key2"),
//!     |arguments: Arguments| arguments,
//! );
//!
//! let curried = curry(target);
//! let curried = curried.call(args![1, 2]).unwrap().partial().unwrap();
//! let curried = curried.call_named(dictionary! { "key1" => 3 }).unwrap().partial().unwrap();
//! assert_eq!(curried.outstanding(), vec![Key::from("key2")]);
//!
//! let arguments = curried
//!     .call_named(dictionary! { "key2" => 4 })
//!     .unwrap()
//!     .complete()
//!     .unwrap();
//! assert_eq!(arguments.positional(), &args![1, 2][..]);
//! assert_eq!(arguments.named(), &dictionary! { "key1" => 3, "key2" => 4 });
//! ```

use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::error::{ArgumentShape, CurryError};
use crate::signature::{Arity, Signature};
use crate::step::Step;
use crate::target::{Arguments, Target};
use crate::value::{Dictionary, Key, Value};

/// Positional values kept inline before spilling to the heap.
const INLINE_POSITIONAL: usize = 4;

type Positional = SmallVec<[Value; INLINE_POSITIONAL]>;

/// Which stage the next call is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Positional,
    Keyword,
}

/// The state accumulated along one curry chain.
#[derive(Clone)]
struct Accumulation {
    positional: Rc<Positional>,
    named: Dictionary,
    stage: Stage,
}

impl Accumulation {
    fn initial(signature: &Signature) -> Self {
        let stage = if signature.requires_named()
            && signature.positional_arity() == Arity::Fixed(0)
        {
            Stage::Keyword
        } else {
            Stage::Positional
        };
        Self {
            positional: Rc::default(),
            named: Dictionary::new(),
            stage,
        }
    }

    fn append_positional<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = Value>,
    {
        let mut values = values.into_iter().peekable();
        if values.peek().is_some() {
            Rc::make_mut(&mut self.positional).extend(values);
        }
    }
}

/// The result of a curried call.
pub type CurryResult<R> = Result<Step<KeywordCurry<R>, R>, Rejected<R>>;

/// A call the wrapper refused, together with the wrapper as it was before.
///
/// A rejected call changes nothing: the returned wrapper holds exactly the
/// state it held before the call and can be called again.
#[derive(thiserror::Error)]
#[error("{error}")]
pub struct Rejected<R> {
    error: CurryError,
    wrapper: KeywordCurry<R>,
}

impl<R> Rejected<R> {
    /// Returns the reason the call was refused.
    #[inline]
    pub const fn error(&self) -> &CurryError {
        &self.error
    }

    /// Returns the wrapper, unchanged by the refused call.
    pub fn into_wrapper(self) -> KeywordCurry<R> {
        self.wrapper
    }

    /// Splits into the error and the unchanged wrapper.
    pub fn into_parts(self) -> (CurryError, KeywordCurry<R>) {
        (self.error, self.wrapper)
    }
}

impl<R> From<Rejected<R>> for CurryError {
    fn from(rejected: Rejected<R>) -> Self {
        rejected.error
    }
}

impl<R> fmt::Debug for Rejected<R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Rejected")
            .field("error", &self.error)
            .field("wrapper", &self.wrapper)
            .finish()
    }
}

/// A persistent partial application of a [`Target`].
pub struct KeywordCurry<R> {
    target: Target<R>,
    state: Accumulation,
}

/// Curries a target. See the [module documentation](self).
pub fn curry<R>(target: Target<R>) -> KeywordCurry<R> {
    KeywordCurry::new(target)
}

impl<R> KeywordCurry<R> {
    /// Creates a wrapper with nothing collected yet.
    pub fn new(target: Target<R>) -> Self {
        let state = Accumulation::initial(target.signature());
        Self { target, state }
    }

    /// Returns the target's signature.
    #[inline]
    pub const fn signature(&self) -> &Signature {
        self.target.signature()
    }

    /// Returns the curried target.
    #[inline]
    pub const fn target(&self) -> &Target<R> {
        &self.target
    }

    /// Returns the positional values collected so far.
    #[inline]
    pub fn collected_positional(&self) -> &[Value] {
        &self.state.positional
    }

    /// Returns the named values collected so far.
    #[inline]
    pub const fn collected_named(&self) -> &Dictionary {
        &self.state.named
    }

    /// Returns `true` while calls are still routed to positional extraction.
    #[inline]
    pub fn is_collecting_positional(&self) -> bool {
        self.state.stage == Stage::Positional
    }

    /// Returns the required named keys not yet bound, in declaration order.
    pub fn outstanding(&self) -> Vec<Key> {
        self.state.named.missing(self.signature().required_named())
    }

    /// Calls the wrapper with a raw argument list.
    ///
    /// # Errors
    ///
    /// Returns [`Rejected`] carrying [`CurryError::ArgumentKind`] when a call
    /// that must supply a single dictionary of named arguments supplies
    /// anything else. The rejection hands back this wrapper unchanged.
    pub fn call<I>(self, arguments: I) -> CurryResult<R>
    where
        I: IntoIterator<Item = Value>,
    {
        let arguments: Vec<Value> = arguments.into_iter().collect();

        if !self.signature().requires_named() {
            return Ok(self.curry_positional(arguments));
        }

        match self.state.stage {
            Stage::Positional => self.extract_positional(arguments),
            Stage::Keyword => match self.expect_dictionary(arguments) {
                Ok(named) => Ok(self.accumulate_named(&named)),
                Err(error) => Err(Rejected {
                    error,
                    wrapper: self,
                }),
            },
        }
    }

    /// Calls the wrapper with a single dictionary of named arguments.
    ///
    /// # Errors
    ///
    /// See [`KeywordCurry::call`].
    pub fn call_named(self, named: Dictionary) -> CurryResult<R> {
        self.call([Value::Dictionary(named)])
    }

    /// Classical currying for targets without required named parameters.
    fn curry_positional(mut self, arguments: Vec<Value>) -> Step<Self, R> {
        match self.signature().positional_arity() {
            Arity::Variadic => {
                let (positional, named) = split_trailing_dictionary(arguments);
                self.state.append_positional(positional);
                self.dispatch(named)
            }
            Arity::Fixed(arity) => {
                let remaining = arity.saturating_sub(self.state.positional.len());
                let mut arguments = arguments.into_iter();
                self.state.append_positional(arguments.by_ref().take(remaining));

                if self.state.positional.len() < arity {
                    tracing::trace!(
                        target_callable = %self.target,
                        collected = self.state.positional.len(),
                        arity,
                        "awaiting positional arguments"
                    );
                    return Step::Partial(self);
                }

                let named = match arguments.next() {
                    Some(Value::Dictionary(named)) => named,
                    _ => Dictionary::new(),
                };
                self.dispatch(named)
            }
        }
    }

    /// Positional extraction for targets with required named parameters.
    fn extract_positional(mut self, arguments: Vec<Value>) -> CurryResult<R> {
        match self.signature().positional_arity() {
            Arity::Variadic => {
                let (positional, named) = split_trailing_dictionary(arguments);
                self.state.append_positional(positional);
                self.state.stage = Stage::Keyword;
                Ok(self.accumulate_named(&named))
            }
            Arity::Fixed(arity) => {
                let remaining = arity.saturating_sub(self.state.positional.len());
                let mut arguments = arguments.into_iter();
                let filling: Vec<Value> = arguments.by_ref().take(remaining).collect();

                if filling.len() < remaining {
                    self.state.append_positional(filling);
                    tracing::trace!(
                        target_callable = %self.target,
                        collected = self.state.positional.len(),
                        arity,
                        "awaiting positional arguments"
                    );
                    return Ok(Step::Partial(self));
                }

                // Nothing is appended until the hand-off entry is known to be valid.
                let named = match arguments.next() {
                    None => Dictionary::new(),
                    Some(Value::Dictionary(named)) => named,
                    Some(other) => {
                        let error = self.argument_kind_error(ArgumentShape::Single(other.kind()));
                        return Err(Rejected {
                            error,
                            wrapper: self,
                        });
                    }
                };
                self.state.append_positional(filling);
                self.state.stage = Stage::Keyword;
                Ok(self.accumulate_named(&named))
            }
        }
    }

    /// Requires the call to consist of exactly one dictionary.
    fn expect_dictionary(&self, mut arguments: Vec<Value>) -> Result<Dictionary, CurryError> {
        let shape = match arguments.len() {
            0 => ArgumentShape::Nothing,
            1 => match arguments.pop() {
                Some(Value::Dictionary(named)) => return Ok(named),
                Some(other) => ArgumentShape::Single(other.kind()),
                None => ArgumentShape::Nothing,
            },
            count => ArgumentShape::Several(count),
        };
        Err(self.argument_kind_error(shape))
    }

    fn argument_kind_error(&self, found: ArgumentShape) -> CurryError {
        let outstanding = self.outstanding();
        tracing::debug!(
            target_callable = %self.target,
            %found,
            outstanding = ?outstanding,
            "rejected non-dictionary named input"
        );
        CurryError::ArgumentKind { found, outstanding }
    }

    /// Keyword accumulation: merge, then dispatch or wait.
    fn accumulate_named(mut self, named: &Dictionary) -> Step<Self, R> {
        let merged = self.state.named.merge(named);
        if merged.missing(self.signature().required_named()).is_empty() {
            return self.dispatch(merged);
        }

        self.state.named = merged;
        tracing::trace!(
            target_callable = %self.target,
            collected = self.state.positional.len(),
            outstanding = ?self.outstanding(),
            "awaiting named arguments"
        );
        Step::Partial(self)
    }

    fn dispatch(self, named: Dictionary) -> Step<Self, R> {
        let Self { target, state } = self;
        let positional = Rc::unwrap_or_clone(state.positional).into_vec();
        tracing::debug!(
            target_callable = %target,
            positional = positional.len(),
            named = ?named.keys().collect::<Vec<_>>(),
            "dispatching curried call"
        );
        Step::Complete(target.invoke(Arguments::new(positional, named)))
    }
}

/// Splits off a trailing dictionary as named input.
fn split_trailing_dictionary(mut arguments: Vec<Value>) -> (Vec<Value>, Dictionary) {
    match arguments.pop() {
        Some(Value::Dictionary(named)) => (arguments, named),
        Some(other) => {
            arguments.push(other);
            (arguments, Dictionary::new())
        }
        None => (arguments, Dictionary::new()),
    }
}

impl<R> Clone for KeywordCurry<R> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
            state: self.state.clone(),
        }
    }
}

impl<R> fmt::Debug for KeywordCurry<R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("KeywordCurry")
            .field("target", &self.target)
            .field("collected_positional", &self.collected_positional())
            .field("collected_named", &self.state.named)
            .field("stage", &self.state.stage)
            .finish()
    }
}

static_assertions::assert_not_impl_any!(KeywordCurry<i32>: Send, Sync);

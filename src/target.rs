//! Target callables and the arguments they are dispatched with.
//!
//! A [`Target`] bundles a function with the parameters it declares. The
//! declaration is classified once, when the target is built, so the curry
//! engine never has to inspect the function itself.
//!
//! # Examples
//!
//! ```rust
//! use keyword_curry::dictionary;
//! use keyword_curry::signature::ParameterList;
//! use keyword_curry::target::{Arguments, Target};
//!
//! let greet = Target::new(
//!     ParameterList::new().positional("name").named_required("greeting"),
//!     |arguments: Arguments| {
//!         format!(
//!             "{}, {}",
//!             arguments.named_value("greeting").and_then(|value| value.as_text()).unwrap_or("?"),
//!             arguments.positional_value(0).and_then(|value| value.as_text()).unwrap_or("?"),
//!         )
//!     },
//! );
//!
//! let message = greet.invoke(Arguments::new(
//!     vec!["world".into()],
//!     dictionary! { "greeting" => "hello" },
//! ));
//! assert_eq!(message, "hello, world");
//! assert_eq!(greet.arity(), 1);
//! ```

use std::fmt;
use std::rc::Rc;

use crate::signature::{ParameterList, Signature};
use crate::value::{Dictionary, Key, Value};

// =============================================================================
// Arguments
// =============================================================================

/// The complete argument set a target is dispatched with.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Arguments {
    positional: Vec<Value>,
    named: Dictionary,
}

impl Arguments {
    /// Creates an argument set.
    pub const fn new(positional: Vec<Value>, named: Dictionary) -> Self {
        Self { positional, named }
    }

    /// Returns the positional values in order.
    #[inline]
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    /// Returns the named values.
    #[inline]
    pub const fn named(&self) -> &Dictionary {
        &self.named
    }

    /// Returns the positional value at `index`.
    pub fn positional_value(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    /// Returns the named value bound to `key`.
    pub fn named_value(&self, key: &str) -> Option<&Value> {
        self.named.get(key)
    }

    /// Splits the argument set into its positional and named parts.
    pub fn into_parts(self) -> (Vec<Value>, Dictionary) {
        (self.positional, self.named)
    }
}

// =============================================================================
// Target
// =============================================================================

type Function<R> = Rc<dyn Fn(Arguments) -> R>;

/// A callable together with its classified signature.
///
/// Cloning a target is cheap; clones share the same function.
pub struct Target<R> {
    function: Function<R>,
    parameters: ParameterList,
    signature: Signature,
    label: Option<Key>,
}

impl<R> Target<R> {
    /// Creates a target from its declared parameters and its function.
    pub fn new<F>(parameters: ParameterList, function: F) -> Self
    where
        F: Fn(Arguments) -> R + 'static,
    {
        let signature = Signature::classify(parameters.as_slice());
        Self {
            function: Rc::new(function),
            parameters,
            signature,
            label: None,
        }
    }

    /// Attaches a human-readable label, used in diagnostics.
    #[must_use]
    pub fn labelled(mut self, label: impl Into<Key>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the label, if one was attached.
    #[inline]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the declared parameters.
    #[inline]
    pub const fn parameters(&self) -> &ParameterList {
        &self.parameters
    }

    /// Returns the classified signature.
    #[inline]
    pub const fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Returns the signed arity; see [`Signature::signed_arity`].
    pub fn arity(&self) -> isize {
        self.signature.signed_arity()
    }

    /// Calls the target directly, bypassing currying.
    pub fn invoke(&self, arguments: Arguments) -> R {
        (self.function)(arguments)
    }
}

impl<R> Clone for Target<R> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
            parameters: self.parameters.clone(),
            signature: self.signature.clone(),
            label: self.label.clone(),
        }
    }
}

impl<R> fmt::Debug for Target<R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Target")
            .field("label", &self.label)
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

impl<R> fmt::Display for Target<R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.label().unwrap_or("<anonymous>"))
    }
}

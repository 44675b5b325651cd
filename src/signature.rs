//! Signature classification.
//!
//! A callable's declared parameters are described once, up front, with a
//! [`ParameterList`]. [`classify`] reduces that list to a [`Signature`]:
//! the positional arity and the named keys that must be bound before the
//! callable can be dispatched.
//!
//! # Examples
//!
//! ```rust
//! use keyword_curry::signature::{Arity, ParameterList, classify};
//! use keyword_curry::value::Key;
//!
//! let parameters = ParameterList::new()
//!     .positional("pos1")
//!     .positional("pos2")
//!     .named_required("key1")
//!     .named_optional("verbose")
//!     .named_required("key2");
//!
//! let signature = classify(parameters.as_slice());
//! assert_eq!(signature.positional_arity(), Arity::Fixed(2));
//! assert_eq!(signature.required_named(), &[Key::from("key1"), Key::from("key2")]);
//! ```

use std::fmt;
use std::rc::Rc;

use crate::value::Key;

// =============================================================================
// Parameters
// =============================================================================

/// The kind of a declared parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ParameterKind {
    /// A positional parameter without a default.
    PositionalRequired,
    /// A positional parameter with a default.
    PositionalOptional,
    /// A rest parameter collecting any number of positional values.
    Rest,
    /// A named parameter without a default.
    NamedRequired,
    /// A named parameter with a default.
    NamedOptional,
    /// A parameter collecting any named values not otherwise declared.
    NamedRest,
    /// A trailing callable parameter.
    Block,
}

/// A single declared parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    kind: ParameterKind,
    name: Key,
}

impl Parameter {
    /// Creates a parameter description.
    pub fn new(kind: ParameterKind, name: impl Into<Key>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    /// Returns the parameter kind.
    #[inline]
    pub const fn kind(&self) -> ParameterKind {
        self.kind
    }

    /// Returns the parameter name.
    #[inline]
    pub const fn name(&self) -> &Key {
        &self.name
    }
}

/// An ordered list of declared parameters, built fluently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ParameterList {
    parameters: Vec<Parameter>,
}

impl ParameterList {
    /// Creates an empty parameter list.
    pub const fn new() -> Self {
        Self {
            parameters: Vec::new(),
        }
    }

    /// Appends a parameter of the given kind.
    #[must_use]
    pub fn with(mut self, kind: ParameterKind, name: impl Into<Key>) -> Self {
        self.parameters.push(Parameter::new(kind, name));
        self
    }

    /// Appends a required positional parameter.
    #[must_use]
    pub fn positional(self, name: impl Into<Key>) -> Self {
        self.with(ParameterKind::PositionalRequired, name)
    }

    /// Appends an optional positional parameter.
    #[must_use]
    pub fn optional(self, name: impl Into<Key>) -> Self {
        self.with(ParameterKind::PositionalOptional, name)
    }

    /// Appends a rest parameter.
    #[must_use]
    pub fn rest(self, name: impl Into<Key>) -> Self {
        self.with(ParameterKind::Rest, name)
    }

    /// Appends a required named parameter.
    #[must_use]
    pub fn named_required(self, name: impl Into<Key>) -> Self {
        self.with(ParameterKind::NamedRequired, name)
    }

    /// Appends an optional named parameter.
    #[must_use]
    pub fn named_optional(self, name: impl Into<Key>) -> Self {
        self.with(ParameterKind::NamedOptional, name)
    }

    /// Appends a named rest parameter.
    #[must_use]
    pub fn named_rest(self, name: impl Into<Key>) -> Self {
        self.with(ParameterKind::NamedRest, name)
    }

    /// Appends a block parameter.
    #[must_use]
    pub fn block(self, name: impl Into<Key>) -> Self {
        self.with(ParameterKind::Block, name)
    }

    /// Returns the parameters as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Returns the number of declared parameters.
    #[inline]
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Returns `true` if no parameters are declared.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl FromIterator<Parameter> for ParameterList {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iterator: I) -> Self {
        Self {
            parameters: iterator.into_iter().collect(),
        }
    }
}

// =============================================================================
// Signature
// =============================================================================

/// The positional arity of a callable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Arity {
    /// Exactly this many positional values are required.
    Fixed(usize),
    /// Any number of positional values is accepted.
    Variadic,
}

impl fmt::Display for Arity {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(count) => write!(formatter, "{count}"),
            Self::Variadic => write!(formatter, "variadic"),
        }
    }
}

/// The shape of a callable's parameters, as far as currying cares.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signature {
    positional_arity: Arity,
    required_positional: usize,
    required_named: Rc<[Key]>,
    optional_named: Rc<[Key]>,
    accepts_any_named: bool,
}

impl Signature {
    /// Classifies a declared parameter list. See [`classify`].
    pub fn classify(parameters: &[Parameter]) -> Self {
        let mut required_positional = 0;
        let mut variadic = false;
        let mut required_named: Vec<Key> = Vec::new();
        let mut optional_named: Vec<Key> = Vec::new();
        let mut accepts_any_named = false;

        for parameter in parameters {
            match parameter.kind {
                ParameterKind::PositionalRequired => required_positional += 1,
                ParameterKind::Rest => variadic = true,
                ParameterKind::NamedRequired => push_unique(&mut required_named, &parameter.name),
                ParameterKind::NamedOptional => push_unique(&mut optional_named, &parameter.name),
                ParameterKind::NamedRest => accepts_any_named = true,
                ParameterKind::PositionalOptional | ParameterKind::Block => {}
            }
        }

        let positional_arity = if variadic {
            Arity::Variadic
        } else {
            Arity::Fixed(required_positional)
        };

        Self {
            positional_arity,
            required_positional,
            required_named: required_named.into(),
            optional_named: optional_named.into(),
            accepts_any_named,
        }
    }

    /// Returns the positional arity.
    #[inline]
    pub const fn positional_arity(&self) -> Arity {
        self.positional_arity
    }

    /// Returns the number of required positional parameters, rest or not.
    #[inline]
    pub const fn required_positional(&self) -> usize {
        self.required_positional
    }

    /// Returns the required named keys in declaration order.
    #[inline]
    pub fn required_named(&self) -> &[Key] {
        &self.required_named
    }

    /// Returns the optional named keys in declaration order.
    #[inline]
    pub fn optional_named(&self) -> &[Key] {
        &self.optional_named
    }

    /// Returns `true` if the callable collects undeclared named values.
    #[inline]
    pub const fn accepts_any_named(&self) -> bool {
        self.accepts_any_named
    }

    /// Returns `true` if at least one named key must be bound before dispatch.
    #[inline]
    pub fn requires_named(&self) -> bool {
        !self.required_named.is_empty()
    }

    /// Returns the signed arity in the classic dynamic-language convention.
    ///
    /// A fixed arity `k` is reported as `k`; a callable with a rest
    /// parameter and `r` required positionals is reported as `-(r + 1)`.
    ///
    /// ```rust
    /// use keyword_curry::signature::{ParameterList, classify};
    ///
    /// let fixed = classify(ParameterList::new().positional("a").as_slice());
    /// let splat = classify(ParameterList::new().positional("a").rest("rest").as_slice());
    ///
    /// assert_eq!(fixed.signed_arity(), 1);
    /// assert_eq!(splat.signed_arity(), -2);
    /// ```
    pub fn signed_arity(&self) -> isize {
        let required = isize::try_from(self.required_positional).unwrap_or(isize::MAX - 1);
        match self.positional_arity {
            Arity::Fixed(_) => required,
            Arity::Variadic => -(required + 1),
        }
    }
}

impl Default for Signature {
    fn default() -> Self {
        Self::classify(&[])
    }
}

fn push_unique(keys: &mut Vec<Key>, name: &Key) {
    if !keys.contains(name) {
        keys.push(name.clone());
    }
}

/// Reduces a declared parameter list to a [`Signature`].
///
/// - The positional arity is the number of required positional parameters,
///   or [`Arity::Variadic`] if a rest parameter is present.
/// - The required named keys are the required named parameters in
///   declaration order, without duplicates.
///
/// Classification cannot fail; an empty list yields `Fixed(0)` with no
/// required keys.
pub fn classify(parameters: &[Parameter]) -> Signature {
    Signature::classify(parameters)
}

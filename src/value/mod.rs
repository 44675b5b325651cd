//! Dynamic argument values.
//!
//! Curried callables accept raw argument lists whose entries may be of any
//! shape. This module provides [`Value`], the dynamic representation of a
//! single argument, and [`Dictionary`], the persistent mapping used to carry
//! named arguments.
//!
//! # Examples
//!
//! ```rust
//! use keyword_curry::dictionary;
//! use keyword_curry::value::{Value, ValueKind};
//!
//! let named = Value::from(dictionary! { "key1" => 1, "key2" => "two" });
//! assert!(named.is_dictionary());
//! assert_eq!(Value::from(42).kind(), ValueKind::Integer);
//! ```

mod dictionary;
#[cfg(feature = "serde")]
mod serde_support;

pub use dictionary::{Dictionary, IntoIter, Iter, Key};

use std::any::Any;
use std::fmt;
use std::rc::Rc;

// =============================================================================
// Value
// =============================================================================

/// A single dynamically typed argument.
///
/// `Dictionary` values are "dictionary-shaped": they are the only values the
/// keyword accumulator accepts as named-argument input.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// The absent value.
    #[default]
    Nil,
    /// A boolean.
    Boolean(bool),
    /// A signed integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// An immutable string.
    Text(Rc<str>),
    /// An immutable list of values.
    List(Rc<[Value]>),
    /// A mapping from keys to values.
    Dictionary(Dictionary),
    /// An arbitrary Rust value, compared by identity.
    Opaque(Opaque),
}

impl Value {
    /// Returns the kind of this value.
    #[inline]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Nil => ValueKind::Nil,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
            Self::List(_) => ValueKind::List,
            Self::Dictionary(_) => ValueKind::Dictionary,
            Self::Opaque(_) => ValueKind::Opaque,
        }
    }

    /// Returns `true` if this value is [`Value::Nil`].
    #[inline]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns `true` if this value is dictionary-shaped.
    #[inline]
    pub const fn is_dictionary(&self) -> bool {
        matches!(self, Self::Dictionary(_))
    }

    /// Returns the contained dictionary, if any.
    #[inline]
    pub const fn as_dictionary(&self) -> Option<&Dictionary> {
        match self {
            Self::Dictionary(dictionary) => Some(dictionary),
            _ => None,
        }
    }

    /// Converts this value into a dictionary, handing the value back on failure.
    ///
    /// # Errors
    ///
    /// Returns the original value when it is not dictionary-shaped.
    pub fn into_dictionary(self) -> Result<Dictionary, Self> {
        match self {
            Self::Dictionary(dictionary) => Ok(dictionary),
            other => Err(other),
        }
    }

    /// Returns the contained integer, if any.
    #[inline]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the contained string slice, if any.
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(&**text),
            _ => None,
        }
    }

    /// Returns the contained opaque handle, if any.
    #[inline]
    pub const fn as_opaque(&self) -> Option<&Opaque> {
        match self {
            Self::Opaque(opaque) => Some(opaque),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(formatter, "nil"),
            Self::Boolean(value) => write!(formatter, "{value}"),
            Self::Integer(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value}"),
            Self::Text(text) => write!(formatter, "{text:?}"),
            Self::List(values) => {
                write!(formatter, "[")?;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{value}")?;
                }
                write!(formatter, "]")
            }
            Self::Dictionary(dictionary) => write!(formatter, "{dictionary}"),
            Self::Opaque(opaque) => write!(formatter, "{opaque:?}"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Nil
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(Rc::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(Rc::from(value))
    }
}

impl From<Rc<str>> for Value {
    fn from(value: Rc<str>) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<Self>> for Value {
    fn from(values: Vec<Self>) -> Self {
        Self::List(Rc::from(values))
    }
}

impl From<Dictionary> for Value {
    fn from(dictionary: Dictionary) -> Self {
        Self::Dictionary(dictionary)
    }
}

impl From<Opaque> for Value {
    fn from(opaque: Opaque) -> Self {
        Self::Opaque(opaque)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nil, Into::into)
    }
}

impl FromIterator<Self> for Value {
    fn from_iter<I: IntoIterator<Item = Self>>(iterator: I) -> Self {
        Self::List(iterator.into_iter().collect())
    }
}

// =============================================================================
// Macro
// =============================================================================

/// Builds an argument list, converting each entry with `Into<Value>`.
///
/// # Examples
///
/// ```rust
/// use keyword_curry::{args, dictionary};
/// use keyword_curry::value::Value;
///
/// let arguments = args![1, "two", dictionary! { "key1" => 3 }];
/// assert_eq!(arguments.len(), 3);
/// assert!(arguments[2].is_dictionary());
///
/// let none: Vec<Value> = args![];
/// assert!(none.is_empty());
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::value::Value>::new()
    };
    ($($argument:expr),+ $(,)?) => {
        ::std::vec![$($crate::value::Value::from($argument)),+]
    };
}

// =============================================================================
// ValueKind
// =============================================================================

/// The kind of a [`Value`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// [`Value::Nil`]
    Nil,
    /// [`Value::Boolean`]
    Boolean,
    /// [`Value::Integer`]
    Integer,
    /// [`Value::Float`]
    Float,
    /// [`Value::Text`]
    Text,
    /// [`Value::List`]
    List,
    /// [`Value::Dictionary`]
    Dictionary,
    /// [`Value::Opaque`]
    Opaque,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nil => "nil",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Text => "text",
            Self::List => "list",
            Self::Dictionary => "dictionary",
            Self::Opaque => "opaque value",
        };
        formatter.write_str(name)
    }
}

// =============================================================================
// Opaque
// =============================================================================

/// A reference-counted handle to an arbitrary Rust value.
///
/// Two handles are equal only when they point at the same allocation, so an
/// opaque argument that reaches the target is observably the very value the
/// caller supplied.
///
/// # Examples
///
/// ```rust
/// use keyword_curry::value::Opaque;
///
/// let handle = Opaque::new(vec![1, 2, 3]);
/// let copy = handle.clone();
///
/// assert_eq!(handle, copy);
/// assert_ne!(handle, Opaque::new(vec![1, 2, 3]));
/// assert_eq!(copy.downcast_ref::<Vec<i32>>(), Some(&vec![1, 2, 3]));
/// ```
#[derive(Clone)]
pub struct Opaque(Rc<dyn Any>);

impl Opaque {
    /// Wraps a value in a new opaque handle.
    pub fn new<T: Any>(value: T) -> Self {
        Self(Rc::new(value))
    }

    /// Wraps an existing shared allocation without copying it.
    pub fn from_rc(value: Rc<dyn Any>) -> Self {
        Self(value)
    }

    /// Returns a reference to the inner value if it is of type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Returns the shared allocation behind this handle.
    pub fn as_rc(&self) -> &Rc<dyn Any> {
        &self.0
    }

    /// Returns `true` if both handles point at the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Opaque {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Opaque({:p})", Rc::as_ptr(&self.0).cast::<()>())
    }
}

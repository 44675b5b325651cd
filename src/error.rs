//! Error types for curried calls.
//!
//! The engines introduce exactly one failure of their own: a call that had
//! to supply a dictionary of named arguments supplied something else.
//! Failures of the target callable are never wrapped; they travel inside the
//! target's own return type.

use std::fmt;

use crate::value::{Key, ValueKind};

/// The shape of the input a keyword accumulator actually received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentShape {
    /// The call carried no arguments at all.
    Nothing,
    /// The call carried a single value of the given kind.
    Single(ValueKind),
    /// The call carried more than one value.
    Several(usize),
}

impl fmt::Display for ArgumentShape {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nothing => write!(formatter, "no arguments"),
            Self::Single(kind) => write!(formatter, "{kind}"),
            Self::Several(count) => write!(formatter, "{count} arguments"),
        }
    }
}

/// Errors raised by the curry engines.
///
/// # Examples
///
/// ```rust
/// use keyword_curry::error::{ArgumentShape, CurryError};
/// use keyword_curry::value::{Key, ValueKind};
///
/// let error = CurryError::ArgumentKind {
///     found: ArgumentShape::Single(ValueKind::Integer),
///     outstanding: vec![Key::from("key1"), Key::from("key2")],
/// };
/// assert_eq!(
///     error.to_string(),
///     "expected a dictionary of named arguments, got integer (missing keywords: key1, key2)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CurryError {
    /// A value supplied where a dictionary of named arguments was required
    /// is not dictionary-shaped.
    #[error(
        "expected a dictionary of named arguments, got {found} (missing keywords: {})",
        join_keys(.outstanding)
    )]
    ArgumentKind {
        /// What the call actually supplied.
        found: ArgumentShape,
        /// Required named keys still unbound, in declaration order.
        outstanding: Vec<Key>,
    },
}

fn join_keys(keys: &[Key]) -> String {
    keys.iter()
        .map(AsRef::<str>::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}

//! Persistent insertion-ordered dictionary.
//!
//! [`Dictionary`] is the carrier for named arguments. It is immutable:
//! `insert` and `merge` return new dictionaries and leave the receiver
//! untouched. Entries live in a shared `SmallVec`; an update clones the
//! storage only when another dictionary still shares it.
//!
//! # Ordering
//!
//! Iteration follows first-insertion order. Overwriting an existing key
//! replaces its value in place, so the key keeps its original position.
//! Equality ignores ordering.
//!
//! # Examples
//!
//! ```rust
//! use keyword_curry::dictionary;
//! use keyword_curry::value::{Dictionary, Value};
//!
//! let first = dictionary! { "overwrite_me" => "a", "other" => "b" };
//! let second = dictionary! { "overwrite_me" => "c" };
//!
//! let merged = first.merge(&second);
//! assert_eq!(merged.get("overwrite_me"), Some(&Value::from("c")));
//! assert_eq!(first.get("overwrite_me"), Some(&Value::from("a")));
//! ```

use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use super::Value;
use crate::typeclass::{Monoid, Semigroup};

/// A named-argument key.
pub type Key = Rc<str>;

/// Entries kept inline before the storage spills to the heap.
const INLINE_ENTRIES: usize = 4;

type Entries = SmallVec<[(Key, Value); INLINE_ENTRIES]>;

/// An immutable mapping from [`Key`]s to [`Value`]s.
#[derive(Clone, Default)]
pub struct Dictionary {
    entries: Rc<Entries>,
}

impl Dictionary {
    /// Creates an empty dictionary.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dictionary containing a single entry.
    pub fn singleton(key: impl Into<Key>, value: impl Into<Value>) -> Self {
        Self::new().insert(key, value)
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the dictionary has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value bound to `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.position(key).map(|index| &self.entries[index].1)
    }

    /// Returns `true` if `key` is bound, whatever its value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Returns a new dictionary with `key` bound to `value`.
    ///
    /// An existing binding is overwritten and keeps its position.
    #[must_use]
    pub fn insert(&self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        let mut result = self.clone();
        result.insert_in_place(key.into(), value.into());
        result
    }

    /// Returns the right-biased union of `self` and `other`.
    ///
    /// Keys present in both take the value from `other`.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        let mut result = self.clone();
        for (key, value) in other.entries.iter() {
            result.insert_in_place(key.clone(), value.clone());
        }
        result
    }

    /// Returns the keys of `required` that are not bound here, in the order given.
    pub fn missing(&self, required: &[Key]) -> Vec<Key> {
        required
            .iter()
            .filter(|key| !self.contains_key(key))
            .cloned()
            .collect()
    }

    /// Iterates over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Returns `true` if both dictionaries share the same storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.entries, &other.entries)
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(existing, _)| existing.as_ref() == key)
    }

    fn insert_in_place(&mut self, key: Key, value: Value) {
        let position = self.position(&key);
        let entries = Rc::make_mut(&mut self.entries);
        match position {
            Some(index) => entries[index].1 = value,
            None => entries.push((key, value)),
        }
    }
}

impl PartialEq for Dictionary {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
            || (self.len() == other.len()
                && self
                    .iter()
                    .all(|(key, value)| other.get(key) == Some(value)))
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl fmt::Display for Dictionary {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        for (index, (key, value)) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

impl<K, V> FromIterator<(K, V)> for Dictionary
where
    K: Into<Key>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iterator: I) -> Self {
        let mut dictionary = Self::new();
        for (key, value) in iterator {
            dictionary.insert_in_place(key.into(), value.into());
        }
        dictionary
    }
}

// =============================================================================
// Iteration
// =============================================================================

/// Borrowing iterator over the entries of a [`Dictionary`].
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, (Key, Value)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Key, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// Owning iterator over the entries of a [`Dictionary`].
pub struct IntoIter {
    inner: smallvec::IntoIter<[(Key, Value); INLINE_ENTRIES]>,
}

impl Iterator for IntoIter {
    type Item = (Key, Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl IntoIterator for Dictionary {
    type Item = (Key, Value);
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: Rc::unwrap_or_clone(self.entries).into_iter(),
        }
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = (&'a Key, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl Semigroup for Dictionary {
    fn combine(self, other: Self) -> Self {
        self.merge(&other)
    }

    fn combine_ref(&self, other: &Self) -> Self {
        self.merge(other)
    }
}

impl Monoid for Dictionary {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Macro
// =============================================================================

/// Builds a [`Dictionary`] from `key => value` pairs.
///
/// Values go through `Into<Value>`, so literals of the common Rust types can
/// be used directly.
///
/// # Examples
///
/// ```rust
/// use keyword_curry::dictionary;
/// use keyword_curry::value::Value;
///
/// let named = dictionary! { "key1" => 1, "key2" => "two" };
/// assert_eq!(named.len(), 2);
/// assert_eq!(named.get("key2"), Some(&Value::from("two")));
///
/// let empty = dictionary! {};
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! dictionary {
    () => {
        $crate::value::Dictionary::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        [$((
            $crate::value::Key::from($key),
            $crate::value::Value::from($value),
        )),+]
        .into_iter()
        .collect::<$crate::value::Dictionary>()
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_is_empty() {
        let dictionary = Dictionary::new();
        assert!(dictionary.is_empty());
        assert_eq!(dictionary.len(), 0);
    }

    #[rstest]
    fn test_insert_preserves_original() {
        let original = Dictionary::singleton("key1", 1);
        let updated = original.insert("key2", 2);

        assert_eq!(original.len(), 1);
        assert!(!original.contains_key("key2"));
        assert_eq!(updated.len(), 2);
        assert_eq!(updated.get("key2"), Some(&Value::Integer(2)));
    }

    #[rstest]
    fn test_overwrite_keeps_first_position() {
        let dictionary = Dictionary::new()
            .insert("overwrite_me", "a")
            .insert("other", "b")
            .insert("overwrite_me", "c");

        let keys: Vec<&str> = dictionary.keys().map(|key| &**key).collect();
        assert_eq!(keys, vec!["overwrite_me", "other"]);
        assert_eq!(dictionary.get("overwrite_me"), Some(&Value::from("c")));
    }

    #[rstest]
    fn test_nil_binding_counts_as_present() {
        let dictionary = Dictionary::singleton("key1", Value::Nil);
        assert!(dictionary.contains_key("key1"));
        assert!(dictionary.missing(&[Key::from("key1")]).is_empty());
    }

    #[rstest]
    fn test_missing_keeps_requested_order() {
        let dictionary = Dictionary::singleton("key2", 2);
        let required = [Key::from("key3"), Key::from("key2"), Key::from("key1")];

        assert_eq!(
            dictionary.missing(&required),
            vec![Key::from("key3"), Key::from("key1")]
        );
    }

    #[rstest]
    fn test_merge_with_empty_shares_storage() {
        let dictionary = Dictionary::singleton("key1", 1);

        assert!(dictionary.merge(&Dictionary::new()).ptr_eq(&dictionary));
        assert!(Dictionary::new().merge(&dictionary).ptr_eq(&dictionary));
    }

    #[rstest]
    fn test_equality_ignores_order() {
        let left = Dictionary::new().insert("a", 1).insert("b", 2);
        let right = Dictionary::new().insert("b", 2).insert("a", 1);
        assert_eq!(left, right);
        assert_ne!(left, right.insert("a", 3));
    }

    #[rstest]
    fn test_display() {
        let dictionary = Dictionary::new().insert("key1", 1).insert("key2", "x");
        assert_eq!(format!("{dictionary}"), r#"{key1: 1, key2: "x"}"#);
    }

    #[rstest]
    fn test_owned_iteration_spills_past_inline_capacity() {
        let dictionary: Dictionary = (0..10).map(|index| (format!("key{index}"), index)).collect();
        let collected: Vec<(Key, Value)> = dictionary.clone().into_iter().collect();

        assert_eq!(collected.len(), 10);
        assert_eq!(collected[9], (Key::from("key9"), Value::Integer(9)));
        assert_eq!(dictionary.len(), 10);
    }
}

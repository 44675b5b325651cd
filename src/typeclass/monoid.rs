//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! Self::empty().combine(a) == a
//! a.combine(Self::empty()) == a
//! ```

use super::Semigroup;

/// A [`Semigroup`] with an identity element.
///
/// # Examples
///
/// ```rust
/// use keyword_curry::typeclass::Monoid;
///
/// assert_eq!(String::empty(), "");
/// assert_eq!(String::combine_all(vec!["a".to_string(), "b".to_string()]), "ab");
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Folds all elements of an iterator left to right, starting from
    /// [`Monoid::empty`].
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_combine_all_of_nothing_is_empty() {
        let nothing: Vec<String> = Vec::new();
        assert_eq!(String::combine_all(nothing), String::empty());
    }

    #[rstest]
    fn test_combine_all_preserves_order() {
        let parts = vec![vec!['a'], vec!['b', 'c'], vec![]];
        assert_eq!(Vec::combine_all(parts), vec!['a', 'b', 'c']);
    }
}

//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! Dictionary merging is associative but not commutative: the right-hand
//! operand wins on key conflicts.

/// A type class for types with an associative binary operation.
///
/// # Examples
///
/// ```rust
/// use keyword_curry::typeclass::Semigroup;
///
/// let a = String::from("foo");
/// let b = String::from("bar");
/// assert_eq!(a.combine(b), "foobar");
/// ```
pub trait Semigroup {
    /// Combines two values into one. Must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all elements of an iterator, left to right.
    ///
    /// Returns `None` if the iterator is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyword_curry::typeclass::Semigroup;
    ///
    /// let parts = vec![vec![1], vec![2, 3]];
    /// assert_eq!(Vec::reduce_all(parts), Some(vec![1, 2, 3]));
    ///
    /// let empty: Vec<Vec<i32>> = vec![];
    /// assert_eq!(Vec::reduce_all(empty), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

impl<T: Clone> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_string_combine_ref_keeps_operands() {
        let left = String::from("key");
        let right = String::from("word");

        assert_eq!(left.combine_ref(&right), "keyword");
        assert_eq!(left, "key");
    }

    #[rstest]
    #[case(vec![vec![1], vec![2], vec![3]], Some(vec![1, 2, 3]))]
    #[case(vec![vec![4]], Some(vec![4]))]
    #[case(vec![], None)]
    fn test_reduce_all(#[case] parts: Vec<Vec<i32>>, #[case] expected: Option<Vec<i32>>) {
        assert_eq!(Vec::reduce_all(parts), expected);
    }
}

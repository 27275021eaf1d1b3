//! Comparators decide where values live in a [`Tree`][crate::Tree].
//!
//! A comparator is fixed when the tree is built and must agree with itself for the whole
//! lifetime of the tree.
//!
//! # Examples
//!
//! ```
//! use std::cmp::Ordering;
//! use observed_bst::compare::{Compare, Natural};
//!
//! assert_eq!(Natural.compare(&1, &2), Ordering::Less);
//!
//! // Any closure over two references is a comparator too.
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! assert_eq!(by_len.compare(&"abc", &"z"), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// A three-way ordering over two values of `T`.
pub trait Compare<T: ?Sized> {
    /// Compares `a` to `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Orders values by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T, F> Compare<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

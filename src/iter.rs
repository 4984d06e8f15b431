//! Randomized iteration over set storage.
//!
//! Sets are unordered, and this crate makes that visible: every iteration
//! and every rendering draws a fresh random permutation of the backing
//! storage. Code that accidentally depends on enumeration order fails fast
//! instead of working by coincidence.
//!
//! - [`Iter`]: a lazy iterator borrowing the set. The borrow keeps the set
//!   from being mutated while iteration is in progress.
//! - [`IntoIter`]: an owned, buffered iterator. It holds its own elements,
//!   so the set it came from may change freely afterwards.

use std::fmt;
use std::iter::FusedIterator;

use rand::Rng;
use rand::seq::SliceRandom;

/// Returns the indices `0..length` in a random order drawn from `random`.
pub(crate) fn random_order<R: Rng + ?Sized>(length: usize, random: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..length).collect();
    order.shuffle(random);
    order
}

/// Writes `{e1 e2 ...}` in the order produced by `elements`.
pub(crate) fn render<'a, T, I>(formatter: &mut fmt::Formatter<'_>, elements: I) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: Iterator<Item = &'a T>,
{
    formatter.write_str("{")?;
    for (position, element) in elements.enumerate() {
        if position > 0 {
            formatter.write_str(" ")?;
        }
        write!(formatter, "{element}")?;
    }
    formatter.write_str("}")
}

/// Adapter rendering a borrowed slice in a caller-chosen order.
pub(crate) struct Rendered<'a, T> {
    pub(crate) elements: &'a [T],
    pub(crate) order: Vec<usize>,
}

impl<T: fmt::Display> fmt::Display for Rendered<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(
            formatter,
            self.order.iter().map(|&index| &self.elements[index]),
        )
    }
}

// =============================================================================
// Iter
// =============================================================================

/// A lazy iterator over the elements of a set, in random order.
///
/// Created by `iter` on [`Set`](crate::Set) and
/// [`ExtendedSet`](crate::ExtendedSet). The permutation is drawn once when
/// the iterator is created; elements are produced one at a time directly
/// from the set's storage.
///
/// # Examples
///
/// ```rust
/// use eqset::extended_set;
///
/// let set = extended_set![1, 2, 3];
/// let mut seen: Vec<i32> = set.iter().copied().collect();
/// seen.sort_unstable();
/// assert_eq!(seen, vec![1, 2, 3]);
/// ```
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    elements: &'a [T],
    order: std::vec::IntoIter<usize>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new<R: Rng + ?Sized>(elements: &'a [T], random: &mut R) -> Self {
        Self {
            elements,
            order: random_order(elements.len(), random).into_iter(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let elements = self.elements;
        self.order.next().map(|index| &elements[index])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.order.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

// =============================================================================
// IntoIter
// =============================================================================

/// An owning iterator over the elements of a set, in random order.
///
/// Produced by consuming a set with `into_iter` or by
/// [`ExtendedSet::iter_buffered`](crate::ExtendedSet::iter_buffered). All
/// elements are buffered up front.
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new<R: Rng + ?Sized>(mut elements: Vec<T>, random: &mut R) -> Self {
        elements.shuffle(random);
        Self {
            inner: elements.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

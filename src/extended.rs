//! The extended set type.
//!
//! This module provides [`ExtendedSet`], which shares the representation of
//! [`Set`] and adds the full set algebra: union, intersection, difference
//! and symmetric difference in both copying and in-place shapes, variadic
//! forms over many sets, subset tests, Cartesian product, filter and map,
//! random extraction, and several iteration protocols.
//!
//! # Copying and in-place operations
//!
//! Algebra methods taking `&self` return a new set and never modify their
//! operands. Methods taking `&mut self` (`add`, `remove`, `clear`, `pop`,
//! `remove_if`, `union_in_place`, `difference_in_place`) change the set in
//! place. A returned set holds clones of the operands' elements; use a
//! shared handle such as `Rc` or `Arc` as the element type when elements
//! should be shared rather than copied.
//!
//! # Alternative algorithms
//!
//! Some operations come in two strategies with identical results:
//!
//! | Build up by inclusion | Copy, then remove          |
//! |-----------------------|----------------------------|
//! | [`difference`]        | [`difference_by_removal`]  |
//! | [`intersection`]      | [`intersection_by_removal`]|
//!
//! [`difference`]: ExtendedSet::difference
//! [`difference_by_removal`]: ExtendedSet::difference_by_removal
//! [`intersection`]: ExtendedSet::intersection
//! [`intersection_by_removal`]: ExtendedSet::intersection_by_removal
//!
//! # Examples
//!
//! ```rust
//! use eqset::extended_set;
//!
//! let odd = extended_set![1, 3, 5, 7];
//! let prime = extended_set![2, 3, 5, 7];
//!
//! assert_eq!(odd.union(&prime), extended_set![1, 2, 3, 5, 7]);
//! assert_eq!(odd.intersection(&prime), extended_set![3, 5, 7]);
//! assert_eq!(odd.difference(&prime), extended_set![1]);
//! assert_eq!(odd.symmetric_difference(&prime), extended_set![1, 2]);
//! assert!(extended_set![3, 5].is_subset(&odd));
//! ```

use std::fmt;
use std::iter::FromIterator;

use rand::Rng;

use crate::basic::{Set, power_set_of};
use crate::element::{Element, OrderedPair};
use crate::iter::{self, IntoIter, Iter, Rendered};

/// A set of elements compared with [`Element::equal`], with the full set
/// algebra.
///
/// `ExtendedSet` implements [`Element`], so extended sets can be elements of
/// extended sets, as in the result of [`power_set`](Self::power_set).
///
/// # Time Complexity
///
/// | Operation              | Complexity  |
/// |------------------------|-------------|
/// | `has_element`          | O(n)        |
/// | `add`                  | O(n)        |
/// | `remove`               | O(n)        |
/// | `pop`                  | O(1)        |
/// | `union`                | O(n · m)    |
/// | `intersection`         | O(n · m)    |
/// | `difference`           | O(n · m)    |
/// | `symmetric_difference` | O(n · m)    |
/// | `cartesian_product`    | O(n · m)    |
/// | `power_set`            | O(n · 2ⁿ)   |
#[derive(Clone)]
pub struct ExtendedSet<T> {
    pub(crate) elements: Vec<T>,
}

impl<T> ExtendedSet<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::ExtendedSet;
    ///
    /// let set: ExtendedSet<i32> = ExtendedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.elements.len()
    }

    /// Returns the number of elements in the set.
    ///
    /// Same as [`cardinality`](Self::cardinality).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set is the empty set.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Removes all elements, leaving the empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::extended_set;
    ///
    /// let mut set = extended_set![1, 2];
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    pub fn clear(&mut self) {
        tracing::trace!(removed = self.elements.len(), "set cleared");
        self.elements.clear();
    }

    /// Returns the backing storage.
    ///
    /// The order of the slice is incidental and may change after any
    /// mutation.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consumes the set and returns its backing storage.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Removes and returns an element chosen uniformly at random.
    ///
    /// Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::extended_set;
    ///
    /// let mut set = extended_set!['a'];
    /// assert_eq!(set.pop(), Some('a'));
    /// assert_eq!(set.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        self.pop_with(&mut rand::rng())
    }

    /// Removes and returns an element chosen with `random`.
    ///
    /// Same as [`pop`](Self::pop) but with a caller-supplied source of
    /// randomness, which makes the choice reproducible.
    pub fn pop_with<R: Rng + ?Sized>(&mut self, random: &mut R) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        let index = random.random_range(0..self.elements.len());
        let element = self.elements.swap_remove(index);
        tracing::trace!(cardinality = self.elements.len(), "element popped");
        Some(element)
    }

    /// Removes every element for which `predicate` returns `true`.
    ///
    /// Returns `true` if any element was removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::extended_set;
    ///
    /// let mut set = extended_set![1, 2, 3, 4];
    /// assert!(set.remove_if(|value| value % 2 == 0));
    /// assert_eq!(set, extended_set![1, 3]);
    /// assert!(!set.remove_if(|value| *value > 10));
    /// ```
    pub fn remove_if<F>(&mut self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.elements.len();
        self.elements.retain(|element| !predicate(element));
        let removed = before - self.elements.len();
        if removed > 0 {
            tracing::trace!(removed, cardinality = self.elements.len(), "elements removed");
        }
        removed > 0
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Returns a lazy iterator over the elements in a fresh random order.
    ///
    /// The iterator reads directly from the set's storage. The set cannot be
    /// modified while the iterator is alive.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.elements, &mut rand::rng())
    }

    /// Returns a lazy iterator whose order is drawn from `random`.
    #[must_use]
    pub fn iter_with<R: Rng + ?Sized>(&self, random: &mut R) -> Iter<'_, T> {
        Iter::new(&self.elements, random)
    }

    /// Returns a stateful cursor producing one element per call.
    ///
    /// The cursor returns `Some(element)` for each element, in a random order
    /// fixed when the cursor is created, and `None` on every call after the
    /// last element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::extended_set;
    ///
    /// let set = extended_set![7];
    /// let mut next = set.cursor();
    /// assert_eq!(next(), Some(&7));
    /// assert_eq!(next(), None);
    /// assert_eq!(next(), None);
    /// ```
    pub fn cursor<'a>(&'a self) -> impl FnMut() -> Option<&'a T> + 'a {
        let mut remaining = self.iter();
        move || remaining.next()
    }

    /// Calls `visitor` on each element, in random order.
    pub fn visit<F>(&self, visitor: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(visitor);
    }

    /// Calls `visitor` on each element, in random order, while it returns
    /// `true`.
    ///
    /// Returns `true` if `visitor` returned `true` for every element. Stops
    /// at the first `false` without visiting the remaining elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::extended_set;
    ///
    /// let set = extended_set![1, 2, 3];
    /// let mut visited = 0;
    /// let all_small = set.visit_while(|_| {
    ///     visited += 1;
    ///     false
    /// });
    /// assert!(!all_small);
    /// assert_eq!(visited, 1);
    /// ```
    pub fn visit_while<F>(&self, mut visitor: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().all(|element| visitor(element))
    }

    /// Renders the set as `{e1 e2 ...}` with the order drawn from `random`.
    #[must_use]
    pub fn render_with<R: Rng + ?Sized>(&self, random: &mut R) -> String
    where
        T: fmt::Display,
    {
        Rendered {
            elements: &self.elements,
            order: iter::random_order(self.elements.len(), random),
        }
        .to_string()
    }
}

impl<T: Clone> ExtendedSet<T> {
    /// Returns an owned iterator over a snapshot of the elements, in a fresh
    /// random order.
    ///
    /// The snapshot is taken when this method is called; later changes to
    /// the set are not reflected in the iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::extended_set;
    ///
    /// let mut set = extended_set![1, 2];
    /// let buffered = set.iter_buffered();
    /// set.clear();
    /// assert_eq!(buffered.count(), 2);
    /// ```
    #[must_use]
    pub fn iter_buffered(&self) -> IntoIter<T> {
        IntoIter::new(self.elements.clone(), &mut rand::rng())
    }
}

impl<T: Element> ExtendedSet<T> {
    /// Creates a set from `elements`, dropping duplicates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::ExtendedSet;
    ///
    /// let set = ExtendedSet::from_elements(["a", "b", "a"]);
    /// assert_eq!(set.cardinality(), 2);
    /// ```
    #[must_use]
    pub fn from_elements<I: IntoIterator<Item = T>>(elements: I) -> Self {
        elements.into_iter().collect()
    }

    /// Returns `true` if the set contains an element equal to `element`.
    ///
    /// See [`contains_all`](Self::contains_all) for several elements at once.
    #[must_use]
    pub fn has_element(&self, element: &T) -> bool {
        self.position(element).is_some()
    }

    /// Returns `true` if the set contains an element equal to `element`.
    ///
    /// Same as [`has_element`](Self::has_element).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::adapters::CaseInsensitive;
    /// use eqset::extended_set;
    ///
    /// let set = extended_set![CaseInsensitive::from("Rust")];
    /// assert!(set.contains(&CaseInsensitive::from("RUST")));
    /// assert!(!set.contains(&CaseInsensitive::from("Go")));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.has_element(element)
    }

    /// Returns `true` if every given element is in the set.
    ///
    /// Returns `true` for no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::extended_set;
    ///
    /// let set = extended_set![1, 2, 3];
    /// assert!(set.contains_all(&[1, 3]));
    /// assert!(!set.contains_all(&[1, 4]));
    /// ```
    #[must_use]
    pub fn contains_all<'a, I>(&self, elements: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        elements
            .into_iter()
            .all(|element| self.has_element(element))
    }

    fn position(&self, element: &T) -> Option<usize> {
        self.elements
            .iter()
            .position(|existing| element.equal(existing))
    }

    /// Adds a single element.
    ///
    /// Returns `true` if the element was added, `false` if an equal element
    /// was already present.
    ///
    /// See [`add_all`](Self::add_all) for several elements.
    pub fn add(&mut self, element: T) -> bool {
        if self.has_element(&element) {
            return false;
        }
        self.elements.push(element);
        tracing::trace!(cardinality = self.elements.len(), "element added");
        true
    }

    /// Adds several elements.
    ///
    /// Returns `true` if any element was added, `false` if all of them were
    /// already present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::extended_set;
    ///
    /// let mut set = extended_set![1];
    /// assert!(set.add_all([1, 2]));
    /// assert!(!set.add_all([2, 1]));
    /// ```
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, elements: I) -> bool {
        elements
            .into_iter()
            .fold(false, |added, element| self.add(element) || added)
    }

    /// Removes the element equal to `element`.
    ///
    /// Returns `true` if it was found and removed. The last element of the
    /// backing storage takes the removed element's place.
    pub fn remove(&mut self, element: &T) -> bool {
        match self.position(element) {
            Some(index) => {
                self.elements.swap_remove(index);
                tracing::trace!(cardinality = self.elements.len(), "element removed");
                true
            }
            None => false,
        }
    }

    /// Returns `true` if every element of `self` is in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::{ExtendedSet, extended_set};
    ///
    /// assert!(extended_set![1, 2].is_subset(&extended_set![1, 2, 3]));
    /// assert!(ExtendedSet::new().is_subset(&extended_set![1]));
    /// assert!(!extended_set![4].is_subset(&extended_set![1]));
    /// ```
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.elements
            .iter()
            .all(|element| other.has_element(element))
    }

    /// Returns `true` if every element of `other` is in `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Removes every element of `other` from `self`.
    ///
    /// Commonly called subtract.
    pub fn difference_in_place(&mut self, other: &Self) {
        for element in &other.elements {
            self.remove(element);
        }
    }
}

impl<T: Element + Clone> ExtendedSet<T> {
    /// Returns the elements of `self` that are not in `other`.
    ///
    /// Starts from the empty set and includes each element of `self` that
    /// `other` lacks.
    ///
    /// See [`difference_by_removal`](Self::difference_by_removal) for the
    /// alternative strategy and [`difference_all`](Self::difference_all) for
    /// several sets.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.retained(|element| !other.has_element(element))
    }

    /// Returns the elements of `self` that are in none of `others`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::extended_set;
    ///
    /// let set = extended_set![1, 2, 3, 4];
    /// let result = set.difference_all([&extended_set![1], &extended_set![3, 9]]);
    /// assert_eq!(result, extended_set![2, 4]);
    /// ```
    #[must_use]
    pub fn difference_all<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
    {
        let others: Vec<&Self> = others.into_iter().collect();
        self.retained(|element| !others.iter().any(|other| other.has_element(element)))
    }

    /// Returns the elements of `self` that are not in `other`.
    ///
    /// Starts from a copy of `self` and removes each element of `other`.
    /// Always equal to [`difference`](Self::difference).
    #[must_use]
    pub fn difference_by_removal(&self, other: &Self) -> Self {
        let mut difference = self.clone();
        difference.difference_in_place(other);
        difference
    }

    /// Returns the elements in exactly one of `self` and `other`.
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut difference = self.clone();
        for element in &other.elements {
            if self.has_element(element) {
                difference.remove(element);
            } else {
                difference.elements.push(element.clone());
            }
        }
        difference
    }

    /// Returns the elements of `self` that are also in `other`.
    ///
    /// Starts from the empty set and includes each element of `self` found
    /// in `other`.
    ///
    /// See [`intersection_by_removal`](Self::intersection_by_removal) for the
    /// alternative strategy and [`intersection_all`](Self::intersection_all)
    /// for several sets.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.retained(|element| other.has_element(element))
    }

    /// Returns the elements of `self` that are also in `other`.
    ///
    /// Starts from a copy of `self` and removes each element not found in
    /// `other`. Always equal to [`intersection`](Self::intersection).
    #[must_use]
    pub fn intersection_by_removal(&self, other: &Self) -> Self {
        let mut intersection = self.clone();
        for element in &self.elements {
            if !other.has_element(element) {
                intersection.remove(element);
            }
        }
        intersection
    }

    /// Returns the elements of `self` that are in every one of `others`.
    ///
    /// With no other sets, returns a copy of `self`.
    #[must_use]
    pub fn intersection_all<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
    {
        let others: Vec<&Self> = others.into_iter().collect();
        self.retained(|element| others.iter().all(|other| other.has_element(element)))
    }

    /// Returns the elements in `self` or `other`.
    ///
    /// See [`union_in_place`](Self::union_in_place) to modify `self` instead
    /// and [`union_all`](Self::union_all) for several sets.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut union = self.clone();
        union.union_in_place(other);
        union
    }

    /// Adds every element of `other` to `self`.
    ///
    /// Commonly called merge.
    pub fn union_in_place(&mut self, other: &Self) {
        for element in &other.elements {
            if !self.has_element(element) {
                self.elements.push(element.clone());
            }
        }
        tracing::trace!(cardinality = self.elements.len(), "sets merged");
    }

    /// Returns the elements in `self` or any of `others`.
    #[must_use]
    pub fn union_all<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
    {
        let mut union = self.clone();
        for other in others {
            union.union_in_place(other);
        }
        union
    }

    /// Returns the elements for which `predicate` returns `true`.
    ///
    /// The order in which `predicate` is called is unspecified.
    #[must_use]
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        self.retained(|element| predicate(element))
    }

    /// Returns the power set: the set of all subsets of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::{ExtendedSet, extended_set};
    ///
    /// let set = extended_set![1, 2, 3];
    /// let power_set = set.power_set();
    /// assert_eq!(power_set.cardinality(), 8);
    /// assert!(power_set.has_element(&ExtendedSet::new()));
    /// assert!(power_set.has_element(&set));
    /// ```
    #[must_use]
    pub fn power_set(&self) -> ExtendedSet<Self> {
        ExtendedSet {
            elements: power_set_of(&self.elements)
                .into_iter()
                .map(|elements| Self { elements })
                .collect(),
        }
    }

    /// Copies the elements satisfying `keep` into a new set.
    fn retained<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        Self {
            elements: self
                .elements
                .iter()
                .filter(|&element| keep(element))
                .cloned()
                .collect(),
        }
    }

    /// Returns the set of pairs `(a, b)` for every `a` in `self` and `b` in
    /// `other`.
    ///
    /// The result has `self.cardinality() * other.cardinality()` elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::{OrderedPair, extended_set};
    ///
    /// let product = extended_set![1, 2].cartesian_product(&extended_set!['a', 'b', 'c']);
    /// assert_eq!(product.cardinality(), 6);
    /// assert!(product.has_element(&OrderedPair::new(2, 'c')));
    /// ```
    #[must_use]
    pub fn cartesian_product<U>(&self, other: &ExtendedSet<U>) -> ExtendedSet<OrderedPair<T, U>>
    where
        U: Element + Clone,
    {
        let mut pairs = Vec::with_capacity(self.elements.len() * other.elements.len());
        for first in &self.elements {
            for second in &other.elements {
                pairs.push(OrderedPair::new(first.clone(), second.clone()));
            }
        }
        ExtendedSet { elements: pairs }
    }

    /// Returns the set of distinct values `function(e)` for every `e` in
    /// `self`.
    ///
    /// The result may have fewer elements than `self` when `function` maps
    /// several elements to equal values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::extended_set;
    ///
    /// let remainders = extended_set![1, 2, 3, 4, 5].map(|value| value % 3);
    /// assert_eq!(remainders, extended_set![0, 1, 2]);
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, mut function: F) -> ExtendedSet<U>
    where
        U: Element,
        F: FnMut(&T) -> U,
    {
        self.elements.iter().map(|element| function(element)).collect()
    }
}

// =============================================================================
// Element Implementation
// =============================================================================

impl<T: Element> Element for ExtendedSet<T> {
    /// Two sets are equal when they have the same cardinality and every
    /// element of `other` is found in `self`.
    fn equal(&self, other: &Self) -> bool {
        self.cardinality() == other.cardinality() && self.contains_all(&other.elements)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for ExtendedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> PartialEq for ExtendedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<T: fmt::Debug> fmt::Debug for ExtendedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.elements.iter()).finish()
    }
}

/// Renders as `{e1 e2 ...}`, visiting elements in a fresh random order on
/// every call.
impl<T: fmt::Display> fmt::Display for ExtendedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        iter::render(formatter, self.iter())
    }
}

impl<T: Element> FromIterator<T> for ExtendedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Element> Extend<T> for ExtendedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

/// Builds a set from a vector, dropping duplicates.
impl<T: Element> From<Vec<T>> for ExtendedSet<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T> From<Set<T>> for ExtendedSet<T> {
    #[inline]
    fn from(set: Set<T>) -> Self {
        Self {
            elements: set.elements,
        }
    }
}

impl<T> IntoIterator for ExtendedSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.elements, &mut rand::rng())
    }
}

impl<'a, T> IntoIterator for &'a ExtendedSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static_assertions::assert_impl_all!(ExtendedSet<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(ExtendedSet<std::sync::Arc<String>>: Send, Sync);

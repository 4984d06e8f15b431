//! The basic set type.
//!
//! This module provides [`Set`], a minimal set over [`Element`] values: a
//! membership test, adding and removing single elements, equality with other
//! sets, rendering, and the power set. It shows the fundamental concepts; the
//! full algebra lives on [`ExtendedSet`], which shares the same
//! representation. Converting between the two is free.
//!
//! # Representation
//!
//! A `Set` is a `Vec` of elements holding no two equivalent values. Lookups
//! are linear scans, the price of requiring nothing of elements beyond
//! [`Element::equal`]. The order of the backing `Vec` has no meaning, and
//! operations may reorder it.
//!
//! # Examples
//!
//! ```rust
//! use eqset::{Set, set};
//!
//! let mut numbers = Set::new();
//! for number in [1, 4, 4, 2, 2, 3, 4] {
//!     numbers.add_element(number);
//! }
//! assert_eq!(numbers.len(), 4);
//!
//! numbers.remove_element(&4);
//! assert_eq!(numbers, set![1, 2, 3]);
//!
//! let power_set = numbers.power_set();
//! assert_eq!(power_set.len(), 8);
//! assert!(power_set.has_element(&numbers));
//! assert!(power_set.has_element(&Set::new()));
//! ```

use std::fmt;
use std::iter::FromIterator;

use crate::element::Element;
use crate::extended::ExtendedSet;
use crate::iter::{self, IntoIter, Iter};

/// A set of elements compared with [`Element::equal`].
///
/// `Set` implements [`Element`] itself, so sets can be elements of sets.
/// Two sets are equal when they have the same cardinality and every element
/// of one is found in the other.
///
/// # Time Complexity
///
/// | Operation        | Complexity |
/// |------------------|------------|
/// | `has_element`    | O(n)       |
/// | `add_element`    | O(n)       |
/// | `remove_element` | O(n)       |
/// | `equal`          | O(n²)      |
/// | `power_set`      | O(n · 2ⁿ)  |
#[derive(Clone)]
pub struct Set<T> {
    pub(crate) elements: Vec<T>,
}

impl<T> Set<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::Set;
    ///
    /// let set: Set<i32> = Set::new();
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
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
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

    /// Returns an iterator over the elements in a fresh random order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::set;
    ///
    /// let set = set!['x', 'y'];
    /// assert_eq!(set.iter().count(), 2);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.elements, &mut rand::rng())
    }
}

impl<T: Element> Set<T> {
    /// Returns `true` if the set contains an element equal to `element`.
    ///
    /// This is the fundamental relation defining a set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::set;
    ///
    /// let set = set![1, 2];
    /// assert!(set.has_element(&1));
    /// assert!(!set.has_element(&3));
    /// ```
    #[must_use]
    pub fn has_element(&self, element: &T) -> bool {
        self.elements.iter().any(|existing| element.equal(existing))
    }

    /// Adds `element` unless an equal element is already present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::Set;
    ///
    /// let mut set = Set::new();
    /// set.add_element("a");
    /// set.add_element("a");
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn add_element(&mut self, element: T) {
        if !self.has_element(&element) {
            self.elements.push(element);
        }
    }

    /// Removes the element equal to `element`, if any.
    ///
    /// The last element of the backing storage takes the removed element's
    /// place. Removing an absent element has no effect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::set;
    ///
    /// let mut set = set![1, 2, 3];
    /// set.remove_element(&2);
    /// set.remove_element(&9);
    /// assert_eq!(set, set![1, 3]);
    /// ```
    pub fn remove_element(&mut self, element: &T) {
        if let Some(index) = self
            .elements
            .iter()
            .position(|existing| element.equal(existing))
        {
            self.elements.swap_remove(index);
        }
    }
}

impl<T: Element + Clone> Set<T> {
    /// Returns the power set: the set of all subsets of `self`.
    ///
    /// The result contains the empty set and a copy of `self`, and has
    /// `2ⁿ` elements for an `n`-element set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::set;
    ///
    /// let power_set = set!['a', 'b'].power_set();
    /// assert_eq!(power_set.len(), 4);
    /// assert!(power_set.has_element(&set!['a']));
    /// assert!(power_set.has_element(&set!['b', 'a']));
    /// ```
    #[must_use]
    pub fn power_set(&self) -> Set<Self> {
        Set {
            elements: power_set_of(&self.elements)
                .into_iter()
                .map(|elements| Self { elements })
                .collect(),
        }
    }
}

/// Builds every subset of `elements` as a list of element vectors.
///
/// Starts from the empty subset; each element doubles the accumulated
/// subsets by extending a copy of each one with that element.
pub(crate) fn power_set_of<T: Clone>(elements: &[T]) -> Vec<Vec<T>> {
    let mut subsets: Vec<Vec<T>> = vec![Vec::new()];
    for element in elements {
        let extended: Vec<Vec<T>> = subsets
            .iter()
            .map(|subset| {
                let mut extended = Vec::with_capacity(subset.len() + 1);
                extended.extend_from_slice(subset);
                extended.push(element.clone());
                extended
            })
            .collect();
        subsets.extend(extended);
    }
    subsets
}

// =============================================================================
// Element Implementation
// =============================================================================

impl<T: Element> Element for Set<T> {
    /// Two sets are equal when they have the same cardinality and every
    /// element of `self` is found in `other`.
    ///
    /// With equal cardinalities and no duplicates, one direction suffices.
    fn equal(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .elements
                .iter()
                .all(|element| other.has_element(element))
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Set<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.elements.iter()).finish()
    }
}

/// Renders as `{e1 e2 ...}`, visiting elements in a fresh random order on
/// every call.
impl<T: fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        iter::render(formatter, self.iter())
    }
}

impl<T: Element> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Element> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add_element(element);
        }
    }
}

/// Builds a set from a vector, dropping duplicates.
impl<T: Element> From<Vec<T>> for Set<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T> From<ExtendedSet<T>> for Set<T> {
    #[inline]
    fn from(set: ExtendedSet<T>) -> Self {
        Self {
            elements: set.elements,
        }
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.elements, &mut rand::rng())
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static_assertions::assert_impl_all!(Set<i32>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(Set<std::rc::Rc<i32>>: Send, Sync);

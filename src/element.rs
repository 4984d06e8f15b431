//! The equivalence contract shared by every set element.
//!
//! This module provides [`Element`], the single capability a type needs to
//! participate in a [`Set`](crate::Set) or [`ExtendedSet`](crate::ExtendedSet),
//! and [`OrderedPair`], the element type produced by Cartesian products.
//!
//! # Overview
//!
//! Sets in this crate never use `PartialEq` or `Hash`. Membership is decided
//! entirely by [`Element::equal`], so a type chooses its own notion of
//! sameness: a float that treats every NaN as one value, a string compared
//! without regard to case, or a set compared by its contents.
//!
//! # Laws
//!
//! A valid implementation must be an equivalence relation. For all `a`, `b`,
//! `c`:
//!
//! ```text
//! a.equal(a)                                  (reflexivity)
//! a.equal(b) == b.equal(a)                    (symmetry)
//! a.equal(b) && b.equal(c)  implies  a.equal(c)   (transitivity)
//! ```
//!
//! The sets do not check these laws. An implementation that breaks them
//! yields silently inconsistent sets. Use the validators in
//! [`laws`](crate::laws) to test an implementation.
//!
//! # Examples
//!
//! ```rust
//! use eqset::{Element, ExtendedSet};
//!
//! #[derive(Clone, Debug)]
//! struct Parity(u32);
//!
//! impl Element for Parity {
//!     fn equal(&self, other: &Self) -> bool {
//!         self.0 % 2 == other.0 % 2
//!     }
//! }
//!
//! let mut set = ExtendedSet::new();
//! assert!(set.add(Parity(1)));
//! assert!(set.add(Parity(2)));
//! assert!(!set.add(Parity(3)));
//! assert_eq!(set.cardinality(), 2);
//! ```

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// A value that can be an element of a set.
///
/// A type implementing `Element` provides exactly one method, [`equal`],
/// which reports whether the argument is to be treated as the same element
/// as the receiver.
///
/// # Contract
///
/// - `equal` must not panic.
/// - When a type has several shapes (enum variants), values of different
///   shapes must compare `false` rather than fail.
/// - `equal` should be reflexive, symmetric and transitive. This is a
///   precondition of every set operation and is not verified at runtime.
///
/// [`equal`]: Element::equal
pub trait Element {
    /// Returns `true` if `other` is to be considered the same element as `self`.
    fn equal(&self, other: &Self) -> bool;
}

// =============================================================================
// Native Implementations
// =============================================================================

macro_rules! impl_element_by_native_equality {
    ($($element_type:ty),* $(,)?) => {
        $(
            impl Element for $element_type {
                #[inline]
                fn equal(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

// No float impls: `NaN == NaN` is false. Use `adapters::TotalFloat`.
impl_element_by_native_equality!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, str, String, (),
);

impl<T: Element + ?Sized> Element for &T {
    #[inline]
    fn equal(&self, other: &Self) -> bool {
        (**self).equal(*other)
    }
}

impl<T: Element + ?Sized> Element for Box<T> {
    #[inline]
    fn equal(&self, other: &Self) -> bool {
        (**self).equal(&**other)
    }
}

impl<T: Element + ?Sized> Element for Rc<T> {
    #[inline]
    fn equal(&self, other: &Self) -> bool {
        (**self).equal(&**other)
    }
}

impl<T: Element + ?Sized> Element for Arc<T> {
    #[inline]
    fn equal(&self, other: &Self) -> bool {
        (**self).equal(&**other)
    }
}

impl<T: Element> Element for Option<T> {
    fn equal(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(left), Some(right)) => left.equal(right),
            (None, None) => true,
            _ => false,
        }
    }
}

/// Sequences compare position by position.
impl<T: Element> Element for [T] {
    fn equal(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(left, right)| left.equal(right))
    }
}

impl<T: Element> Element for Vec<T> {
    #[inline]
    fn equal(&self, other: &Self) -> bool {
        self.as_slice().equal(other.as_slice())
    }
}

macro_rules! impl_element_for_tuple {
    ($($name:ident : $index:tt),+) => {
        impl<$($name: Element),+> Element for ($($name,)+) {
            fn equal(&self, other: &Self) -> bool {
                $(self.$index.equal(&other.$index))&&+
            }
        }
    };
}

impl_element_for_tuple!(A: 0);
impl_element_for_tuple!(A: 0, B: 1);
impl_element_for_tuple!(A: 0, B: 1, C: 2);
impl_element_for_tuple!(A: 0, B: 1, C: 2, D: 3);

// =============================================================================
// OrderedPair
// =============================================================================

/// An immutable ordered pair of elements.
///
/// `OrderedPair` is the element type of the set returned by
/// [`ExtendedSet::cartesian_product`](crate::ExtendedSet::cartesian_product).
/// Two pairs are equal when their first components are equal and their
/// second components are equal, each under its own [`Element::equal`].
/// Pairs therefore follow the components' custom equivalence rather than
/// structural `==`.
///
/// # Examples
///
/// ```rust
/// use eqset::adapters::CaseInsensitive;
/// use eqset::{Element, OrderedPair};
///
/// let pair = OrderedPair::new(1, 'a');
/// assert_eq!(pair.first(), &1);
/// assert_eq!(pair.second(), &'a');
///
/// assert!(pair.equal(&OrderedPair::new(1, 'a')));
/// assert!(!pair.equal(&OrderedPair::new(1, 'b')));
///
/// let word = OrderedPair::new(CaseInsensitive::from("a"), 1);
/// assert!(word.equal(&OrderedPair::new(CaseInsensitive::from("A"), 1)));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct OrderedPair<A, B> {
    first: A,
    second: B,
}

impl<A, B> OrderedPair<A, B> {
    /// Creates a pair from its two components.
    #[inline]
    #[must_use]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Returns a reference to the first component.
    #[inline]
    #[must_use]
    pub const fn first(&self) -> &A {
        &self.first
    }

    /// Returns a reference to the second component.
    #[inline]
    #[must_use]
    pub const fn second(&self) -> &B {
        &self.second
    }

    /// Consumes the pair and returns its components.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: Element, B: Element> Element for OrderedPair<A, B> {
    fn equal(&self, other: &Self) -> bool {
        self.first.equal(&other.first) && self.second.equal(&other.second)
    }
}

impl<A: Element, B: Element> PartialEq for OrderedPair<A, B> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<A, B> From<(A, B)> for OrderedPair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Self::new(first, second)
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for OrderedPair<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({} {})", self.first, self.second)
    }
}

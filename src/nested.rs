//! Elements of possibly nested sets.
//!
//! A set whose elements may themselves be sets needs a single element type
//! covering both cases. [`Nested`] is that closed variant type: an element is
//! either an atom or a set of further nested elements. Equality matches on
//! the variant, so an atom is never equal to a set.
//!
//! Flattening replaces every nested set with its contents, recursively,
//! until only atoms remain. Two strategies are provided and always agree:
//!
//! - [`ExtendedSet::flatten`] recurses, flattening each nested set into an
//!   intermediate set and merging it into the result.
//! - [`ExtendedSet::flatten_with_stack`] walks the nesting with an explicit
//!   work list, adding atoms straight into one accumulator. It does not grow
//!   the call stack with the nesting depth.
//!
//! # Examples
//!
//! ```rust
//! use eqset::{ExtendedSet, Nested, extended_set};
//!
//! let inner = extended_set![Nested::atom(2), Nested::atom(3)];
//! let nested = extended_set![Nested::atom(1), Nested::set(inner), Nested::atom(3)];
//! assert_eq!(nested.cardinality(), 3);
//!
//! let flat = nested.flatten();
//! assert_eq!(flat, extended_set![Nested::atom(1), Nested::atom(2), Nested::atom(3)]);
//! assert_eq!(nested.atoms(), extended_set![1, 2, 3]);
//! ```

use std::fmt;

use crate::element::Element;
use crate::extended::ExtendedSet;

/// An element of a possibly nested set: an atom or a set.
#[derive(Clone, Debug)]
pub enum Nested<T> {
    /// A plain element.
    Atom(T),
    /// A set of further nested elements.
    Set(ExtendedSet<Nested<T>>),
}

impl<T> Nested<T> {
    /// Wraps a plain element.
    #[inline]
    #[must_use]
    pub const fn atom(value: T) -> Self {
        Self::Atom(value)
    }

    /// Wraps a set of nested elements.
    #[inline]
    #[must_use]
    pub const fn set(set: ExtendedSet<Self>) -> Self {
        Self::Set(set)
    }

    /// Returns `true` for [`Nested::Atom`].
    #[inline]
    #[must_use]
    pub const fn is_atom(&self) -> bool {
        matches!(self, Self::Atom(_))
    }

    /// Returns `true` for [`Nested::Set`].
    #[inline]
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Returns the atom, or `None` for a set.
    #[inline]
    #[must_use]
    pub const fn as_atom(&self) -> Option<&T> {
        match self {
            Self::Atom(value) => Some(value),
            Self::Set(_) => None,
        }
    }

    /// Returns the set, or `None` for an atom.
    #[inline]
    #[must_use]
    pub const fn as_set(&self) -> Option<&ExtendedSet<Self>> {
        match self {
            Self::Atom(_) => None,
            Self::Set(set) => Some(set),
        }
    }
}

impl<T: Element> Element for Nested<T> {
    fn equal(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Atom(left), Self::Atom(right)) => left.equal(right),
            (Self::Set(left), Self::Set(right)) => left.equal(right),
            _ => false,
        }
    }
}

impl<T: Element> PartialEq for Nested<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<T: fmt::Display> fmt::Display for Nested<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atom(value) => fmt::Display::fmt(value, formatter),
            Self::Set(set) => fmt::Display::fmt(set, formatter),
        }
    }
}

impl<T> From<ExtendedSet<Nested<T>>> for Nested<T> {
    #[inline]
    fn from(set: ExtendedSet<Self>) -> Self {
        Self::Set(set)
    }
}

// =============================================================================
// Flattening
// =============================================================================

impl<T: Element + Clone> ExtendedSet<Nested<T>> {
    /// Returns the set of atoms found in `self` at any depth of nesting.
    ///
    /// Each nested set is flattened recursively into an intermediate set,
    /// which is then merged into the result.
    ///
    /// See [`flatten_with_stack`](Self::flatten_with_stack) for the
    /// alternative strategy.
    #[must_use]
    pub fn flatten(&self) -> Self {
        let mut flat = Self::new();
        for element in &self.elements {
            match element {
                Nested::Set(inner) => flat.union_in_place(&inner.flatten()),
                Nested::Atom(_) => {
                    flat.add(element.clone());
                }
            }
        }
        flat
    }

    /// Returns the set of atoms found in `self` at any depth of nesting.
    ///
    /// Walks nested sets with an explicit work list and adds each atom to a
    /// single accumulator. Always equal to [`flatten`](Self::flatten).
    #[must_use]
    pub fn flatten_with_stack(&self) -> Self {
        let mut flat = Self::new();
        let mut pending: Vec<&Self> = vec![self];
        while let Some(set) = pending.pop() {
            for element in &set.elements {
                match element {
                    Nested::Set(inner) => pending.push(inner),
                    Nested::Atom(_) => {
                        flat.add(element.clone());
                    }
                }
            }
        }
        flat
    }

    /// Returns the atoms found at any depth, unwrapped from [`Nested`].
    #[must_use]
    pub fn atoms(&self) -> ExtendedSet<T> {
        ExtendedSet {
            elements: self
                .flatten_with_stack()
                .elements
                .into_iter()
                .filter_map(|element| match element {
                    Nested::Atom(value) => Some(value),
                    Nested::Set(_) => None,
                })
                .collect(),
        }
    }
}

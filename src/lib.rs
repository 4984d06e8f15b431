//! # eqset
//!
//! Finite sets over user-defined equivalence.
//!
//! ## Overview
//!
//! Most set types decide membership with `Eq` and `Hash`. The sets in this
//! crate only need an equivalence relation: any type implementing
//! [`Element`] can be stored, and two elements are the same member exactly
//! when [`Element::equal`] says so. Sets are themselves elements, so sets of
//! sets, power sets and nested sets come for free.
//!
//! - **[`Set`]**: the basic set with membership, insertion, removal and the
//!   power set.
//! - **[`ExtendedSet`]**: the full algebra. Union, intersection, difference
//!   and symmetric difference, variadic forms, subsets, Cartesian product,
//!   filter, map, random extraction and several iteration protocols.
//! - **[`Nested`]**: elements that are either atoms or sets, with two
//!   flattening strategies.
//! - **[`laws`]**: checks that an [`Element`] implementation really is an
//!   equivalence relation.
//! - **[`adapters`]**: ready-made elements such as [`adapters::TotalFloat`]
//!   and [`adapters::CaseInsensitive`].
//!
//! Converting between [`Set`] and [`ExtendedSet`] moves the storage and
//! never copies elements.
//!
//! Sets are unordered. Every iteration and every rendering visits elements
//! in a fresh random order, so results never depend on insertion order.
//!
//! ## Feature Flags
//!
//! - `derive` (default): `#[derive(Element)]` for structs and enums
//! - `async`: `ExtendedSet::stream`, an element stream on the current
//!   Tokio runtime
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use eqset::prelude::*;
//!
//! let odd = extended_set![1, 3, 5, 7, 9];
//! let square = extended_set![1, 4, 9];
//!
//! assert_eq!(odd.intersection(&square), extended_set![1, 9]);
//! assert_eq!(odd.union(&square).cardinality(), 6);
//! assert_eq!(square.power_set().cardinality(), 8);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

extern crate self as eqset;

#[macro_use]
mod macros;

pub mod adapters;
mod basic;
mod element;
mod error;
mod extended;
pub mod iter;
pub mod laws;
mod nested;

#[cfg(feature = "async")]
mod stream;

pub use basic::Set;
pub use element::{Element, OrderedPair};
pub use error::{Error, Law, LawViolation, Result};
pub use extended::ExtendedSet;
pub use iter::{IntoIter, Iter};
pub use nested::Nested;

/// Derives [`Element`] by comparing every field with [`Element::equal`].
///
/// Enums compare equal when both values are the same variant with equal
/// fields.
#[cfg(feature = "derive")]
pub use eqset_derive::Element;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and macros.
///
/// # Usage
///
/// ```rust
/// use eqset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::basic::Set;
    pub use crate::element::{Element, OrderedPair};
    pub use crate::extended::ExtendedSet;
    pub use crate::laws::check_laws;
    pub use crate::nested::Nested;
    pub use crate::{extended_set, set};

    #[cfg(feature = "derive")]
    pub use eqset_derive::Element;
}

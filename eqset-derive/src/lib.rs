//! Derive macro for the `eqset` equivalence contract.
//!
//! This crate provides [`Element`], a derive macro that implements
//! `eqset::Element` by comparing a value structurally: every field is
//! compared with its own `Element::equal`, never with `PartialEq`.
//!
//! # Example
//!
//! ```rust,ignore
//! use eqset::{Element, ExtendedSet};
//! use eqset::adapters::CaseInsensitive;
//!
//! #[derive(Clone, Debug, Element)]
//! struct Account {
//!     owner: CaseInsensitive,
//!     number: u32,
//! }
//!
//! let mut accounts = ExtendedSet::new();
//! accounts.add(Account { owner: CaseInsensitive::from("Ada"), number: 1 });
//! assert!(!accounts.add(Account { owner: CaseInsensitive::from("ADA"), number: 1 }));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod element;

use proc_macro::TokenStream;

/// Derive macro implementing `eqset::Element` by structural comparison.
///
/// # Structs
///
/// Two values are equal when every pair of corresponding fields is equal
/// under `Element::equal`. Unit structs are always equal to themselves.
///
/// # Enums
///
/// Two values are equal only when they are the same variant and every pair
/// of corresponding fields is equal. Values of different variants compare
/// `false`, which makes a derived enum a closed element type:
///
/// ```rust,ignore
/// use eqset::Element;
///
/// #[derive(Clone, Debug, Element)]
/// enum Token {
///     Word(String),
///     Number(i64),
///     End,
/// }
///
/// assert!(Token::End.equal(&Token::End));
/// assert!(!Token::Number(1).equal(&Token::Word("1".to_string())));
/// ```
///
/// # Generics
///
/// Every type parameter receives an `eqset::Element` bound in the generated
/// implementation.
///
/// # Unions
///
/// Unions are rejected with a compile error.
#[proc_macro_derive(Element)]
pub fn derive_element(input: TokenStream) -> TokenStream {
    element::derive_element_impl(input)
}

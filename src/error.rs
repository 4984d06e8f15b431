//! Error types for the crate.
//!
//! Set operations themselves are total and never fail: lookups of missing
//! elements return `false` or `None`. Errors arise only from the law
//! checker in [`laws`](crate::laws) and, with the `async` feature, from
//! starting an element stream outside a Tokio runtime.

use std::fmt;

use thiserror::Error;

/// Convenient alias for results whose error is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// One of the three laws an equivalence relation must satisfy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Law {
    /// `a.equal(a)` for every `a`.
    Reflexivity,
    /// `a.equal(b) == b.equal(a)` for every `a`, `b`.
    Symmetry,
    /// `a.equal(b) && b.equal(c)` implies `a.equal(c)`.
    Transitivity,
}

impl fmt::Display for Law {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Reflexivity => "reflexivity",
            Self::Symmetry => "symmetry",
            Self::Transitivity => "transitivity",
        };
        formatter.write_str(name)
    }
}

/// A counterexample showing that an `Element` implementation is not an
/// equivalence relation.
///
/// The offending elements are kept as their `Debug` renderings so the error
/// stays independent of the element type.
///
/// # Examples
///
/// ```rust
/// use eqset::{Law, LawViolation};
///
/// let violation = LawViolation::new(Law::Reflexivity, vec!["NaN".to_string()]);
/// assert_eq!(violation.to_string(), "equivalence violates reflexivity for [NaN]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("equivalence violates {law} for [{}]", .elements.join(", "))]
pub struct LawViolation {
    law: Law,
    elements: Vec<String>,
}

impl LawViolation {
    /// Creates a violation of `law` witnessed by `elements`.
    #[must_use]
    pub const fn new(law: Law, elements: Vec<String>) -> Self {
        Self { law, elements }
    }

    /// Returns the law that was violated.
    #[must_use]
    pub const fn law(&self) -> Law {
        self.law
    }

    /// Returns the `Debug` renderings of the witnessing elements, in argument order.
    #[must_use]
    pub fn elements(&self) -> &[String] {
        &self.elements
    }
}

/// Errors produced by this crate.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// An `Element` implementation broke one of the equivalence laws.
    #[error(transparent)]
    LawViolation(#[from] LawViolation),

    /// An element stream was requested outside a Tokio runtime.
    #[cfg(feature = "async")]
    #[error("no Tokio runtime is available to drive the element stream")]
    MissingRuntime,
}

//! Validators for the equivalence laws.
//!
//! Every set operation assumes that [`Element::equal`] is an equivalence
//! relation, but none of them check it. The functions here do, and are meant
//! to be driven by property-based tests over arbitrary element values.
//!
//! # Examples
//!
//! ```rust
//! use eqset::Element;
//! use eqset::laws::{reflexive, symmetric, transitive};
//!
//! #[derive(Clone, Copy, Debug)]
//! struct NaiveFloat(f64);
//!
//! impl Element for NaiveFloat {
//!     fn equal(&self, other: &Self) -> bool {
//!         self.0 == other.0
//!     }
//! }
//!
//! // IEEE NaN is not equal to itself.
//! assert!(!reflexive(&NaiveFloat(f64::NAN)));
//! assert!(symmetric(&NaiveFloat(1.0), &NaiveFloat(2.0)));
//! assert!(transitive(&NaiveFloat(1.0), &NaiveFloat(1.0), &NaiveFloat(1.0)));
//! ```

use std::fmt::Debug;

use crate::element::Element;
use crate::error::{Law, LawViolation};

/// Returns `true` if `element` equals itself.
///
/// A valid `Element` implementation returns `true` for every value.
#[must_use]
pub fn reflexive<T: Element + ?Sized>(element: &T) -> bool {
    element.equal(element)
}

/// Returns `true` if `first` and `second` agree on whether they are equal.
///
/// A valid `Element` implementation returns `true` for every pair.
#[must_use]
pub fn symmetric<T: Element + ?Sized>(first: &T, second: &T) -> bool {
    first.equal(second) == second.equal(first)
}

/// Returns `true` unless `first` equals `second` and `second` equals `third`
/// while `first` does not equal `third`.
///
/// A valid `Element` implementation returns `true` for every triple.
#[must_use]
pub fn transitive<T: Element + ?Sized>(first: &T, second: &T, third: &T) -> bool {
    if first.equal(second) && second.equal(third) {
        first.equal(third)
    } else {
        true
    }
}

/// Checks all three laws over every element, pair and triple of `samples`.
///
/// Returns the first counterexample found. Reflexivity is checked first,
/// then symmetry, then transitivity. The check is cubic in the number of
/// samples, so keep sample sets small.
///
/// # Errors
///
/// Returns a [`LawViolation`] naming the broken law and the elements that
/// witness it.
///
/// # Examples
///
/// ```rust
/// use eqset::Law;
/// use eqset::adapters::TotalFloat;
/// use eqset::laws::check_laws;
///
/// let samples = [TotalFloat(f64::NAN), TotalFloat(0.0), TotalFloat(-0.0), TotalFloat(1.5)];
/// assert!(check_laws(&samples).is_ok());
///
/// #[derive(Debug)]
/// struct Close(i32);
///
/// impl eqset::Element for Close {
///     fn equal(&self, other: &Self) -> bool {
///         (self.0 - other.0).abs() <= 1
///     }
/// }
///
/// let violation = check_laws(&[Close(0), Close(1), Close(2)]).unwrap_err();
/// assert_eq!(violation.law(), Law::Transitivity);
/// ```
pub fn check_laws<T: Element + Debug>(samples: &[T]) -> Result<(), LawViolation> {
    for element in samples {
        if !reflexive(element) {
            return Err(violation(Law::Reflexivity, &[element]));
        }
    }

    for first in samples {
        for second in samples {
            if !symmetric(first, second) {
                return Err(violation(Law::Symmetry, &[first, second]));
            }
        }
    }

    for first in samples {
        for second in samples {
            for third in samples {
                if !transitive(first, second, third) {
                    return Err(violation(Law::Transitivity, &[first, second, third]));
                }
            }
        }
    }

    Ok(())
}

fn violation<T: Debug>(law: Law, witnesses: &[&T]) -> LawViolation {
    let elements: Vec<String> = witnesses
        .iter()
        .map(|witness| format!("{witness:?}"))
        .collect();
    tracing::debug!(%law, elements = ?elements, "equivalence law violated");
    LawViolation::new(law, elements)
}

//! Ready-made element types with custom equivalences.
//!
//! - [`TotalFloat`]: `f64` where every NaN is one value and `0.0` differs
//!   from `-0.0`.
//! - [`CaseInsensitive`]: a string compared without regard to case.
//! - [`ByEq`]: any `PartialEq` type, compared with `==`.
//!
//! # Examples
//!
//! ```rust
//! use eqset::adapters::{CaseInsensitive, TotalFloat};
//! use eqset::extended_set;
//!
//! let floats = extended_set![TotalFloat(f64::NAN), TotalFloat(f64::NAN), TotalFloat(0.0)];
//! assert_eq!(floats.cardinality(), 2);
//!
//! let words = extended_set![CaseInsensitive::from("Set"), CaseInsensitive::from("SET")];
//! assert_eq!(words.cardinality(), 1);
//! ```

use std::fmt;

use crate::element::Element;

// =============================================================================
// TotalFloat
// =============================================================================

/// An `f64` element with a reflexive equality.
///
/// IEEE equality is not an equivalence relation because `NaN != NaN`. Here
/// all NaN values are equal to each other, zeros of different sign are
/// distinct, and every other pair of values compares with `==`.
///
/// # Examples
///
/// ```rust
/// use eqset::Element;
/// use eqset::adapters::TotalFloat;
///
/// assert!(TotalFloat(f64::NAN).equal(&TotalFloat(f64::NAN)));
/// assert!(!TotalFloat(0.0).equal(&TotalFloat(-0.0)));
/// assert!(TotalFloat(1.5).equal(&TotalFloat(1.5)));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TotalFloat(pub f64);

impl Element for TotalFloat {
    fn equal(&self, other: &Self) -> bool {
        let (left, right) = (self.0, other.0);
        if left.is_nan() && right.is_nan() {
            return true;
        }
        #[allow(clippy::float_cmp)]
        let same_value = left == right;
        same_value && left.is_sign_negative() == right.is_sign_negative()
    }
}

impl From<f64> for TotalFloat {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for TotalFloat {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(formatter)
    }
}

// =============================================================================
// CaseInsensitive
// =============================================================================

/// A string element compared without regard to case.
///
/// Comparison lowercases both sides character by character, using Unicode
/// lowercase mappings. The original spelling is kept for display.
///
/// # Examples
///
/// ```rust
/// use eqset::Element;
/// use eqset::adapters::CaseInsensitive;
///
/// let word = CaseInsensitive::from("Straße");
/// assert!(word.equal(&CaseInsensitive::from("STRAßE")));
/// assert_eq!(word.as_str(), "Straße");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CaseInsensitive(String);

impl CaseInsensitive {
    /// Wraps a string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the string with its original spelling.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the original string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Element for CaseInsensitive {
    fn equal(&self, other: &Self) -> bool {
        self.0
            .chars()
            .flat_map(char::to_lowercase)
            .eq(other.0.chars().flat_map(char::to_lowercase))
    }
}

impl From<&str> for CaseInsensitive {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CaseInsensitive {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for CaseInsensitive {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

// =============================================================================
// ByEq
// =============================================================================

/// Any `PartialEq` type used as an element, compared with `==`.
///
/// The resulting equivalence is only as lawful as the wrapped `PartialEq`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ByEq<T>(pub T);

impl<T: PartialEq> Element for ByEq<T> {
    #[inline]
    fn equal(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: fmt::Display> fmt::Display for ByEq<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(formatter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::laws::check_laws;
    use rstest::rstest;

    #[rstest]
    #[case(f64::NAN, f64::NAN, true)]
    #[case(f64::NAN, 1.0, false)]
    #[case(0.0, -0.0, false)]
    #[case(-0.0, -0.0, true)]
    #[case(f64::INFINITY, f64::INFINITY, true)]
    #[case(f64::INFINITY, f64::NEG_INFINITY, false)]
    #[case(2.5, 2.5, true)]
    fn test_total_float_equality(#[case] left: f64, #[case] right: f64, #[case] expected: bool) {
        assert_eq!(TotalFloat(left).equal(&TotalFloat(right)), expected);
    }

    #[rstest]
    fn test_total_float_satisfies_laws() {
        let samples = [
            TotalFloat(f64::NAN),
            TotalFloat(-f64::NAN),
            TotalFloat(0.0),
            TotalFloat(-0.0),
            TotalFloat(1.0),
            TotalFloat(f64::INFINITY),
        ];
        assert!(check_laws(&samples).is_ok());
    }

    #[rstest]
    #[case("hello", "HELLO", true)]
    #[case("Hello", "hellO", true)]
    #[case("hello", "help", false)]
    #[case("", "", true)]
    #[case("a", "", false)]
    fn test_case_insensitive_equality(
        #[case] left: &str,
        #[case] right: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(
            CaseInsensitive::from(left).equal(&CaseInsensitive::from(right)),
            expected
        );
    }

    #[rstest]
    fn test_case_insensitive_keeps_spelling() {
        let word = CaseInsensitive::new(String::from("MiXeD"));
        assert_eq!(word.to_string(), "MiXeD");
        assert_eq!(word.into_inner(), "MiXeD");
    }

    #[rstest]
    fn test_by_eq_uses_partial_eq() {
        assert!(ByEq(vec![1, 2]).equal(&ByEq(vec![1, 2])));
        assert!(!ByEq("a").equal(&ByEq("b")));
        assert_eq!(ByEq(3).to_string(), "3");
    }
}

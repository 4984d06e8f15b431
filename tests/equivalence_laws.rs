//! Property-based tests for the equivalence laws of element types.
//!
//! The law validators must hold for every element type shipped with the
//! crate, and must catch an element type whose equality is not reflexive.

use eqset::adapters::{ByEq, CaseInsensitive, TotalFloat};
use eqset::laws::{check_laws, reflexive, symmetric, transitive};
use eqset::{Element, ExtendedSet, Law, OrderedPair};
use proptest::prelude::*;
use rstest::rstest;

/// Floats compared with IEEE `==`, which is not reflexive for NaN.
#[derive(Clone, Copy, Debug)]
struct NaiveFloat(f64);

impl Element for NaiveFloat {
    #[allow(clippy::float_cmp)]
    fn equal(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

fn any_float() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(f64::NAN),
        Just(0.0),
        Just(-0.0),
        Just(f64::INFINITY),
        -4.0..4.0_f64,
    ]
}

fn mixed_case_word() -> impl Strategy<Value = String> {
    "[a-cA-C]{0,3}"
}

// =============================================================================
// TotalFloat
// =============================================================================

proptest! {
    #[test]
    fn prop_total_float_is_an_equivalence(
        first in any_float(),
        second in any_float(),
        third in any_float()
    ) {
        let (first, second, third) = (TotalFloat(first), TotalFloat(second), TotalFloat(third));
        prop_assert!(reflexive(&first));
        prop_assert!(symmetric(&first, &second));
        prop_assert!(transitive(&first, &second, &third));
    }
}

proptest! {
    #[test]
    fn prop_total_float_samples_pass_check(samples in prop::collection::vec(any_float(), 0..8)) {
        let samples: Vec<TotalFloat> = samples.into_iter().map(TotalFloat).collect();
        prop_assert!(check_laws(&samples).is_ok());
    }
}

// =============================================================================
// CaseInsensitive
// =============================================================================

proptest! {
    #[test]
    fn prop_case_insensitive_is_an_equivalence(
        first in mixed_case_word(),
        second in mixed_case_word(),
        third in mixed_case_word()
    ) {
        let first = CaseInsensitive::from(first);
        let second = CaseInsensitive::from(second);
        let third = CaseInsensitive::from(third);
        prop_assert!(reflexive(&first));
        prop_assert!(symmetric(&first, &second));
        prop_assert!(transitive(&first, &second, &third));
    }
}

proptest! {
    #[test]
    fn prop_case_insensitive_ignores_case(word in "[a-zA-Z]{0,8}") {
        let upper = CaseInsensitive::from(word.to_uppercase());
        let lower = CaseInsensitive::from(word.to_lowercase());
        prop_assert!(upper.equal(&lower));
    }
}

// =============================================================================
// Integers, Pairs and Sets
// =============================================================================

proptest! {
    #[test]
    fn prop_integers_are_an_equivalence(first in 0..4_i64, second in 0..4_i64, third in 0..4_i64) {
        prop_assert!(reflexive(&first));
        prop_assert!(symmetric(&first, &second));
        prop_assert!(transitive(&first, &second, &third));
        prop_assert!(symmetric(&ByEq(first), &ByEq(second)));
    }
}

proptest! {
    #[test]
    fn prop_pairs_pass_check(pairs in prop::collection::vec((0..3_u8, 0..3_u8), 0..8)) {
        let pairs: Vec<OrderedPair<u8, u8>> = pairs.into_iter().map(OrderedPair::from).collect();
        prop_assert!(check_laws(&pairs).is_ok());
    }
}

proptest! {
    #[test]
    fn prop_sets_pass_check(
        sets in prop::collection::vec(prop::collection::vec(0..3_u8, 0..3), 0..6)
    ) {
        let sets: Vec<ExtendedSet<u8>> = sets.into_iter().map(ExtendedSet::from).collect();
        prop_assert!(check_laws(&sets).is_ok());
    }
}

// =============================================================================
// Violations
// =============================================================================

#[rstest]
fn test_naive_float_fails_reflexivity() {
    assert!(!reflexive(&NaiveFloat(f64::NAN)));
    assert!(reflexive(&NaiveFloat(1.0)));
}

#[rstest]
fn test_check_laws_reports_naive_float() {
    let samples = [NaiveFloat(1.0), NaiveFloat(f64::NAN)];
    let violation = check_laws(&samples).expect_err("NaN should break reflexivity");
    assert_eq!(violation.law(), Law::Reflexivity);
    assert_eq!(violation.elements(), ["NaiveFloat(NaN)".to_string()]);
}

#[rstest]
fn test_naive_float_set_grows_without_bound() {
    let mut set = ExtendedSet::new();
    for _ in 0..3 {
        set.add(NaiveFloat(f64::NAN));
    }
    assert_eq!(set.cardinality(), 3);
}

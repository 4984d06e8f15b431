//! Property-based tests for ExtendedSet laws.
//!
//! These tests verify that ExtendedSet satisfies the algebraic properties
//! expected of a finite set, under an equivalence coarser than `==`.

use eqset::{Element, ExtendedSet, Nested};
use proptest::prelude::*;

/// Integers compared modulo 7, so that distinct values can be one member.
#[derive(Clone, Copy, Debug)]
struct Residue(i32);

impl Element for Residue {
    fn equal(&self, other: &Self) -> bool {
        self.0.rem_euclid(7) == other.0.rem_euclid(7)
    }
}

fn residues() -> impl Strategy<Value = ExtendedSet<Residue>> {
    prop::collection::vec(any::<i32>().prop_map(Residue), 0..20)
        .prop_map(|values| values.into_iter().collect())
}

fn integers(max_length: usize) -> impl Strategy<Value = ExtendedSet<i32>> {
    prop::collection::vec(-50..50_i32, 0..max_length)
        .prop_map(|values| values.into_iter().collect())
}

fn nested() -> impl Strategy<Value = Nested<i32>> {
    let atom = (0..10_i32).prop_map(Nested::atom);
    atom.prop_recursive(4, 32, 4, |inner| {
        prop::collection::vec(inner, 0..4)
            .prop_map(|elements| Nested::set(elements.into_iter().collect()))
    })
}

fn no_two_equal<T: Element>(set: &ExtendedSet<T>) -> bool {
    let elements = set.as_slice();
    elements.iter().enumerate().all(|(index, element)| {
        elements[index + 1..]
            .iter()
            .all(|other| !element.equal(other))
    })
}

// =============================================================================
// No-Duplicates Law
// Description: Adding an element twice grows the set by at most one
// =============================================================================

proptest! {
    #[test]
    fn prop_add_is_idempotent(set in residues(), value: i32) {
        let mut set = set;
        let before = set.cardinality();
        set.add(Residue(value));
        set.add(Residue(value));

        prop_assert!(set.cardinality() <= before + 1);
        prop_assert!(set.has_element(&Residue(value)));
        prop_assert!(no_two_equal(&set));
    }
}

proptest! {
    #[test]
    fn prop_cardinality_bounded_by_classes(set in residues()) {
        prop_assert!(set.cardinality() <= 7);
        prop_assert!(no_two_equal(&set));
    }
}

// =============================================================================
// Reflexivity Law
// Description: Every set is equal to itself and to its clone
// =============================================================================

proptest! {
    #[test]
    fn prop_set_equality_is_reflexive(set in residues()) {
        prop_assert!(set.equal(&set));
        prop_assert!(set.equal(&set.clone()));
    }
}

// =============================================================================
// Partition Law
// Description: Intersection and difference partition the left operand
// =============================================================================

proptest! {
    #[test]
    fn prop_intersection_and_difference_partition(left in residues(), right in residues()) {
        let intersection = left.intersection(&right);
        let difference = left.difference(&right);

        prop_assert_eq!(intersection.cardinality() + difference.cardinality(), left.cardinality());
        prop_assert!(intersection.intersection(&difference).is_empty());
        prop_assert!(intersection.union(&difference).equal(&left));
    }
}

proptest! {
    #[test]
    fn prop_union_reconstruction(left in residues(), right in residues()) {
        let union = left.union(&right);
        let rebuilt = left
            .intersection(&right)
            .union_all([&left.difference(&right), &right]);

        prop_assert!(union.cardinality() >= left.cardinality().max(right.cardinality()));
        prop_assert!(rebuilt.equal(&union));
        prop_assert!(left.is_subset(&union) && right.is_subset(&union));
    }
}

// =============================================================================
// Algorithm Agreement
// Description: Alternative strategies always produce equal sets
// =============================================================================

proptest! {
    #[test]
    fn prop_difference_strategies_agree(left in residues(), right in residues()) {
        prop_assert!(left.difference(&right).equal(&left.difference_by_removal(&right)));
    }
}

proptest! {
    #[test]
    fn prop_intersection_strategies_agree(left in residues(), right in residues()) {
        prop_assert!(left.intersection(&right).equal(&left.intersection_by_removal(&right)));
    }
}

proptest! {
    #[test]
    fn prop_symmetric_difference_definition(left in residues(), right in residues()) {
        let expected = left.difference(&right).union(&right.difference(&left));
        prop_assert!(left.symmetric_difference(&right).equal(&expected));
        prop_assert!(left.symmetric_difference(&right).equal(&right.symmetric_difference(&left)));
    }
}

// =============================================================================
// Power Set and Product Cardinality
// =============================================================================

proptest! {
    #[test]
    fn prop_power_set_cardinality(set in integers(7)) {
        let power_set = set.power_set();
        prop_assert_eq!(power_set.cardinality(), 1_usize << set.cardinality());
        prop_assert!(power_set.has_element(&ExtendedSet::new()));
        prop_assert!(power_set.has_element(&set));
    }
}

proptest! {
    #[test]
    fn prop_cartesian_product_cardinality(left in integers(12), right in residues()) {
        let product = left.cartesian_product(&right);
        prop_assert_eq!(product.cardinality(), left.cardinality() * right.cardinality());
    }
}

// =============================================================================
// Flatten Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_flatten_strategies_agree(elements in prop::collection::vec(nested(), 0..6)) {
        let set: ExtendedSet<Nested<i32>> = elements.into_iter().collect();
        let flat = set.flatten();

        prop_assert!(flat.equal(&set.flatten_with_stack()));
        prop_assert!(flat.as_slice().iter().all(Nested::is_atom));
    }
}

proptest! {
    #[test]
    fn prop_flatten_is_idempotent(elements in prop::collection::vec(nested(), 0..6)) {
        let set: ExtendedSet<Nested<i32>> = elements.into_iter().collect();
        let flat = set.flatten();

        prop_assert!(flat.flatten().equal(&flat));
        prop_assert_eq!(set.atoms().cardinality(), flat.cardinality());
    }
}

// =============================================================================
// Pop Exhaustion
// Description: Popping n times yields n distinct members, then nothing
// =============================================================================

proptest! {
    #[test]
    fn prop_pop_exhaustion(set in residues()) {
        let mut remaining = set.clone();
        let mut popped = ExtendedSet::new();
        for _ in 0..set.cardinality() {
            let element = remaining.pop();
            prop_assert!(element.is_some());
            if let Some(element) = element {
                prop_assert!(set.has_element(&element));
                prop_assert!(popped.add(element));
            }
        }
        prop_assert!(remaining.pop().is_none());
        prop_assert!(popped.equal(&set));
    }
}

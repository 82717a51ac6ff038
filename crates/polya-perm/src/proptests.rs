//! Property-based tests for permutations and groups.

use proptest::prelude::*;

use crate::permutation::Permutation;

// Strategy for generating a random permutation of the given degree
fn permutation_of(degree: usize) -> impl Strategy<Value = Permutation> {
    Just((0..degree).collect::<Vec<usize>>())
        .prop_shuffle()
        .prop_map(Permutation::from_images)
}

// Strategy for generating a random permutation of degree 1..=7
fn permutation() -> impl Strategy<Value = Permutation> {
    (1usize..=7).prop_flat_map(permutation_of)
}

proptest! {
    #[test]
    fn inverse_cancels_on_both_sides(p in permutation()) {
        let identity = Permutation::identity(p.degree());
        prop_assert_eq!(p.compose(&p.inverse()).unwrap(), identity.clone());
        prop_assert_eq!(p.inverse().compose(&p).unwrap(), identity);
    }

    #[test]
    fn power_zero_is_identity(p in permutation()) {
        prop_assert_eq!(p.power(0), Permutation::identity(p.degree()));
    }

    #[test]
    fn negative_power_is_power_of_inverse(p in permutation(), k in 0i32..6) {
        prop_assert_eq!(p.power(-k), p.inverse().power(k));
    }

    #[test]
    fn power_adds_exponents(p in permutation(), a in 0i32..5, b in 0i32..5) {
        prop_assert_eq!(
            p.power(a).compose(&p.power(b)).unwrap(),
            p.power(a + b)
        );
    }

    #[test]
    fn cycle_lengths_partition_the_degree(p in permutation()) {
        let structure = p.cycle_structure();
        prop_assert_eq!(structure.degree(), p.degree());
        prop_assert_eq!(
            structure.total_cycle_count(),
            p.as_cycles().len()
        );
    }

    #[test]
    fn cycles_visit_every_element_once(p in permutation()) {
        let mut elements: Vec<usize> = p.as_cycles().into_iter().flatten().collect();
        elements.sort_unstable();
        let expected: Vec<usize> = (0..p.degree()).collect();
        prop_assert_eq!(elements, expected);
    }

    #[test]
    fn each_cycle_starts_at_its_smallest_element(p in permutation()) {
        for cycle in p.as_cycles() {
            prop_assert_eq!(cycle[0], *cycle.iter().min().unwrap());
        }
    }

    #[test]
    fn composition_is_associative(
        (a, b, c) in (2usize..=6).prop_flat_map(|degree| {
            (permutation_of(degree), permutation_of(degree), permutation_of(degree))
        })
    ) {
        prop_assert_eq!(
            a.compose(&b).unwrap().compose(&c).unwrap(),
            a.compose(&b.compose(&c).unwrap()).unwrap()
        );
    }
}

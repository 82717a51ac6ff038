//! Property-based tests for polynomial ring laws.

use proptest::prelude::*;

use polya_rational::Rational;

use crate::{Polynomial, Term};

const ARITY: usize = 2;

fn variables() -> Vec<String> {
    vec!["x".to_string(), "y".to_string()]
}

// Strategy for generating small non-trivial coefficients
fn coefficient() -> impl Strategy<Value = Rational> {
    (-6i64..=6).prop_map(Rational::from)
}

// Strategy for generating polynomials with up to four small terms
fn polynomial() -> impl Strategy<Value = Polynomial> {
    proptest::collection::vec(
        (proptest::collection::vec(0u32..4, ARITY), coefficient()),
        0..=4,
    )
    .prop_map(|entries| {
        let mut poly = Polynomial::new(variables());
        for (exponents, coeff) in entries {
            let term = Term::new(&exponents);
            let accumulated = poly.coefficient(&term) + coeff;
            poly.set(term, accumulated).unwrap();
        }
        poly
    })
}

proptest! {
    // Ring axioms over a fixed variable list

    #[test]
    fn add_commutative(p in polynomial(), q in polynomial()) {
        prop_assert_eq!(p.add(&q).unwrap(), q.add(&p).unwrap());
    }

    #[test]
    fn add_associative(p in polynomial(), q in polynomial(), r in polynomial()) {
        prop_assert_eq!(
            p.add(&q).unwrap().add(&r).unwrap(),
            p.add(&q.add(&r).unwrap()).unwrap()
        );
    }

    #[test]
    fn mul_commutative(p in polynomial(), q in polynomial()) {
        prop_assert_eq!(p.mul(&q).unwrap(), q.mul(&p).unwrap());
    }

    #[test]
    fn mul_associative(p in polynomial(), q in polynomial(), r in polynomial()) {
        prop_assert_eq!(
            p.mul(&q).unwrap().mul(&r).unwrap(),
            p.mul(&q.mul(&r).unwrap()).unwrap()
        );
    }

    #[test]
    fn mul_distributes_over_add(p in polynomial(), q in polynomial(), r in polynomial()) {
        let expanded = p.mul(&q.add(&r).unwrap()).unwrap();
        let distributed = p.mul(&q).unwrap().add(&p.mul(&r).unwrap()).unwrap();
        prop_assert_eq!(expanded, distributed);
    }

    #[test]
    fn sub_self_is_zero(p in polynomial()) {
        prop_assert!(p.sub(&p).unwrap().is_zero());
    }

    // Sparse-storage invariant: no stored coefficient is ever zero

    #[test]
    fn no_zero_coefficients_survive(p in polynomial(), q in polynomial()) {
        for poly in [p.add(&q).unwrap(), p.sub(&q).unwrap(), p.mul(&q).unwrap()] {
            for coefficient in poly.terms().values() {
                prop_assert!(!num_traits::Zero::is_zero(coefficient));
            }
        }
    }
}

//! Property-based tests for exact rational arithmetic.

use num_traits::Zero;
use proptest::prelude::*;

use crate::Rational;

// Strategy for generating small numerators
fn small_int() -> impl Strategy<Value = i64> {
    -1000i64..1000i64
}

// Strategy for generating non-zero denominators
fn non_zero_int() -> impl Strategy<Value = i64> {
    prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
}

fn rational() -> impl Strategy<Value = Rational> {
    (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d).unwrap())
}

proptest! {
    // Field axioms

    #[test]
    fn add_commutative(a in rational(), b in rational()) {
        prop_assert_eq!(a.clone() + b.clone(), b + a);
    }

    #[test]
    fn add_associative(a in rational(), b in rational(), c in rational()) {
        prop_assert_eq!(
            (a.clone() + b.clone()) + c.clone(),
            a + (b + c)
        );
    }

    #[test]
    fn mul_commutative(a in rational(), b in rational()) {
        prop_assert_eq!(a.clone() * b.clone(), b * a);
    }

    #[test]
    fn mul_distributes_over_add(a in rational(), b in rational(), c in rational()) {
        prop_assert_eq!(
            a.clone() * (b.clone() + c.clone()),
            a.clone() * b + a * c
        );
    }

    // Canonical-form invariants

    #[test]
    fn reduced_form(n in small_int(), d in non_zero_int()) {
        let r = Rational::new(n, d).unwrap();
        let num = i64::try_from(r.numerator()).unwrap();
        let den = i64::try_from(r.denominator()).unwrap();
        prop_assert!(den > 0);
        prop_assert_eq!(gcd(num.unsigned_abs(), den.unsigned_abs()), 1);
        if num == 0 {
            prop_assert_eq!(den, 1);
        }
    }

    // Inverse laws

    #[test]
    fn div_then_mul_is_identity(a in rational(), b in rational()) {
        prop_assume!(!b.is_zero());
        prop_assert_eq!(a.clone().div(&b).unwrap() * b, a);
    }

    #[test]
    fn sub_self_is_zero(a in rational()) {
        prop_assert!((a.clone() - a).is_zero());
    }

    #[test]
    fn division_by_zero_always_fails(a in rational()) {
        prop_assert!(a.div(&Rational::from(0)).is_err());
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.max(1)
}

//! Property-based tests for exact integer and rational arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Ring, Q, Z};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Q> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Q::new(n, d))
    }

    // Strategy for probabilities of the form k/s with 0 <= k <= s
    fn probability() -> impl Strategy<Value = Q> {
        (1i64..=100).prop_flat_map(|s| (0..=s).prop_map(move |k| Q::new(k, s)))
    }

    proptest! {
        #[test]
        fn rational_add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn rational_mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a.clone() * b.clone(), b * a);
        }

        #[test]
        fn rational_distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn rational_additive_inverse(a in rational()) {
            prop_assert!((a.clone() + -a).is_zero());
        }

        #[test]
        fn complement_is_exact(p in probability()) {
            // 1 - p + p == 1 with no rounding
            let q = Q::one() - p.clone();
            prop_assert!((q + p).is_one());
        }

        #[test]
        fn ratio_matches_small_rational(n in small_int(), d in non_zero_int()) {
            prop_assert_eq!(Q::from_ratio(&Z::new(n), &Z::new(d)), Q::new(n, d));
        }

        #[test]
        fn integer_ring_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let (a, b, c) = (Z::new(a), Z::new(b), Z::new(c));
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn to_f64_stays_in_unit_interval(p in probability()) {
            let f = p.to_f64();
            prop_assert!((0.0..=1.0).contains(&f));
        }
    }
}

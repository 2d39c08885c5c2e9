//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use std::collections::HashSet;

    use crate::product::{mass_multiply, par_mass_multiply};
    use crate::{Polynomial, Term};
    use tally_rings::{Ring, Q};

    fn small_term() -> impl Strategy<Value = Term<i64>> {
        (-20i64..20i64, 0u32..12u32).prop_map(|(c, e)| Term::new(c, e))
    }

    // Strategy for generating small sparse polynomials
    fn small_poly() -> impl Strategy<Value = Polynomial<i64>> {
        proptest::collection::vec(small_term(), 0..=6).prop_map(Polynomial::new)
    }

    // Strategy for uniform dice polynomials with 1..=12 faces
    fn die() -> impl Strategy<Value = Polynomial<Q>> {
        (1u32..=12).prop_map(|sides| {
            (1..=sides)
                .map(|j| Term::new(Q::new(1, i64::from(sides)), j))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn insertion_never_duplicates_exponents(terms in proptest::collection::vec(small_term(), 0..=30)) {
            let p = terms
                .into_iter()
                .fold(Polynomial::zero(), |acc, t| acc.add_term(t));
            let exps: Vec<u32> = p.iter().map(|(e, _)| e).collect();
            let unique: HashSet<u32> = exps.iter().copied().collect();
            prop_assert_eq!(exps.len(), unique.len());
            prop_assert!(p.iter().all(|(_, c)| !c.is_zero()));
        }

        #[test]
        fn add_term_matches_add(p in small_poly(), t in small_term()) {
            let single = Polynomial::new([t.clone()]);
            prop_assert_eq!(p.add_term(t), p.add(&single));
        }

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_mul_identity(a in small_poly()) {
            prop_assert_eq!(a.mul(&Polynomial::one()), a);
        }

        #[test]
        fn mass_multiply_ignores_fold_order(dice in proptest::collection::vec(die(), 1..=5)) {
            let forward = mass_multiply(&dice).unwrap();

            let mut reversed = dice.clone();
            reversed.reverse();
            prop_assert_eq!(&mass_multiply(&reversed).unwrap(), &forward);

            let mut rotated = dice.clone();
            rotated.rotate_left(1);
            prop_assert_eq!(&mass_multiply(&rotated).unwrap(), &forward);

            prop_assert_eq!(&par_mass_multiply(&dice).unwrap(), &forward);
        }

        #[test]
        fn dice_product_conserves_mass(dice in proptest::collection::vec(die(), 1..=5)) {
            let product = mass_multiply(&dice).unwrap();
            prop_assert!(product.coeff_sum().is_one());
            let min: u32 = dice.iter().filter_map(Polynomial::min_exponent).sum();
            let max: u32 = dice.iter().filter_map(Polynomial::degree).sum();
            prop_assert_eq!(product.min_exponent(), Some(min));
            prop_assert_eq!(product.degree(), Some(max));
        }
    }
}

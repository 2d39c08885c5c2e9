//! Property-based tests for dice odds.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{DiceSpec, OddsEngine};
    use tally_rings::{Ring, Q, Z};

    fn spec() -> impl Strategy<Value = DiceSpec> {
        (1u32..=4, 1u32..=12, -5i64..=5)
            .prop_map(|(n, s, m)| DiceSpec::new(n, s, m).unwrap())
    }

    fn pool() -> impl Strategy<Value = Vec<DiceSpec>> {
        proptest::collection::vec(spec(), 1..=3)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn complement_law_is_exact(pool in pool(), target in -5i64..60) {
            let odds = OddsEngine::default().odds(&pool, target).unwrap();
            prop_assert_eq!(
                odds.at_or_above().clone() + odds.below().clone(),
                Q::from_integer(100)
            );
        }

        #[test]
        fn probability_mass_is_conserved(pool in pool()) {
            let distribution = OddsEngine::default().distribution(&pool).unwrap();
            prop_assert!(distribution.coeff_sum().is_one());
            prop_assert!(distribution.coeff(0).is_zero());
        }

        #[test]
        fn outcomes_total_product_of_sides(pool in pool()) {
            let counts = OddsEngine::default().outcome_counts(&pool).unwrap();
            let total = pool.iter().fold(Z::one(), |acc, spec| {
                (0..spec.num_dice()).fold(acc, |acc, _| acc * Z::from(spec.die_size()))
            });
            prop_assert_eq!(counts.coeff_sum(), total);
        }

        #[test]
        fn at_or_above_is_monotone(pool in pool()) {
            let engine = OddsEngine::default();
            let max: u64 = pool.iter().map(DiceSpec::max_sum).sum();
            let max = i64::try_from(max).unwrap();
            let mut previous = Q::from_integer(100);
            for target in 0..=max + 1 {
                let current = engine.odds(&pool, target).unwrap().at_or_above().clone();
                prop_assert!(current <= previous);
                previous = current;
            }
        }

        #[test]
        fn reachable_range_bounds(pool in pool()) {
            let engine = OddsEngine::default();
            let min: u64 = pool.iter().map(DiceSpec::min_sum).sum();
            let max: u64 = pool.iter().map(DiceSpec::max_sum).sum();
            let min = i64::try_from(min).unwrap();
            let max = i64::try_from(max).unwrap();

            let at_min = engine.odds(&pool, min).unwrap();
            prop_assert_eq!(at_min.at_or_above(), &Q::from_integer(100));

            let past_max = engine.odds(&pool, max + 1).unwrap();
            prop_assert!(past_max.at_or_above().is_zero());
        }

        #[test]
        fn pool_order_does_not_matter(pool in pool(), target in 0i64..40) {
            let engine = OddsEngine::default();
            let mut reversed = pool.clone();
            reversed.reverse();
            prop_assert_eq!(
                engine.odds(&pool, target).unwrap(),
                engine.odds(&reversed, target).unwrap()
            );
        }

        #[test]
        fn display_parses_back(s in spec()) {
            prop_assert_eq!(s.to_string().parse::<DiceSpec>().unwrap(), s);
        }
    }
}

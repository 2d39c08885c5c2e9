//! Tail probabilities of a pool's sum.
//!
//! The pool arrives as outcome counts. Results are percentages in
//! `[0, 100]`, kept exact until a caller asks for a float.

use tally_poly::Polynomial;
use tally_rings::{Ring, Q, Z};

/// Percentage chance that the sum is at least `target`.
///
/// Counts the outcomes of every term with exponent `>= target` and divides
/// by the total number of outcomes. The constant term never counts, since
/// a pool of dice cannot sum to zero. The zero polynomial has no outcomes
/// and gives zero.
#[must_use]
pub fn chance_at_or_above(pool: &Polynomial<Z>, target: i64) -> Q {
    let total = pool.coeff_sum();
    if total.is_zero() {
        return Q::zero();
    }
    let hits = Z::sum_all(
        pool.iter()
            .filter(|&(e, _)| e > 0 && i64::from(e) >= target)
            .map(|(_, c)| c.clone()),
    );
    Q::from_ratio(&(hits * Z::new(100)), &total)
}

/// Percentage chance that the sum is below `target`.
///
/// Always `100 - chance_at_or_above(pool, target)`.
#[must_use]
pub fn chance_below(pool: &Polynomial<Z>, target: i64) -> Q {
    Q::from_integer(100) - chance_at_or_above(pool, target)
}

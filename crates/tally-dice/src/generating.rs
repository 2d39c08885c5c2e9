//! Probability-generating functions for dice.
//!
//! A fair die with `S` faces is `(1/S)(x + x^2 + ... + x^S)`: the
//! coefficient of `x^j` is the chance of rolling `j`. The engine works on
//! the scaled form `x + x^2 + ... + x^S`, whose coefficients count
//! outcomes. A product of those counts the outcomes of the whole pool, and
//! dividing by the coefficient sum recovers the probabilities.

use tally_poly::{Polynomial, Term};
use tally_rings::{Ring, Q, Z};
use tracing::trace;

use crate::config::EngineLimits;
use crate::error::{DiceError, Result};
use crate::formula::DiceSpec;

/// Builds the outcome-count polynomial `x + x^2 + ... + x^S` of one die.
///
/// # Errors
///
/// Returns [`DiceError::InvalidPool`] if `sides` is zero.
pub fn die_counts(sides: u32) -> Result<Polynomial<Z>> {
    if sides == 0 {
        return Err(DiceError::InvalidPool {
            num_dice: 1,
            die_size: 0,
        });
    }

    Ok((1..=sides).map(|j| Term::new(Z::one(), j)).collect())
}

/// Builds the generating function of one fair die with `sides` faces.
///
/// # Errors
///
/// Returns [`DiceError::InvalidPool`] if `sides` is zero.
pub fn die_polynomial(sides: u32) -> Result<Polynomial<Q>> {
    Ok(probabilities(&die_counts(sides)?))
}

/// Divides an outcome-count polynomial by its total number of outcomes.
///
/// The zero polynomial maps to itself.
#[must_use]
pub fn probabilities(counts: &Polynomial<Z>) -> Polynomial<Q> {
    let total = counts.coeff_sum();
    if total.is_zero() {
        return Polynomial::zero();
    }
    counts.map_coeffs(|c| Q::from_ratio(c, &total))
}

/// Builds one outcome-count polynomial per individual die in the pool.
///
/// A `3d6` entry contributes three copies of the d6 polynomial. Constant
/// terms are stripped from every factor before they are multiplied.
///
/// # Errors
///
/// Returns [`DiceError::EmptyPool`] for an empty pool and
/// [`DiceError::PoolTooLarge`] if the pool exceeds `limits`.
pub fn pool_polynomials(pool: &[DiceSpec], limits: &EngineLimits) -> Result<Vec<Polynomial<Z>>> {
    if pool.is_empty() {
        return Err(DiceError::EmptyPool);
    }

    let dice: u64 = pool.iter().map(|spec| u64::from(spec.num_dice())).sum();
    let degree: u64 = pool.iter().map(DiceSpec::max_sum).sum();
    limits.check(dice, degree)?;

    let mut factors = Vec::with_capacity(usize::try_from(dice).unwrap_or_default());
    for spec in pool {
        let die = die_counts(spec.die_size())?.without_constant();
        trace!(%spec, %die, "die polynomial");
        factors.extend(std::iter::repeat(die).take(spec.num_dice() as usize));
    }

    Ok(factors)
}

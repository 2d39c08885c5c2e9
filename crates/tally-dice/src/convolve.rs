//! Convolution of per-die generating functions.

use tally_poly::{mass_multiply, par_mass_multiply, Polynomial};
use tally_rings::Z;
use tracing::{debug, instrument, trace};

use crate::config::EngineLimits;
use crate::error::Result;

/// Multiplies the per-die count polynomials into the pool's.
///
/// The coefficient of `x^k` in the result is the number of outcomes that
/// sum to `k`, out of `S1 * S2 * ... * Sn` in total. Pools with at
/// least `limits.parallel_threshold` dice are reduced on the rayon pool.
///
/// # Errors
///
/// Returns [`tally_poly::PolyError::EmptyProduct`] (wrapped) if `factors`
/// is empty.
#[instrument(level = "debug", skip_all, fields(dice = factors.len()))]
pub fn convolve(factors: &[Polynomial<Z>], limits: &EngineLimits) -> Result<Polynomial<Z>> {
    let product = if factors.len() >= limits.parallel_threshold {
        debug!("using parallel reduction");
        par_mass_multiply(factors)?
    } else {
        mass_multiply(factors)?
    };

    debug!(
        terms = product.len(),
        min = ?product.min_exponent(),
        degree = ?product.degree(),
        "convolved pool"
    );
    trace!(%product, "pool polynomial");

    Ok(product)
}

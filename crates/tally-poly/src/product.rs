//! Products over many polynomials.
//!
//! Polynomial multiplication is commutative and associative, so the product
//! of a list does not depend on how it is grouped. `mass_multiply` folds
//! left to right; `par_mass_multiply` reduces pairwise on the rayon pool.

use rayon::prelude::*;

use tally_rings::traits::Ring;

use crate::error::{PolyError, Result};
use crate::polynomial::Polynomial;

/// Multiplies all polynomials together, left to right.
///
/// A single polynomial is returned unchanged.
///
/// # Errors
///
/// Returns [`PolyError::EmptyProduct`] if `polys` is empty.
pub fn mass_multiply<R: Ring>(polys: &[Polynomial<R>]) -> Result<Polynomial<R>> {
    let (first, rest) = polys.split_first().ok_or(PolyError::EmptyProduct)?;
    Ok(rest.iter().fold(first.clone(), |acc, p| acc.mul(p)))
}

/// Multiplies all polynomials together using a parallel tree reduction.
///
/// Produces the same polynomial as [`mass_multiply`].
///
/// # Errors
///
/// Returns [`PolyError::EmptyProduct`] if `polys` is empty.
pub fn par_mass_multiply<R>(polys: &[Polynomial<R>]) -> Result<Polynomial<R>>
where
    R: Ring + Send + Sync,
{
    polys
        .par_iter()
        .cloned()
        .reduce_with(|a, b| a.mul(&b))
        .ok_or(PolyError::EmptyProduct)
}

/// Raises a polynomial to a non-negative integer power by squaring.
#[must_use]
pub fn pow<R: Ring>(p: &Polynomial<R>, n: u32) -> Polynomial<R> {
    let mut result = Polynomial::one();
    let mut base = p.clone();
    let mut exp = n;

    while exp > 0 {
        if exp & 1 == 1 {
            result = result.mul(&base);
        }
        exp >>= 1;
        if exp > 0 {
            base = base.mul(&base);
        }
    }

    result
}

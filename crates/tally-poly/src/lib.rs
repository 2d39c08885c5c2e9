//! # tally-poly
//!
//! Sparse univariate polynomial arithmetic for dice generating functions.
//!
//! This crate provides:
//! - `Term`, a single `c*x^n`
//! - `Polynomial`, a normalized sparse polynomial keyed by exponent
//! - Products over many polynomials, sequential and parallel
//!
//! Coefficients come from any [`tally_rings::Ring`]; the dice layer uses
//! exact rationals so the coefficient of `x^k` in a pool polynomial is
//! exactly P(sum = k).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod polynomial;
pub mod product;
pub mod term;

#[cfg(test)]
mod proptests;

pub use error::PolyError;
pub use polynomial::Polynomial;
pub use product::{mass_multiply, par_mass_multiply};
pub use term::Term;

//! # tally-rings
//!
//! Coefficient rings for tally's generating-function engine.
//!
//! This crate provides:
//! - The `Ring` trait that polynomial coefficients must implement
//! - `Z`, arbitrary precision integers used for outcome counts
//! - `Q`, exact rational numbers backed by `dashu`
//!
//! Probabilities are carried as `Q` end to end and only converted to
//! floating point when a caller asks for a readout.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integers;
pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use integers::Z;
pub use rationals::Q;
pub use traits::Ring;

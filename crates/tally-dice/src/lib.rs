//! # tally-dice
//!
//! Exact odds for sums of dice, computed from probability-generating
//! functions instead of enumeration or sampling.
//!
//! A die with `S` faces is the polynomial `(1/S)(x + ... + x^S)`. The
//! product of one such polynomial per die is the generating function of the
//! pool's sum, and a tail probability is a sum of its coefficients. The
//! engine multiplies the integer form `x + ... + x^S` instead, which counts
//! outcomes, and divides once at the end:
//!
//! ```text
//! "3d6" ──parse──▶ DiceSpec ──generating──▶ [d6, d6, d6]
//!       ──convolve──▶ Σ ways(sum = k) x^k ──tail──▶ P(sum >= target)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use tally_dice::chance_of_rolling_at_or_above;
//!
//! let p = chance_of_rolling_at_or_above(7, 2, 6).unwrap();
//! assert!((p - 58.333_333).abs() < 1e-3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod convolve;
pub mod error;
pub mod formula;
pub mod generating;
pub mod odds;
pub mod summary;
pub mod tail;

#[cfg(test)]
mod proptests;

pub use config::EngineLimits;
pub use error::{DiceError, Result};
pub use formula::{parse_dice_formula, DiceSpec};
pub use odds::{chance_of_rolling_at_or_above, chance_of_rolling_below, Odds, OddsEngine, PoolDisplay};
pub use summary::{Characteristic, RollSummary, Verdict};

//! # Tally
//!
//! Exact probabilities for sums of dice.
//!
//! Tally builds the probability-generating function of a dice pool as a
//! polynomial with exact rational coefficients and reads tail
//! probabilities straight off it. No enumeration, no sampling.
//!
//! ## Features
//!
//! - **Exact arithmetic**: outcome counts are big integers, probabilities
//!   are rationals, floats only at readout
//! - **Mixed pools**: `2d6 + 1d8` is convolved die by die
//! - **Sparse polynomials**: like terms are always combined
//! - **Bounded work**: pools past the configured limits are rejected up front
//!
//! ## Quick Start
//!
//! ```rust
//! use tally::prelude::*;
//!
//! let pool: Vec<DiceSpec> = vec!["2d6".parse().unwrap(), "d8".parse().unwrap()];
//! let odds = OddsEngine::default().odds(&pool, 10).unwrap();
//! assert_eq!(odds.at_or_above().clone() + odds.below().clone(), Q::from_integer(100));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use tally_dice as dice;
pub use tally_poly as poly;
pub use tally_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use tally_dice::{
        chance_of_rolling_at_or_above, chance_of_rolling_below, parse_dice_formula, Characteristic,
        DiceError, DiceSpec, EngineLimits, Odds, OddsEngine, RollSummary, Verdict,
    };
    pub use tally_poly::{mass_multiply, Polynomial, Term};
    pub use tally_rings::{Ring, Q, Z};
}

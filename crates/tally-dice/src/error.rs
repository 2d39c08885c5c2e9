//! Errors raised while answering dice queries.

use tally_poly::PolyError;
use thiserror::Error;

/// Errors that can occur while parsing dice or computing odds.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DiceError {
    /// The text is not `NdM`, `dM`, `NdM+K` or `NdM-K`.
    #[error("invalid dice formula {formula:?}: {reason}")]
    Parse {
        /// The rejected input.
        formula: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A pool entry with no dice or with zero-sided dice.
    #[error("invalid pool: {num_dice} dice with {die_size} sides")]
    InvalidPool {
        /// Number of dice requested.
        num_dice: u32,
        /// Sides per die requested.
        die_size: u32,
    },

    /// A pool without any entries.
    #[error("dice pool is empty")]
    EmptyPool,

    /// The pool exceeds the configured engine limits.
    #[error(
        "pool too large: {dice} dice with maximum sum {degree} \
         (limits: {max_dice} dice, maximum sum {max_degree})"
    )]
    PoolTooLarge {
        /// Total number of individual dice.
        dice: u64,
        /// Highest reachable sum, the degree of the pool polynomial.
        degree: u64,
        /// Configured dice limit.
        max_dice: u32,
        /// Configured degree limit.
        max_degree: u32,
    },

    /// The rolls on a sheet add up past the range of `i64`.
    #[error("sum of {count} rolls overflows")]
    RollOverflow {
        /// Number of rolls that were being added.
        count: usize,
    },

    /// An error from the polynomial layer.
    #[error(transparent)]
    Poly(#[from] PolyError),
}

impl DiceError {
    pub(crate) fn parse(formula: &str, reason: impl Into<String>) -> Self {
        Self::Parse {
            formula: formula.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result alias for dice operations.
pub type Result<T> = std::result::Result<T, DiceError>;

//! Odds queries over dice pools.

use std::fmt;

use tally_poly::Polynomial;
use tally_rings::{Q, Z};
use tracing::{debug, instrument};

use crate::config::EngineLimits;
use crate::convolve::convolve;
use crate::error::Result;
use crate::formula::DiceSpec;
use crate::generating::{pool_polynomials, probabilities};
use crate::tail::{chance_at_or_above, chance_below};

/// Exact odds of a pool's sum against a target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Odds {
    target: i64,
    at_or_above: Q,
    below: Q,
}

impl Odds {
    /// The target sum these odds were computed for.
    #[must_use]
    pub fn target(&self) -> i64 {
        self.target
    }

    /// Exact percentage chance of rolling at or above the target.
    #[must_use]
    pub fn at_or_above(&self) -> &Q {
        &self.at_or_above
    }

    /// Exact percentage chance of rolling below the target.
    #[must_use]
    pub fn below(&self) -> &Q {
        &self.below
    }

    /// [`Odds::at_or_above`] as a float in `[0, 100]`.
    #[must_use]
    pub fn at_or_above_percent(&self) -> f64 {
        self.at_or_above.to_f64()
    }

    /// [`Odds::below`] as a float in `[0, 100]`.
    #[must_use]
    pub fn below_percent(&self) -> f64 {
        self.below.to_f64()
    }
}

impl fmt::Display for Odds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            ">= {}: {:.2}%, < {}: {:.2}%",
            self.target,
            self.at_or_above_percent(),
            self.target,
            self.below_percent()
        )
    }
}

/// Answers odds queries within a set of [`EngineLimits`].
///
/// The engine holds no state between queries; it can be shared freely
/// across threads.
#[derive(Clone, Debug, Default)]
pub struct OddsEngine {
    limits: EngineLimits,
}

impl OddsEngine {
    /// Creates an engine with the given limits.
    #[must_use]
    pub fn new(limits: EngineLimits) -> Self {
        Self { limits }
    }

    /// Returns the engine limits.
    #[must_use]
    pub fn limits(&self) -> &EngineLimits {
        &self.limits
    }

    /// Counts the outcomes of the pool for every reachable sum.
    ///
    /// Dice of different sizes are convolved exactly, one factor per die.
    /// The coefficient sum is the total number of outcomes.
    ///
    /// # Errors
    ///
    /// Fails if the pool is empty or exceeds the engine limits.
    pub fn outcome_counts(&self, pool: &[DiceSpec]) -> Result<Polynomial<Z>> {
        let factors = pool_polynomials(pool, &self.limits)?;
        convolve(&factors, &self.limits)
    }

    /// Builds the generating function of the pool's sum.
    ///
    /// The coefficient of `x^k` is exactly P(sum = k).
    ///
    /// # Errors
    ///
    /// Fails if the pool is empty or exceeds the engine limits.
    pub fn distribution(&self, pool: &[DiceSpec]) -> Result<Polynomial<Q>> {
        Ok(probabilities(&self.outcome_counts(pool)?))
    }

    /// Computes the odds of the pool's sum reaching `target`.
    ///
    /// # Errors
    ///
    /// Fails if the pool is empty or exceeds the engine limits.
    #[instrument(level = "debug", skip(self, pool), fields(pool = %PoolDisplay(pool)))]
    pub fn odds(&self, pool: &[DiceSpec], target: i64) -> Result<Odds> {
        let counts = self.outcome_counts(pool)?;
        let at_or_above = chance_at_or_above(&counts, target);
        let below = chance_below(&counts, target);
        debug!(%at_or_above, %below, "computed odds");

        Ok(Odds {
            target,
            at_or_above,
            below,
        })
    }
}

/// Formats a pool as `2d6 + 1d8`.
pub struct PoolDisplay<'a>(pub &'a [DiceSpec]);

impl fmt::Display for PoolDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, spec) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{spec}")?;
        }
        Ok(())
    }
}

/// Percentage chance that `num_dice` dice with `die_size` sides sum to at
/// least `target`.
///
/// # Errors
///
/// Returns [`crate::DiceError::InvalidPool`] if either count is zero and
/// [`crate::DiceError::PoolTooLarge`] past the default limits.
pub fn chance_of_rolling_at_or_above(target: i64, num_dice: u32, die_size: u32) -> Result<f64> {
    let pool = [DiceSpec::new(num_dice, die_size, 0)?];
    Ok(OddsEngine::default().odds(&pool, target)?.at_or_above_percent())
}

/// Percentage chance that `num_dice` dice with `die_size` sides sum to less
/// than `target`.
///
/// # Errors
///
/// Same as [`chance_of_rolling_at_or_above`].
pub fn chance_of_rolling_below(target: i64, num_dice: u32, die_size: u32) -> Result<f64> {
    let pool = [DiceSpec::new(num_dice, die_size, 0)?];
    Ok(OddsEngine::default().odds(&pool, target)?.below_percent())
}

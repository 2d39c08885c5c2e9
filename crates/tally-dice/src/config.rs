//! Engine limits.
//!
//! Convolving a pool one die at a time costs about `D^2 / 2` coefficient
//! operations, where `D` is the highest reachable sum, and the coefficients
//! grow to `n * log2(S)` bits for `n` dice with `S` sides. Queries are
//! bounded up front on both, so a pool either fails fast or finishes in
//! well under a second in release builds.

use crate::error::{DiceError, Result};

/// Limits and tuning for the odds engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineLimits {
    /// Maximum number of individual dice in one pool.
    pub max_dice: u32,
    /// Maximum reachable sum, i.e. the degree of the pool polynomial.
    pub max_degree: u32,
    /// Minimum number of dice before the product is reduced in parallel.
    pub parallel_threshold: usize,
}

impl Default for EngineLimits {
    fn default() -> Self {
        Self {
            max_dice: 500,
            max_degree: 2_000,
            parallel_threshold: 16,
        }
    }
}

impl EngineLimits {
    /// Set the maximum number of dice.
    #[must_use]
    pub fn with_max_dice(mut self, max_dice: u32) -> Self {
        self.max_dice = max_dice;
        self
    }

    /// Set the maximum pool degree.
    #[must_use]
    pub fn with_max_degree(mut self, max_degree: u32) -> Self {
        self.max_degree = max_degree;
        self
    }

    /// Set the parallel reduction threshold.
    #[must_use]
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    /// Checks a pool of `dice` dice whose highest reachable sum is `degree`.
    ///
    /// # Errors
    ///
    /// Returns [`DiceError::PoolTooLarge`] if either limit is exceeded.
    pub fn check(&self, dice: u64, degree: u64) -> Result<()> {
        if dice > u64::from(self.max_dice) || degree > u64::from(self.max_degree) {
            return Err(DiceError::PoolTooLarge {
                dice,
                degree,
                max_dice: self.max_dice,
                max_degree: self.max_degree,
            });
        }
        Ok(())
    }
}

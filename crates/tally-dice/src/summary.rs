//! Summaries of a rolled character sheet.
//!
//! Each characteristic is rolled from its own formula. The summary adds up
//! the rolls, compares them with the average outcome and reports how
//! likely a result this good (or this bad) was, over the exact pool of
//! every formula on the sheet.

use std::fmt;
use std::str::FromStr;

use tally_rings::Q;
use tracing::{debug, warn};

use crate::error::{DiceError, Result};
use crate::formula::{parse_dice_formula, DiceSpec};
use crate::odds::OddsEngine;

/// One rolled line of a character sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Characteristic {
    /// Display name, e.g. `STR`.
    pub name: String,
    /// Dice formula the value was rolled with.
    pub formula: String,
    /// The rolled value.
    pub roll: i64,
}

impl Characteristic {
    /// Creates a characteristic.
    pub fn new(name: impl Into<String>, formula: impl Into<String>, roll: i64) -> Self {
        Self {
            name: name.into(),
            formula: formula.into(),
            roll,
        }
    }
}

/// Parses `NAME=FORMULA:ROLL`, e.g. `STR=3d6:14`.
impl FromStr for Characteristic {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self> {
        let (name, rest) = s
            .split_once('=')
            .ok_or_else(|| DiceError::parse(s, "expected NAME=FORMULA:ROLL"))?;
        let (formula, roll) = rest
            .rsplit_once(':')
            .ok_or_else(|| DiceError::parse(s, "missing :ROLL"))?;
        let roll = roll
            .trim()
            .parse()
            .map_err(|_| DiceError::parse(s, "roll is not an integer"))?;
        Ok(Self::new(name.trim(), formula.trim(), roll))
    }
}

/// How the sheet compares with an average roll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// At or above average; carries the chance of rolling at least this much.
    Good(Q),
    /// Below average; carries the chance of rolling less than this.
    Bad(Q),
}

impl Verdict {
    /// The percentage carried by the verdict.
    #[must_use]
    pub fn percent(&self) -> &Q {
        match self {
            Self::Good(p) | Self::Bad(p) => p,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Self::Good(_) => "good",
            Self::Bad(_) => "bad",
        };
        write!(f, "Odds of rolling this {word}: {:.2}%", self.percent().to_f64())
    }
}

/// Aggregate view of a rolled sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RollSummary {
    rolls_sum: i64,
    expected_average: Q,
    pool: Vec<DiceSpec>,
    verdict: Option<Verdict>,
}

impl RollSummary {
    /// Summarizes a sheet.
    ///
    /// Returns `Ok(None)` when the rolls add up to zero, i.e. nothing has
    /// been rolled yet. Characteristics whose formula is not dice notation
    /// still count towards the sum but are left out of the average and
    /// the odds.
    ///
    /// # Errors
    ///
    /// Returns [`DiceError::RollOverflow`] if the rolls do not add up
    /// within `i64`, and fails if the combined pool exceeds the engine
    /// limits.
    pub fn from_characteristics(
        engine: &OddsEngine,
        characteristics: &[Characteristic],
    ) -> Result<Option<Self>> {
        let rolls_sum = characteristics
            .iter()
            .try_fold(0i64, |acc, c| acc.checked_add(c.roll))
            .ok_or(DiceError::RollOverflow {
                count: characteristics.len(),
            })?;
        if rolls_sum == 0 {
            debug!("no rolls to summarize");
            return Ok(None);
        }

        let mut pool = Vec::with_capacity(characteristics.len());
        for c in characteristics {
            match parse_dice_formula(&c.formula) {
                Some(spec) => pool.push(spec),
                None => warn!(
                    name = %c.name,
                    formula = %c.formula,
                    "skipping characteristic without a dice formula"
                ),
            }
        }

        let expected_average = pool
            .iter()
            .map(DiceSpec::expected_sum)
            .fold(Q::from_integer(0), |acc, e| acc + e);

        let verdict = if pool.is_empty() {
            None
        } else {
            let odds = engine.odds(&pool, rolls_sum)?;
            if Q::from_integer(rolls_sum) >= expected_average {
                Some(Verdict::Good(odds.at_or_above().clone()))
            } else {
                Some(Verdict::Bad(odds.below().clone()))
            }
        };

        Ok(Some(Self {
            rolls_sum,
            expected_average,
            pool,
            verdict,
        }))
    }

    /// Sum of every roll on the sheet.
    #[must_use]
    pub fn rolls_sum(&self) -> i64 {
        self.rolls_sum
    }

    /// Sum the sheet would have if every formula rolled its mean.
    #[must_use]
    pub fn expected_average(&self) -> &Q {
        &self.expected_average
    }

    /// The dice that went into the odds.
    #[must_use]
    pub fn pool(&self) -> &[DiceSpec] {
        &self.pool
    }

    /// Total number of individual dice rolled.
    #[must_use]
    pub fn num_dice(&self) -> u64 {
        self.pool.iter().map(|s| u64::from(s.num_dice())).sum()
    }

    /// The verdict, absent when no characteristic had a dice formula.
    #[must_use]
    pub fn verdict(&self) -> Option<&Verdict> {
        self.verdict.as_ref()
    }
}

impl fmt::Display for RollSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sum of your characteristic rolls: {}", self.rolls_sum)?;
        write!(
            f,
            "If all rolls were average, you'd get: {:.2}",
            self.expected_average.to_f64()
        )?;
        if let Some(verdict) = &self.verdict {
            write!(f, "\n{verdict}")?;
        }
        Ok(())
    }
}

//! Dice notation.
//!
//! Accepts exactly `^(\d*)d(\d+)([+-]\d+)?$`: an optional dice count
//! (empty means one die), a lowercase `d`, the number of sides, and an
//! optional signed flat modifier. No surrounding whitespace is allowed.

use std::fmt;
use std::str::FromStr;

use tally_rings::Q;

use crate::error::{DiceError, Result};

/// A homogeneous group of dice such as `3d6+2`.
///
/// The modifier is carried for display; the probability engine only looks
/// at the dice themselves.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct DiceSpec {
    num_dice: u32,
    die_size: u32,
    modifier: i64,
}

impl DiceSpec {
    /// Creates a dice group.
    ///
    /// # Errors
    ///
    /// Returns [`DiceError::InvalidPool`] if either count is zero.
    pub fn new(num_dice: u32, die_size: u32, modifier: i64) -> Result<Self> {
        if num_dice == 0 || die_size == 0 {
            return Err(DiceError::InvalidPool { num_dice, die_size });
        }
        Ok(Self {
            num_dice,
            die_size,
            modifier,
        })
    }

    /// Number of dice in the group.
    #[must_use]
    pub fn num_dice(&self) -> u32 {
        self.num_dice
    }

    /// Sides per die.
    #[must_use]
    pub fn die_size(&self) -> u32 {
        self.die_size
    }

    /// Flat modifier, zero when absent.
    #[must_use]
    pub fn modifier(&self) -> i64 {
        self.modifier
    }

    /// Lowest reachable sum of the dice, ignoring the modifier.
    #[must_use]
    pub fn min_sum(&self) -> u64 {
        u64::from(self.num_dice)
    }

    /// Highest reachable sum of the dice, ignoring the modifier.
    #[must_use]
    pub fn max_sum(&self) -> u64 {
        u64::from(self.num_dice) * u64::from(self.die_size)
    }

    /// Mean sum of the dice, `n * (s + 1) / 2`, ignoring the modifier.
    #[must_use]
    pub fn expected_sum(&self) -> Q {
        let faces = Q::from_integer(i64::from(self.die_size) + 1);
        Q::from(self.num_dice) * faces * Q::new(1, 2)
    }
}

impl FromStr for DiceSpec {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self> {
        let (_, raw) = grammar::formula(s)
            .map_err(|_| DiceError::parse(s, "expected NdM, dM or NdM+K"))?;

        let num_dice = if raw.count.is_empty() {
            1
        } else {
            raw.count
                .parse::<u32>()
                .map_err(|_| DiceError::parse(s, "dice count out of range"))?
        };
        let die_size = raw
            .sides
            .parse::<u32>()
            .map_err(|_| DiceError::parse(s, "die size out of range"))?;
        let modifier = match raw.modifier {
            Some(m) => m
                .parse::<i64>()
                .map_err(|_| DiceError::parse(s, "modifier out of range"))?,
            None => 0,
        };

        Self::new(num_dice, die_size, modifier)
    }
}

impl fmt::Display for DiceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.num_dice, self.die_size)?;
        if self.modifier != 0 {
            write!(f, "{:+}", self.modifier)?;
        }
        Ok(())
    }
}

/// Parses a formula, returning `None` if it is not dice notation.
///
/// Callers use this to skip entries that have no dice formula.
#[must_use]
pub fn parse_dice_formula(formula: &str) -> Option<DiceSpec> {
    formula.parse().ok()
}

mod grammar {
    use nom::character::complete::{char, digit0, digit1, one_of};
    use nom::combinator::{all_consuming, opt, recognize};
    use nom::sequence::{pair, tuple};
    use nom::IResult;

    pub struct RawFormula<'a> {
        pub count: &'a str,
        pub sides: &'a str,
        pub modifier: Option<&'a str>,
    }

    pub fn formula(input: &str) -> IResult<&str, RawFormula<'_>> {
        let (input, (count, _, sides, modifier)) =
            all_consuming(tuple((digit0, char('d'), digit1, opt(modifier))))(input)?;
        Ok((
            input,
            RawFormula {
                count,
                sides,
                modifier,
            },
        ))
    }

    fn modifier(input: &str) -> IResult<&str, &str> {
        recognize(pair(one_of("+-"), digit1))(input)
    }
}

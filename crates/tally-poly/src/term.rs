//! Single terms `c*x^n`.

use std::fmt;

use tally_rings::traits::Ring;

use crate::error::{PolyError, Result};

/// A term `coeff * x^exp` of a univariate polynomial.
///
/// Terms are values: every operation returns a new term.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Term<R: Ring> {
    coeff: R,
    exp: u32,
}

impl<R: Ring> Term<R> {
    /// Creates the term `coeff * x^exp`.
    #[must_use]
    pub fn new(coeff: R, exp: u32) -> Self {
        Self { coeff, exp }
    }

    /// Creates the constant term `c`.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self::new(c, 0)
    }

    /// Returns the coefficient.
    #[must_use]
    pub fn coeff(&self) -> &R {
        &self.coeff
    }

    /// Returns the exponent.
    #[must_use]
    pub fn exponent(&self) -> u32 {
        self.exp
    }

    /// Returns true if `other` has the same exponent.
    #[must_use]
    pub fn is_like(&self, other: &Self) -> bool {
        self.exp == other.exp
    }

    /// Adds two like terms.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::IncompatibleTerms`] if the exponents differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if !self.is_like(other) {
            return Err(PolyError::IncompatibleTerms {
                left: self.exp,
                right: other.exp,
            });
        }
        Ok(Self::new(self.coeff.clone() + other.coeff.clone(), self.exp))
    }

    /// Multiplies two terms: coefficients multiply, exponents add.
    ///
    /// # Panics
    ///
    /// Panics if the resulting exponent overflows `u32`.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let exp = self
            .exp
            .checked_add(other.exp)
            .expect("exponent overflow in term product");
        Self::new(self.coeff.clone() * other.coeff.clone(), exp)
    }

    /// Splits the term into `(coeff, exp)`.
    #[must_use]
    pub fn into_parts(self) -> (R, u32) {
        (self.coeff, self.exp)
    }
}

impl<R: Ring + fmt::Display> fmt::Display for Term<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.exp {
            0 => write!(f, "{}", self.coeff),
            1 => write!(f, "{}*x", self.coeff),
            n => write!(f, "{}*x^{n}", self.coeff),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_rings::Q;

    #[test]
    fn test_add_like_terms() {
        let a = Term::new(Q::new(1, 6), 3);
        let b = Term::new(Q::new(1, 3), 3);
        assert_eq!(a.add(&b), Ok(Term::new(Q::new(1, 2), 3)));
    }

    #[test]
    fn test_add_unlike_terms_fails() {
        let a = Term::new(Q::new(1, 6), 3);
        let b = Term::new(Q::new(1, 6), 4);
        assert_eq!(
            a.add(&b),
            Err(PolyError::IncompatibleTerms { left: 3, right: 4 })
        );
    }

    #[test]
    fn test_mul() {
        // (1/6 x^2)(1/6 x^5) = 1/36 x^7
        let a = Term::new(Q::new(1, 6), 2);
        let b = Term::new(Q::new(1, 6), 5);
        assert_eq!(a.mul(&b), Term::new(Q::new(1, 36), 7));
    }

    #[test]
    fn test_display() {
        assert_eq!(Term::new(Q::new(1, 6), 0).to_string(), "1/6");
        assert_eq!(Term::new(Q::new(1, 6), 1).to_string(), "1/6*x");
        assert_eq!(Term::new(Q::new(1, 6), 4).to_string(), "1/6*x^4");
    }
}

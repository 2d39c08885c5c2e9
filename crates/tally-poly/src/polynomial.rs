//! Sparse univariate polynomials.
//!
//! A polynomial is stored as a map from exponent to coefficient, so like
//! terms are combined on insertion and no exponent can appear twice.
//! Zero coefficients are dropped.

use std::collections::BTreeMap;
use std::fmt;

use tally_rings::traits::Ring;

use crate::term::Term;

/// A sparse univariate polynomial.
///
/// Every operation returns a new, normalized polynomial and leaves its
/// inputs untouched.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Polynomial<R: Ring> {
    /// Non-zero coefficients keyed by exponent.
    terms: BTreeMap<u32, R>,
}

impl<R: Ring> Polynomial<R> {
    /// Creates a polynomial from terms.
    ///
    /// Like terms are combined and zero coefficients removed.
    #[must_use]
    pub fn new(terms: impl IntoIterator<Item = Term<R>>) -> Self {
        let mut map = BTreeMap::new();
        for term in terms {
            let (coeff, exp) = term.into_parts();
            merge_into(&mut map, exp, coeff);
        }
        Self { terms: map }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            terms: BTreeMap::new(),
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::monomial(R::one(), 0)
    }

    /// Creates the monomial `c * x^n`.
    #[must_use]
    pub fn monomial(c: R, n: u32) -> Self {
        Self::new([Term::new(c, n)])
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of non-zero terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the highest exponent, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<u32> {
        self.terms.keys().next_back().copied()
    }

    /// Returns the lowest exponent, or `None` for the zero polynomial.
    #[must_use]
    pub fn min_exponent(&self) -> Option<u32> {
        self.terms.keys().next().copied()
    }

    /// Returns the coefficient of `x^n`.
    #[must_use]
    pub fn coeff(&self, n: u32) -> R {
        self.terms.get(&n).cloned().unwrap_or_else(R::zero)
    }

    /// Iterates over the terms in ascending exponent order.
    pub fn terms(&self) -> impl DoubleEndedIterator<Item = Term<R>> + '_ {
        self.terms.iter().map(|(&e, c)| Term::new(c.clone(), e))
    }

    /// Iterates over `(exponent, coefficient)` pairs in ascending order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (u32, &R)> + '_ {
        self.terms.iter().map(|(&e, c)| (e, c))
    }

    /// Sum of all coefficients, i.e. the value at `x = 1`.
    #[must_use]
    pub fn coeff_sum(&self) -> R {
        R::sum_all(self.terms.values().cloned())
    }

    /// Adds a single term.
    ///
    /// A term with the same exponent is replaced by the coefficient sum;
    /// otherwise the term is inserted.
    #[must_use]
    pub fn add_term(&self, term: Term<R>) -> Self {
        let mut terms = self.terms.clone();
        let (coeff, exp) = term.into_parts();
        merge_into(&mut terms, exp, coeff);
        Self { terms }
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut terms = self.terms.clone();
        for (&exp, coeff) in &other.terms {
            merge_into(&mut terms, exp, coeff.clone());
        }
        Self { terms }
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self::new(
            self.terms
                .iter()
                .map(|(&e, x)| Term::new(x.clone() * c.clone(), e)),
        )
    }

    /// Multiplies two polynomials (schoolbook convolution).
    ///
    /// Every term of `self` is multiplied against every term of `other` and
    /// the products are merged by exponent. When the product's exponent
    /// range is no wider than the number of term pairs, products are
    /// accumulated in a dense buffer instead of the map.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let (Some(lo1), Some(lo2)) = (self.min_exponent(), other.min_exponent()) else {
            return Self::zero();
        };
        let lo = lo1.saturating_add(lo2);
        let hi = self
            .degree()
            .zip(other.degree())
            .and_then(|(d1, d2)| d1.checked_add(d2));

        match hi {
            Some(hi) if ((hi - lo) as usize) < self.len().saturating_mul(other.len()) => {
                self.mul_dense(other, lo, hi)
            }
            _ => self.mul_sparse(other),
        }
    }

    fn mul_sparse(&self, other: &Self) -> Self {
        let mut terms = BTreeMap::new();
        for (&e1, c1) in &self.terms {
            let t1 = Term::new(c1.clone(), e1);
            for (&e2, c2) in &other.terms {
                let (coeff, exp) = t1.mul(&Term::new(c2.clone(), e2)).into_parts();
                merge_into(&mut terms, exp, coeff);
            }
        }

        Self { terms }
    }

    fn mul_dense(&self, other: &Self, lo: u32, hi: u32) -> Self {
        let mut acc: Vec<R> = vec![R::zero(); (hi - lo) as usize + 1];
        for (&e1, c1) in &self.terms {
            for (&e2, c2) in &other.terms {
                let slot = &mut acc[(e1 + e2 - lo) as usize];
                let prev = std::mem::replace(slot, R::zero());
                *slot = prev + c1.clone() * c2.clone();
            }
        }

        Self {
            terms: (lo..=hi)
                .zip(acc)
                .filter(|(_, c)| !c.is_zero())
                .collect(),
        }
    }

    /// Applies `f` to every coefficient, dropping results that are zero.
    #[must_use]
    pub fn map_coeffs<S: Ring>(&self, mut f: impl FnMut(&R) -> S) -> Polynomial<S> {
        Polynomial {
            terms: self
                .terms
                .iter()
                .map(|(&e, c)| (e, f(c)))
                .filter(|(_, c)| !c.is_zero())
                .collect(),
        }
    }

    /// Keeps only the terms whose exponent satisfies `keep`.
    #[must_use]
    pub fn filter_exponents(&self, mut keep: impl FnMut(u32) -> bool) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .filter(|(e, _)| keep(**e))
                .map(|(&e, c)| (e, c.clone()))
                .collect(),
        }
    }

    /// Drops the constant term, if any.
    #[must_use]
    pub fn without_constant(&self) -> Self {
        self.filter_exponents(|e| e > 0)
    }
}

fn merge_into<R: Ring>(terms: &mut BTreeMap<u32, R>, exp: u32, coeff: R) {
    match terms.remove(&exp) {
        Some(existing) => {
            let sum = existing + coeff;
            if !sum.is_zero() {
                terms.insert(exp, sum);
            }
        }
        None => {
            if !coeff.is_zero() {
                terms.insert(exp, coeff);
            }
        }
    }
}

impl<R: Ring> FromIterator<Term<R>> for Polynomial<R> {
    fn from_iter<I: IntoIterator<Item = Term<R>>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<R: Ring> Default for Polynomial<R> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<R: Ring + fmt::Display> fmt::Display for Polynomial<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let terms: Vec<_> = self.terms().map(|t| t.to_string()).collect();
        write!(f, "{}", terms.join(" + "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_rings::Q;

    fn d(sides: u32) -> Polynomial<Q> {
        (1..=sides)
            .map(|j| Term::new(Q::new(1, i64::from(sides)), j))
            .collect()
    }

    #[test]
    fn test_new_combines_like_terms() {
        let p = Polynomial::new([
            Term::new(Q::new(1, 4), 2),
            Term::new(Q::new(1, 4), 2),
            Term::new(Q::new(1, 2), 1),
        ]);
        assert_eq!(p.len(), 2);
        assert_eq!(p.coeff(2), Q::new(1, 2));
        assert_eq!(p.coeff(1), Q::new(1, 2));
    }

    #[test]
    fn test_add_term_merges_or_inserts() {
        let p = Polynomial::monomial(Q::new(1, 6), 3);

        let merged = p.add_term(Term::new(Q::new(1, 6), 3));
        assert_eq!(merged.len(), 1);
        assert_eq!(merged.coeff(3), Q::new(1, 3));

        let inserted = p.add_term(Term::new(Q::new(1, 6), 4));
        assert_eq!(inserted.len(), 2);

        // Input is left untouched
        assert_eq!(p.coeff(3), Q::new(1, 6));
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn test_cancellation_drops_term() {
        let p = Polynomial::<i64>::new([Term::new(3, 2), Term::new(-3, 2)]);
        assert!(p.is_zero());
    }

    #[test]
    fn test_mul_two_d6() {
        let two_d6 = d(6).mul(&d(6));
        assert_eq!(two_d6.min_exponent(), Some(2));
        assert_eq!(two_d6.degree(), Some(12));
        assert_eq!(two_d6.len(), 11);
        assert_eq!(two_d6.coeff(7), Q::new(6, 36));
        assert_eq!(two_d6.coeff(2), Q::new(1, 36));
        assert!(two_d6.coeff_sum().is_one());
    }

    #[test]
    fn test_mul_integers() {
        // (1 + x)^2 = 1 + 2x + x^2
        let p = Polynomial::<i64>::new([Term::new(1, 0), Term::new(1, 1)]);
        let sq = p.mul(&p);
        assert_eq!(sq.coeff(0), 1);
        assert_eq!(sq.coeff(1), 2);
        assert_eq!(sq.coeff(2), 1);
    }

    #[test]
    fn test_dense_and_sparse_paths_agree() {
        // Wide gaps force the map path, contiguous faces the dense one
        let sparse = Polynomial::<i64>::new([Term::new(2, 0), Term::new(-1, 1_000)]);
        let dense = Polynomial::<i64>::new((1..=6).map(|j| Term::new(1, j)));

        let product = sparse.mul(&dense);
        assert_eq!(product.len(), 12);
        assert_eq!(product.coeff(3), 2);
        assert_eq!(product.coeff(1_003), -1);
        assert_eq!(product, dense.mul(&sparse));
        assert_eq!(dense.mul(&dense), dense.mul_sparse(&dense));
    }

    #[test]
    fn test_dense_mul_drops_cancelled_terms() {
        // (1 + x)(1 - x) = 1 - x^2
        let a = Polynomial::<i64>::new([Term::new(1, 0), Term::new(1, 1)]);
        let b = Polynomial::<i64>::new([Term::new(1, 0), Term::new(-1, 1)]);
        let p = a.mul(&b);
        assert_eq!(p.len(), 2);
        assert_eq!(p.coeff(1), 0);
        assert_eq!(p.coeff(2), -1);
    }

    #[test]
    fn test_map_coeffs() {
        let counts = Polynomial::<i64>::new([Term::new(2, 1), Term::new(0, 2), Term::new(3, 4)]);
        let halved: Polynomial<Q> = counts.map_coeffs(|&c| Q::new(c, 2));
        assert_eq!(halved.coeff(1), Q::one());
        assert_eq!(halved.coeff(4), Q::new(3, 2));
        assert_eq!(counts.map_coeffs(|&c| c - 2).len(), 1);
    }

    #[test]
    fn test_mul_zero() {
        assert!(d(6).mul(&Polynomial::zero()).is_zero());
    }

    #[test]
    fn test_scale() {
        let faces: Polynomial<Q> = (1..=4).map(|j| Term::new(Q::one(), j)).collect();
        assert_eq!(faces.scale(&Q::new(1, 4)), d(4));
        assert!(faces.scale(&Q::zero()).is_zero());
    }

    #[test]
    fn test_without_constant() {
        let p = d(6).add_term(Term::constant(Q::one()));
        assert_eq!(p.min_exponent(), Some(0));
        assert_eq!(p.without_constant(), d(6));
    }

    #[test]
    fn test_display() {
        let p = Polynomial::<i64>::new([Term::new(2, 0), Term::new(3, 1), Term::new(1, 4)]);
        assert_eq!(p.to_string(), "2 + 3*x + 1*x^4");
        assert_eq!(Polynomial::<i64>::zero().to_string(), "0");
    }
}

//! Errors raised by the polynomial algebra.

use thiserror::Error;

/// Errors that can occur during polynomial arithmetic.
///
/// Both variants signal a caller bug rather than bad user input: the
/// dice layer never adds unlike terms directly and never multiplies an
/// empty pool.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// Two terms with different exponents were added as terms.
    ///
    /// Unlike terms belong in a polynomial merge, see `Polynomial::add_term`.
    #[error("cannot add unlike terms x^{left} and x^{right}")]
    IncompatibleTerms {
        /// Exponent of the left-hand term.
        left: u32,
        /// Exponent of the right-hand term.
        right: u32,
    },

    /// A product over zero polynomials was requested.
    #[error("mass multiplication needs at least one polynomial")]
    EmptyProduct,
}

/// Result alias for polynomial operations.
pub type Result<T> = std::result::Result<T, PolyError>;

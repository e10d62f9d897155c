//! Error types for the gf2ext library.
//!
//! This module provides error handling using the `thiserror` crate, with
//! specific error variants for polynomial arithmetic and extension field
//! construction.

use thiserror::Error;

use crate::poly::Poly;

/// The main error type for gf2ext operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    // ============ Polynomial Arithmetic Errors ============
    /// Polynomial division by the zero polynomial.
    #[error("polynomial division by zero")]
    DivisionByZero,

    /// A product would exceed the representable degree.
    #[error("product of polynomials of degree {lhs} and {rhs} exceeds maximum degree {max}")]
    DegreeOverflow {
        /// Degree of the left operand.
        lhs: u32,
        /// Degree of the right operand.
        rhs: u32,
        /// Maximum representable degree.
        max: u32,
    },

    /// No multiplicative inverse exists for the given polynomial and modulus.
    ///
    /// This occurs when the polynomial is zero modulo the modulus, or when
    /// the two share a nontrivial common factor. Neither is possible for a
    /// nonzero residue when the modulus is irreducible.
    #[error("polynomial {poly} has no inverse modulo {modulus}")]
    NoInverse {
        /// The polynomial without an inverse.
        poly: Poly,
        /// The modulus.
        modulus: Poly,
    },

    // ============ Field Construction Errors ============
    /// The modulus polynomial is zero.
    #[error("the zero polynomial cannot be used as a modulus")]
    ZeroModulus,

    /// The modulus degree is outside the supported range.
    #[error("modulus degree {degree} is out of range (must be in 1..={max})")]
    InvalidModulusDegree {
        /// The offending degree.
        degree: u32,
        /// The maximum supported degree.
        max: u32,
    },

    /// The modulus polynomial is reducible over GF(2).
    ///
    /// A reducible modulus does not define a field: nonzero residues that
    /// share a factor with it have no inverse.
    #[error("{modulus} is reducible over GF(2) and does not define a field")]
    NotIrreducible {
        /// The reducible modulus.
        modulus: Poly,
    },

    /// No irreducible polynomial is tabulated for the requested degree.
    #[error("no irreducible polynomial available for degree {0}")]
    NoTabulatedPolynomial(u32),
}

/// A specialized `Result` type for gf2ext operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NoInverse {
            poly: Poly::from_bits(0b101),
            modulus: Poly::from_bits(0b10011),
        };
        assert!(err.to_string().contains("x^2 + 1"));
        assert!(err.to_string().contains("x^4 + x + 1"));
        assert!(err.to_string().contains("no inverse"));

        let err = Error::InvalidModulusDegree { degree: 40, max: 32 };
        assert!(err.to_string().contains("40"));
        assert!(err.to_string().contains("32"));
    }

    #[test]
    fn test_error_equality() {
        let err1 = Error::DivisionByZero;
        let err2 = Error::DivisionByZero;
        let err3 = Error::ZeroModulus;

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}

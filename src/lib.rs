//! # gf2ext
//!
//! Binary polynomial arithmetic and extension fields GF(2^n).
//!
//! ## Overview
//!
//! Polynomials over GF(2) are packed into bitmasks: bit i is the coefficient
//! of x^i, addition is XOR, and multiplication is a carry-less shift product.
//! An irreducible polynomial of degree n turns the residues modulo it into
//! the finite field GF(2^n), the structure underlying block ciphers, CRCs,
//! and erasure codes.
//!
//! This library provides:
//! - [`Poly`]: immutable bitmask polynomials with division, gcd, and the
//!   extended Euclidean algorithm
//! - [`Poly::inverse_mod`]: modular polynomial inversion, the core operation
//! - [`Gf2Ext`] / [`Gf2Element`]: runtime-configured extension fields with
//!   validated irreducible moduli
//! - [`irreducible`]: an irreducibility test and a table of low-weight
//!   irreducible polynomials for degrees 1..=32
//!
//! ## Quick Start
//!
//! Invert x^2 + 1 in GF(2^4) defined by x^4 + x + 1:
//!
//! ```rust
//! use gf2ext::{Gf2Ext, Poly};
//!
//! let field = Gf2Ext::new(Poly::from_exponents(&[4, 1, 0])).unwrap();
//! assert_eq!(field.order(), 16);
//!
//! let p = Poly::from_exponents(&[2, 0]);
//! let q = p.inverse_mod(field.modulus()).unwrap();
//!
//! assert_eq!(q, Poly::from_exponents(&[3, 1, 0])); // x^3 + x + 1
//! assert_eq!((p * q) % field.modulus(), Poly::ONE);
//! ```
//!
//! Or work with field elements directly:
//!
//! ```rust
//! use gf2ext::Gf2Ext;
//!
//! let gf256 = Gf2Ext::with_degree(8).unwrap(); // AES polynomial
//! let a = gf256.element(0x53);
//! let b = a.inv();
//!
//! assert_eq!(b.bits(), 0xCA);
//! assert!(a.mul(b).is_one());
//! ```
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization of polynomials

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod field;
pub mod irreducible;
pub mod poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::field::{Gf2Element, Gf2Ext, MAX_FIELD_DEGREE};
    pub use crate::irreducible::{
        has_irreducible_poly, irreducible_poly, is_irreducible, IRREDUCIBLE_POLYS,
    };
    pub use crate::poly::Poly;
}

// Re-export commonly used items at crate root
pub use error::{Error, Result};
pub use field::{Gf2Element, Gf2Ext};
pub use irreducible::{irreducible_poly, is_irreducible};
pub use poly::Poly;

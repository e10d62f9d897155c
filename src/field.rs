//! Binary extension fields GF(2^n).
//!
//! A field is defined by an irreducible modulus polynomial of degree n over
//! GF(2); its elements are the residues modulo that polynomial, i.e. the
//! polynomials of degree < n. No further structure is materialized: all
//! arithmetic reduces through the modulus on the fly.
//!
//! ## Example
//!
//! ```
//! use gf2ext::field::Gf2Ext;
//!
//! let gf16 = Gf2Ext::with_degree(4).unwrap(); // GF(2^4) by x^4 + x + 1
//! assert_eq!(gf16.order(), 16);
//!
//! let p = gf16.element(0b101); // x^2 + 1
//! let q = p.inv();
//! assert!(p.mul(q).is_one());
//! ```

use std::fmt;

use crate::error::{Error, Result};
use crate::irreducible::{irreducible_poly, is_irreducible};
use crate::poly::Poly;

/// The largest supported extension degree.
///
/// Residues of a degree-32 modulus have degree at most 31, so their products
/// stay within the polynomial bitmask before reduction.
pub const MAX_FIELD_DEGREE: u32 = 32;

/// A binary extension field GF(2^n), defined by an irreducible modulus.
///
/// The field is a small value type (a modulus and its degree), so it is
/// `Copy` and elements carry their field by value.
///
/// # Example
///
/// ```
/// use gf2ext::{Gf2Ext, Poly};
///
/// let gf16 = Gf2Ext::new(Poly::from_exponents(&[4, 1, 0])).unwrap();
/// assert_eq!(gf16.order(), 16);
/// assert_eq!(gf16.to_string(), "GF(2^4)");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gf2Ext {
    modulus: Poly,
    degree: u32,
}

impl Gf2Ext {
    /// Create the extension field defined by the given modulus polynomial.
    ///
    /// The modulus is validated to be irreducible over GF(2); a reducible
    /// modulus would leave some nonzero residues without inverses.
    ///
    /// # Errors
    ///
    /// - [`Error::ZeroModulus`] if the modulus is zero.
    /// - [`Error::InvalidModulusDegree`] if the degree is 0 or exceeds
    ///   [`MAX_FIELD_DEGREE`].
    /// - [`Error::NotIrreducible`] if the modulus factors over GF(2).
    pub fn new(modulus: Poly) -> Result<Self> {
        let field = Self::new_unchecked(modulus)?;
        if !is_irreducible(modulus) {
            return Err(Error::NotIrreducible { modulus });
        }
        Ok(field)
    }

    /// Create the extension field without testing the modulus for
    /// irreducibility.
    ///
    /// The degree bounds are still enforced. If the modulus is reducible the
    /// result is not a field: nonzero elements sharing a factor with the
    /// modulus have no inverse, and [`Gf2Element::inv`] will panic on them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroModulus`] or [`Error::InvalidModulusDegree`] as
    /// in [`Gf2Ext::new`].
    pub fn new_unchecked(modulus: Poly) -> Result<Self> {
        match modulus.degree() {
            None => Err(Error::ZeroModulus),
            Some(degree) if degree == 0 || degree > MAX_FIELD_DEGREE => {
                Err(Error::InvalidModulusDegree {
                    degree,
                    max: MAX_FIELD_DEGREE,
                })
            }
            Some(degree) => Ok(Self { modulus, degree }),
        }
    }

    /// Create GF(2^n) using the tabulated irreducible polynomial of degree n.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoTabulatedPolynomial`] if the degree is outside the
    /// table (1..=32).
    pub fn with_degree(n: u32) -> Result<Self> {
        let modulus = irreducible_poly(n).ok_or(Error::NoTabulatedPolynomial(n))?;
        // Table entries are irreducible; skip the Rabin test.
        Self::new_unchecked(modulus)
    }

    /// The number of elements of the field: 2^n.
    #[must_use]
    pub const fn order(self) -> u64 {
        1u64 << self.degree
    }

    /// The characteristic of the field. Always 2.
    #[must_use]
    pub const fn characteristic(self) -> u32 {
        2
    }

    /// The extension degree n.
    #[must_use]
    pub const fn degree(self) -> u32 {
        self.degree
    }

    /// The defining modulus polynomial.
    #[must_use]
    pub const fn modulus(self) -> Poly {
        self.modulus
    }

    /// Create a field element from a coefficient bitmask.
    ///
    /// Values of degree >= n are reduced modulo the defining polynomial.
    #[must_use]
    pub fn element(self, bits: u64) -> Gf2Element {
        self.element_from(Poly::from_bits(bits))
    }

    /// Create a field element as the residue of a polynomial.
    #[must_use]
    pub fn element_from(self, value: Poly) -> Gf2Element {
        Gf2Element {
            value: value % self.modulus,
            field: self,
        }
    }

    /// The zero element (additive identity).
    #[must_use]
    pub fn zero(self) -> Gf2Element {
        self.element(0)
    }

    /// The one element (multiplicative identity).
    #[must_use]
    pub fn one(self) -> Gf2Element {
        self.element(1)
    }

    /// The residue class of x, the adjoined root of the modulus.
    ///
    /// This is a generator of the multiplicative group only when the modulus
    /// is primitive, which is not validated.
    #[must_use]
    pub fn x(self) -> Gf2Element {
        self.element(2)
    }

    /// Iterate over all elements of the field.
    pub fn elements(self) -> impl Iterator<Item = Gf2Element> {
        (0..self.order()).map(move |v| self.element(v))
    }

    /// Iterate over all nonzero elements of the field.
    pub fn units(self) -> impl Iterator<Item = Gf2Element> {
        (1..self.order()).map(move |v| self.element(v))
    }
}

impl fmt::Display for Gf2Ext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.degree == 1 {
            write!(f, "GF(2)")
        } else {
            write!(f, "GF(2^{})", self.degree)
        }
    }
}

impl fmt::Debug for Gf2Ext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF(2^{}) mod {}", self.degree, self.modulus)
    }
}

/// An element of a binary extension field.
///
/// Holds the residue polynomial together with its field. Arithmetic reduces
/// modulo the field's defining polynomial.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gf2Element {
    value: Poly,
    field: Gf2Ext,
}

impl Gf2Element {
    /// The coefficient bitmask of the residue.
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.value.bits()
    }

    /// The residue as a polynomial of degree < n.
    #[must_use]
    pub const fn poly(self) -> Poly {
        self.value
    }

    /// The field this element belongs to.
    #[must_use]
    pub const fn field(self) -> Gf2Ext {
        self.field
    }

    /// Check if this element is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.value.is_zero()
    }

    /// Check if this element is one.
    #[must_use]
    pub const fn is_one(self) -> bool {
        self.value.is_one()
    }

    /// Field addition (XOR of coefficient masks).
    #[must_use]
    pub fn add(self, rhs: Self) -> Self {
        debug_assert_eq!(self.field, rhs.field, "elements of different fields");
        Self {
            value: self.value + rhs.value,
            field: self.field,
        }
    }

    /// Field subtraction. Identical to addition in characteristic 2.
    #[must_use]
    pub fn sub(self, rhs: Self) -> Self {
        self.add(rhs)
    }

    /// Additive inverse. Every element is its own negation in
    /// characteristic 2.
    #[must_use]
    pub const fn neg(self) -> Self {
        self
    }

    /// Field multiplication: carry-less product reduced by the modulus.
    #[must_use]
    pub fn mul(self, rhs: Self) -> Self {
        debug_assert_eq!(self.field, rhs.field, "elements of different fields");
        // Residues have degree < 32, so the raw product fits the bitmask.
        Self {
            value: (self.value * rhs.value) % self.field.modulus,
            field: self.field,
        }
    }

    /// Multiplicative inverse via the extended Euclidean algorithm.
    ///
    /// # Panics
    ///
    /// Panics if called on zero, or on a nonzero element that shares a
    /// factor with a modulus constructed through
    /// [`Gf2Ext::new_unchecked`](crate::field::Gf2Ext::new_unchecked).
    #[must_use]
    pub fn inv(self) -> Self {
        assert!(!self.is_zero(), "cannot compute inverse of zero");
        self.checked_inv()
            .expect("nonzero element without inverse: reducible modulus")
    }

    /// Checked multiplicative inverse.
    ///
    /// Returns `None` for zero, or for an element with no inverse under a
    /// reducible (unchecked) modulus.
    #[must_use]
    pub fn checked_inv(self) -> Option<Self> {
        let value = self.value.inverse_mod(self.field.modulus).ok()?;
        Some(Self {
            value,
            field: self.field,
        })
    }

    /// Field division.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[must_use]
    pub fn div(self, rhs: Self) -> Self {
        assert!(!rhs.is_zero(), "division by zero");
        self.mul(rhs.inv())
    }

    /// Checked field division.
    ///
    /// Returns `None` if `rhs` is zero.
    #[must_use]
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        Some(self.mul(rhs.checked_inv()?))
    }

    /// Exponentiation by squaring.
    #[must_use]
    pub fn pow(self, mut exp: u64) -> Self {
        let mut result = self.field.one();
        let mut base = self;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(base);
            }
            exp >>= 1;
            base = base.mul(base);
        }
        result
    }
}

impl fmt::Display for Gf2Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl fmt::Debug for Gf2Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.field, self.value)
    }
}

impl std::ops::Add for Gf2Element {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Gf2Element::add(self, rhs)
    }
}

impl std::ops::Sub for Gf2Element {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Gf2Element::sub(self, rhs)
    }
}

impl std::ops::Mul for Gf2Element {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Gf2Element::mul(self, rhs)
    }
}

impl std::ops::Div for Gf2Element {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Gf2Element::div(self, rhs)
    }
}

impl std::ops::Neg for Gf2Element {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Gf2Element::neg(self)
    }
}

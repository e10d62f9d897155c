//! Polynomials over GF(2) represented as bitmasks.
//!
//! A polynomial with coefficients in the two-element field is an ordered
//! sequence of bits indexed by exponent: bit i is the coefficient of x^i.
//! [`Poly`] packs that sequence into a `u64`, so addition is XOR and
//! multiplication is a carry-less (XOR-accumulating) shift product.
//!
//! ## Example
//!
//! ```
//! use gf2ext::poly::Poly;
//!
//! let m = Poly::from_exponents(&[4, 1, 0]); // x^4 + x + 1
//! let p = Poly::from_exponents(&[2, 0]);    // x^2 + 1
//!
//! let q = p.inverse_mod(m).unwrap();
//! assert_eq!(q, Poly::from_exponents(&[3, 1, 0])); // x^3 + x + 1
//! assert_eq!((p * q) % m, Poly::ONE);
//! ```

use std::fmt;
use std::ops::{Add, BitXor, Mul, Rem, Sub};

use crate::error::{Error, Result};

/// A polynomial over GF(2), packed into a `u64` bitmask.
///
/// Bit i of the mask is the coefficient of x^i, so the representable degree
/// range is 0..=63. The type is a plain value: every operation produces a new
/// polynomial and no operation mutates its operands.
///
/// Addition and subtraction coincide over GF(2) (both are XOR), and every
/// nonzero polynomial is monic because the only nonzero coefficient is 1.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Poly(u64);

impl Poly {
    /// The zero polynomial.
    pub const ZERO: Self = Self(0);

    /// The constant polynomial 1.
    pub const ONE: Self = Self(1);

    /// The polynomial x.
    pub const X: Self = Self(2);

    /// The largest representable degree.
    pub const MAX_DEGREE: u32 = 63;

    /// Create a polynomial from its coefficient bitmask.
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Create a polynomial as a sum of monomials x^e for each listed exponent.
    ///
    /// Duplicate exponents cancel in pairs, as they must over GF(2).
    ///
    /// # Panics
    ///
    /// Panics if any exponent exceeds [`Poly::MAX_DEGREE`].
    #[must_use]
    pub fn from_exponents(exponents: &[u32]) -> Self {
        let mut bits = 0u64;
        for &e in exponents {
            assert!(e <= Self::MAX_DEGREE, "exponent {e} exceeds maximum degree");
            bits ^= 1 << e;
        }
        Self(bits)
    }

    /// Get the coefficient bitmask.
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// The degree of the polynomial, or `None` for the zero polynomial.
    #[must_use]
    pub const fn degree(self) -> Option<u32> {
        if self.0 == 0 {
            None
        } else {
            Some(63 - self.0.leading_zeros())
        }
    }

    /// Get the coefficient of x^i (false = 0, true = 1).
    #[must_use]
    pub const fn coeff(self, i: u32) -> bool {
        i <= Self::MAX_DEGREE && (self.0 >> i) & 1 == 1
    }

    /// Check if this is the zero polynomial.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Check if this is the constant polynomial 1.
    #[must_use]
    pub const fn is_one(self) -> bool {
        self.0 == 1
    }

    /// Polynomial multiplication, checked against degree overflow.
    ///
    /// Returns `None` if the product would have degree greater than
    /// [`Poly::MAX_DEGREE`].
    #[must_use]
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        match (self.degree(), rhs.degree()) {
            (Some(a), Some(b)) if a + b > Self::MAX_DEGREE => None,
            _ => Some(Self(clmul(self.0, rhs.0))),
        }
    }

    /// Polynomial division with remainder.
    ///
    /// Returns `(quotient, remainder)` with
    /// `self == quotient * divisor + remainder` and
    /// `degree(remainder) < degree(divisor)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if the divisor is zero.
    pub fn div_rem(self, divisor: Self) -> Result<(Self, Self)> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(divmod(self, divisor))
    }

    /// Greatest common divisor via the Euclidean algorithm.
    ///
    /// Over GF(2) every nonzero polynomial is monic, so the result needs no
    /// normalization. `gcd(0, 0)` is the zero polynomial.
    #[must_use]
    pub fn gcd(self, other: Self) -> Self {
        let (mut a, mut b) = (self, other);
        while !b.is_zero() {
            let (_, r) = divmod(a, b);
            a = b;
            b = r;
        }
        a
    }

    /// Extended Euclidean algorithm.
    ///
    /// Returns `(g, s, t)` with `g = gcd(self, other)` and
    /// `s * self + t * other == g`. The Bezout coefficients are the small
    /// ones: `degree(s) < degree(other) - degree(g)` and symmetrically for
    /// `t`, so intermediates never leave the bitmask for any valid inputs.
    #[must_use]
    pub fn ext_gcd(self, other: Self) -> (Self, Self, Self) {
        let (mut r0, mut r1) = (self, other);
        let (mut s0, mut s1) = (Self::ONE, Self::ZERO);
        let (mut t0, mut t1) = (Self::ZERO, Self::ONE);

        while !r1.is_zero() {
            let (q, r) = divmod(r0, r1);
            (r0, r1) = (r1, r);
            (s0, s1) = (s1, Self(s0.0 ^ clmul(q.0, s1.0)));
            (t0, t1) = (t1, Self(t0.0 ^ clmul(q.0, t1.0)));
        }

        (r0, s0, t0)
    }

    /// Compute the multiplicative inverse of this polynomial modulo `modulus`.
    ///
    /// Returns the unique q with `degree(q) < degree(modulus)` and
    /// `self * q ≡ 1 (mod modulus)`. The modulus is not required to be
    /// irreducible here; when it is, every nonzero residue has an inverse.
    /// Irreducibility is validated one level up, by
    /// [`Gf2Ext::new`](crate::field::Gf2Ext::new).
    ///
    /// # Errors
    ///
    /// - [`Error::ZeroModulus`] if the modulus is zero.
    /// - [`Error::InvalidModulusDegree`] if the modulus is a nonzero constant.
    /// - [`Error::NoInverse`] if `self ≡ 0 (mod modulus)` or
    ///   `gcd(self, modulus)` is not 1.
    ///
    /// # Example
    ///
    /// ```
    /// use gf2ext::poly::Poly;
    ///
    /// let m = Poly::from_exponents(&[4, 1, 0]); // x^4 + x + 1
    /// let p = Poly::from_exponents(&[2, 0]);    // x^2 + 1
    /// let q = p.inverse_mod(m).unwrap();
    ///
    /// assert_eq!((p * q) % m, Poly::ONE);
    /// ```
    pub fn inverse_mod(self, modulus: Self) -> Result<Self> {
        match modulus.degree() {
            None => return Err(Error::ZeroModulus),
            Some(0) => {
                return Err(Error::InvalidModulusDegree {
                    degree: 0,
                    max: Self::MAX_DEGREE,
                })
            }
            Some(_) => {}
        }

        let residue = divmod(self, modulus).1;
        if residue.is_zero() {
            return Err(Error::NoInverse {
                poly: self,
                modulus,
            });
        }

        let (g, s, _) = residue.ext_gcd(modulus);
        if !g.is_one() {
            return Err(Error::NoInverse {
                poly: self,
                modulus,
            });
        }

        Ok(divmod(s, modulus).1)
    }

    /// Compute `self^exp mod modulus` by square-and-multiply.
    ///
    /// # Errors
    ///
    /// - [`Error::ZeroModulus`] / [`Error::InvalidModulusDegree`] for a
    ///   degenerate modulus, as in [`Poly::inverse_mod`].
    /// - [`Error::DegreeOverflow`] if an intermediate square would leave the
    ///   bitmask, which happens only for moduli of degree greater than 32.
    pub fn pow_mod(self, mut exp: u64, modulus: Self) -> Result<Self> {
        match modulus.degree() {
            None => return Err(Error::ZeroModulus),
            Some(0) => {
                return Err(Error::InvalidModulusDegree {
                    degree: 0,
                    max: Self::MAX_DEGREE,
                })
            }
            Some(_) => {}
        }

        let mut base = divmod(self, modulus).1;
        let mut result = Self::ONE;
        while exp > 0 {
            if exp & 1 == 1 {
                result = divmod(mul_checked(result, base)?, modulus).1;
            }
            exp >>= 1;
            base = divmod(mul_checked(base, base)?, modulus).1;
        }
        Ok(result)
    }
}

/// Carry-less multiplication of two bitmasks.
///
/// Callers guarantee that the product degree fits in 64 bits.
fn clmul(a: u64, b: u64) -> u64 {
    let mut acc = 0u64;
    let mut a = a;
    let mut shift = 0;
    while a != 0 {
        if a & 1 == 1 {
            acc ^= b << shift;
        }
        a >>= 1;
        shift += 1;
    }
    acc
}

/// Long division core. The divisor must be nonzero.
fn divmod(dividend: Poly, divisor: Poly) -> (Poly, Poly) {
    let d = divisor
        .degree()
        .expect("divmod requires a nonzero divisor");
    let mut quotient = 0u64;
    let mut remainder = dividend.0;

    while let Some(r) = Poly(remainder).degree() {
        if r < d {
            break;
        }
        let shift = r - d;
        quotient |= 1 << shift;
        remainder ^= divisor.0 << shift;
    }

    (Poly(quotient), Poly(remainder))
}

fn mul_checked(a: Poly, b: Poly) -> Result<Poly> {
    a.checked_mul(b).ok_or_else(|| {
        let lhs = a.degree().unwrap_or(0);
        let rhs = b.degree().unwrap_or(0);
        Error::DegreeOverflow {
            lhs,
            rhs,
            max: Poly::MAX_DEGREE,
        }
    })
}

impl Add for Poly {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

impl Sub for Poly {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        // Subtraction and addition coincide over GF(2).
        Self(self.0 ^ rhs.0)
    }
}

impl BitXor for Poly {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

impl Mul for Poly {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the product degree exceeds [`Poly::MAX_DEGREE`]; use
    /// [`Poly::checked_mul`] to handle overflow.
    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs)
            .expect("polynomial product exceeds maximum degree")
    }
}

impl Rem for Poly {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the divisor is zero; use [`Poly::div_rem`] to handle it.
    fn rem(self, rhs: Self) -> Self::Output {
        assert!(!rhs.is_zero(), "polynomial division by zero");
        divmod(self, rhs).1
    }
}

impl fmt::Display for Poly {
    /// Algebraic notation, highest exponent first: `x^4 + x + 1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(degree) = self.degree() else {
            return write!(f, "0");
        };

        let mut first = true;
        for i in (0..=degree).rev() {
            if !self.coeff(i) {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            match i {
                0 => write!(f, "1")?,
                1 => write!(f, "x")?,
                _ => write!(f, "x^{i}")?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Poly({:#b})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree() {
        assert_eq!(Poly::ZERO.degree(), None);
        assert_eq!(Poly::ONE.degree(), Some(0));
        assert_eq!(Poly::X.degree(), Some(1));
        assert_eq!(Poly::from_bits(0b10011).degree(), Some(4));
        assert_eq!(Poly::from_bits(1 << 63).degree(), Some(63));
    }

    #[test]
    fn test_from_exponents() {
        assert_eq!(Poly::from_exponents(&[]), Poly::ZERO);
        assert_eq!(Poly::from_exponents(&[0]), Poly::ONE);
        assert_eq!(Poly::from_exponents(&[4, 1, 0]).bits(), 0b10011);
        // Duplicates cancel over GF(2).
        assert_eq!(Poly::from_exponents(&[3, 3]), Poly::ZERO);
    }

    #[test]
    fn test_addition_is_xor() {
        let a = Poly::from_bits(0b1100);
        let b = Poly::from_bits(0b1010);
        assert_eq!((a + b).bits(), 0b0110);
        assert_eq!(a + b, a - b);
        assert_eq!(a + a, Poly::ZERO);
    }

    #[test]
    fn test_multiplication() {
        // (x + 1)(x + 1) = x^2 + 1 over GF(2)
        let x1 = Poly::from_bits(0b11);
        assert_eq!((x1 * x1).bits(), 0b101);

        // (x^2 + 1)(x^3 + x + 1) = x^5 + x^2 + x + 1
        let p = Poly::from_bits(0b101);
        let q = Poly::from_bits(0b1011);
        assert_eq!((p * q).bits(), 0b100111);

        assert_eq!(p * Poly::ONE, p);
        assert_eq!(p * Poly::ZERO, Poly::ZERO);
    }

    #[test]
    fn test_checked_mul_overflow() {
        let big = Poly::from_bits(1 << 40);
        assert!(big.checked_mul(big).is_none());
        assert!(big.checked_mul(Poly::X).is_some());
    }

    #[test]
    fn test_div_rem() {
        // x^5 + x^2 + x + 1 divided by x^2 + 1
        let n = Poly::from_bits(0b100111);
        let d = Poly::from_bits(0b101);
        let (q, r) = n.div_rem(d).unwrap();
        assert_eq!(q * d + r, n);
        assert!(r.degree() < d.degree());

        // Exact division
        let (q, r) = (d * Poly::from_bits(0b1011)).div_rem(d).unwrap();
        assert_eq!(q.bits(), 0b1011);
        assert!(r.is_zero());

        assert_eq!(n.div_rem(Poly::ZERO), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_div_rem_roundtrip_exhaustive() {
        // Every dividend of degree < 8 against every nonzero divisor of
        // degree < 5 must satisfy the division identity.
        for a in 0u64..256 {
            for b in 1u64..32 {
                let (q, r) = Poly::from_bits(a).div_rem(Poly::from_bits(b)).unwrap();
                assert_eq!(
                    (q * Poly::from_bits(b) + r).bits(),
                    a,
                    "a={a:#b}, b={b:#b}"
                );
            }
        }
    }

    #[test]
    fn test_gcd() {
        // gcd((x+1)(x^2+x+1), (x+1)(x^3+x+1)) = x + 1
        let x1 = Poly::from_bits(0b11);
        let a = x1 * Poly::from_bits(0b111);
        let b = x1 * Poly::from_bits(0b1011);
        assert_eq!(a.gcd(b), x1);

        // Coprime polynomials
        assert_eq!(Poly::from_bits(0b111).gcd(Poly::from_bits(0b1011)), Poly::ONE);

        // Degenerate cases
        assert_eq!(a.gcd(Poly::ZERO), a);
        assert_eq!(Poly::ZERO.gcd(a), a);
        assert_eq!(Poly::ZERO.gcd(Poly::ZERO), Poly::ZERO);
    }

    #[test]
    fn test_ext_gcd_bezout_identity() {
        for a in 0u64..64 {
            for b in 0u64..64 {
                let pa = Poly::from_bits(a);
                let pb = Poly::from_bits(b);
                let (g, s, t) = pa.ext_gcd(pb);
                assert_eq!(g, pa.gcd(pb));
                assert_eq!(s * pa + t * pb, g, "a={a:#b}, b={b:#b}");
            }
        }
    }

    #[test]
    fn test_inverse_mod_literal_scenario() {
        // The motivating computation: invert x^2 + 1 in GF(2^4) defined by
        // x^4 + x + 1. The inverse is x^3 + x + 1.
        let m = Poly::from_bits(0b10011);
        let p = Poly::from_bits(0b101);
        let q = p.inverse_mod(m).unwrap();
        assert_eq!(q.bits(), 0b1011);
        assert_eq!((p * q) % m, Poly::ONE);
    }

    #[test]
    fn test_inverse_mod_defining_property() {
        // Every nonzero residue modulo an irreducible polynomial has an
        // inverse, and the product reduces to 1.
        let m = Poly::from_bits(0b10011); // x^4 + x + 1
        for bits in 1u64..16 {
            let p = Poly::from_bits(bits);
            let q = p.inverse_mod(m).unwrap();
            assert_eq!((p * q) % m, Poly::ONE, "p={bits:#b}");
            assert!(q.degree() < m.degree());
        }
    }

    #[test]
    fn test_inverse_mod_double_inversion() {
        let m = Poly::from_bits(0b10011);
        for bits in 1u64..16 {
            let p = Poly::from_bits(bits);
            let q = p.inverse_mod(m).unwrap();
            assert_eq!(q.inverse_mod(m).unwrap(), p % m, "p={bits:#b}");
        }
    }

    #[test]
    fn test_inverse_mod_identity() {
        for m in [0b111u64, 0b1011, 0b10011, 0b100101, 0x11B] {
            assert_eq!(Poly::ONE.inverse_mod(Poly::from_bits(m)).unwrap(), Poly::ONE);
        }
    }

    #[test]
    fn test_inverse_mod_zero_residue() {
        let m = Poly::from_bits(0b10011);
        assert!(matches!(
            Poly::ZERO.inverse_mod(m),
            Err(Error::NoInverse { .. })
        ));
        // A multiple of the modulus is zero as a residue.
        assert!(matches!(
            (m * Poly::X).inverse_mod(m),
            Err(Error::NoInverse { .. })
        ));
    }

    #[test]
    fn test_inverse_mod_reducible_modulus() {
        // x^2 + 1 = (x + 1)^2, so x + 1 has no inverse modulo it.
        let m = Poly::from_bits(0b101);
        assert!(matches!(
            Poly::from_bits(0b11).inverse_mod(m),
            Err(Error::NoInverse { .. })
        ));
        // x itself is coprime to x^2 + 1 and does have an inverse.
        let q = Poly::X.inverse_mod(m).unwrap();
        assert_eq!((Poly::X * q) % m, Poly::ONE);
    }

    #[test]
    fn test_inverse_mod_degenerate_modulus() {
        assert_eq!(Poly::X.inverse_mod(Poly::ZERO), Err(Error::ZeroModulus));
        assert!(matches!(
            Poly::X.inverse_mod(Poly::ONE),
            Err(Error::InvalidModulusDegree { degree: 0, .. })
        ));
    }

    #[test]
    fn test_pow_mod() {
        let m = Poly::from_bits(0b10011);
        let x = Poly::X;

        assert_eq!(x.pow_mod(0, m).unwrap(), Poly::ONE);
        assert_eq!(x.pow_mod(1, m).unwrap(), x);
        assert_eq!(x.pow_mod(4, m).unwrap().bits(), 0b0011); // x^4 = x + 1

        // The multiplicative group of GF(2^4) has order 15.
        for bits in 1u64..16 {
            let p = Poly::from_bits(bits);
            assert_eq!(p.pow_mod(15, m).unwrap(), Poly::ONE, "p={bits:#b}");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Poly::ZERO.to_string(), "0");
        assert_eq!(Poly::ONE.to_string(), "1");
        assert_eq!(Poly::X.to_string(), "x");
        assert_eq!(Poly::from_bits(0b10011).to_string(), "x^4 + x + 1");
        assert_eq!(Poly::from_bits(0b101).to_string(), "x^2 + 1");
        assert_eq!(Poly::from_bits(0b1110).to_string(), "x^3 + x^2 + x");
    }
}

//! Irreducible polynomials over GF(2).
//!
//! An irreducible polynomial of degree n is required to construct the
//! extension field GF(2^n). This module provides a table of one low-weight
//! irreducible polynomial per supported degree, and an irreducibility test
//! for caller-supplied moduli.

use crate::poly::Poly;

/// Lookup table of irreducible polynomials over GF(2), one per degree.
///
/// Entries are `(degree, coefficient bitmask)`. These are the standard
/// low-weight choices (trinomials where one exists, pentanomials otherwise);
/// degree 4 is x^4 + x + 1 and degree 8 is the AES polynomial.
pub static IRREDUCIBLE_POLYS: &[(u32, u64)] = &[
    // x + 1
    (1, 0b11),
    // x^2 + x + 1
    (2, 0b111),
    // x^3 + x + 1
    (3, 0b1011),
    // x^4 + x + 1
    (4, 0b1_0011),
    // x^5 + x^2 + 1
    (5, 0b10_0101),
    // x^6 + x + 1
    (6, 0b100_0011),
    // x^7 + x + 1
    (7, 0b1000_0011),
    // x^8 + x^4 + x^3 + x + 1 (AES polynomial)
    (8, 0b1_0001_1011),
    // x^9 + x + 1
    (9, 0x203),
    // x^10 + x^3 + 1
    (10, 0x409),
    // x^11 + x^2 + 1
    (11, 0x805),
    // x^12 + x^3 + 1
    (12, 0x1009),
    // x^13 + x^4 + x^3 + x + 1
    (13, 0x201B),
    // x^14 + x^5 + 1
    (14, 0x4021),
    // x^15 + x + 1
    (15, 0x8003),
    // x^16 + x^5 + x^3 + x + 1
    (16, 0x1_002B),
    // x^17 + x^3 + 1
    (17, 0x2_0009),
    // x^18 + x^3 + 1
    (18, 0x4_0009),
    // x^19 + x^5 + x^2 + x + 1
    (19, 0x8_0027),
    // x^20 + x^3 + 1
    (20, 0x10_0009),
    // x^21 + x^2 + 1
    (21, 0x20_0005),
    // x^22 + x + 1
    (22, 0x40_0003),
    // x^23 + x^5 + 1
    (23, 0x80_0021),
    // x^24 + x^4 + x^3 + x + 1
    (24, 0x100_001B),
    // x^25 + x^3 + 1
    (25, 0x200_0009),
    // x^26 + x^4 + x^3 + x + 1
    (26, 0x400_001B),
    // x^27 + x^5 + x^2 + x + 1
    (27, 0x800_0027),
    // x^28 + x + 1
    (28, 0x1000_0003),
    // x^29 + x^2 + 1
    (29, 0x2000_0005),
    // x^30 + x + 1
    (30, 0x4000_0003),
    // x^31 + x^3 + 1
    (31, 0x8000_0009),
    // x^32 + x^7 + x^3 + x^2 + 1
    (32, 0x1_0000_008D),
];

/// Get the tabulated irreducible polynomial of the given degree.
///
/// Returns `None` for degrees outside 1..=32.
#[must_use]
pub fn irreducible_poly(degree: u32) -> Option<Poly> {
    IRREDUCIBLE_POLYS
        .iter()
        .find(|&&(n, _)| n == degree)
        .map(|&(_, bits)| Poly::from_bits(bits))
}

/// Check whether an irreducible polynomial is tabulated for the given degree.
#[must_use]
pub fn has_irreducible_poly(degree: u32) -> bool {
    irreducible_poly(degree).is_some()
}

/// Test whether a polynomial is irreducible over GF(2) using Rabin's test.
///
/// A polynomial f of degree n is irreducible iff x^(2^n) ≡ x (mod f) and,
/// for every prime q dividing n, gcd(x^(2^(n/q)) − x, f) = 1.
///
/// Constants (degree 0) and the zero polynomial are not irreducible;
/// polynomials of degree 1 always are.
///
/// # Panics
///
/// Panics if the degree exceeds 32; intermediate squarings would not fit in
/// the polynomial bitmask beyond that.
#[must_use]
pub fn is_irreducible(f: Poly) -> bool {
    let Some(n) = f.degree() else {
        return false;
    };
    if n == 0 {
        return false;
    }
    assert!(n <= 32, "irreducibility test supports degree <= 32");
    if n == 1 {
        return true;
    }

    let x = Poly::X % f;
    for q in prime_factors(n) {
        let h = frobenius(f, n / q);
        if !(h + x).gcd(f).is_one() {
            return false;
        }
    }

    frobenius(f, n) == x
}

/// Compute x^(2^k) mod f by squaring k times.
fn frobenius(f: Poly, k: u32) -> Poly {
    let mut r = Poly::X % f;
    for _ in 0..k {
        r = (r * r) % f;
    }
    r
}

/// Distinct prime factors of n, smallest first.
fn prime_factors(mut n: u32) -> Vec<u32> {
    let mut factors = Vec::new();
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            factors.push(d);
            while n % d == 0 {
                n /= d;
            }
        }
        d += 1;
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

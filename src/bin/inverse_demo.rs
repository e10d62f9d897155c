//! Modular polynomial inversion demo.
//!
//! Constructs GF(2^4) as GF(2) extended by x^4 + x + 1, then prints the
//! field, the polynomial p = x^2 + 1, and p's inverse modulo the defining
//! polynomial. Takes no arguments and writes three lines to stdout.

use gf2ext::{Gf2Ext, Poly, Result};

fn main() -> Result<()> {
    let field = Gf2Ext::new(Poly::from_exponents(&[4, 1, 0]))?;
    println!("{field}, defined by {}", field.modulus());

    let p = Poly::from_exponents(&[2, 0]);
    println!("{p}");

    let q = p.inverse_mod(field.modulus())?;
    println!("{q}");

    Ok(())
}

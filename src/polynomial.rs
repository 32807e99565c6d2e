use std::fmt;

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

/// An integer polynomial f(x) = a0 + a1*x + ... + a_{k-1}*x^{k-1}.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poly {
    /// Coefficients a0, a1, ..., a_{k-1}
    pub coeffs: Vec<BigInt>,
}

impl Poly {
    /// Construct a polynomial from explicit coefficients.
    pub fn from_coeffs(coeffs: Vec<BigInt>) -> Self {
        Poly { coeffs }
    }

    /// Degree of the polynomial (k-1 if the threshold is k).
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Threshold (number of coefficients).
    pub fn threshold(&self) -> usize {
        self.coeffs.len()
    }

    /// Evaluate the polynomial at x using Horner's method.
    pub fn eval(&self, x: &BigInt) -> BigInt {
        let mut result = BigInt::zero();
        for coeff in self.coeffs.iter().rev() {
            result = result * x + coeff;
        }
        result
    }

    /// The constant term a0: f(0), the recovered secret by convention.
    pub fn secret(&self) -> BigInt {
        self.coeffs.first().cloned().unwrap_or_else(BigInt::zero)
    }
}

/// Renders in descending powers, omitting zero terms and unit
/// coefficients (except a bare constant): `3x^2 - x + 12`.
impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for i in (0..self.coeffs.len()).rev() {
            let coeff = &self.coeffs[i];
            if coeff.is_zero() {
                continue;
            }
            if first {
                if coeff.is_negative() {
                    write!(f, "-")?;
                }
            } else if coeff.is_negative() {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            let magnitude = coeff.abs();
            if !magnitude.is_one() || i == 0 {
                write!(f, "{}", magnitude)?;
            }
            if i > 1 {
                write!(f, "x^{}", i)?;
            } else if i == 1 {
                write!(f, "x")?;
            }
            first = false;
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}

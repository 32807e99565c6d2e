//! Exact-integer Lagrange interpolation over a set of decoded shares.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::Error;
use crate::polynomial::Poly;

/// Fit the unique polynomial of degree <= k-1 through all k points,
/// over the integers.
///
/// # Formula
/// For points (x_i, y_i) the Lagrange form is
/// ```text
/// f(x) = Σ_i y_i · N_i(x) / D_i,   N_i(x) = Π_{j≠i} (x - x_j)
///                                  D_i    = Π_{j≠i} (x_i - x_j)
/// ```
/// All weighted numerators are summed over the common denominator
/// D = Π_i D_i, and each coefficient is divided exactly once at full
/// precision. A per-term division would truncate whenever one term is
/// non-integral, even though the summed coefficient is an integer.
pub fn interpolate(points: &[(i64, BigInt)]) -> Result<Poly, Error> {
    let k = points.len();
    if k == 0 {
        return Err(Error::InsufficientShares {
            required: 1,
            actual: 0,
        });
    }
    for (i, &(x_i, _)) in points.iter().enumerate() {
        if points[..i].iter().any(|&(x_j, _)| x_j == x_i) {
            return Err(Error::DuplicateShareIndex(x_i));
        }
    }

    let mut numerators: Vec<Vec<BigInt>> = Vec::with_capacity(k);
    let mut denominators: Vec<BigInt> = Vec::with_capacity(k);
    for (i, &(x_i, _)) in points.iter().enumerate() {
        // N_i(x) = Π_{j≠i} (x - x_j), one linear factor at a time
        let mut numer = vec![BigInt::zero(); k];
        numer[0] = BigInt::one();
        let mut denom = BigInt::one();
        for (j, &(x_j, _)) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            numer = mul_linear_factor(&numer, x_j);
            denom *= BigInt::from(x_i - x_j);
        }
        numerators.push(numer);
        denominators.push(denom);
    }

    // Common denominator D = Π_i D_i; share i contributes
    // N_i(x) · y_i · (D / D_i), an exact integer since D_i divides D.
    let common: BigInt = denominators.iter().product();
    let mut summed = vec![BigInt::zero(); k];
    for (i, (_, y_i)) in points.iter().enumerate() {
        let weight = &common / &denominators[i];
        for (acc, n) in summed.iter_mut().zip(&numerators[i]) {
            *acc += n * y_i * &weight;
        }
    }

    let mut coeffs = Vec::with_capacity(k);
    for (power, numer) in summed.into_iter().enumerate() {
        let (quot, rem) = numer.div_rem(&common);
        if !rem.is_zero() {
            return Err(Error::NonIntegerCoefficient { power });
        }
        coeffs.push(quot);
    }
    Ok(Poly::from_coeffs(coeffs))
}

/// Multiply a coefficient vector by the linear factor (x - root). The
/// fixed length suffices: each basis numerator has at most k coefficients
/// and its top slot is still zero whenever this is called.
fn mul_linear_factor(poly: &[BigInt], root: i64) -> Vec<BigInt> {
    let mut out = vec![BigInt::zero(); poly.len()];
    for d in 0..poly.len() - 1 {
        out[d + 1] += &poly[d];
        out[d] -= &poly[d] * root;
    }
    out
}

//! Consistency checks: the fitted polynomial must reproduce every point
//! it was built from, exactly.

use num_bigint::BigInt;

use crate::error::Error;
use crate::polynomial::Poly;

/// Outcome of re-evaluating the fitted polynomial at one share.
#[derive(Debug, Clone)]
pub struct Check {
    pub x: i64,
    pub computed: BigInt,
    pub expected: BigInt,
}

impl Check {
    pub fn passed(&self) -> bool {
        self.computed == self.expected
    }
}

/// Re-evaluate `poly` at every point it was interpolated through.
pub fn check_points(poly: &Poly, points: &[(i64, BigInt)]) -> Vec<Check> {
    points
        .iter()
        .map(|(x, y)| Check {
            x: *x,
            computed: poly.eval(&BigInt::from(*x)),
            expected: y.clone(),
        })
        .collect()
}

/// Promote the first failing check to a hard error. A mismatch means the
/// reconstruction arithmetic is inconsistent, not that the input was bad.
pub fn ensure_consistent(checks: &[Check]) -> Result<(), Error> {
    match checks.iter().find(|c| !c.passed()) {
        None => Ok(()),
        Some(c) => Err(Error::VerificationMismatch {
            x: c.x,
            computed: c.computed.clone(),
            expected: c.expected.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lagrange::interpolate;

    fn points(pairs: &[(i64, i64)]) -> Vec<(i64, BigInt)> {
        pairs.iter().map(|&(x, y)| (x, BigInt::from(y))).collect()
    }

    #[test]
    fn round_trip_passes_for_honest_points() {
        let pts = points(&[(1, 4), (2, 7), (3, 12)]);
        let poly = interpolate(&pts).unwrap();
        let checks = check_points(&poly, &pts);
        assert!(checks.iter().all(Check::passed));
        assert!(ensure_consistent(&checks).is_ok());
    }

    #[test]
    fn detects_a_corrupted_point() {
        let pts = points(&[(1, 4), (2, 7)]);
        let poly = interpolate(&pts).unwrap();
        // swap in a y the line does not pass through
        let tampered = points(&[(1, 4), (3, 12)]);
        let checks = check_points(&poly, &tampered);
        let err = ensure_consistent(&checks).unwrap_err();
        match err {
            Error::VerificationMismatch { x, computed, expected } => {
                assert_eq!(x, 3);
                assert_eq!(computed, BigInt::from(10)); // 3*3 + 1
                assert_eq!(expected, BigInt::from(12));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

use num_bigint::BigInt;
use thiserror::Error;

/// Errors raised while parsing a share document, decoding share values,
/// or reconstructing the polynomial.
#[derive(Error, Debug)]
pub enum Error {
    /// Base outside the digit alphabet's range (2..=36).
    #[error("unsupported base {0} (expected 2..=36)")]
    UnsupportedBase(u32),

    /// A share carried an empty digit string.
    #[error("empty share value")]
    EmptyValue,

    /// A character that is not a digit of the declared base.
    #[error("invalid digit {digit:?} in base {base}")]
    InvalidDigit { digit: char, base: u32 },

    /// A recognized numeric field did not parse as an integer.
    #[error("malformed integer in {field}: {token:?}")]
    MalformedNumber { field: &'static str, token: String },

    /// Two shares claim the same x-coordinate.
    #[error("duplicate share index {0}")]
    DuplicateShareIndex(i64),

    /// Fewer decodable shares than the threshold requires.
    #[error("not enough decodable shares (need {required}, got {actual})")]
    InsufficientShares { required: usize, actual: usize },

    /// A summed coefficient numerator was not divisible by the common
    /// denominator: the selected points lie on no integer polynomial.
    #[error("coefficient of x^{power} is not an integer")]
    NonIntegerCoefficient { power: usize },

    /// The fitted polynomial failed to reproduce a point it was built
    /// from. Signals an internal arithmetic fault, not bad input data.
    #[error("verification failed at x = {x}: f(x) = {computed}, share decodes to {expected}")]
    VerificationMismatch {
        x: i64,
        computed: BigInt,
        expected: BigInt,
    },
}

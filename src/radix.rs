//! Decoding share values from an arbitrary numeric base into exact integers.

use num_bigint::BigInt;
use num_traits::Zero;

use crate::error::Error;

/// Largest base the digit alphabet `0-9`, `a-z` can express.
pub const MAX_BASE: u32 = 36;

/// Value of a single digit character, independent of base.
/// `'0'-'9'` map to 0-9; letters map to 10-35 case-insensitively.
fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'a'..='z' => Some(c as u32 - 'a' as u32 + 10),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

/// Decode `value` as an unsigned integer written in `base`.
///
/// Scans most-significant digit first, accumulating `acc * base + digit`
/// over `BigInt`, so values of any length stay exact. Empty strings and
/// bases outside 2..=36 are rejected rather than decoded to zero.
pub fn decode(value: &str, base: u32) -> Result<BigInt, Error> {
    if !(2..=MAX_BASE).contains(&base) {
        return Err(Error::UnsupportedBase(base));
    }
    if value.is_empty() {
        return Err(Error::EmptyValue);
    }
    let mut acc = BigInt::zero();
    for c in value.chars() {
        let digit = digit_value(c)
            .filter(|&d| d < base)
            .ok_or(Error::InvalidDigit { digit: c, base })?;
        acc = acc * base + digit;
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::Sign;
    use proptest::prelude::*;

    #[test]
    fn decodes_hex_and_binary_examples() {
        // "1A" base 16 = 26, "111" base 2 = 7
        assert_eq!(decode("1A", 16).unwrap(), BigInt::from(26));
        assert_eq!(decode("111", 2).unwrap(), BigInt::from(7));
    }

    #[test]
    fn digit_case_is_irrelevant() {
        assert_eq!(decode("1a", 16).unwrap(), decode("1A", 16).unwrap());
        assert_eq!(decode("zZ", 36).unwrap(), BigInt::from(35 * 36 + 35));
    }

    #[test]
    fn leading_zeros_do_not_change_the_value() {
        assert_eq!(decode("000111", 2).unwrap(), BigInt::from(7));
    }

    #[test]
    fn rejects_digit_at_or_above_base() {
        // '9' is a digit, just not one of base 8
        assert!(matches!(
            decode("19", 8),
            Err(Error::InvalidDigit { digit: '9', base: 8 })
        ));
        assert!(matches!(
            decode("1g", 16),
            Err(Error::InvalidDigit { digit: 'g', base: 16 })
        ));
    }

    #[test]
    fn rejects_foreign_characters() {
        assert!(matches!(
            decode("12-3", 10),
            Err(Error::InvalidDigit { digit: '-', .. })
        ));
    }

    #[test]
    fn rejects_empty_value() {
        assert!(matches!(decode("", 10), Err(Error::EmptyValue)));
    }

    #[test]
    fn rejects_out_of_range_bases() {
        assert!(matches!(decode("0", 1), Err(Error::UnsupportedBase(1))));
        assert!(matches!(decode("0", 37), Err(Error::UnsupportedBase(37))));
    }

    #[test]
    fn exceeds_sixty_four_bits_without_truncation() {
        // 2^80 in binary: a one followed by eighty zeros
        let mut digits = String::from("1");
        digits.push_str(&"0".repeat(80));
        let expected = BigInt::from(1) << 80;
        assert_eq!(decode(&digits, 2).unwrap(), expected);
    }

    fn biguint_strategy() -> impl Strategy<Value = BigInt> {
        prop::collection::vec(any::<u8>(), 1..48)
            .prop_map(|bytes| BigInt::from_bytes_be(Sign::Plus, &bytes))
    }

    proptest! {
        // decode must invert big-integer radix encoding for every base
        #[test]
        fn decode_inverts_radix_encoding(n in biguint_strategy(), base in 2u32..=36) {
            let encoded = n.to_str_radix(base);
            prop_assert_eq!(decode(&encoded, base).unwrap(), n);
        }

        #[test]
        fn decode_is_case_insensitive(n in biguint_strategy(), base in 11u32..=36) {
            let encoded = n.to_str_radix(base);
            prop_assert_eq!(
                decode(&encoded.to_uppercase(), base).unwrap(),
                decode(&encoded, base).unwrap()
            );
        }

        #[test]
        fn leading_zero_padding_is_ignored(n in biguint_strategy(), base in 2u32..=36) {
            let padded = format!("00{}", n.to_str_radix(base));
            prop_assert_eq!(decode(&padded, base).unwrap(), n);
        }
    }
}

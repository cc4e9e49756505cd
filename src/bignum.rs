//! Arbitrary-precision decimal addition
//!
//! Digit strings here are least-significant-digit first: index 0 is the ones
//! digit. Callers reverse conventional most-significant-first text before
//! calling [`add_decimal`] and reverse the result back for display, which is
//! what [`format_sum`] and [`shifted_sum`] do.

use crate::alphabet::DIGITS;
use crate::cipher::caesar_apply;
use thiserror::Error;

/// Errors for decimal operand validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdditionError {
    #[error("operand must not be empty")]
    Empty,

    #[error("operand has non-digit {ch:?} at position {position}")]
    NonDigit { ch: char, position: usize },
}

/// Add two non-negative decimal strings, least-significant digit first.
///
/// The result is a freshly allocated digit string in the same
/// least-significant-first order, of length `max(len(a), len(b))` plus one
/// more digit when the final carry is set. Addition is commutative and has no
/// other side effects.
pub fn add_decimal(a: &str, b: &str) -> Result<String, AdditionError> {
    validate_operand(a)?;
    validate_operand(b)?;

    let (longer, shorter) = if a.len() >= b.len() {
        (a.as_bytes(), b.as_bytes())
    } else {
        (b.as_bytes(), a.as_bytes())
    };

    let mut sum = String::with_capacity(longer.len() + 1);
    let mut carry = 0u8;

    for (i, &digit) in longer.iter().enumerate() {
        let mut total = carry + (digit - b'0');
        if i < shorter.len() {
            total += shorter[i] - b'0';
        }
        sum.push((total % 10 + b'0') as char);
        carry = total / 10;
    }

    // Most significant digit, only when the last addition overflowed.
    if carry > 0 {
        sum.push((carry + b'0') as char);
    }

    Ok(sum)
}

/// Render a least-significant-first sum for display.
///
/// Reverses to most-significant-first and strips leading zeros. An all-zero
/// sum renders as `"0"`, never as an empty string.
pub fn format_sum(lsd_first: &str) -> String {
    let msd_first: String = lsd_first.chars().rev().collect();
    let stripped = msd_first.trim_start_matches('0');

    if stripped.is_empty() {
        "0".to_string()
    } else {
        stripped.to_string()
    }
}

/// The full `addition` command flow.
///
/// Each operand is Caesar-shifted by `key mod 10`, reversed into
/// least-significant-first order, added, and the sum is rendered
/// most-significant-first without leading zeros.
pub fn shifted_sum(num1: &str, num2: &str, key: i32) -> Result<String, AdditionError> {
    let shift = key.rem_euclid(DIGITS);

    let a: String = caesar_apply(num1, shift).chars().rev().collect();
    let b: String = caesar_apply(num2, shift).chars().rev().collect();

    let sum = add_decimal(&a, &b)?;
    Ok(format_sum(&sum))
}

/// Reject empty operands and anything that is not an ASCII digit.
fn validate_operand(operand: &str) -> Result<(), AdditionError> {
    if operand.is_empty() {
        return Err(AdditionError::Empty);
    }

    for (position, ch) in operand.chars().enumerate() {
        if !ch.is_ascii_digit() {
            return Err(AdditionError::NonDigit { ch, position });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_equal_lengths_no_carry() {
        // 123 + 456, both reversed: 321 + 654 -> 975 (= 579 reversed)
        assert_eq!(add_decimal("321", "654").unwrap(), "975");
    }

    #[test]
    fn test_add_carry_extends_length() {
        // 999 + 1, reversed: "999" + "1" -> "0001" (= 1000 reversed)
        assert_eq!(add_decimal("999", "1").unwrap(), "0001");
    }

    #[test]
    fn test_add_unequal_lengths() {
        // 5 + 1234, reversed: "5" + "4321" -> 1239 reversed
        assert_eq!(add_decimal("5", "4321").unwrap(), "9321");
    }

    #[test]
    fn test_add_is_commutative() {
        assert_eq!(
            add_decimal("78421", "995").unwrap(),
            add_decimal("995", "78421").unwrap()
        );
    }

    #[test]
    fn test_add_zero_operands() {
        assert_eq!(add_decimal("0", "0").unwrap(), "0");
    }

    #[test]
    fn test_output_length_bound() {
        let sum = add_decimal("99", "11111").unwrap();
        assert_eq!(sum.len(), 5); // no final carry
        let sum = add_decimal("99999", "99999").unwrap();
        assert_eq!(sum.len(), 6); // final carry
    }

    #[test]
    fn test_empty_operand_rejected() {
        assert_eq!(add_decimal("", "1"), Err(AdditionError::Empty));
        assert_eq!(add_decimal("1", ""), Err(AdditionError::Empty));
    }

    #[test]
    fn test_non_digit_rejected() {
        assert_eq!(
            add_decimal("12x4", "1"),
            Err(AdditionError::NonDigit { ch: 'x', position: 2 })
        );
    }

    #[test]
    fn test_format_sum_strips_leading_zeros() {
        // LSD-first "700" is 007 -> printed 7
        assert_eq!(format_sum("700"), "7");
    }

    #[test]
    fn test_format_sum_all_zeros_prints_zero() {
        assert_eq!(format_sum("000"), "0");
    }

    #[test]
    fn test_shifted_sum_identity_key() {
        assert_eq!(shifted_sum("123", "456", 0).unwrap(), "579");
        assert_eq!(shifted_sum("999", "1", 0).unwrap(), "1000");
    }

    #[test]
    fn test_shifted_sum_applies_caesar_mod_ten() {
        // key 1 shifts each digit back by one: 23 -> 12, 45 -> 34
        assert_eq!(shifted_sum("23", "45", 1).unwrap(), "46");
        // key 11 reduces to the same shift
        assert_eq!(shifted_sum("23", "45", 11).unwrap(), "46");
    }

    #[test]
    fn test_shifted_sum_negative_key() {
        // key -1 shifts digits forward: 23 -> 34, 45 -> 56
        assert_eq!(shifted_sum("23", "45", -1).unwrap(), "90");
    }

    #[test]
    fn test_shifted_sum_rejects_non_digits() {
        assert!(shifted_sum("12a", "3", 0).is_err());
    }
}

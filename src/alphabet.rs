//! Single-symbol shift within a symbol class
//!
//! The atomic operation of the cipher toolkit: shift one character by a
//! signed offset inside its own class (uppercase letters, lowercase letters,
//! or digits), leaving every other character untouched. The offset is
//! SUBTRACTED, so a positive offset moves symbols backwards through the
//! alphabet; callers that want to encode pass the negated key.

/// Number of letters in each alphabetic class
pub const LETTERS: i32 = 26;

/// Number of decimal digits
pub const DIGITS: i32 = 10;

/// Shift a single symbol by `offset` positions within its symbol class.
///
/// Uppercase letters stay uppercase, lowercase stay lowercase, digits stay
/// digits. Non-alphanumeric characters are returned unchanged. Any `i32`
/// offset is valid; it is reduced with Euclidean remainder so negative and
/// oversized offsets wrap correctly.
pub fn shift_symbol(symbol: char, offset: i32) -> char {
    if symbol.is_ascii_uppercase() {
        shift_in_class(symbol, b'A', LETTERS, offset)
    } else if symbol.is_ascii_lowercase() {
        shift_in_class(symbol, b'a', LETTERS, offset)
    } else if symbol.is_ascii_digit() {
        shift_in_class(symbol, b'0', DIGITS, offset)
    } else {
        symbol
    }
}

/// Shift within a contiguous ASCII class starting at `base` with `size` symbols.
fn shift_in_class(symbol: char, base: u8, size: i32, offset: i32) -> char {
    let pos = (symbol as u8 - base) as i32;
    let shifted = (pos - offset).rem_euclid(size);
    (base + shifted as u8) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_uppercase_backwards() {
        // 'H' - 3 = 'E'
        assert_eq!(shift_symbol('H', 3), 'E');
    }

    #[test]
    fn test_shift_wraps_around_alphabet_start() {
        assert_eq!(shift_symbol('A', 1), 'Z');
        assert_eq!(shift_symbol('a', 1), 'z');
    }

    #[test]
    fn test_shift_preserves_case() {
        assert_eq!(shift_symbol('h', 3), 'e');
        assert_eq!(shift_symbol('H', 3), 'E');
    }

    #[test]
    fn test_shift_digit_mod_ten() {
        assert_eq!(shift_symbol('5', 3), '2');
        assert_eq!(shift_symbol('0', 1), '9');
    }

    #[test]
    fn test_negative_offset_moves_forward() {
        assert_eq!(shift_symbol('A', -1), 'B');
        assert_eq!(shift_symbol('9', -1), '0');
    }

    #[test]
    fn test_oversized_offset_reduced() {
        assert_eq!(shift_symbol('C', 26), 'C');
        assert_eq!(shift_symbol('C', 27), 'B');
        assert_eq!(shift_symbol('7', 10), '7');
        assert_eq!(shift_symbol('C', -52), 'C');
    }

    #[test]
    fn test_non_alphanumeric_unchanged() {
        for c in [' ', '-', '_', '!', '\n', 'é', '中'] {
            assert_eq!(shift_symbol(c, 13), c);
        }
    }

    #[test]
    fn test_round_trip_under_negated_offset() {
        for c in ('A'..='Z').chain('a'..='z').chain('0'..='9') {
            for k in [-30, -1, 0, 3, 26, 100] {
                assert_eq!(shift_symbol(shift_symbol(c, k), -k), c);
            }
        }
    }
}

//! Caesar and Vigenere string transforms
//!
//! Both ciphers apply [`crate::alphabet::shift_symbol`] to every character of
//! the input and therefore share its conventions: offsets are subtracted
//! (decode direction), case is preserved, and non-alphanumeric characters
//! pass through in place. Transforms are pure and return a new owned string
//! of identical character length.

use crate::alphabet::shift_symbol;
use thiserror::Error;

/// Errors for cipher key validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("Vigenere key must not be empty")]
    EmptyKey,

    #[error("Vigenere key has {ch:?} at position {position}: keys must be ASCII uppercase letters")]
    InvalidKeyChar { ch: char, position: usize },
}

/// Apply a fixed Caesar shift to every symbol of `text`.
///
/// The key may be negative or exceed the alphabet size; it is reduced modulo
/// 26 for letters and modulo 10 for digits independently. Applying with key
/// `k` and then with key `-k` restores the original text.
pub fn caesar_apply(text: &str, key: i32) -> String {
    text.chars().map(|c| shift_symbol(c, key)).collect()
}

/// Apply a Vigenere shift to every symbol of `text`.
///
/// The offset for position `i` is `key[i % key.len()] - 'A'`, cycled over the
/// whole text including characters the transform leaves unchanged. Keys must
/// be non-empty ASCII uppercase; anything else is rejected rather than
/// silently normalized.
pub fn vigenere_apply(text: &str, key: &str) -> Result<String, CipherError> {
    let offsets = key_offsets(key)?;

    Ok(text
        .chars()
        .enumerate()
        .map(|(i, c)| shift_symbol(c, offsets[i % offsets.len()]))
        .collect())
}

/// Validate a Vigenere key and map it to per-letter offsets.
fn key_offsets(key: &str) -> Result<Vec<i32>, CipherError> {
    if key.is_empty() {
        return Err(CipherError::EmptyKey);
    }

    for (position, ch) in key.chars().enumerate() {
        if !ch.is_ascii_uppercase() {
            return Err(CipherError::InvalidKeyChar { ch, position });
        }
    }

    Ok(key.bytes().map(|b| (b - b'A') as i32).collect())
}

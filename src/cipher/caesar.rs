//! Single-shift substitution.

use crate::alphabet::Alphabet;
use crate::error::Result;

/// Shifts every symbol of `text` forward by `shift` (taken mod 26).
pub fn encrypt(alphabet: &Alphabet, text: &str, shift: usize) -> Result<String> {
    text.chars()
        .map(|c| {
            alphabet
                .position(c)
                .map(|p| alphabet.symbol(Alphabet::shift_forward(p, shift)))
        })
        .collect()
}

/// Inverse of [`encrypt`] for the same `shift`.
pub fn decrypt(alphabet: &Alphabet, text: &str, shift: usize) -> Result<String> {
    text.chars()
        .map(|c| {
            alphabet
                .position(c)
                .map(|p| alphabet.symbol(Alphabet::shift_backward(p, shift)))
        })
        .collect()
}

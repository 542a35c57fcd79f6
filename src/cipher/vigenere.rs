//! Repeating-key substitution: position `i` is Caesar-shifted by
//! `key[i mod key.len()]`.

use crate::alphabet::{Alphabet, ALPHABET_LEN};
use crate::error::{CryptanalysisError, Result};

pub fn encrypt(alphabet: &Alphabet, text: &str, key: &[usize]) -> Result<String> {
    if key.is_empty() {
        return Err(CryptanalysisError::EmptyKey);
    }
    text.chars()
        .zip(key.iter().cycle())
        .map(|(c, &shift)| {
            alphabet
                .position(c)
                .map(|p| alphabet.symbol(Alphabet::shift_forward(p, shift)))
        })
        .collect()
}

pub fn decrypt(alphabet: &Alphabet, text: &str, key: &[usize]) -> Result<String> {
    if key.is_empty() {
        return Err(CryptanalysisError::EmptyKey);
    }
    text.chars()
        .zip(key.iter().cycle())
        .map(|(c, &shift)| {
            alphabet
                .position(c)
                .map(|p| alphabet.symbol(Alphabet::shift_backward(p, shift)))
        })
        .collect()
}

/// Parses a key given either as letters (`"DBEBF"`) or as comma-separated
/// shifts (`"3,1,4,1,5"`). Numeric shifts are reduced mod 26.
pub fn parse_key(alphabet: &Alphabet, input: &str) -> Result<Vec<usize>> {
    let input = input.trim();
    let key = if input.contains(',') || input.chars().all(|c| c.is_ascii_digit()) {
        input
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<usize>()
                    .map(|shift| shift % ALPHABET_LEN)
                    .map_err(|_| {
                        let bad = part.chars().find(|c| !c.is_ascii_digit());
                        CryptanalysisError::InvalidSymbol(bad.unwrap_or(','))
                    })
            })
            .collect::<Result<Vec<_>>>()?
    } else {
        input
            .chars()
            .map(|c| alphabet.position(c.to_ascii_uppercase()))
            .collect::<Result<Vec<_>>>()?
    };

    if key.is_empty() {
        return Err(CryptanalysisError::EmptyKey);
    }
    Ok(key)
}

/// Renders a key as the letters it shifts `A` to.
pub fn key_letters(alphabet: &Alphabet, key: &[usize]) -> String {
    key.iter()
        .map(|&shift| alphabet.symbol(shift % ALPHABET_LEN))
        .collect()
}

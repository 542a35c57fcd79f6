//! Symbol/position codec for the 26-letter alphabet.
//!
//! All cipher and statistics code works on positions `0..26`; this module is
//! the only place that knows which character sits at which position.

use crate::error::{CryptanalysisError, Result};

/// Number of symbols in the alphabet.
pub const ALPHABET_LEN: usize = 26;

const NOT_IN_ALPHABET: u8 = u8::MAX;

/// Ordered set of 26 ASCII symbols with a reverse lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    symbols: [u8; ALPHABET_LEN],
    positions: [u8; 128],
}

impl Alphabet {
    /// Uppercase `A..=Z`.
    pub const LATIN: Alphabet = Alphabet::from_symbols(*b"ABCDEFGHIJKLMNOPQRSTUVWXYZ");

    const fn from_symbols(symbols: [u8; ALPHABET_LEN]) -> Self {
        let mut positions = [NOT_IN_ALPHABET; 128];
        let mut i = 0;
        while i < ALPHABET_LEN {
            positions[symbols[i] as usize] = i as u8;
            i += 1;
        }
        Alphabet { symbols, positions }
    }

    /// Position of `symbol`, or `InvalidSymbol` if it is not in the alphabet.
    pub fn position(&self, symbol: char) -> Result<usize> {
        self.lookup(symbol).ok_or(CryptanalysisError::InvalidSymbol(symbol))
    }

    /// Position of `symbol`, usable in constant expressions.
    pub const fn lookup(&self, symbol: char) -> Option<usize> {
        if !symbol.is_ascii() {
            return None;
        }
        let position = self.positions[symbol as usize];
        if position == NOT_IN_ALPHABET {
            None
        } else {
            Some(position as usize)
        }
    }

    /// Symbol at `position`. Callers reduce positions mod 26 first.
    pub fn symbol(&self, position: usize) -> char {
        debug_assert!(position < ALPHABET_LEN, "position {} out of range", position);
        self.symbols[position] as char
    }

    /// Iterator over the symbols in alphabet order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().map(|&s| s as char)
    }

    /// `(position + shift) mod 26`.
    pub fn shift_forward(position: usize, shift: usize) -> usize {
        (position + shift % ALPHABET_LEN) % ALPHABET_LEN
    }

    /// `(position - shift) mod 26`.
    pub fn shift_backward(position: usize, shift: usize) -> usize {
        (position + ALPHABET_LEN - shift % ALPHABET_LEN) % ALPHABET_LEN
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::LATIN
    }
}

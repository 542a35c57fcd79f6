//! Aligns every column on the first one with the mutual index of
//! coincidence, then recovers the single remaining shift from the most
//! frequent letter of the aligned text.
//!
//! Column `i` enciphered with `k[i]` matches column 0 best at relative shift
//! `k[i] - k[0]`. Decrypting with those relative shifts leaves a text that is
//! the plaintext Caesar-shifted by `k[0]`, which the whole text's letter peak
//! reveals far more reliably than a single column's peak.

use tracing::trace;

use crate::alphabet::{Alphabet, ALPHABET_LEN};
use crate::cipher::{caesar, vigenere};
use crate::columns::column_histograms;
use crate::error::Result;
use crate::frequency::{mutual_index_of_coincidence, Histogram};

/// Relative shift maximizing the mutual index of coincidence between
/// `reference` and `column`. Only strict improvements count, so the lowest
/// shift wins ties.
pub fn best_relative_shift(reference: &Histogram, column: &Histogram) -> Result<usize> {
    let mut best_shift = 0;
    let mut best_index = 0.0;
    for shift in 0..ALPHABET_LEN {
        let index = mutual_index_of_coincidence(reference.counts(), column.counts(), shift)?;
        if index > best_index {
            best_index = index;
            best_shift = shift;
        }
    }
    Ok(best_shift)
}

/// Shift of every column relative to column 0 (always 0 for column 0 itself).
pub fn relative_shifts(
    alphabet: &Alphabet,
    ciphertext: &str,
    key_length: usize,
) -> Result<Vec<usize>> {
    let histograms = column_histograms(alphabet, ciphertext, key_length)?;
    let Some(reference) = histograms.first() else {
        return Ok(Vec::new());
    };

    histograms
        .iter()
        .enumerate()
        .map(|(column, histogram)| {
            let shift = best_relative_shift(reference, histogram)?;
            trace!("Column {}: relative shift {}", column, shift);
            Ok(shift)
        })
        .collect()
}

/// Result of collapsing relative shifts into absolute ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Collapsed {
    /// Caesar shift left after decrypting with the relative shifts.
    pub absolute_shift: usize,
    /// Relative shifts plus the absolute shift: the recovered key.
    pub key: Vec<usize>,
    pub plaintext: String,
}

/// Decrypts with `relative`, takes the most frequent letter of the result as
/// `peak_position`, and Caesar-decrypts the remaining shift.
pub fn collapse(
    alphabet: &Alphabet,
    ciphertext: &str,
    relative: &[usize],
    peak_position: usize,
) -> Result<Collapsed> {
    let aligned = vigenere::decrypt(alphabet, ciphertext, relative)?;
    let peak = Histogram::of(alphabet, &aligned)?.most_frequent();
    let absolute_shift = Alphabet::shift_backward(peak, peak_position);
    let plaintext = caesar::decrypt(alphabet, &aligned, absolute_shift)?;

    let key = relative
        .iter()
        .map(|&shift| Alphabet::shift_forward(shift, absolute_shift))
        .collect();

    Ok(Collapsed {
        absolute_shift,
        key,
        plaintext,
    })
}

//! Assumes the most frequent symbol of every column enciphers the language's
//! most frequent letter. Cheap, and unreliable on short columns or texts that
//! avoid that letter.

use tracing::trace;

use crate::alphabet::Alphabet;
use crate::columns::column_histograms;
use crate::error::Result;

/// Shift of each column: `(peak - peak_position) mod 26`.
pub fn estimate_shifts(
    alphabet: &Alphabet,
    ciphertext: &str,
    key_length: usize,
    peak_position: usize,
) -> Result<Vec<usize>> {
    let histograms = column_histograms(alphabet, ciphertext, key_length)?;
    Ok(histograms
        .iter()
        .enumerate()
        .map(|(column, histogram)| {
            let peak = histogram.most_frequent();
            let shift = Alphabet::shift_backward(peak, peak_position);
            trace!(
                "Column {}: peak '{}' -> shift {}",
                column,
                alphabet.symbol(peak),
                shift
            );
            shift
        })
        .collect())
}

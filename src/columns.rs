//! Column partition of a ciphertext for a candidate key length.

use crate::alphabet::Alphabet;
use crate::error::Result;
use crate::frequency::Histogram;

/// Splits `text` into `key_length` columns; column `i` holds every symbol at
/// a position `≡ i (mod key_length)`, in order.
pub fn split_columns(text: &str, key_length: usize) -> Vec<String> {
    let mut columns = vec![String::new(); key_length];
    if key_length == 0 {
        return columns;
    }
    for (i, c) in text.chars().enumerate() {
        columns[i % key_length].push(c);
    }
    columns
}

/// Inverse of [`split_columns`].
pub fn interleave(columns: &[String]) -> String {
    let mut iters: Vec<_> = columns.iter().map(|c| c.chars()).collect();
    let mut text = String::with_capacity(columns.iter().map(String::len).sum());
    'rows: loop {
        for column in iters.iter_mut() {
            match column.next() {
                Some(c) => text.push(c),
                None => break 'rows,
            }
        }
    }
    text
}

/// One histogram per column.
pub fn column_histograms(
    alphabet: &Alphabet,
    text: &str,
    key_length: usize,
) -> Result<Vec<Histogram>> {
    split_columns(text, key_length)
        .iter()
        .map(|column| Histogram::of(alphabet, column))
        .collect()
}

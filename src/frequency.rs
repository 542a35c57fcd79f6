//! Letter histograms and the statistics derived from them.
//!
//! # Statistics
//!
//! - **Index of coincidence**: probability that two symbols drawn without
//!   replacement from one text are equal. Around 0.078 for French, 0.066 for
//!   English, 0.038 for uniformly random letters.
//! - **Mutual index of coincidence**: probability that a symbol drawn from one
//!   text equals a symbol drawn from a second, shifted text. Peaks at the
//!   relative shift between two columns enciphered from the same language.
//! - **Pearson correlation**: linear correlation between a column histogram
//!   and a reference profile; used to pick absolute shifts.

use crate::alphabet::{Alphabet, ALPHABET_LEN};
use crate::error::{CryptanalysisError, Result};

/// Occurrence count of every alphabet position in a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Histogram {
    counts: [u64; ALPHABET_LEN],
}

impl Histogram {
    /// Counts the symbols of `text`; fails on the first symbol outside the
    /// alphabet.
    pub fn of(alphabet: &Alphabet, text: &str) -> Result<Self> {
        let mut counts = [0u64; ALPHABET_LEN];
        for c in text.chars() {
            counts[alphabet.position(c)?] += 1;
        }
        Ok(Self { counts })
    }

    pub fn from_counts(counts: [u64; ALPHABET_LEN]) -> Self {
        Self { counts }
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Number of symbols the histogram was built from.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Histogram of the same text Caesar-shifted forward by `shift`.
    pub fn rotated(&self, shift: usize) -> Self {
        let mut counts = [0u64; ALPHABET_LEN];
        for (position, &count) in self.counts.iter().enumerate() {
            counts[Alphabet::shift_forward(position, shift)] = count;
        }
        Self { counts }
    }

    pub fn to_f64(&self) -> Vec<f64> {
        self.counts.iter().map(|&c| c as f64).collect()
    }

    pub fn index_of_coincidence(&self) -> f64 {
        index_of_coincidence(&self.counts)
    }

    /// Position of the most frequent symbol; ties go to the lowest position.
    pub fn most_frequent(&self) -> usize {
        argmax_letter(&self.counts)
    }
}

/// `Σ h[i]·(h[i]-1) / (N·(N-1))`. Returns 0.0 when `N ≤ 1`.
pub fn index_of_coincidence(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    if total <= 1 {
        return 0.0;
    }

    let numerator: f64 = counts
        .iter()
        .filter(|&&c| c > 1)
        .map(|&c| c as f64 * (c as f64 - 1.0))
        .sum();
    let n = total as f64;
    numerator / (n * (n - 1.0))
}

/// `Σ_i h1[i]·h2[(i+shift) mod 26] / (Σh1 · Σh2)`.
///
/// Both histograms must cover the whole alphabet. An empty histogram gives
/// 0.0.
pub fn mutual_index_of_coincidence(h1: &[u64], h2: &[u64], shift: usize) -> Result<f64> {
    for h in [h1, h2] {
        if h.len() != ALPHABET_LEN {
            return Err(CryptanalysisError::LengthMismatch {
                expected: ALPHABET_LEN,
                found: h.len(),
            });
        }
    }

    let total1: u64 = h1.iter().sum();
    let total2: u64 = h2.iter().sum();
    if total1 == 0 || total2 == 0 {
        return Ok(0.0);
    }

    let numerator: f64 = (0..ALPHABET_LEN)
        .map(|i| h1[i] as f64 * h2[Alphabet::shift_forward(i, shift)] as f64)
        .sum();
    Ok(numerator / (total1 as f64 * total2 as f64))
}

/// Pearson correlation coefficient between two equal-length series.
pub fn pearson_correlation(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(CryptanalysisError::LengthMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    if is_constant(a) || is_constant(b) {
        return Err(CryptanalysisError::DegenerateSeries);
    }

    let mean_a = statistical::mean(a);
    let mean_b = statistical::mean(b);

    let mut covariance = 0.0;
    let mut spread_a = 0.0;
    let mut spread_b = 0.0;
    for (&x, &y) in a.iter().zip(b) {
        let dx = x - mean_a;
        let dy = y - mean_b;
        covariance += dx * dy;
        spread_a += dx * dx;
        spread_b += dy * dy;
    }

    if spread_a == 0.0 || spread_b == 0.0 {
        return Err(CryptanalysisError::DegenerateSeries);
    }
    Ok(covariance / (spread_a.sqrt() * spread_b.sqrt()))
}

// Empty and single-value series count as constant.
fn is_constant(series: &[f64]) -> bool {
    series.windows(2).all(|w| w[0] == w[1])
}

/// Index of the maximum count. Only a strictly greater count replaces the
/// current best, so the lowest index wins ties.
pub fn argmax_letter(counts: &[u64]) -> usize {
    let mut best = 0;
    for (position, &count) in counts.iter().enumerate() {
        if count > counts[best] {
            best = position;
        }
    }
    best
}

//! Picks each column's shift by correlating its histogram with a reference
//! language profile, and the key length by the best mean correlation.
//!
//! Unlike the other strategies this one does not rely on the coincidence
//! threshold: every length in `1..=max_key_length` is scored and the best
//! score wins, lowest length first on ties.

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::alphabet::{Alphabet, ALPHABET_LEN};
use crate::columns::column_histograms;
use crate::error::Result;
use crate::frequency::{pearson_correlation, Histogram};
use crate::profile::LanguageProfile;

/// Best key found for one key length.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationKey {
    pub key_length: usize,
    pub key: Vec<usize>,
    /// Mean of the per-column maximum correlations.
    pub score: f64,
}

/// Decryption shift of one column and the correlation it reached.
///
/// Trial shift `d` enciphers the column forward; the matching decryption
/// shift is `(26 - d) mod 26`. The running maximum starts at 0, so a column
/// with no positive correlation keeps shift 0.
pub fn best_column_shift(column: &Histogram, profile: &LanguageProfile) -> Result<(usize, f64)> {
    let mut best_shift = 0;
    let mut best_correlation = 0.0;
    for trial in 0..ALPHABET_LEN {
        let shifted = column.rotated(trial).to_f64();
        let correlation = pearson_correlation(profile.frequencies(), &shifted)?;
        if correlation > best_correlation {
            best_correlation = correlation;
            best_shift = Alphabet::shift_backward(0, trial);
        }
    }
    Ok((best_shift, best_correlation))
}

/// Key and aggregate score for a fixed key length.
pub fn key_for_length(
    alphabet: &Alphabet,
    ciphertext: &str,
    key_length: usize,
    profile: &LanguageProfile,
) -> Result<CorrelationKey> {
    let histograms = column_histograms(alphabet, ciphertext, key_length)?;

    let mut key = Vec::with_capacity(key_length);
    let mut total = 0.0;
    for (column, histogram) in histograms.iter().enumerate() {
        let (shift, correlation) = best_column_shift(histogram, profile)?;
        trace!(
            "Length {} column {}: shift {} (r = {:.4})",
            key_length,
            column,
            shift,
            correlation
        );
        key.push(shift);
        total += correlation;
    }

    let score = if key_length == 0 {
        0.0
    } else {
        total / key_length as f64
    };
    Ok(CorrelationKey {
        key_length,
        key,
        score,
    })
}

/// Scores every key length in `1..=max_key_length` and keeps the best.
///
/// With `parallel` set the lengths are scored on the rayon pool; results are
/// still reduced in increasing length order, so the outcome does not depend
/// on scheduling. Returns `None` when no length scores above 0.
pub fn search(
    alphabet: &Alphabet,
    ciphertext: &str,
    max_key_length: usize,
    profile: &LanguageProfile,
    parallel: bool,
) -> Result<Option<CorrelationKey>> {
    let evaluate = |key_length| key_for_length(alphabet, ciphertext, key_length, profile);
    let candidates: Vec<Result<CorrelationKey>> = if parallel {
        (1..=max_key_length).into_par_iter().map(evaluate).collect()
    } else {
        (1..=max_key_length).map(evaluate).collect()
    };

    let mut best: Option<CorrelationKey> = None;
    for candidate in candidates {
        let candidate = candidate?;
        debug!(
            "Key length {:>2}: correlation score {:.5}",
            candidate.key_length, candidate.score
        );
        let best_score = best.as_ref().map_or(0.0, |b| b.score);
        if candidate.score > best_score {
            best = Some(candidate);
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::{caesar, vigenere};
    use crate::error::CryptanalysisError;

    const TEXT: &str = "LAROUTEQUIMENAITAUCHATEAUTRAVERSAITUNEFORETPROFONDEOULESARBRESETAIENTSIHAUTSQUELESOLEILNEPARVENAITJAMAISJUSQUAUSOLETLESVOYAGEURSPRESSAIENTLEPASAVANTLATOMBEEDELANUIT";

    #[test]
    fn test_best_column_shift_undoes_caesar() {
        let alphabet = Alphabet::LATIN;
        let profile = LanguageProfile::french();
        for shift in [0, 3, 13, 25] {
            let cipher = caesar::encrypt(&alphabet, TEXT, shift).unwrap();
            let histogram = Histogram::of(&alphabet, &cipher).unwrap();
            let (found, correlation) = best_column_shift(&histogram, &profile).unwrap();
            assert_eq!(found, shift);
            assert!(correlation > 0.8, "correlation {}", correlation);
        }
    }

    #[test]
    fn test_best_column_shift_keeps_first_maximum() {
        // Counts repeat with period 13, so trials 0 and 13 reach the same
        // correlation; trial 0 (decryption shift 0) must win, not 13.
        let histogram = Histogram::of(&Alphabet::LATIN, "EEERRRANSSFF").unwrap();
        let profile = LanguageProfile::french();
        let (shift, correlation) = best_column_shift(&histogram, &profile).unwrap();
        assert_eq!(shift, 0);
        assert!(correlation > 0.6, "correlation {}", correlation);

        let twin = pearson_correlation(profile.frequencies(), &histogram.rotated(13).to_f64())
            .unwrap();
        assert_eq!(twin, correlation);
    }

    #[test]
    fn test_search_prefers_shortest_length_on_tie() {
        let alphabet = Alphabet::LATIN;
        let profile = LanguageProfile::french();
        // Every letter doubled: both length-2 columns equal the length-1
        // column at half the counts, so the two scores are identical.
        let doubled: String = TEXT.chars().flat_map(|c| [c, c]).collect();
        let cipher = caesar::encrypt(&alphabet, &doubled, 9).unwrap();

        let one = key_for_length(&alphabet, &cipher, 1, &profile).unwrap();
        let two = key_for_length(&alphabet, &cipher, 2, &profile).unwrap();
        assert_eq!(one.score, two.score);
        assert_eq!(two.key, vec![9, 9]);

        for parallel in [false, true] {
            let best = search(&alphabet, &cipher, 2, &profile, parallel)
                .unwrap()
                .unwrap();
            assert_eq!(best.key_length, 1);
            assert_eq!(best.key, vec![9]);
        }
    }

    #[test]
    fn test_empty_column_is_degenerate() {
        assert_eq!(
            best_column_shift(&Histogram::default(), &LanguageProfile::french()),
            Err(CryptanalysisError::DegenerateSeries)
        );
    }

    #[test]
    fn test_key_for_length_recovers_key() {
        let alphabet = Alphabet::LATIN;
        let cipher = vigenere::encrypt(&alphabet, TEXT, &[11, 4]).unwrap();
        let found = key_for_length(&alphabet, &cipher, 2, &LanguageProfile::french()).unwrap();
        assert_eq!(found.key_length, 2);
        assert_eq!(found.key, vec![11, 4]);
        assert!(found.score > 0.0 && found.score <= 1.0);
    }

    #[test]
    fn test_parallel_and_sequential_search_agree() {
        let alphabet = Alphabet::LATIN;
        let profile = LanguageProfile::french();
        let cipher = vigenere::encrypt(&alphabet, TEXT, &[11, 4]).unwrap();
        let sequential = search(&alphabet, &cipher, 6, &profile, false).unwrap();
        let parallel = search(&alphabet, &cipher, 6, &profile, true).unwrap();
        assert_eq!(sequential, parallel);
        assert!(sequential.is_some());
    }

    #[test]
    fn test_search_propagates_degenerate_columns() {
        let alphabet = Alphabet::LATIN;
        // Length 4 leaves an empty column.
        let result = search(&alphabet, "ABC", 4, &LanguageProfile::french(), false);
        assert_eq!(result, Err(CryptanalysisError::DegenerateSeries));
    }
}

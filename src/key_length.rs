//! Key-length estimation from the mean index of coincidence of the columns.
//!
//! Columns built with the right key length are each a single Caesar shift of
//! the plaintext language and keep its coincidence index (~0.078 for French).
//! Any other length mixes several shifts and drifts towards the uniform value
//! (~0.038). The smallest length whose mean column index exceeds the
//! threshold wins.

use tracing::debug;

use crate::alphabet::Alphabet;
use crate::columns::column_histograms;
use crate::config::AnalysisConfig;
use crate::error::Result;

/// A key length that passed the coincidence threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyLengthCandidate {
    pub key_length: usize,
    pub mean_coincidence: f64,
}

#[derive(Debug, Clone)]
pub struct KeyLengthEstimator {
    alphabet: Alphabet,
    max_key_length: usize,
    ic_threshold: f64,
}

impl KeyLengthEstimator {
    pub fn new(alphabet: Alphabet, max_key_length: usize, ic_threshold: f64) -> Self {
        Self {
            alphabet,
            max_key_length,
            ic_threshold,
        }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(Alphabet::LATIN, config.max_key_length, config.ic_threshold)
    }

    pub fn max_key_length(&self) -> usize {
        self.max_key_length
    }

    /// Mean index of coincidence over the `key_length` columns of `ciphertext`.
    pub fn mean_coincidence(&self, ciphertext: &str, key_length: usize) -> Result<f64> {
        let histograms = column_histograms(&self.alphabet, ciphertext, key_length)?;
        if histograms.is_empty() {
            return Ok(0.0);
        }
        let sum: f64 = histograms.iter().map(|h| h.index_of_coincidence()).sum();
        Ok(sum / histograms.len() as f64)
    }

    /// Smallest key length in `1..=max_key_length` whose mean column index of
    /// coincidence exceeds the threshold.
    pub fn find(&self, ciphertext: &str) -> Result<Option<KeyLengthCandidate>> {
        for key_length in 1..=self.max_key_length {
            let mean_coincidence = self.mean_coincidence(ciphertext, key_length)?;
            debug!(
                "Key length {:>2}: mean IC {:.5}",
                key_length, mean_coincidence
            );
            if mean_coincidence > self.ic_threshold {
                return Ok(Some(KeyLengthCandidate {
                    key_length,
                    mean_coincidence,
                }));
            }
        }
        Ok(None)
    }

    /// Same as [`find`](Self::find) with `0` standing for "no length found".
    pub fn estimate(&self, ciphertext: &str) -> Result<usize> {
        Ok(self
            .find(ciphertext)?
            .map(|candidate| candidate.key_length)
            .unwrap_or(0))
    }
}

impl Default for KeyLengthEstimator {
    fn default() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::vigenere;

    const PLAINTEXT: &str = "LAMERETAITCALMEETLEPECHEURREPARAITSESFILETSSURLAPLAGEPENDANTQUELESENFANTSJOUAIENTDANSLESABLEETQUELESMOUETTESTOURNAIENTAUDESSUSDESBATEAUXAMARRESLEVENTDUSOIRAPPORTAITUNEODEURDESELETDALGUESETLESFEMMESRENTRAIENTLESPANIERSDEPOISSONSVERSLEMARCHEDUVILLAGEOULESACHETEURSATTENDAIENTDEPUISLAUBE";

    #[test]
    fn test_plaintext_is_length_one() {
        let estimator = KeyLengthEstimator::default();
        assert_eq!(estimator.estimate(PLAINTEXT).unwrap(), 1);
    }

    #[test]
    fn test_uniform_text_has_no_length() {
        let uniform = "ABCDEFGHIJKLMNOPQRSTUVWXYZ".repeat(4);
        let estimator = KeyLengthEstimator::new(Alphabet::LATIN, 3, 0.06);
        assert_eq!(estimator.find(&uniform).unwrap(), None);
        assert_eq!(estimator.estimate(&uniform).unwrap(), 0);
    }

    #[test]
    fn test_threshold_is_strict() {
        // Every column of "AB" repeated with length 2 is constant: IC = 1.0.
        let text = "AB".repeat(10);
        let estimator = KeyLengthEstimator::new(Alphabet::LATIN, 5, 1.0);
        assert_eq!(estimator.estimate(&text).unwrap(), 0);
        let estimator = KeyLengthEstimator::new(Alphabet::LATIN, 5, 0.99);
        assert_eq!(estimator.estimate(&text).unwrap(), 2);
    }

    #[test]
    fn test_mean_coincidence_of_periodic_text() {
        let cipher = vigenere::encrypt(&Alphabet::LATIN, PLAINTEXT, &[7, 2]).unwrap();
        let estimator = KeyLengthEstimator::default();
        let right = estimator.mean_coincidence(&cipher, 2).unwrap();
        let wrong = estimator.mean_coincidence(&cipher, 3).unwrap();
        assert!(right > wrong, "right {} wrong {}", right, wrong);
    }

    #[test]
    fn test_invalid_symbol_propagates() {
        let estimator = KeyLengthEstimator::default();
        assert!(estimator.estimate("ABC DEF").is_err());
    }
}

//! Strategy selection and the end-to-end attack.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::alphabet::Alphabet;
use crate::cipher::vigenere;
use crate::config::{AnalysisConfig, DEFAULT_PEAK_POSITION};
use crate::error::{CryptanalysisError, Result};
use crate::key_length::KeyLengthEstimator;
use crate::profile::LanguageProfile;
use crate::shift::{correlation, frequency_peak, mutual_coincidence};

/// The three attacks, from cheapest to most robust.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Version 1: most frequent letter of each column is 'E'.
    FrequencyPeak,
    /// Version 2: columns aligned by mutual coincidence, then one peak check.
    MutualCoincidence,
    /// Version 3: correlation against the reference profile, own length search.
    Correlation,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::FrequencyPeak,
        Strategy::MutualCoincidence,
        Strategy::Correlation,
    ];

    pub fn from_version(version: u8) -> Result<Self> {
        match version {
            1 => Ok(Strategy::FrequencyPeak),
            2 => Ok(Strategy::MutualCoincidence),
            3 => Ok(Strategy::Correlation),
            _ => Err(CryptanalysisError::InvalidConfig(format!(
                "unknown strategy version {}, expected 1, 2 or 3",
                version
            ))),
        }
    }

    pub fn version(&self) -> u8 {
        match self {
            Strategy::FrequencyPeak => 1,
            Strategy::MutualCoincidence => 2,
            Strategy::Correlation => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::FrequencyPeak => "frequency peak",
            Strategy::MutualCoincidence => "mutual coincidence",
            Strategy::Correlation => "correlation",
        }
    }
}

/// Outcome of one attack.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub strategy: Strategy,
    pub key_length: usize,
    pub key: Vec<usize>,
    pub key_letters: String,
    /// Mean column IC that passed the threshold (versions 1 and 2) or mean
    /// column correlation (version 3).
    pub score: f64,
    pub plaintext: String,
}

pub struct Cryptanalyzer {
    alphabet: Alphabet,
    profile: LanguageProfile,
    peak_position: usize,
    key_lengths: KeyLengthEstimator,
    parallel: bool,
}

impl Cryptanalyzer {
    /// Builds an analyzer from a validated configuration.
    pub fn new(config: &AnalysisConfig) -> Result<Self> {
        config.validate()?;
        let alphabet = Alphabet::LATIN;
        Ok(Self::from_parts(
            alphabet,
            config,
            config.reference_profile()?,
            alphabet.position(config.peak_letter)?,
        ))
    }

    fn from_parts(
        alphabet: Alphabet,
        config: &AnalysisConfig,
        profile: LanguageProfile,
        peak_position: usize,
    ) -> Self {
        Self {
            alphabet,
            profile,
            peak_position,
            key_lengths: KeyLengthEstimator::from_config(config),
            parallel: config.parallel,
        }
    }

    /// Replaces the reference profile used by the correlation strategy.
    pub fn with_profile(mut self, profile: LanguageProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_parallelism(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn key_length_estimator(&self) -> &KeyLengthEstimator {
        &self.key_lengths
    }

    pub fn analyze(&self, ciphertext: &str, strategy: Strategy) -> Result<Analysis> {
        debug!(
            "Running {} cryptanalysis on {} symbols",
            strategy.name(),
            ciphertext.len()
        );

        let (key_length, key, score, plaintext) = match strategy {
            Strategy::FrequencyPeak => self.frequency_peak(ciphertext)?,
            Strategy::MutualCoincidence => self.mutual_coincidence(ciphertext)?,
            Strategy::Correlation => self.correlation(ciphertext)?,
        };

        let key_letters = vigenere::key_letters(&self.alphabet, &key);
        info!(
            "Version {} ({}): key length {}, key {}",
            strategy.version(),
            strategy.name(),
            key_length,
            key_letters
        );

        Ok(Analysis {
            strategy,
            key_length,
            key,
            key_letters,
            score,
            plaintext,
        })
    }

    fn frequency_peak(&self, ciphertext: &str) -> Result<(usize, Vec<usize>, f64, String)> {
        let (key_length, score) = self.required_key_length(ciphertext)?;
        let key = frequency_peak::estimate_shifts(
            &self.alphabet,
            ciphertext,
            key_length,
            self.peak_position,
        )?;
        let plaintext = vigenere::decrypt(&self.alphabet, ciphertext, &key)?;
        Ok((key_length, key, score, plaintext))
    }

    fn mutual_coincidence(&self, ciphertext: &str) -> Result<(usize, Vec<usize>, f64, String)> {
        let (key_length, score) = self.required_key_length(ciphertext)?;
        let relative = mutual_coincidence::relative_shifts(&self.alphabet, ciphertext, key_length)?;
        let collapsed =
            mutual_coincidence::collapse(&self.alphabet, ciphertext, &relative, self.peak_position)?;
        debug!(
            "Relative shifts {:?} collapsed with absolute shift {}",
            relative, collapsed.absolute_shift
        );
        Ok((key_length, collapsed.key, score, collapsed.plaintext))
    }

    fn correlation(&self, ciphertext: &str) -> Result<(usize, Vec<usize>, f64, String)> {
        let max_key_length = self.key_lengths.max_key_length();
        let best = correlation::search(
            &self.alphabet,
            ciphertext,
            max_key_length,
            &self.profile,
            self.parallel,
        )?
        .ok_or(CryptanalysisError::KeyLengthNotFound { max_key_length })?;

        let plaintext = vigenere::decrypt(&self.alphabet, ciphertext, &best.key)?;
        Ok((best.key_length, best.key, best.score, plaintext))
    }

    fn required_key_length(&self, ciphertext: &str) -> Result<(usize, f64)> {
        self.key_lengths
            .find(ciphertext)?
            .map(|candidate| (candidate.key_length, candidate.mean_coincidence))
            .ok_or(CryptanalysisError::KeyLengthNotFound {
                max_key_length: self.key_lengths.max_key_length(),
            })
    }
}

impl Default for Cryptanalyzer {
    fn default() -> Self {
        let config = AnalysisConfig::default();
        Self::from_parts(
            Alphabet::LATIN,
            &config,
            config.language.profile(),
            DEFAULT_PEAK_POSITION,
        )
    }
}

/// Recovers the plaintext of `ciphertext` with strategy `version` (1, 2 or 3)
/// and the default configuration.
pub fn cryptanalyse(ciphertext: &str, version: u8) -> Result<String> {
    let strategy = Strategy::from_version(version)?;
    Cryptanalyzer::default()
        .analyze(ciphertext, strategy)
        .map(|analysis| analysis.plaintext)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAINTEXT: &str = "QUANDLEVENTSELEVEDANSLAPLAINELESHERBESSECOURBENTETLESOISEAUXSETAISENTLESPAYSANSRENTRENTLEURSBETESETFERMENTLESPORTESDESGRANGESAVANTQUELAPLUIENECOMMENCEATOMBERSURLESTOITSDEPAILLEETSURLESCHEMINSDETERRE";

    #[test]
    fn test_strategy_versions() {
        for strategy in Strategy::ALL {
            assert_eq!(Strategy::from_version(strategy.version()).unwrap(), strategy);
        }
        assert!(matches!(
            Strategy::from_version(4),
            Err(CryptanalysisError::InvalidConfig(_))
        ));
        assert!(Strategy::from_version(0).is_err());
    }

    #[test]
    fn test_strategy_serde_names() {
        assert_eq!(
            serde_json::to_string(&Strategy::MutualCoincidence).unwrap(),
            "\"mutual_coincidence\""
        );
    }

    #[test]
    fn test_default_analyzer_peak_is_e() {
        let analyzer = Cryptanalyzer::default();
        assert_eq!(analyzer.peak_position, 4);
        assert_eq!(analyzer.key_length_estimator().max_key_length(), 20);
    }

    #[test]
    fn test_default_matches_default_config() {
        let built = Cryptanalyzer::new(&AnalysisConfig::default()).unwrap();
        let default = Cryptanalyzer::default();
        assert_eq!(default.alphabet, built.alphabet);
        assert_eq!(default.profile, built.profile);
        assert_eq!(default.peak_position, built.peak_position);
        assert_eq!(default.parallel, built.parallel);
        assert_eq!(
            default.key_length_estimator().max_key_length(),
            built.key_length_estimator().max_key_length()
        );
    }

    #[test]
    fn test_caesar_ciphertext_every_strategy() {
        let alphabet = Alphabet::LATIN;
        let cipher = vigenere::encrypt(&alphabet, PLAINTEXT, &[10]).unwrap();
        let analyzer = Cryptanalyzer::default();
        for strategy in Strategy::ALL {
            let analysis = analyzer.analyze(&cipher, strategy).unwrap();
            assert_eq!(analysis.key, vec![10], "{}", strategy.name());
            assert_eq!(analysis.key_letters, "K");
            assert_eq!(analysis.plaintext, PLAINTEXT);
        }
    }

    #[test]
    fn test_key_length_not_found_for_uniform_text() {
        // No repeated symbol, so every column has an index of 0.
        let uniform = "QWERTYUIOPASDFGHJKLZXCVBNM";
        let analyzer = Cryptanalyzer::default();
        for strategy in [Strategy::FrequencyPeak, Strategy::MutualCoincidence] {
            assert_eq!(
                analyzer.analyze(uniform, strategy),
                Err(CryptanalysisError::KeyLengthNotFound { max_key_length: 20 })
            );
        }
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = AnalysisConfig {
            max_key_length: 0,
            ..Default::default()
        };
        assert!(Cryptanalyzer::new(&config).is_err());
    }

    #[test]
    fn test_cryptanalyse_rejects_unknown_version() {
        assert!(cryptanalyse(PLAINTEXT, 7).is_err());
    }
}

//! Reference letter-frequency profiles.

use serde::{Deserialize, Serialize};

use crate::alphabet::ALPHABET_LEN;
use crate::error::{CryptanalysisError, Result};

/// Average letter frequencies of French prose, accents folded, `A..=Z`.
pub const FRENCH_FREQUENCIES: [f64; ALPHABET_LEN] = [
    0.09213437454330574,
    0.010354490059155806,
    0.030178992381545422,
    0.037536932666586184,
    0.17174754258773295,
    0.010939058717380115,
    0.0106150043524949,
    0.010717939268399616,
    0.07507259453174145,
    0.0038327371156619923,
    6.989407870073262e-05,
    0.06136827190067416,
    0.026498751437594118,
    0.07030835996721332,
    0.04914062053233872,
    0.023697905083841123,
    0.010160057440224678,
    0.06609311162084369,
    0.07816826681746844,
    0.0737433362349966,
    0.06356167517044624,
    0.016450524523290613,
    1.1437212878301701e-05,
    0.004071647784675406,
    0.0023001505899695645,
    0.0012263233808401269,
];

/// Average letter frequencies of English prose, `A..=Z`.
pub const ENGLISH_FREQUENCIES: [f64; ALPHABET_LEN] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094, 0.06966, 0.00153,
    0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929, 0.00095, 0.05987, 0.06327, 0.09056,
    0.02758, 0.00978, 0.02360, 0.00150, 0.01974, 0.00074,
];

/// Built-in languages selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    French,
    English,
}

impl Language {
    pub fn name(&self) -> &'static str {
        match self {
            Language::French => "french",
            Language::English => "english",
        }
    }

    pub fn profile(&self) -> LanguageProfile {
        match self {
            Language::French => LanguageProfile::french(),
            Language::English => LanguageProfile::english(),
        }
    }
}

/// Expected probability of each alphabet position in plaintext.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageProfile {
    frequencies: [f64; ALPHABET_LEN],
}

impl LanguageProfile {
    pub fn french() -> Self {
        Self {
            frequencies: FRENCH_FREQUENCIES,
        }
    }

    pub fn english() -> Self {
        Self {
            frequencies: ENGLISH_FREQUENCIES,
        }
    }

    /// Builds a custom profile. Values are used as given, not renormalized.
    pub fn from_frequencies(frequencies: &[f64]) -> Result<Self> {
        let frequencies: [f64; ALPHABET_LEN] =
            frequencies
                .try_into()
                .map_err(|_| CryptanalysisError::LengthMismatch {
                    expected: ALPHABET_LEN,
                    found: frequencies.len(),
                })?;

        if let Some(bad) = frequencies.iter().find(|f| !f.is_finite() || **f < 0.0) {
            return Err(CryptanalysisError::InvalidConfig(format!(
                "profile frequencies must be finite and non-negative, got {}",
                bad
            )));
        }

        Ok(Self { frequencies })
    }

    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }
}

impl Default for LanguageProfile {
    fn default() -> Self {
        Self::french()
    }
}

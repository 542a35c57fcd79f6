// Analysis configuration: thresholds, reference profile, parallelism.
// Stored as JSON under the user's config directory.

use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::alphabet::Alphabet;
use crate::error::{CryptanalysisError, Result};
use crate::profile::{Language, LanguageProfile};

/// Largest key length tried by every strategy.
pub const MAX_KEY_LENGTH: usize = 20;

/// Mean column index of coincidence a key length has to exceed.
pub const THRESHOLD_IC: f64 = 0.06;

/// Letter assumed to be the most frequent one in plaintext.
pub const DEFAULT_PEAK_LETTER: char = 'E';

/// Alphabet position of [`DEFAULT_PEAK_LETTER`].
pub const DEFAULT_PEAK_POSITION: usize = match Alphabet::LATIN.lookup(DEFAULT_PEAK_LETTER) {
    Some(position) => position,
    None => panic!("default peak letter is not in the alphabet"),
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub max_key_length: usize,
    pub ic_threshold: f64,
    pub peak_letter: char,
    pub language: Language,
    /// Custom reference frequencies; overrides `language` when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Vec<f64>>,
    pub parallel: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_key_length: MAX_KEY_LENGTH,
            ic_threshold: THRESHOLD_IC,
            peak_letter: DEFAULT_PEAK_LETTER,
            language: Language::default(),
            profile: None,
            parallel: true,
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_key_length == 0 {
            return Err(CryptanalysisError::InvalidConfig(
                "max_key_length must be at least 1".to_string(),
            ));
        }
        if !self.ic_threshold.is_finite() {
            return Err(CryptanalysisError::InvalidConfig(format!(
                "ic_threshold must be a finite number, got {}",
                self.ic_threshold
            )));
        }
        Alphabet::LATIN.position(self.peak_letter)?;
        self.reference_profile()?;
        Ok(())
    }

    /// Reference profile used by the correlation strategy.
    pub fn reference_profile(&self) -> Result<LanguageProfile> {
        match &self.profile {
            Some(frequencies) => LanguageProfile::from_frequencies(frequencies),
            None => Ok(self.language.profile()),
        }
    }

    /// Loads configuration from `path`, or from the default location when no
    /// path is given. A missing default file yields the defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let config = match path {
            Some(path) => Self::read_file(path)?,
            None => {
                let default_path = Self::config_file_path()?;
                if default_path.exists() {
                    Self::read_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.validate().context("Configuration rejected")?;
        Ok(config)
    }

    fn read_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        let config: AnalysisConfig = serde_json::from_str(&content)
            .with_context(|| format!("Could not parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Get the config file path
    pub fn config_file_path() -> anyhow::Result<PathBuf> {
        dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|dir| dir.join("vigcrack").join("config.json"))
            .ok_or_else(|| anyhow!("Could not determine config directory or home directory"))
    }
}

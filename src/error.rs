//! Error types for the vigcrack library.

use thiserror::Error;

/// Errors produced while enciphering, measuring or breaking a text.
///
/// Every variant is fatal to the current attempt; nothing is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CryptanalysisError {
    #[error("Symbol '{0}' is not part of the alphabet")]
    InvalidSymbol(char),
    #[error("Key must contain at least one shift")]
    EmptyKey,
    #[error("Length mismatch: expected {expected} values, found {found}")]
    LengthMismatch { expected: usize, found: usize },
    #[error("Series has zero variance, correlation is undefined")]
    DegenerateSeries,
    #[error("No plausible key length found between 1 and {max_key_length}")]
    KeyLengthNotFound { max_key_length: usize },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, CryptanalysisError>;

//! Ciphertext-only cryptanalysis of the Vigenère cipher.
//!
//! Three attacks of increasing robustness recover the key and plaintext of a
//! text enciphered over `A..=Z`:
//!
//! 1. **Frequency peak**: key length from the mean column index of
//!    coincidence, then the most frequent letter of each column is taken
//!    to be `E`.
//! 2. **Mutual coincidence**: same key length, columns aligned on the first
//!    one with the mutual index of coincidence, then a single peak check on
//!    the whole aligned text.
//! 3. **Correlation**: every key length up to the maximum is scored by the
//!    Pearson correlation of its columns against a language profile.
//!
//! # Architecture
//!
//! ```text
//! Alphabet     (symbol <-> position, shift arithmetic)
//!     |
//! cipher       (Caesar, Vigenère)
//!     |
//! frequency    (histogram, IC, mutual IC, Pearson, argmax)
//!     |
//! columns -> key_length -> shift::{frequency_peak, mutual_coincidence, correlation}
//!     |
//! cryptanalysis (Strategy, Cryptanalyzer)
//! ```
//!
//! # Examples
//!
//! ```
//! use vigcrack::alphabet::Alphabet;
//! use vigcrack::cipher::vigenere;
//! use vigcrack::cryptanalysis::{Cryptanalyzer, Strategy};
//!
//! let plaintext = "LESSANGLOTSLONGSDESVIOLONSDELAUTOMNEBLESSENTMONCOEURDUNELANGUEURMONOTONE";
//! let cipher = vigenere::encrypt(&Alphabet::LATIN, plaintext, &[4]).unwrap();
//!
//! let analysis = Cryptanalyzer::default()
//!     .analyze(&cipher, Strategy::Correlation)
//!     .unwrap();
//! assert_eq!(analysis.key, vec![4]);
//! assert_eq!(analysis.plaintext, plaintext);
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod cipher;
pub mod columns;
pub mod config;
pub mod cryptanalysis;
pub mod error;
pub mod frequency;
pub mod key_length;
pub mod normalize;
pub mod profile;
pub mod shift;

pub use config::AnalysisConfig;
pub use cryptanalysis::{cryptanalyse, Analysis, Cryptanalyzer, Strategy};
pub use error::{CryptanalysisError, Result};

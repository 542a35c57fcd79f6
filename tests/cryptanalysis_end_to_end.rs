//! End-to-end attacks on a French prose sample through the public API.
//!
//! The sample is normalized with `vigcrack::normalize`, encrypted with a
//! known key, then handed to each strategy as an opaque ciphertext.

use vigcrack::alphabet::Alphabet;
use vigcrack::cipher::{caesar, vigenere};
use vigcrack::key_length::KeyLengthEstimator;
use vigcrack::normalize::normalize;
use vigcrack::profile::LanguageProfile;
use vigcrack::{cryptanalyse, AnalysisConfig, CryptanalysisError, Cryptanalyzer, Strategy};

const SAMPLE: &str = include_str!("data/french_sample.txt");

/// Key "DBEBF".
const KEY: [usize; 5] = [3, 1, 4, 1, 5];

fn plaintext() -> String {
    normalize(SAMPLE)
}

fn encrypt(text: &str, key: &[usize]) -> String {
    vigenere::encrypt(&Alphabet::LATIN, text, key).unwrap()
}

fn letters(key: &str) -> Vec<usize> {
    vigenere::parse_key(&Alphabet::LATIN, key).unwrap()
}

// ═══════════════════════════════════════════════════════════════════════
// Key length
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn sample_is_normalized_core_input() {
    let text = plaintext();
    assert_eq!(text.len(), 4257);
    assert!(text.chars().all(|c| c.is_ascii_uppercase()));
}

#[test]
fn key_length_of_sample_ciphertext() {
    let cipher = encrypt(&plaintext(), &KEY);
    assert_eq!(KeyLengthEstimator::default().estimate(&cipher).unwrap(), 5);
}

#[test]
fn key_length_for_longer_keys() {
    let text = plaintext();
    for (key, expected) in [("LOUVRE", 6), ("CHIFFRE", 7), ("SECRETDEFENSE", 13)] {
        let cipher = encrypt(&text, &letters(key));
        assert_eq!(
            KeyLengthEstimator::default().estimate(&cipher).unwrap(),
            expected,
            "key {}",
            key
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Every strategy recovers the sample
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn every_strategy_recovers_sample() {
    let text = plaintext();
    let cipher = encrypt(&text, &KEY);
    let analyzer = Cryptanalyzer::default();

    for strategy in Strategy::ALL {
        let analysis = analyzer.analyze(&cipher, strategy).unwrap();
        assert_eq!(analysis.strategy, strategy);
        assert_eq!(analysis.key_length, 5, "{}", strategy.name());
        assert_eq!(analysis.key, KEY.to_vec(), "{}", strategy.name());
        assert_eq!(analysis.key_letters, "DBEBF");
        assert_eq!(analysis.plaintext, text, "{}", strategy.name());
    }
}

#[test]
fn cryptanalyse_entry_point_for_each_version() {
    let text = plaintext();
    let cipher = encrypt(&text, &KEY);
    for version in 1..=3 {
        assert_eq!(cryptanalyse(&cipher, version).unwrap(), text, "v{}", version);
    }
}

#[test]
fn every_strategy_recovers_longer_keys() {
    let text = plaintext();
    let analyzer = Cryptanalyzer::default();
    for key in ["LOUVRE", "CHIFFRE", "SECRETDEFENSE"] {
        let cipher = encrypt(&text, &letters(key));
        for strategy in Strategy::ALL {
            let analysis = analyzer.analyze(&cipher, strategy).unwrap();
            assert_eq!(analysis.key_letters, key, "{} with {}", strategy.name(), key);
            assert_eq!(analysis.plaintext, text);
        }
    }
}

#[test]
fn shorter_prefixes_are_still_recovered() {
    let text = plaintext();
    let analyzer = Cryptanalyzer::default();
    for length in [2000, 1000, 600] {
        let prefix = &text[..length];
        let cipher = encrypt(prefix, &KEY);
        for strategy in Strategy::ALL {
            let analysis = analyzer.analyze(&cipher, strategy).unwrap();
            assert_eq!(analysis.plaintext, prefix, "{} letters, {}", length, strategy.name());
        }
    }
}

#[test]
fn mutual_coincidence_key_is_relative_plus_absolute() {
    let text = plaintext();
    let cipher = encrypt(&text, &KEY);
    let analysis = Cryptanalyzer::default()
        .analyze(&cipher, Strategy::MutualCoincidence)
        .unwrap();
    let decrypted = vigenere::decrypt(&Alphabet::LATIN, &cipher, &analysis.key).unwrap();
    assert_eq!(decrypted, analysis.plaintext);
}

// ═══════════════════════════════════════════════════════════════════════
// Configuration knobs
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn parallel_and_sequential_correlation_agree() {
    let cipher = encrypt(&plaintext(), &KEY);
    let sequential = Cryptanalyzer::default()
        .with_parallelism(false)
        .analyze(&cipher, Strategy::Correlation)
        .unwrap();
    let parallel = Cryptanalyzer::default()
        .with_parallelism(true)
        .analyze(&cipher, Strategy::Correlation)
        .unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn english_profile_still_breaks_french_sample() {
    let text = plaintext();
    let cipher = encrypt(&text, &KEY);
    let analysis = Cryptanalyzer::default()
        .with_profile(LanguageProfile::english())
        .analyze(&cipher, Strategy::Correlation)
        .unwrap();
    assert_eq!(analysis.plaintext, text);
}

#[test]
fn short_max_key_length_misses_the_key() {
    let cipher = encrypt(&plaintext(), &KEY);
    let config = AnalysisConfig {
        max_key_length: 4,
        ..Default::default()
    };
    let analyzer = Cryptanalyzer::new(&config).unwrap();
    assert_eq!(
        analyzer.analyze(&cipher, Strategy::FrequencyPeak),
        Err(CryptanalysisError::KeyLengthNotFound { max_key_length: 4 })
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Cipher properties
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn ciphers_round_trip_on_sample() {
    let alphabet = Alphabet::LATIN;
    let text = plaintext();

    for shift in [1, 13, 25, 27] {
        let cipher = caesar::encrypt(&alphabet, &text, shift).unwrap();
        assert_eq!(cipher.len(), text.len());
        assert_eq!(caesar::decrypt(&alphabet, &cipher, shift).unwrap(), text);
    }

    let cipher = encrypt(&text, &KEY);
    assert_eq!(vigenere::decrypt(&alphabet, &cipher, &KEY).unwrap(), text);
}

#[test]
fn single_shift_vigenere_is_caesar() {
    let alphabet = Alphabet::LATIN;
    let text = plaintext();
    assert_eq!(
        encrypt(&text, &[17]),
        caesar::encrypt(&alphabet, &text, 17).unwrap()
    );
}

#[test]
fn unnormalized_ciphertext_is_rejected() {
    let result = cryptanalyse("UNE PHRASE AVEC DES ESPACES", 3);
    assert_eq!(result, Err(CryptanalysisError::InvalidSymbol(' ')));
}

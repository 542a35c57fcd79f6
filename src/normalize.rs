//! Turns raw prose into cipher input: accents folded, uppercase `A..=Z` only.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Decomposes `raw` (NFD), drops combining marks, uppercases, and keeps only
/// ASCII letters. `"Élève, déjà !"` becomes `"ELEVEDEJA"`.
///
/// The ligatures `Œ` and `Æ` have no decomposition and are spelled out as
/// `OE` and `AE`.
pub fn normalize(raw: &str) -> String {
    let mut text = String::with_capacity(raw.len());
    for c in raw
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_uppercase)
    {
        match c {
            'Œ' => text.push_str("OE"),
            'Æ' => text.push_str("AE"),
            c if c.is_ascii_uppercase() => text.push(c),
            _ => {}
        }
    }
    text
}

//! Ground-truth ciphers the cryptanalysis has to invert.
//!
//! Keys are shift amounts (`0..26`), not letters; `vigenere::parse_key`
//! accepts either form from user input.

pub mod caesar;
pub mod vigenere;

//! Common test utilities shared across integration tests.
#![allow(dead_code)]

use vigenere_analysis::normalize;

/// About 3000 letters of English prose.
pub const HARBOUR: &str = include_str!("../fixtures/harbour.txt");

/// Ciphertext enciphered with the key "helloworld".
pub const SAMPLE_CIPHERTEXT: &str = include_str!("../fixtures/sample_ciphertext.txt");

/// Enciphers the letters of `plaintext` with standard Vigenère addition.
///
/// Non-letters are dropped, so the result is already normalized.
pub fn encipher(plaintext: &str, key: &str) -> String {
    let key: Vec<u8> = key.bytes().map(|b| b.to_ascii_lowercase() - b'a').collect();

    normalize(plaintext)
        .as_bytes()
        .iter()
        .enumerate()
        .map(|(i, &b)| ((b - b'a' + key[i % key.len()]) % 26 + b'a') as char)
        .collect()
}

/// Shifts every letter of `letters` forward by `shift`.
pub fn caesar(letters: &str, shift: u8) -> String {
    encipher(letters, &((b'a' + shift) as char).to_string())
}

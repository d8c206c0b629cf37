//! Ciphertext normalization
//!
//! Every later stage works on a letters-only, lowercase view of the ciphertext.
//! Lower-casing happens before filtering, so a character whose lowercase form is
//! a plain Latin letter (for example the Kelvin sign) survives as that letter,
//! while accented letters, digits, punctuation and whitespace are dropped.

use std::fmt;

/// Ciphertext reduced to the letters a-z.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NormalizedText(String);

impl NormalizedText {
    /// Normalizes raw text. Same as [`normalize`].
    pub fn new(raw: &str) -> Self {
        normalize(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Number of letters (every letter is a single byte).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cleans text by lower-casing it and keeping only the letters a-z.
///
/// Never fails; text without letters gives an empty result.
pub fn normalize(text: &str) -> NormalizedText {
    NormalizedText(
        text.chars()
            .flat_map(char::to_lowercase)
            .filter(char::is_ascii_lowercase)
            .collect(),
    )
}

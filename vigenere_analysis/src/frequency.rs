//! Letter frequency tables
//!
//! A [`FrequencyTable`] can only be built from strictly positive, finite values,
//! so every expected count in the Chi-squared statistic is non-zero.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::utils::{ALPHABET_SIZE, index_letter, letter_index};

/// English letter frequencies for frequency analysis
pub const ENGLISH_FREQUENCIES: [f64; ALPHABET_SIZE] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094,
    0.06966, 0.00153, 0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929,
    0.00095, 0.05987, 0.06327, 0.09056, 0.02758, 0.00978, 0.02360, 0.00150,
    0.01974, 0.00074,
];

/// German letter frequencies for frequency analysis
pub const GERMAN_FREQUENCIES: [f64; ALPHABET_SIZE] = [
    0.0558, 0.0196, 0.0316, 0.0498, 0.1693, 0.0149, 0.0302, 0.0498,
    0.0802, 0.0024, 0.0132, 0.0360, 0.0255, 0.1053, 0.0224, 0.0067,
    0.0002, 0.0689, 0.0642, 0.0579, 0.0383, 0.0084, 0.0178, 0.0005,
    0.0005, 0.0121,
];

/// Expected relative frequency of each letter a-z in plaintext.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyTable([f64; ALPHABET_SIZE]);

impl FrequencyTable {
    pub const ENGLISH: Self = Self(ENGLISH_FREQUENCIES);
    pub const GERMAN: Self = Self(GERMAN_FREQUENCIES);

    /// Builds a table from frequencies ordered a-z.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidFrequency`] for the first value that is zero,
    /// negative or not finite.
    pub fn new(frequencies: [f64; ALPHABET_SIZE]) -> Result<Self, ConfigError> {
        for (index, &value) in frequencies.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidFrequency {
                    letter: index_letter(index),
                    value,
                });
            }
        }

        Ok(Self(frequencies))
    }

    /// Builds a table from `(letter, frequency)` entries, e.g. a parsed config map.
    ///
    /// Letters are matched case-insensitively and every letter a-z must appear
    /// exactly once.
    ///
    /// # Errors
    ///
    /// Unknown, repeated or missing letters, and any value rejected by
    /// [`FrequencyTable::new`].
    pub fn from_entries<K, I>(entries: I) -> Result<Self, ConfigError>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, f64)>,
    {
        let mut frequencies: [Option<f64>; ALPHABET_SIZE] = [None; ALPHABET_SIZE];

        for (key, value) in entries {
            let key = key.as_ref();
            let index = match key.as_bytes() {
                [byte] => letter_index(byte.to_ascii_lowercase()),
                _ => None,
            }
            .ok_or_else(|| ConfigError::UnknownLetter(key.to_string()))?;

            if frequencies[index].replace(value).is_some() {
                return Err(ConfigError::DuplicateLetter(index_letter(index)));
            }
        }

        let mut table = [0.0; ALPHABET_SIZE];
        for (index, value) in frequencies.into_iter().enumerate() {
            table[index] = value.ok_or(ConfigError::MissingLetter(index_letter(index)))?;
        }

        Self::new(table)
    }

    /// Expected frequency of the letter at alphabet position `index`.
    pub fn frequency(&self, index: usize) -> f64 {
        self.0[index % ALPHABET_SIZE]
    }

    pub fn as_array(&self) -> &[f64; ALPHABET_SIZE] {
        &self.0
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::ENGLISH
    }
}

impl TryFrom<BTreeMap<String, f64>> for FrequencyTable {
    type Error = ConfigError;

    fn try_from(map: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        Self::from_entries(map)
    }
}

/// Plaintext languages with a built-in table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    German,
}

impl Language {
    pub fn table(self) -> FrequencyTable {
        match self {
            Language::English => FrequencyTable::ENGLISH,
            Language::German => FrequencyTable::GERMAN,
        }
    }
}

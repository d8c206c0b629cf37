//! Per-column key recovery by Chi-squared scoring
//!
//! Once the key length is known, each column is a plain Caesar cipher. For every
//! possible shift the column is scored against the expected plaintext letter
//! frequencies; the shift with the smallest statistic is that column's key letter.

use std::fmt;

use crate::columns::CaesarStream;
use crate::frequency::FrequencyTable;
use crate::utils::{ALPHABET_SIZE, count_letters, index_letter};

/// Winning shift of one column and its Chi-squared statistic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftScore {
    pub shift: u8,
    pub statistic: f64,
}

impl ShiftScore {
    /// Key letter encoding this shift ('a' = 0).
    pub fn key_char(&self) -> char {
        index_letter(usize::from(self.shift))
    }
}

/// Recovered key, one lowercase letter per column.
///
/// Only built from shift values, so every letter is within a-z.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RecoveredKey(String);

impl RecoveredKey {
    /// Assembles a key from per-column shifts, wrapping values past 25.
    pub(crate) fn from_shifts<I: IntoIterator<Item = u8>>(shifts: I) -> Self {
        Self(
            shifts
                .into_iter()
                .map(|shift| index_letter(usize::from(shift)))
                .collect(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Shift amounts (0-25) of each key letter.
    pub fn shifts(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b - b'a')
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RecoveredKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Chi-squared statistic of observed letter counts against `table`.
///
/// `sum((observed - expected)^2 / expected)` with `expected = total * frequency`.
/// Returns 0.0 for an empty sample.
pub fn chi_squared(counts: &[u32; ALPHABET_SIZE], table: &FrequencyTable) -> f64 {
    let total = f64::from(counts.iter().sum::<u32>());
    if total == 0.0 {
        return 0.0;
    }

    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let observed = f64::from(count);
            let expected = total * table.frequency(i);
            (observed - expected).powi(2) / expected
        })
        .sum()
}

/// Chi-squared statistic of the stream deciphered with every shift 0-25.
pub fn score_shifts(stream: &CaesarStream, table: &FrequencyTable) -> [f64; ALPHABET_SIZE] {
    let counts = count_letters(stream.letters());

    std::array::from_fn(|shift| {
        // Deciphering with `shift` turns ciphertext letter i + shift into plaintext letter i
        let deciphered: [u32; ALPHABET_SIZE] =
            std::array::from_fn(|i| counts[(i + shift) % ALPHABET_SIZE]);
        chi_squared(&deciphered, table)
    })
}

/// Finds the most probable shift of a single Caesar stream.
///
/// Ties go to the smallest shift. An empty stream yields shift 0.
pub fn recover_shift(stream: &CaesarStream, table: &FrequencyTable) -> ShiftScore {
    let scores = score_shifts(stream, table);
    let mut best = ShiftScore {
        shift: 0,
        statistic: scores[0],
    };

    for (shift, &statistic) in scores.iter().enumerate().skip(1) {
        if statistic < best.statistic {
            best = ShiftScore {
                shift: shift as u8,
                statistic,
            };
        }
    }

    best
}

/// Recovers the full key, one column at a time and in column order.
pub fn recover_key(streams: &[CaesarStream], table: &FrequencyTable) -> RecoveredKey {
    RecoveredKey::from_shifts(streams.iter().map(|stream| recover_shift(stream, table).shift))
}

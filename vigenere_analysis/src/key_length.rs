//! Key-length search by Index of Coincidence
//!
//! For each candidate length the text is split into columns and their IC is
//! averaged. At the true length (or a multiple of it) every column is a Caesar
//! shift of the plaintext and keeps its skewed distribution; at any other
//! length the columns mix several shifts and look closer to uniform.

use std::ops::Range;

use tracing::{debug, info, warn};

use crate::columns::split_columns;
use crate::config::{AnalysisConfig, MIN_KEY_LENGTH, SearchStrategy};
use crate::error::{AnalysisError, Result};
use crate::ioc::average_ioc;
use crate::text::NormalizedText;

/// A scored candidate key length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyLengthCandidate {
    pub length: usize,
    pub average_ioc: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyLengthEstimator {
    max_key_length: usize,
    ioc_threshold: f64,
    strategy: SearchStrategy,
}

impl Default for KeyLengthEstimator {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

impl KeyLengthEstimator {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            max_key_length: config.max_key_length(),
            ioc_threshold: config.ioc_threshold(),
            strategy: config.strategy(),
        }
    }

    /// Candidate key lengths, `2..max_key_length`.
    pub fn candidate_lengths(&self) -> Range<usize> {
        MIN_KEY_LENGTH..self.max_key_length
    }

    /// Scores a single key length.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::DegenerateStream`] if any column has fewer than two letters.
    pub fn evaluate(&self, text: &NormalizedText, length: usize) -> Result<KeyLengthCandidate> {
        let streams = split_columns(text, length)?;
        let average_ioc = average_ioc(&streams)?;
        Ok(KeyLengthCandidate { length, average_ioc })
    }

    /// Every valid candidate in ascending length order. Degenerate lengths are left out.
    pub fn profile(&self, text: &NormalizedText) -> Vec<KeyLengthCandidate> {
        self.candidates(text).collect()
    }

    /// Returns the estimated key length.
    ///
    /// # Errors
    ///
    /// * [`AnalysisError::InputTooShort`] if no candidate yields columns of two letters
    /// * [`AnalysisError::KeyLengthNotFound`] if no candidate clears the threshold
    pub fn estimate(&self, text: &NormalizedText) -> Result<usize> {
        self.estimate_candidate(text).map(|candidate| candidate.length)
    }

    /// Like [`estimate`](Self::estimate), but also returns the winning average IOC.
    pub fn estimate_candidate(&self, text: &NormalizedText) -> Result<KeyLengthCandidate> {
        let mut best: Option<KeyLengthCandidate> = None;
        let mut evaluated = 0usize;

        for candidate in self.candidates(text) {
            evaluated += 1;

            if best.is_none_or(|b| candidate.average_ioc > b.average_ioc) {
                best = Some(candidate);
            }

            // Early exit: the first crossing wins, not the best over the range
            if self.strategy == SearchStrategy::FirstAboveThreshold
                && candidate.average_ioc > self.ioc_threshold
            {
                info!(
                    length = candidate.length,
                    average_ioc = candidate.average_ioc,
                    "Accepted key length"
                );
                return Ok(candidate);
            }
        }

        if evaluated == 0 && !self.candidate_lengths().is_empty() {
            warn!(letters = text.len(), "Text too short for any candidate key length");
            return Err(AnalysisError::InputTooShort { letters: text.len() });
        }

        match best {
            Some(candidate)
                if self.strategy == SearchStrategy::BestInRange
                    && candidate.average_ioc > self.ioc_threshold =>
            {
                info!(
                    length = candidate.length,
                    average_ioc = candidate.average_ioc,
                    "Accepted key length"
                );
                Ok(candidate)
            }
            _ => {
                warn!(
                    max_key_length = self.max_key_length,
                    threshold = self.ioc_threshold,
                    "No key length reached the IOC threshold"
                );
                Err(AnalysisError::KeyLengthNotFound {
                    max_key_length: self.max_key_length,
                    threshold: self.ioc_threshold,
                    best,
                })
            }
        }
    }

    fn candidates<'a>(
        &'a self,
        text: &'a NormalizedText,
    ) -> impl Iterator<Item = KeyLengthCandidate> + 'a {
        self.candidate_lengths()
            .filter_map(move |length| match self.evaluate(text, length) {
                Ok(candidate) => {
                    debug!(length, average_ioc = candidate.average_ioc, "Scored key length");
                    Some(candidate)
                }
                Err(err) => {
                    debug!(length, %err, "Skipping key length");
                    None
                }
            })
    }
}

/// Estimates the key length with the default configuration.
///
/// # Errors
///
/// See [`KeyLengthEstimator::estimate`].
pub fn estimate_key_length(text: &NormalizedText) -> Result<usize> {
    KeyLengthEstimator::default().estimate(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::normalize;

    // Columns of 'a's and 'b's alternate per position, so only even key lengths
    // make every column constant (IC 1.0); odd lengths mix both letters.
    const PERIODIC: &str = "abababababababababababababababababababab";

    fn estimator(max_key_length: usize, ioc_threshold: f64, strategy: SearchStrategy) -> KeyLengthEstimator {
        let config = AnalysisConfig::builder()
            .max_key_length(max_key_length)
            .ioc_threshold(ioc_threshold)
            .strategy(strategy)
            .build()
            .unwrap();
        KeyLengthEstimator::new(&config)
    }

    #[test]
    fn test_first_crossing_wins() {
        let text = normalize(PERIODIC);
        let estimator = estimator(10, 0.5, SearchStrategy::FirstAboveThreshold);
        assert_eq!(estimator.estimate(&text), Ok(2));
    }

    #[test]
    fn test_profile_skips_degenerate_lengths() {
        let text = normalize("abcdefghij");
        let profile = KeyLengthEstimator::default().profile(&text);
        let lengths: Vec<usize> = profile.iter().map(|c| c.length).collect();
        assert_eq!(lengths, vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_too_short_input() {
        let text = normalize("abc");
        assert_eq!(
            estimate_key_length(&text),
            Err(AnalysisError::InputTooShort { letters: 3 })
        );
        assert_eq!(
            estimate_key_length(&normalize("")),
            Err(AnalysisError::InputTooShort { letters: 0 })
        );
    }

    #[test]
    fn test_not_found_reports_best_candidate() {
        let text = normalize("abcdefghijklmnopqrstuvwxyz");
        let result = KeyLengthEstimator::default().estimate(&text);
        match result {
            Err(AnalysisError::KeyLengthNotFound { max_key_length, threshold, best }) => {
                assert_eq!(max_key_length, 50);
                assert_eq!(threshold, 0.07);
                assert_eq!(best.map(|b| b.average_ioc), Some(0.0));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_empty_range_is_not_found() {
        let text = normalize(PERIODIC);
        let estimator = estimator(2, 0.07, SearchStrategy::FirstAboveThreshold);
        assert!(estimator.candidate_lengths().is_empty());
        assert!(matches!(
            estimator.estimate(&text),
            Err(AnalysisError::KeyLengthNotFound { best: None, .. })
        ));
    }

    #[test]
    fn test_best_in_range_keeps_shortest_of_ties() {
        // lengths 2, 4, 6, ... all score 1.0
        let text = normalize(PERIODIC);
        let estimator = estimator(12, 0.5, SearchStrategy::BestInRange);
        let candidate = estimator.estimate_candidate(&text).unwrap();
        assert_eq!(candidate.length, 2);
        assert_eq!(candidate.average_ioc, 1.0);
    }

    #[test]
    fn test_best_in_range_still_needs_threshold() {
        let text = normalize("abcdefghijklmnopqrstuvwxyz");
        let estimator = estimator(10, 0.07, SearchStrategy::BestInRange);
        assert!(matches!(
            estimator.estimate(&text),
            Err(AnalysisError::KeyLengthNotFound { .. })
        ));
    }

    #[test]
    fn test_threshold_is_strict() {
        let text = normalize(PERIODIC);
        let estimator = estimator(10, 1.0, SearchStrategy::FirstAboveThreshold);
        assert!(matches!(
            estimator.estimate(&text),
            Err(AnalysisError::KeyLengthNotFound { .. })
        ));
    }
}

//! End-to-end key recovery
//!
//! Normalize, estimate the key length, split into columns, and break each
//! column. Columns share nothing but the read-only frequency table.

use tracing::{debug, info};

use crate::columns::split_columns;
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::key_length::{KeyLengthCandidate, KeyLengthEstimator};
use crate::key_recovery::{RecoveredKey, ShiftScore, recover_shift};
use crate::text::normalize;

/// Outcome of a successful analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub key_length: usize,
    /// Average IOC of the columns at `key_length`.
    pub average_ioc: f64,
    pub key: RecoveredKey,
    /// Winning shift and statistic per column, in column order.
    pub columns: Vec<ShiftScore>,
}

#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn estimator(&self) -> KeyLengthEstimator {
        KeyLengthEstimator::new(&self.config)
    }

    /// Runs the whole pipeline on raw ciphertext.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::InputTooShort`](crate::AnalysisError::InputTooShort) or
    /// [`AnalysisError::KeyLengthNotFound`](crate::AnalysisError::KeyLengthNotFound)
    /// from the key-length search.
    pub fn analyze(&self, ciphertext: &str) -> Result<Analysis> {
        let text = normalize(ciphertext);
        debug!(letters = text.len(), "Normalized ciphertext");

        let KeyLengthCandidate {
            length: key_length,
            average_ioc,
        } = self.estimator().estimate_candidate(&text)?;

        let streams = split_columns(&text, key_length)?;
        let table = self.config.frequencies();
        let columns: Vec<ShiftScore> = streams
            .iter()
            .map(|stream| recover_shift(stream, table))
            .collect();
        let key = RecoveredKey::from_shifts(columns.iter().map(|score| score.shift));

        info!(key_length, %key, "Recovered key");

        Ok(Analysis {
            key_length,
            average_ioc,
            key,
            columns,
        })
    }

    /// Recovers only the key.
    ///
    /// # Errors
    ///
    /// See [`Analyzer::analyze`].
    pub fn find_key(&self, ciphertext: &str) -> Result<RecoveredKey> {
        self.analyze(ciphertext).map(|analysis| analysis.key)
    }

    /// Average IOC of every valid candidate key length.
    pub fn profile(&self, ciphertext: &str) -> Vec<KeyLengthCandidate> {
        self.estimator().profile(&normalize(ciphertext))
    }
}

/// Recovers the key of `ciphertext` with the default configuration.
///
/// # Errors
///
/// See [`Analyzer::analyze`].
pub fn find_key(ciphertext: &str) -> Result<RecoveredKey> {
    Analyzer::default().find_key(ciphertext)
}

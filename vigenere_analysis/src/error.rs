//! Error types for Vigenère analysis

use thiserror::Error;

use crate::key_length::KeyLengthCandidate;

/// Rejections raised while building an [`AnalysisConfig`](crate::AnalysisConfig).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid maximum key length {0} (must be at least 2)")]
    MaxKeyLengthTooSmall(usize),

    #[error("Invalid IOC threshold {0} (must lie within [0, 1])")]
    ThresholdOutOfRange(f64),

    #[error("Frequency table is missing letter '{0}'")]
    MissingLetter(char),

    #[error("Frequency table lists letter '{0}' more than once (keys ignore case)")]
    DuplicateLetter(char),

    #[error("Frequency table has an entry for '{0}', which is not a letter a-z")]
    UnknownLetter(String),

    #[error("Invalid frequency {value} for letter '{letter}' (must be finite and > 0)")]
    InvalidFrequency { letter: char, value: f64 },

    #[error("Malformed configuration: {0}")]
    Parse(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Input too short: {letters} letters cannot give two-letter columns for any candidate key length")]
    InputTooShort { letters: usize },

    #[error("No key length in 2..{max_key_length} reached an average IOC above {threshold}{}", describe_best(.best))]
    KeyLengthNotFound {
        max_key_length: usize,
        threshold: f64,
        best: Option<KeyLengthCandidate>,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("Degenerate stream of length {length} (IOC needs at least 2 letters)")]
    DegenerateStream { length: usize },

    #[error("Invalid key length {0} (must be > 0)")]
    InvalidKeyLength(usize),

    #[error("No streams to average")]
    NoStreams,
}

fn describe_best(best: &Option<KeyLengthCandidate>) -> String {
    best.map_or_else(String::new, |candidate| {
        format!(
            " (best was length {} at {:.4})",
            candidate.length, candidate.average_ioc
        )
    })
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

//! Index of Coincidence
//!
//! IC = sum(f_i * (f_i - 1)) / (N * (N - 1)), the probability that two letters
//! drawn from the stream without replacement are equal. Near 1/26 for uniform
//! text, roughly 0.065-0.075 for English or any Caesar shift of it.

use crate::columns::CaesarStream;
use crate::error::{AnalysisError, Result};
use crate::utils::count_letters;

/// Expected IC of uniformly random letters.
pub const RANDOM_IOC: f64 = 1.0 / 26.0;

/// Calculates the Index of Coincidence of a letter stream.
///
/// Only the letters a-z are counted; N is the number of counted letters.
///
/// # Errors
///
/// [`AnalysisError::DegenerateStream`] for fewer than two counted letters,
/// where the denominator would be zero.
pub fn index_of_coincidence(letters: &[u8]) -> Result<f64> {
    let frequencies = count_letters(letters);
    let total: u64 = frequencies.iter().map(|&freq| u64::from(freq)).sum();
    if total < 2 {
        return Err(AnalysisError::DegenerateStream {
            length: total as usize,
        });
    }

    let numerator: u64 = frequencies
        .iter()
        .map(|&freq| u64::from(freq) * u64::from(freq.saturating_sub(1)))
        .sum();

    let denominator = total * (total - 1);
    Ok(numerator as f64 / denominator as f64)
}

/// Averages the IC over all streams of one candidate key length.
///
/// # Errors
///
/// [`AnalysisError::DegenerateStream`] if any stream is degenerate,
/// [`AnalysisError::NoStreams`] if the slice is empty.
pub fn average_ioc(streams: &[CaesarStream]) -> Result<f64> {
    if streams.is_empty() {
        return Err(AnalysisError::NoStreams);
    }

    let total = streams
        .iter()
        .map(|stream| index_of_coincidence(stream.letters()))
        .sum::<Result<f64>>()?;

    Ok(total / streams.len() as f64)
}

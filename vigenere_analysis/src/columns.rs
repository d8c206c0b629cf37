//! Column splitting
//!
//! Under a key of length `n`, the letters at positions `i`, `i + n`, `i + 2n`, ...
//! were all shifted by the same key letter. Each such column is an independent
//! Caesar cipher.

use std::fmt;

use crate::error::{AnalysisError, Result};
use crate::text::NormalizedText;

/// The letters of one key position, in their original order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaesarStream {
    column: usize,
    letters: String,
}

impl CaesarStream {
    fn with_capacity(column: usize, capacity: usize) -> Self {
        Self {
            column,
            letters: String::with_capacity(capacity),
        }
    }

    /// Key position this stream belongs to.
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn letters(&self) -> &[u8] {
        self.letters.as_bytes()
    }

    pub fn as_str(&self) -> &str {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl fmt::Display for CaesarStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.letters)
    }
}

/// Splits text into `key_len` streams: letter `i` goes to stream `i % key_len`.
///
/// Columns past the end of a short text come back empty; rejecting those is
/// up to the caller.
///
/// # Errors
///
/// [`AnalysisError::InvalidKeyLength`] when `key_len` is zero.
pub fn split_columns(text: &NormalizedText, key_len: usize) -> Result<Vec<CaesarStream>> {
    if key_len == 0 {
        return Err(AnalysisError::InvalidKeyLength(key_len));
    }

    let capacity = text.len() / key_len + 1;
    let mut streams: Vec<CaesarStream> = (0..key_len)
        .map(|column| CaesarStream::with_capacity(column, capacity))
        .collect();

    for (i, c) in text.as_str().chars().enumerate() {
        streams[i % key_len].letters.push(c);
    }

    Ok(streams)
}

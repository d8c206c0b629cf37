//! Letter helpers shared by the analysis stages

/// Number of letters in the Latin alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Converts a lowercase ASCII letter into its alphabet position (a=0, b=1, ...).
///
/// Returns `None` for anything outside a-z.
pub fn letter_index(letter: u8) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| usize::from(letter - b'a'))
}

/// Converts an alphabet position back into its lowercase letter, wrapping past 'z'.
pub fn index_letter(index: usize) -> char {
    (b'a' + (index % ALPHABET_SIZE) as u8) as char
}

/// Counts the frequency of each letter in the given stream.
///
/// # Arguments
///
/// * `letters` - Lowercase ASCII letters; anything else is ignored.
///
/// # Returns
///
/// An array of 26 counts for letters a-z.
pub fn count_letters(letters: &[u8]) -> [u32; ALPHABET_SIZE] {
    let mut counts = [0u32; ALPHABET_SIZE];

    for &letter in letters {
        if let Some(index) = letter_index(letter) {
            counts[index] += 1;
        }
    }

    counts
}

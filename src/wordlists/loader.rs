//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Words are trimmed and lowercased. Blank lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_clone::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/5letters.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_str(&content))
}

/// Split text into normalized words, one per line
#[must_use]
pub fn words_from_str(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Convert an embedded string slice to owned words
///
/// # Examples
/// ```
/// use wordle_clone::wordlists::loader::words_from_slice;
/// use wordle_clone::wordlists::FIVE_LETTERS;
///
/// let words = words_from_slice(FIVE_LETTERS);
/// assert_eq!(words.len(), FIVE_LETTERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

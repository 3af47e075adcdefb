//! Word list loading utilities
//!
//! Lists are plain text, one word per line. Blank lines and lines starting
//! with `#` are skipped. Anything else must be a valid word: invalid entries
//! are rejected here so they never reach the solver.

use crate::core::{Word, WordleError};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read or contains an invalid word.
///
/// # Examples
/// ```no_run
/// use wordler::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/targets.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;

    parse_words(&content).with_context(|| format!("Bad word list {}", path.display()))
}

/// Parse a newline-separated word list
///
/// # Errors
///
/// Returns `WordleError::InvalidWord` for the first line that is not a word.
pub fn parse_words(text: &str) -> Result<Vec<Word>, WordleError> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(Word::new)
        .collect()
}

/// Convert a string slice to a Word vector
///
/// # Errors
///
/// Returns `WordleError::InvalidWord` for the first invalid entry.
///
/// # Examples
/// ```
/// use wordler::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "slate"]).unwrap();
/// assert_eq!(words.len(), 2);
/// assert!(words_from_slice(&["crane", "abc"]).is_err());
/// ```
pub fn words_from_slice(slice: &[&str]) -> Result<Vec<Word>, WordleError> {
    slice.iter().map(|&s| Word::new(s)).collect()
}

//! Wordle word representation
//!
//! A Word is five lowercase ASCII letters stored inline, so it is `Copy` and
//! never allocates. The scorer creates and compares millions of them.

use super::WordleError;
use std::fmt;
use std::str::FromStr;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// A 5-letter Wordle word
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LEN]);

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordleError::InvalidWord` unless `text` is exactly five
    /// lowercase ASCII letters. No case folding is done here; callers reading
    /// user input normalize it first.
    ///
    /// # Examples
    /// ```
    /// use wordler::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.as_str(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// assert!(Word::new("CRANE").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordleError> {
        let letters: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordleError::InvalidWord(text.to_string()))?;

        if !letters.iter().all(u8::is_ascii_lowercase) {
            return Err(WordleError::InvalidWord(text.to_string()));
        }

        Ok(Self(letters))
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.0
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Construction guarantees ASCII, so this never falls back.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl FromStr for Word {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({:?})", self.as_str())
    }
}

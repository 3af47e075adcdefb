//! Word lists for Wordle solving
//!
//! The lists are plain values owned by the caller and passed into the solver,
//! so tests can run against small synthetic vocabularies.

pub mod embedded;
pub mod loader;

use crate::core::{Word, WordleError};
use loader::words_from_slice;
use rustc_hash::FxHashSet;

/// The vocabularies a solver works from
#[derive(Debug, Clone, Default)]
pub struct WordLists {
    targets: Vec<Word>,
    guesses: Vec<Word>,
}

impl WordLists {
    /// Build the lists from possible answers and the extra allowed guesses
    ///
    /// The guess list is every target followed by the extra words, in order,
    /// with duplicates dropped. Keeping targets first biases scorer ties toward
    /// words that could also be the answer.
    ///
    /// # Examples
    /// ```
    /// use wordler::core::Word;
    /// use wordler::wordlists::WordLists;
    ///
    /// let targets = vec![Word::new("crane").unwrap(), Word::new("slate").unwrap()];
    /// let extra = vec![Word::new("salet").unwrap(), Word::new("crane").unwrap()];
    ///
    /// let lists = WordLists::new(targets, extra);
    /// assert_eq!(lists.targets().len(), 2);
    /// assert_eq!(lists.guesses().len(), 3);
    /// ```
    #[must_use]
    pub fn new(targets: Vec<Word>, extra_guesses: Vec<Word>) -> Self {
        let mut seen = FxHashSet::default();
        let guesses = targets
            .iter()
            .chain(&extra_guesses)
            .copied()
            .filter(|word| seen.insert(*word))
            .collect();

        Self { targets, guesses }
    }

    /// The lists compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `WordleError::InvalidWord` if an embedded entry is not a word.
    /// The build script checks the same rule, so this does not happen for
    /// lists that compiled.
    ///
    /// # Examples
    /// ```
    /// use wordler::core::Word;
    /// use wordler::wordlists::WordLists;
    ///
    /// let lists = WordLists::embedded().unwrap();
    /// assert!(lists.guesses().len() > lists.targets().len());
    /// assert!(lists.is_guess(&Word::new("raise").unwrap()));
    /// ```
    pub fn embedded() -> Result<Self, WordleError> {
        Ok(Self::new(
            words_from_slice(embedded::TARGETS)?,
            words_from_slice(embedded::EXTRA_GUESSES)?,
        ))
    }

    /// Use the same words as both targets and guesses
    #[must_use]
    pub fn targets_only(targets: Vec<Word>) -> Self {
        Self::new(targets, Vec::new())
    }

    /// Possible answers, in list order
    #[must_use]
    pub fn targets(&self) -> &[Word] {
        &self.targets
    }

    /// Permitted guesses: all targets first, then extra allowed words
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn is_guess(&self, word: &Word) -> bool {
        self.guesses.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guesses_start_with_targets() {
        let targets = words_from_slice(&["crane", "slate"]).unwrap();
        let extra = words_from_slice(&["aahed", "zonks"]).unwrap();
        let lists = WordLists::new(targets, extra);

        let guesses: Vec<&str> = lists.guesses().iter().map(Word::as_str).collect();
        assert_eq!(guesses, ["crane", "slate", "aahed", "zonks"]);
    }

    #[test]
    fn duplicate_guesses_dropped_in_order() {
        let targets = words_from_slice(&["crane", "slate"]).unwrap();
        let extra = words_from_slice(&["slate", "aahed", "aahed"]).unwrap();
        let lists = WordLists::new(targets, extra);

        let guesses: Vec<&str> = lists.guesses().iter().map(Word::as_str).collect();
        assert_eq!(guesses, ["crane", "slate", "aahed"]);
    }

    #[test]
    fn embedded_lists_put_targets_first() {
        let lists = WordLists::embedded().unwrap();
        let targets = lists.targets().len();

        assert_eq!(&lists.guesses()[..targets], lists.targets());
        assert_eq!(
            lists.guesses().len(),
            targets + embedded::EXTRA_GUESSES.len()
        );
    }

    #[test]
    fn targets_only_uses_same_words() {
        let targets = words_from_slice(&["crane", "slate"]).unwrap();
        let lists = WordLists::targets_only(targets.clone());

        assert_eq!(lists.targets(), targets.as_slice());
        assert_eq!(lists.guesses(), targets.as_slice());
        assert!(lists.is_guess(&Word::new("slate").unwrap()));
        assert!(!lists.is_guess(&Word::new("zonks").unwrap()));
    }
}

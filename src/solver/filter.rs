//! Candidate filtering
//!
//! Narrows a word list to the words consistent with every known hint. Order is
//! preserved: the scorer breaks ties by position, and the solve loop guesses
//! the first remaining candidate once only one or two are left.

use crate::core::{Hint, Word};

/// Keep the words that match every hint, in their original order
///
/// # Examples
/// ```
/// use wordler::core::{Hint, Word};
/// use wordler::solver::filter_candidates;
///
/// let words: Vec<Word> = ["amaze", "evade", "geese"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let hints = [Hint::parse("raise", ".y..g").unwrap()];
///
/// let remaining = filter_candidates(&hints, &words);
/// assert_eq!(remaining.len(), 2);
/// assert_eq!(remaining[0].as_str(), "amaze");
/// ```
#[must_use]
pub fn filter_candidates(hints: &[Hint], words: &[Word]) -> Vec<Word> {
    words
        .iter()
        .filter(|word| hints.iter().all(|hint| hint.matches(word)))
        .copied()
        .collect()
}

/// Drop the words in `words` that do not match `hint`, in place
pub fn retain_matching(hint: &Hint, words: &mut Vec<Word>) {
    words.retain(|word| hint.matches(word));
}

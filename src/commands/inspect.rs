//! Diagnostic commands for the hint matcher
//!
//! Derive a single hint, test words against a hint, or list the targets that
//! survive a set of hints.

use crate::core::{Hint, Word};
use crate::solver::filter_candidates;
use crate::wordlists::WordLists;

/// Outcome of testing words against one hint
pub struct CheckResult {
    pub hint: Hint,
    pub verdicts: Vec<(Word, bool)>,
}

/// Hint produced by `guess` when the answer is `target`
#[must_use]
pub fn derive_hint(target: Word, guess: Word) -> Hint {
    Hint::derive(&target, &guess)
}

/// Test each word against `hint`
#[must_use]
pub fn check_words(hint: Hint, words: &[Word]) -> CheckResult {
    CheckResult {
        hint,
        verdicts: words.iter().map(|word| (*word, hint.matches(word))).collect(),
    }
}

/// Targets consistent with every hint
#[must_use]
pub fn filter_targets(lists: &WordLists, hints: &[Hint]) -> Vec<Word> {
    filter_candidates(hints, lists.targets())
}

//! Guess selection by lowest partition score
//!
//! Every guess is scored independently, so the pool is scored in parallel
//! with rayon. The reduction takes the minimum of `(score, pool index)`,
//! which makes ties resolve to the earliest guess in the pool no matter how
//! the work was split.

use super::calculator::score_guess;
use crate::core::{Word, WordleError};
use rayon::prelude::*;

/// Select the guess expected to shrink `candidates` the most
///
/// # Errors
///
/// Returns `WordleError::Exhausted` if `candidates` is empty, or if a search
/// is needed and `guess_pool` is empty.
///
/// # Examples
/// ```
/// use wordler::core::Word;
/// use wordler::solver::scoring::best_guess;
///
/// let words = |list: &[&str]| -> Vec<Word> {
///     list.iter().map(|w| Word::new(w).unwrap()).collect()
/// };
/// let candidates = words(&["slate", "irate", "crate", "grate"]);
/// let guesses = words(&["zzzzz", "crane", "gecko"]);
///
/// let best = best_guess(&candidates, &guesses).unwrap();
/// assert!(guesses.contains(&best));
/// ```
pub fn best_guess(candidates: &[Word], guess_pool: &[Word]) -> Result<Word, WordleError> {
    best_scored_guess(candidates, guess_pool).map(|(word, _)| word)
}

/// Like [`best_guess`], also returning the winning score
///
/// With one or two candidates left the first candidate is returned without a
/// search: an extra guess to split two words never saves a turn on average.
///
/// # Errors
///
/// See [`best_guess`].
pub fn best_scored_guess(
    candidates: &[Word],
    guess_pool: &[Word],
) -> Result<(Word, u64), WordleError> {
    match candidates {
        [] => Err(WordleError::Exhausted),
        [first] | [first, _] => Ok((*first, score_guess(first, candidates))),
        _ => guess_pool
            .par_iter()
            .enumerate()
            .map(|(index, guess)| (score_guess(guess, candidates), index))
            .min()
            .map(|(score, index)| (guess_pool[index], score))
            .ok_or(WordleError::Exhausted),
    }
}

/// Score the whole pool and return the `count` best guesses, best first
///
/// Ordering matches [`best_scored_guess`]: by score, then by pool position.
#[must_use]
pub fn rank_guesses(candidates: &[Word], guess_pool: &[Word], count: usize) -> Vec<(Word, u64)> {
    let mut scored: Vec<(u64, usize)> = guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, guess)| (score_guess(guess, candidates), index))
        .collect();

    scored.sort_unstable();
    scored
        .into_iter()
        .take(count)
        .map(|(score, index)| (guess_pool[index], score))
        .collect()
}

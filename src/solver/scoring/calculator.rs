//! Partition score for a single guess
//!
//! For each candidate taken as the answer, derive the hint the guess would
//! get and count the candidates still consistent with it. The sum is
//! proportional to the expected size of the candidate set after the guess.

use crate::core::{Hint, Word};

/// Calculate the partition score of `guess` against `candidates`
///
/// Costs |candidates|² hint matches. Words and hints are `Copy` values, so
/// nothing here touches the heap.
///
/// # Examples
/// ```
/// use wordler::core::Word;
/// use wordler::solver::scoring::score_guess;
///
/// let candidates: Vec<Word> = ["slate", "irate", "crate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// // A guess that tells every candidate apart leaves one word per answer
/// let score = score_guess(&Word::new("slate").unwrap(), &candidates);
/// assert!(score >= 3);
/// assert!(score <= 9);
/// ```
#[must_use]
pub fn score_guess(guess: &Word, candidates: &[Word]) -> u64 {
    candidates
        .iter()
        .map(|target| {
            let hint = Hint::derive(target, guess);
            candidates.iter().filter(|word| hint.matches(word)).count() as u64
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn perfect_split_scores_candidate_count() {
        // Every answer produces a distinct hint, so each leaves exactly one word
        let candidates = words_from_slice(&["aaaaa", "bbbbb", "ccccc"]).unwrap();
        let guess = Word::new("abcde").unwrap();

        assert_eq!(score_guess(&guess, &candidates), 3);
    }

    #[test]
    fn useless_guess_scores_square() {
        // Nothing in common with any candidate: one hint covers them all
        let candidates = words_from_slice(&["aaaaa", "bbbbb", "ccccc"]).unwrap();
        let guess = Word::new("zzzzz").unwrap();

        assert_eq!(score_guess(&guess, &candidates), 9);
    }

    #[test]
    fn skewed_split() {
        // CRANE vs IRATE and GRATE gives the same hint, CRATE differs
        let candidates = words_from_slice(&["irate", "grate", "crate"]).unwrap();
        let guess = Word::new("crane").unwrap();

        assert_eq!(score_guess(&guess, &candidates), 2 + 2 + 1);
    }

    #[test]
    fn empty_candidates_score_zero() {
        let guess = Word::new("crane").unwrap();
        assert_eq!(score_guess(&guess, &[]), 0);
    }

    #[test]
    fn score_bounds() {
        let candidates =
            words_from_slice(&["slate", "irate", "trace", "apple", "angle", "ankle"]).unwrap();
        let n = candidates.len() as u64;

        for guess in &candidates {
            let score = score_guess(guess, &candidates);
            assert!(score >= n && score <= n * n, "{guess}: {score}");
        }
    }
}

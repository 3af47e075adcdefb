//! Next-guess command
//!
//! Given the hints seen so far, report the word to guess next.

use crate::core::{Hint, Word, WordleError};
use crate::solver::Solver;
use std::time::{Duration, Instant};

/// Result of a next-guess computation
pub struct GuessResult {
    pub guess: Word,
    /// True when the guess is the configured opening and no search ran
    pub opening: bool,
    pub candidates: usize,
    /// Runner-up guesses with their scores, best first (only when requested)
    pub ranking: Vec<(Word, u64)>,
    pub duration: Duration,
}

/// Work out the best next guess for `hints`
///
/// When `top` is non-zero and a search is needed, the `top` best-scoring
/// guesses are kept in the result; the first of them is the guess.
///
/// # Errors
///
/// Returns `WordleError::Exhausted` if no target matches the hints.
pub fn suggest_guess(
    solver: &Solver,
    hints: &[Hint],
    top: usize,
) -> Result<GuessResult, WordleError> {
    let start = Instant::now();
    let candidates = solver.candidates(hints);
    let opening = hints.is_empty() && solver.config().opening.is_some();

    let (guess, ranking) = if top > 0 && !opening && candidates.len() > 2 {
        let ranking = solver.top_guesses(hints, top);
        let best = ranking.first().ok_or(WordleError::Exhausted)?.0;
        (best, ranking)
    } else {
        (solver.next_guess(hints)?, Vec::new())
    };

    Ok(GuessResult {
        guess,
        opening,
        candidates: candidates.len(),
        ranking,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverConfig;
    use crate::wordlists::WordLists;
    use crate::wordlists::loader::words_from_slice;

    fn lists() -> WordLists {
        WordLists::new(
            words_from_slice(&["apple", "angle", "ankle", "amble", "ample", "evade"]).unwrap(),
            words_from_slice(&["plank", "gnome", "bulky"]).unwrap(),
        )
    }

    #[test]
    fn no_hints_uses_opening() {
        let lists = lists();
        let solver = Solver::new(&lists, SolverConfig::default());

        let result = suggest_guess(&solver, &[], 5).unwrap();
        assert!(result.opening);
        assert_eq!(result.guess.as_str(), "raise");
        assert!(result.ranking.is_empty());
        assert_eq!(result.candidates, 6);
    }

    #[test]
    fn ranking_leads_with_the_guess() {
        let lists = lists();
        let solver = Solver::new(&lists, SolverConfig::default());
        let hints = [Hint::parse("raise", ".y..g").unwrap()];

        let plain = suggest_guess(&solver, &hints, 0).unwrap();
        let ranked = suggest_guess(&solver, &hints, 3).unwrap();

        assert_eq!(plain.guess, ranked.guess);
        assert_eq!(ranked.ranking.len(), 3);
        assert_eq!(ranked.ranking[0].0, ranked.guess);
        assert!(!ranked.opening);
    }

    #[test]
    fn contradictory_hints_exhausted() {
        let lists = lists();
        let solver = Solver::new(&lists, SolverConfig::default());
        let hints = [
            Hint::parse("apple", "ggggg").unwrap(),
            Hint::parse("angle", "ggggg").unwrap(),
        ];

        assert!(matches!(
            suggest_guess(&solver, &hints, 0),
            Err(WordleError::Exhausted)
        ));
    }
}

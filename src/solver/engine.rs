//! Main Wordle solver interface

use super::config::SolverConfig;
use super::filter::filter_candidates;
use super::run::{Solution, SolveRun};
use super::scoring::{best_guess, rank_guesses};
use crate::core::{Hint, Word, WordleError};
use crate::wordlists::WordLists;
use std::borrow::Cow;

/// Main Wordle solver
///
/// Pairs the caller's word lists with a configuration. Each call is a
/// self-contained computation; the solver keeps no state between calls.
pub struct Solver<'a> {
    lists: &'a WordLists,
    config: SolverConfig,
}

impl<'a> Solver<'a> {
    #[must_use]
    pub const fn new(lists: &'a WordLists, config: SolverConfig) -> Self {
        Self { lists, config }
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    #[must_use]
    pub const fn lists(&self) -> &'a WordLists {
        self.lists
    }

    /// Targets consistent with every hint, in list order
    #[must_use]
    pub fn candidates(&self, hints: &[Hint]) -> Vec<Word> {
        filter_candidates(hints, self.lists.targets())
    }

    /// Words allowed as the next guess
    ///
    /// In hard mode a guess must itself be consistent with every hint.
    #[must_use]
    pub fn guess_pool(&self, hints: &[Hint]) -> Cow<'a, [Word]> {
        if self.config.hard_mode {
            Cow::Owned(filter_candidates(hints, self.lists.guesses()))
        } else {
            Cow::Borrowed(self.lists.guesses())
        }
    }

    /// Get the best next guess given the hints seen so far
    ///
    /// With no hints the configured opening is returned without a search.
    ///
    /// # Errors
    ///
    /// Returns `WordleError::Exhausted` if no target matches the hints.
    ///
    /// # Examples
    /// ```
    /// use wordler::core::{Hint, Word};
    /// use wordler::solver::{Solver, SolverConfig};
    /// use wordler::wordlists::WordLists;
    ///
    /// let targets = ["apple", "angle", "ankle", "amble"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let lists = WordLists::targets_only(targets);
    /// let solver = Solver::new(&lists, SolverConfig::default());
    ///
    /// assert_eq!(solver.next_guess(&[]).unwrap().as_str(), "raise");
    ///
    /// let hints = [Hint::parse("raise", ".y..g").unwrap()];
    /// let guess = solver.next_guess(&hints).unwrap();
    /// assert!(lists.guesses().contains(&guess));
    /// ```
    pub fn next_guess(&self, hints: &[Hint]) -> Result<Word, WordleError> {
        if hints.is_empty()
            && let Some(opening) = self.config.opening
        {
            return Ok(opening);
        }

        let candidates = self.candidates(hints);
        best_guess(&candidates, &self.guess_pool(hints))
    }

    /// The `count` best guesses with their scores, for display
    #[must_use]
    pub fn top_guesses(&self, hints: &[Hint], count: usize) -> Vec<(Word, u64)> {
        let candidates = self.candidates(hints);
        if candidates.len() <= 2 {
            return Vec::new();
        }
        rank_guesses(&candidates, &self.guess_pool(hints), count)
    }

    /// Begin a self-play run against `target`
    #[must_use]
    pub fn start(&self, target: Word, known_hints: &[Hint]) -> SolveRun<'a> {
        SolveRun::new(self.lists, self.config, target, known_hints)
    }

    /// Solve for a known target from scratch
    ///
    /// # Errors
    ///
    /// `Exhausted` if the target is not reachable from the word lists,
    /// `NotFound` if the round budget runs out.
    pub fn solve(&self, target: Word) -> Result<Solution, WordleError> {
        self.start(target, &[]).finish()
    }
}

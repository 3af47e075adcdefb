//! Self-play solve loop
//!
//! A `SolveRun` plays against a known target one round at a time, moving from
//! `Guessing` to either `Solved` or `Failed`.

use super::config::SolverConfig;
use super::filter::{filter_candidates, retain_matching};
use super::scoring::best_guess;
use crate::core::{Hint, Word, WordleError};
use crate::wordlists::WordLists;
use std::borrow::Cow;

/// A solved puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub target: Word,
    /// Guesses used, including the winning one
    pub guesses: u32,
    /// Every guess played with its hint, ending in the all-green one
    pub history: Vec<Hint>,
}

/// Where a solve attempt stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveState {
    Guessing,
    Solved(Solution),
    Failed(WordleError),
}

impl SolveState {
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        !matches!(self, Self::Guessing)
    }
}

/// One solve attempt against a known target
pub struct SolveRun<'a> {
    config: SolverConfig,
    target: Word,
    candidates: Vec<Word>,
    // Only copied when hard mode has to narrow it
    guess_pool: Cow<'a, [Word]>,
    round: u32,
    use_opening: bool,
    history: Vec<Hint>,
    state: SolveState,
}

impl<'a> SolveRun<'a> {
    /// Start a run, narrowing the word lists by any hints already known
    ///
    /// The fixed opening is only used when no hints are known up front.
    #[must_use]
    pub fn new(
        lists: &'a WordLists,
        config: SolverConfig,
        target: Word,
        known_hints: &[Hint],
    ) -> Self {
        let candidates = filter_candidates(known_hints, lists.targets());
        let guess_pool = if config.hard_mode {
            Cow::Owned(filter_candidates(known_hints, lists.guesses()))
        } else {
            Cow::Borrowed(lists.guesses())
        };
        let state = if candidates.is_empty() {
            SolveState::Failed(WordleError::Exhausted)
        } else {
            SolveState::Guessing
        };

        Self {
            config,
            target,
            candidates,
            guess_pool,
            round: 1,
            use_opening: known_hints.is_empty(),
            history: Vec::new(),
            state,
        }
    }

    /// Play one round, returning the new state
    ///
    /// Calling this once the run has finished leaves the state unchanged.
    pub fn advance(&mut self) -> &SolveState {
        if !self.state.is_finished() {
            self.state = self.play_round();
        }
        &self.state
    }

    /// Play rounds until the run finishes
    ///
    /// # Errors
    ///
    /// `Exhausted` if the candidates run out, `NotFound` if the round budget
    /// does.
    pub fn finish(mut self) -> Result<Solution, WordleError> {
        loop {
            match self.advance() {
                SolveState::Guessing => {}
                SolveState::Solved(solution) => return Ok(solution.clone()),
                SolveState::Failed(error) => return Err(error.clone()),
            }
        }
    }

    fn play_round(&mut self) -> SolveState {
        let guess = match self.choose_guess() {
            Ok(guess) => guess,
            Err(error) => return SolveState::Failed(error),
        };

        let hint = Hint::derive(&self.target, &guess);
        self.history.push(hint);

        if guess == self.target {
            return SolveState::Solved(Solution {
                target: self.target,
                guesses: self.round,
                history: self.history.clone(),
            });
        }

        retain_matching(&hint, &mut self.candidates);
        self.candidates.retain(|word| *word != guess);
        if self.config.hard_mode {
            retain_matching(&hint, self.guess_pool.to_mut());
        }

        if self.candidates.is_empty() {
            return SolveState::Failed(WordleError::Exhausted);
        }

        self.round += 1;
        if self.round > self.config.max_rounds() {
            return SolveState::Failed(WordleError::NotFound {
                target: self.target.to_string(),
                rounds: self.config.max_rounds(),
            });
        }

        SolveState::Guessing
    }

    fn choose_guess(&self) -> Result<Word, WordleError> {
        if let [only] = self.candidates.as_slice() {
            return Ok(*only);
        }
        if self.round == 1
            && self.use_opening
            && let Some(opening) = self.config.opening
        {
            return Ok(opening);
        }
        best_guess(&self.candidates, &self.guess_pool)
    }

    #[must_use]
    pub const fn state(&self) -> &SolveState {
        &self.state
    }

    /// The round about to be played (1-based)
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub fn guess_pool(&self) -> &[Word] {
        &self.guess_pool
    }

    /// Guesses played so far with their hints
    #[must_use]
    pub fn history(&self) -> &[Hint] {
        &self.history
    }
}

//! Solver configuration

use crate::core::Word;

/// Number of guesses allowed in a normal game
pub const MAX_GUESSES: u32 = 6;

/// Round budget in hard mode, where six guesses are not always enough
pub const HARD_MODE_MAX_GUESSES: u32 = 99;

/// Word the solver opens with unless told otherwise
///
/// The scorer picks RAISE anyway from the standard lists; fixing it skips the
/// most expensive search of the game.
pub const DEFAULT_OPENING: &str = "raise";

/// Options for a solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Fixed first guess, or `None` to search for it
    pub opening: Option<Word>,
    /// Later guesses must be consistent with every earlier hint
    pub hard_mode: bool,
}

impl SolverConfig {
    #[must_use]
    pub const fn new(opening: Option<Word>, hard_mode: bool) -> Self {
        Self { opening, hard_mode }
    }

    /// How many rounds a solve may take before giving up
    #[must_use]
    pub const fn max_rounds(&self) -> u32 {
        if self.hard_mode {
            HARD_MODE_MAX_GUESSES
        } else {
            MAX_GUESSES
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(Word::new(DEFAULT_OPENING).ok(), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_opens_with_raise() {
        let config = SolverConfig::default();
        assert_eq!(config.opening.map(|w| w.to_string()), Some("raise".into()));
        assert!(!config.hard_mode);
        assert_eq!(config.max_rounds(), 6);
    }

    #[test]
    fn hard_mode_extends_round_budget() {
        let config = SolverConfig::new(None, true);
        assert_eq!(config.max_rounds(), HARD_MODE_MAX_GUESSES);
    }
}

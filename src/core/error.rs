//! Error type shared by the word model, the matcher and the solver

use std::fmt;

/// Everything that can go wrong inside the solver core
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordleError {
    /// Input that is not exactly five lowercase ASCII letters
    InvalidWord(String),
    /// Hint pattern that is not five `g`/`y`/`.` symbols
    InvalidHint(String),
    /// No candidate word is consistent with the hints seen so far
    Exhausted,
    /// The solve loop ran out of rounds before finding the target
    NotFound { target: String, rounds: u32 },
}

impl fmt::Display for WordleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(word) => write!(f, "Invalid word: {word}"),
            Self::InvalidHint(hint) => write!(f, "Invalid hint: {hint}"),
            Self::Exhausted => write!(f, "No matching words found."),
            Self::NotFound { target, rounds } => {
                write!(f, "Answer \"{target}\" was not found in {rounds} tries.")
            }
        }
    }
}

impl std::error::Error for WordleError {}

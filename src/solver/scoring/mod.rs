//! Expected-partition guess scoring
//!
//! A guess scores the total number of candidates left over, summed across
//! every candidate as the hypothetical answer. Lower is better.

mod calculator;
mod selector;

pub use calculator::score_guess;
pub use selector::{best_guess, best_scored_guess, rank_guesses};

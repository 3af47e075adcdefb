//! Wordle solving algorithms
//!
//! Candidate filtering, partition scoring of guesses, and the self-play loop
//! that drives them to a solution.

mod config;
mod engine;
pub mod filter;
mod run;
pub mod scoring;

pub use config::{DEFAULT_OPENING, HARD_MODE_MAX_GUESSES, MAX_GUESSES, SolverConfig};
pub use engine::Solver;
pub use filter::{filter_candidates, retain_matching};
pub use run::{Solution, SolveRun, SolveState};
pub use scoring::{best_guess, best_scored_guess, rank_guesses, score_guess};

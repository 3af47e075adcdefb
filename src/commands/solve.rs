//! Word solving command
//!
//! Plays the solver against known targets.

use crate::core::Word;
use crate::solver::{Solution, Solver};
use anyhow::{Context, Result};
use std::time::{Duration, Instant};

/// Result of solving one target
pub struct SolveReport {
    pub solution: Solution,
    pub duration: Duration,
}

/// Solve each target in turn
///
/// # Errors
///
/// Stops at the first target the solver fails on, naming it in the error.
pub fn solve_words(solver: &Solver, targets: &[Word]) -> Result<Vec<SolveReport>> {
    targets
        .iter()
        .map(|&target| {
            let start = Instant::now();
            let solution = solver
                .solve(target)
                .with_context(|| format!("Failed to solve \"{target}\""))?;
            Ok(SolveReport {
                solution,
                duration: start.elapsed(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordleError;
    use crate::solver::SolverConfig;
    use crate::wordlists::WordLists;
    use crate::wordlists::loader::words_from_slice;

    fn lists() -> WordLists {
        WordLists::targets_only(
            words_from_slice(&["irate", "crate", "grate", "slate", "plate", "crane"]).unwrap(),
        )
    }

    #[test]
    fn solve_records_history() {
        let lists = lists();
        let solver = Solver::new(&lists, SolverConfig::default());
        let targets = words_from_slice(&["grate", "crane"]).unwrap();

        let reports = solve_words(&solver, &targets).unwrap();

        assert_eq!(reports.len(), 2);
        for (report, target) in reports.iter().zip(&targets) {
            let solution = &report.solution;
            assert_eq!(solution.target, *target);
            assert_eq!(solution.history[0].guess().as_str(), "raise");
            assert_eq!(solution.history.len() as u32, solution.guesses);
        }
    }

    #[test]
    fn unknown_target_fails_with_context() {
        let lists = lists();
        let solver = Solver::new(&lists, SolverConfig::default());
        let targets = words_from_slice(&["zesty"]).unwrap();

        let Err(error) = solve_words(&solver, &targets) else {
            panic!("zesty is not a target");
        };
        assert!(error.to_string().contains("zesty"));
        assert_eq!(
            error.root_cause().downcast_ref::<WordleError>(),
            Some(&WordleError::Exhausted)
        );
    }
}

//! Solve every target - comprehensive solver evaluation
//!
//! Writes one `word, guesses` line per target, the format read back by the
//! stats command. With the full word lists this takes a long time, so
//! progress is shown on stderr.

use crate::solver::Solver;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::time::{Duration, Instant};

/// Totals from a full run
#[derive(Debug)]
pub struct SolveAllSummary {
    pub total_words: usize,
    pub total_guesses: u64,
    pub duration: Duration,
}

impl SolveAllSummary {
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.total_guesses as f64 / self.total_words as f64
        }
    }
}

/// Solve every target, writing a results line for each to `out`
///
/// # Errors
///
/// Returns an error if a target cannot be solved or `out` cannot be written.
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn solve_all<W: Write>(
    solver: &Solver,
    out: &mut W,
    show_progress: bool,
) -> Result<SolveAllSummary> {
    let targets = solver.lists().targets();
    let start = Instant::now();

    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("progress template is valid")
            .progress_chars("█▓▒░"),
    );

    let mut total_guesses = 0u64;
    for &target in targets {
        pb.set_message(target.to_string());
        let solution = solver
            .solve(target)
            .with_context(|| format!("Failed to solve \"{target}\""))?;

        writeln!(out, "{}, {}", solution.target, solution.guesses)?;
        out.flush()?;

        total_guesses += u64::from(solution.guesses);
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(SolveAllSummary {
        total_words: targets.len(),
        total_guesses,
        duration: start.elapsed(),
    })
}

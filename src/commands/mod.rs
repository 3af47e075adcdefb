//! Command implementations
//!
//! Each command turns parsed command-line input into calls on the solver and
//! returns a result value for the `output` module to print.

pub mod guess;
pub mod inspect;
pub mod play;
pub mod solve;
pub mod solve_all;
pub mod stats;

pub use guess::{GuessResult, suggest_guess};
pub use inspect::{CheckResult, check_words, derive_hint, filter_targets};
pub use play::{PlayOutcome, play_game, random_target};
pub use solve::{SolveReport, solve_words};
pub use solve_all::{SolveAllSummary, solve_all};
pub use stats::{ResultsStats, parse_results, read_results};

use crate::core::{Hint, Word};
use anyhow::{Result, bail};

/// Parse a word typed by the user, ignoring case and surrounding whitespace
///
/// # Errors
///
/// Returns an error unless the input is five letters.
pub fn parse_word(text: &str) -> Result<Word> {
    Ok(Word::new(&text.trim().to_ascii_lowercase())?)
}

/// Parse hints given as consecutive `word hint` argument pairs
///
/// # Errors
///
/// Returns an error for an odd number of arguments or a malformed pair.
///
/// # Examples
/// ```
/// use wordler::commands::parse_hints;
///
/// let args = ["raise", "y.gy.", "thumb", "yg..."].map(String::from);
/// let hints = parse_hints(&args).unwrap();
/// assert_eq!(hints.len(), 2);
/// assert!(parse_hints(&args[..3]).is_err());
/// ```
pub fn parse_hints(args: &[String]) -> Result<Vec<Hint>> {
    if args.len() % 2 != 0 {
        bail!("An even number of arguments is required.");
    }

    args.chunks_exact(2)
        .map(|pair| -> Result<Hint> { Ok(Hint::new(parse_word(&pair[0])?, pair[1].parse()?)) })
        .collect()
}

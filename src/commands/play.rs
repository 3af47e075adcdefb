//! Play a game against a hidden target
//!
//! The player types guesses; each wrong guess is answered with its hint.
//! Guesses must come from the guess list, and in hard mode must also agree
//! with every hint shown so far.

use crate::core::{Hint, Word};
use crate::output::formatters::colored_hint;
use crate::solver::MAX_GUESSES;
use crate::wordlists::WordLists;
use anyhow::Result;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::io::{BufRead, Write};

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Found the answer in this many guesses
    Solved(u32),
    /// Used every guess without finding it
    OutOfGuesses,
    /// Input ended before the game did
    GaveUp,
}

/// Pick a random answer from the target list
#[must_use]
pub fn random_target(lists: &WordLists) -> Option<Word> {
    lists.targets().choose(&mut rand::rng()).copied()
}

/// Run one game, reading guesses from `input` and writing to `output`
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_game<R: BufRead, W: Write>(
    lists: &WordLists,
    answer: Word,
    hard_mode: bool,
    verbose: bool,
    mut input: R,
    output: &mut W,
) -> Result<PlayOutcome> {
    let mut allowed: FxHashSet<Word> = lists.guesses().iter().copied().collect();

    for turn in 1..=MAX_GUESSES {
        let Some(guess) = read_guess(&mut input, output, turn, &allowed, verbose)? else {
            return Ok(PlayOutcome::GaveUp);
        };

        if guess == answer {
            if verbose {
                writeln!(
                    output,
                    "Correct! Answer \"{answer}\" was found in {turn} tries."
                )?;
            }
            return Ok(PlayOutcome::Solved(turn));
        }

        let hint = Hint::derive(&answer, &guess);
        if verbose {
            writeln!(output, "          {}  {}", hint.feedback(), colored_hint(&hint))?;
        } else {
            writeln!(output, "{}", hint.feedback())?;
        }
        if hard_mode {
            allowed.retain(|word| hint.matches(word));
        }
    }

    writeln!(
        output,
        "Answer \"{answer}\" was not found in {MAX_GUESSES} tries."
    )?;
    Ok(PlayOutcome::OutOfGuesses)
}

/// Prompt until a permitted guess is entered; `None` at end of input
fn read_guess<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    turn: u32,
    allowed: &FxHashSet<Word>,
    verbose: bool,
) -> Result<Option<Word>> {
    loop {
        if verbose {
            write!(output, "Guess #{turn}: ")?;
            output.flush()?;
        }

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match Word::new(&line.trim().to_ascii_lowercase()) {
            Ok(word) if allowed.contains(&word) => return Ok(Some(word)),
            _ => writeln!(output, "Invalid guess - try again")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn lists() -> WordLists {
        WordLists::new(
            words_from_slice(&["apple", "angle", "ankle", "crane"]).unwrap(),
            words_from_slice(&["plank", "gnome"]).unwrap(),
        )
    }

    fn play(input: &str, hard_mode: bool) -> (PlayOutcome, String) {
        let lists = lists();
        let answer = Word::new("angle").unwrap();
        let mut output = Vec::new();
        let outcome =
            play_game(&lists, answer, hard_mode, false, input.as_bytes(), &mut output).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn solved_after_hints() {
        let (outcome, output) = play("apple\nangle\n", false);

        assert_eq!(outcome, PlayOutcome::Solved(2));
        assert_eq!(output, "g..gg\n");
    }

    #[test]
    fn invalid_guesses_reprompt() {
        let (outcome, output) = play("zzzzz\nappl\nANGLE\n", false);

        assert_eq!(outcome, PlayOutcome::Solved(1));
        assert_eq!(output.matches("Invalid guess").count(), 2);
    }

    #[test]
    fn hard_mode_rejects_guess_ignoring_hints() {
        // After APPLE (g..gg), CRANE ignores the green A
        let (outcome, output) = play("apple\ncrane\nankle\nangle\n", true);

        assert_eq!(outcome, PlayOutcome::Solved(3));
        assert_eq!(output, "g..gg\nInvalid guess - try again\ngg.gg\n");
    }

    #[test]
    fn end_of_input_gives_up() {
        let (outcome, _) = play("apple\n", false);
        assert_eq!(outcome, PlayOutcome::GaveUp);
    }

    #[test]
    fn six_wrong_guesses_lose() {
        let (outcome, output) = play("apple\nankle\ncrane\nplank\ngnome\napple\n", false);

        assert_eq!(outcome, PlayOutcome::OutOfGuesses);
        assert!(output.ends_with("Answer \"angle\" was not found in 6 tries.\n"));
    }

    #[test]
    fn random_target_from_list() {
        let lists = lists();
        let target = random_target(&lists).unwrap();
        assert!(lists.targets().contains(&target));
        assert!(random_target(&WordLists::default()).is_none());
    }
}

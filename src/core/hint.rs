//! Wordle hints: a guess word paired with its colored feedback
//!
//! Feedback is written the way the game reports it, one symbol per letter:
//! - `g` = Green (letter in the correct position)
//! - `y` = Yellow (letter elsewhere in the word)
//! - `.` = Grey (no further copies of the letter)
//!
//! Duplicate letters follow the game's rules: greens are allocated first, then
//! yellows from left to right, one per unmatched copy in the target.

use super::{WORD_LEN, Word, WordleError};
use std::fmt;
use std::str::FromStr;

/// Outcome for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HintSymbol {
    Grey,
    Yellow,
    Green,
}

impl HintSymbol {
    /// Parse one feedback character
    ///
    /// Accepts `g`/`G`/🟩, `y`/`Y`/🟨 and `.`/`-`/`_`/⬜.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'g' | 'G' | '🟩' => Some(Self::Green),
            'y' | 'Y' | '🟨' => Some(Self::Yellow),
            '.' | '-' | '_' | '⬜' => Some(Self::Grey),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Green => 'g',
            Self::Yellow => 'y',
            Self::Grey => '.',
        }
    }

    const fn digit(self) -> u8 {
        match self {
            Self::Grey => 0,
            Self::Yellow => 1,
            Self::Green => 2,
        }
    }
}

/// The five symbols reported for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([HintSymbol; WORD_LEN]);

impl Feedback {
    /// All greens
    pub const SOLVED: Self = Self([HintSymbol::Green; WORD_LEN]);

    #[must_use]
    pub const fn new(symbols: [HintSymbol; WORD_LEN]) -> Self {
        Self(symbols)
    }

    /// Parse feedback such as `"y.gy."`
    ///
    /// # Errors
    /// Returns `WordleError::InvalidHint` unless the input is exactly five
    /// feedback symbols.
    ///
    /// # Examples
    /// ```
    /// use wordler::core::Feedback;
    ///
    /// let plain = Feedback::parse("gy.gy").unwrap();
    /// let emoji = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(plain, emoji);
    /// assert!(Feedback::parse("gyxgy").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, WordleError> {
        let invalid = || WordleError::InvalidHint(text.to_string());
        let mut symbols = [HintSymbol::Grey; WORD_LEN];
        let mut chars = text.chars();

        for slot in &mut symbols {
            let ch = chars.next().ok_or_else(invalid)?;
            *slot = HintSymbol::from_char(ch).ok_or_else(invalid)?;
        }
        if chars.next().is_some() {
            return Err(invalid());
        }

        Ok(Self(symbols))
    }

    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[HintSymbol; WORD_LEN] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Base-3 code of the feedback (0-242), position i weighted by 3^i
    #[must_use]
    pub fn value(&self) -> u8 {
        self.0
            .iter()
            .rev()
            .fold(0, |acc, symbol| acc * 3 + symbol.digit())
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0
            .iter()
            .try_for_each(|symbol| write!(f, "{}", symbol.to_char()))
    }
}

impl FromStr for Feedback {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A guess word together with the feedback it received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hint {
    guess: Word,
    feedback: Feedback,
}

impl Hint {
    #[must_use]
    pub const fn new(guess: Word, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }

    /// Build a hint from user-supplied text, e.g. `("raise", "y.gy.")`
    ///
    /// # Errors
    /// Returns `InvalidWord` or `InvalidHint` for malformed input.
    pub fn parse(guess: &str, feedback: &str) -> Result<Self, WordleError> {
        Ok(Self::new(Word::new(guess)?, Feedback::parse(feedback)?))
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Compute the hint produced by guessing `guess` when the answer is `target`
    ///
    /// # Examples
    /// ```
    /// use wordler::core::{Hint, Word};
    ///
    /// let target = Word::new("speed").unwrap();
    /// let guess = Word::new("sheep").unwrap();
    /// let hint = Hint::derive(&target, &guess);
    /// assert_eq!(hint.feedback().to_string(), "g.ggy");
    /// ```
    #[must_use]
    pub fn derive(target: &Word, guess: &Word) -> Self {
        let target_letters = target.letters();
        let guess_letters = guess.letters();
        let mut symbols = [HintSymbol::Grey; WORD_LEN];
        let mut consumed = [false; WORD_LEN];

        // Greens first, so duplicates go to the exact matches
        for (i, symbol) in symbols.iter_mut().enumerate() {
            if guess_letters[i] == target_letters[i] {
                *symbol = HintSymbol::Green;
                consumed[i] = true;
            }
        }

        // Yellows, left to right, one per unconsumed target letter
        for (i, symbol) in symbols.iter_mut().enumerate() {
            if *symbol == HintSymbol::Green {
                continue;
            }
            let letter = guess_letters[i];
            if let Some(j) =
                (0..WORD_LEN).find(|&j| !consumed[j] && target_letters[j] == letter)
            {
                *symbol = HintSymbol::Yellow;
                consumed[j] = true;
            }
        }

        Self::new(*guess, Feedback(symbols))
    }

    /// Check whether `candidate` could be the answer given this hint
    ///
    /// True exactly when `Hint::derive(candidate, self.guess())` equals this
    /// hint, but computed in three claim-marking passes without building the
    /// derived hint.
    ///
    /// # Examples
    /// ```
    /// use wordler::core::{Hint, Word};
    ///
    /// let hint = Hint::parse("raise", ".y..g").unwrap();
    /// assert!(hint.matches(&Word::new("amaze").unwrap()));
    /// assert!(!hint.matches(&Word::new("geese").unwrap()));
    /// ```
    #[must_use]
    pub fn matches(&self, candidate: &Word) -> bool {
        let guess = self.guess.letters();
        let word = candidate.letters();
        let symbols = &self.feedback.0;
        let mut claimed = [false; WORD_LEN];

        // Green pass
        for i in 0..WORD_LEN {
            let same = word[i] == guess[i];
            match symbols[i] {
                HintSymbol::Green if same => claimed[i] = true,
                HintSymbol::Green => return false,
                // The game would have shown this square green.
                _ if same => return false,
                _ => {}
            }
        }

        // Yellow pass
        for i in 0..WORD_LEN {
            if symbols[i] != HintSymbol::Yellow {
                continue;
            }
            let letter = guess[i];
            match (0..WORD_LEN).find(|&j| !claimed[j] && word[j] == letter) {
                Some(j) => claimed[j] = true,
                None => return false,
            }
        }

        // Grey pass
        for i in 0..WORD_LEN {
            if symbols[i] != HintSymbol::Grey {
                continue;
            }
            let letter = guess[i];
            if (0..WORD_LEN).any(|j| !claimed[j] && word[j] == letter) {
                return false;
            }
            // Yellows are handed out left to right, so a later copy of a grey
            // letter can never be yellow.
            if (i + 1..WORD_LEN).any(|j| symbols[j] == HintSymbol::Yellow && guess[j] == letter) {
                return false;
            }
        }

        true
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.guess, self.feedback)
    }
}

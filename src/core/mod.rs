//! Core domain types for Wordle
//!
//! Words, hints and the matcher that relates them. Everything here is a plain
//! value type with no external dependencies.

mod error;
mod hint;
mod word;

pub use error::WordleError;
pub use hint::{Feedback, Hint, HintSymbol};
pub use word::{WORD_LEN, Word};

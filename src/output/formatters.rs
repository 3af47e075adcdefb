//! Formatting utilities for terminal output

use crate::core::{Feedback, Hint, HintSymbol};
use colored::Colorize;

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback
        .symbols()
        .iter()
        .map(|symbol| match symbol {
            HintSymbol::Green => '🟩',
            HintSymbol::Yellow => '🟨',
            HintSymbol::Grey => '⬜',
        })
        .collect()
}

/// Render a hint as colored tiles, one uppercase letter per tile
#[must_use]
pub fn colored_hint(hint: &Hint) -> String {
    hint.guess()
        .as_str()
        .chars()
        .zip(hint.feedback().symbols())
        .map(|(letter, symbol)| {
            let tile = format!(" {} ", letter.to_ascii_uppercase()).bold();
            let tile = match symbol {
                HintSymbol::Green => tile.black().on_green(),
                HintSymbol::Yellow => tile.black().on_yellow(),
                HintSymbol::Grey => tile.white().on_bright_black(),
            };
            tile.to_string()
        })
        .collect()
}

/// Create a histogram bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

//! Display functions for command results

use super::formatters::{colored_hint, create_progress_bar, feedback_to_emoji};
use crate::commands::{CheckResult, GuessResult, ResultsStats, SolveAllSummary, SolveReport};
use crate::core::{Hint, Word};
use colored::Colorize;

/// Print the suggested next guess
pub fn print_guess_result(result: &GuessResult, verbose: bool) {
    if !verbose {
        println!("{}", result.guess);
        return;
    }

    if result.opening {
        println!("First guess is \"{}\"", result.guess.to_string().bright_yellow().bold());
        return;
    }

    println!("Candidates: {}", result.candidates);
    if !result.ranking.is_empty() {
        println!("\n{}", "Top guesses:".bright_cyan().bold());
        for (rank, (word, score)) in result.ranking.iter().enumerate() {
            println!("  {:>2}. {word}  {score:>8}", rank + 1);
        }
        println!();
    }
    println!("Time: {:.02} seconds", result.duration.as_secs_f64());
    println!("Best guess is \"{}\"", result.guess.to_string().bright_yellow().bold());
}

/// Print the guesses made while solving one target
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    let solution = &report.solution;

    if !verbose {
        for hint in &solution.history {
            println!("{}", hint.guess());
        }
        println!("{}", solution.guesses);
        return;
    }

    println!("Target: \"{}\"", solution.target.to_string().bright_yellow().bold());
    for (i, hint) in solution.history.iter().enumerate() {
        println!(
            "Guess #{} is \"{}\"  {}",
            i + 1,
            hint.guess(),
            colored_hint(hint)
        );
    }
    println!("Time: {:.02} seconds", report.duration.as_secs_f64());
    println!(
        "{}",
        format!(
            "Answer: \"{}\" in {} tries",
            solution.target, solution.guesses
        )
        .green()
        .bold()
    );
}

/// Print totals after solving every target
///
/// Goes to stderr so stdout stays a clean results file.
pub fn print_solve_all_summary(summary: &SolveAllSummary) {
    eprintln!(
        "Solved {} words, {} guesses in total ({:.3} average) in {:.2}s",
        summary.total_words,
        summary.total_guesses,
        summary.average_guesses(),
        summary.duration.as_secs_f64()
    );
}

/// Print statistics for a results file
pub fn print_stats(stats: &ResultsStats) {
    println!("Number of results: {}", stats.count);
    println!("Min guesses: {} for \"{}\"", stats.min.1, stats.min.0);
    println!("Max guesses: {} for e.g. \"{}\"", stats.max.1, stats.max.0);
    println!(
        "Mean guesses: {}",
        format!("{:.2}", stats.mean).bright_yellow().bold()
    );
    println!("Histogram stats:");

    let peak = stats.histogram.iter().copied().max().unwrap_or(0);
    for (guesses, &count) in stats.histogram.iter().enumerate() {
        let bar = create_progress_bar(count as f64, peak as f64, 40);
        println!("{guesses}, {count}  {}", bar.green());
    }
}

/// Print a derived hint
pub fn print_hint(hint: &Hint, verbose: bool) {
    if verbose {
        println!("{hint}  {}  {}", feedback_to_emoji(hint.feedback()), colored_hint(hint));
    } else {
        println!("{hint}");
    }
}

/// Print which words match a hint
pub fn print_check_result(result: &CheckResult, verbose: bool) {
    if verbose {
        println!("hint: {}", colored_hint(&result.hint));
    }
    for (word, matched) in &result.verdicts {
        let verdict = if *matched {
            "true".green()
        } else {
            "false".red()
        };
        println!("{word} {verdict}");
    }
}

/// Print the targets left by a set of hints
pub fn print_matches(matches: &[Word], verbose: bool) {
    if verbose {
        println!("{} matches", matches.len());
    } else {
        println!("{}", matches.len());
    }
    let words: Vec<String> = matches.iter().map(ToString::to_string).collect();
    println!("{}", words.join(" "));
}

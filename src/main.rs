//! Wordler - CLI
//!
//! Given a series of hints, compute which word to guess next.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use wordler::{
    commands::{
        ResultsStats, check_words, derive_hint, filter_targets, parse_hints, parse_word,
        play_game, random_target, read_results, solve_all, solve_words, suggest_guess,
    },
    core::{Hint, Word},
    output::{
        print_check_result, print_guess_result, print_hint, print_matches,
        print_solve_all_summary, print_solve_report, print_stats,
    },
    solver::{Solver, SolverConfig},
    wordlists::{
        WordLists, embedded,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordler",
    about = "Wordle solver - Given a series of hints, compute which word to guess next",
    after_help = "Example: wordler raise y.gy. thumb yg...\n\n\
                  Each hint is a pair of args: the word guessed, then the Wordle hint\n\
                  ('g' for green, 'y' for yellow, '.' for grey).",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Initial guess word (may be empty to compute it, which is slow)
    #[arg(short, long, global = true, default_value = "raise")]
    init: String,

    /// Hard mode - guesses must match hints
    #[arg(short = 'd', long, global = true)]
    hard: bool,

    /// Display less output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// File of possible answer words (built-in list if omitted)
    #[arg(long, global = true)]
    targets: Option<PathBuf>,

    /// File of extra allowed guess words (built-in list if omitted)
    #[arg(long, global = true)]
    guesses: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the next guess from known hints (default)
    Guess {
        /// Word/hint pairs, e.g. `raise y.gy.`
        hints: Vec<String>,

        /// Also list this many of the best-scoring guesses
        #[arg(short, long, default_value = "0")]
        top: usize,
    },

    /// Solve for the given answers
    Solve {
        /// Target words
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Solve all possible answers, printing `word, guesses` lines - slow!
    All,

    /// Display stats from a results file
    Stats {
        /// Output from `all` (stdin if omitted)
        file: Option<PathBuf>,
    },

    /// Play a game
    Play,

    /// Show the hint a guess gets against a target
    Hint { target: String, guess: String },

    /// Match words against a hint
    Check {
        guess: String,
        hint: String,
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// List all targets matching the given hints
    Filter {
        /// Word/hint pairs
        hints: Vec<String>,
    },

    /// Bare word/hint pairs, same as `guess`
    #[command(external_subcommand)]
    Pairs(Vec<String>),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let verbose = !cli.quiet;
    let config = solver_config(&cli)?;
    let Cli {
        command,
        targets,
        guesses,
        ..
    } = cli;
    let load_lists = || load_word_lists(targets.as_deref(), guesses.as_deref());

    match command.unwrap_or(Commands::Pairs(Vec::new())) {
        Commands::Guess { hints, top } => {
            run_guess(&hints, top, load_lists, config, verbose)?;
        }
        Commands::Pairs(hints) => {
            run_guess(&hints, 0, load_lists, config, verbose)?;
        }
        Commands::Solve { words } => {
            let targets = parse_words(&words)?;
            let lists = load_lists()?;
            for report in solve_words(&Solver::new(&lists, config), &targets)? {
                print_solve_report(&report, verbose);
            }
        }
        Commands::All => {
            let lists = load_lists()?;
            let solver = Solver::new(&lists, config);
            let summary = solve_all(&solver, &mut io::stdout().lock(), verbose)?;
            if verbose {
                print_solve_all_summary(&summary);
            }
        }
        Commands::Stats { file } => {
            let results = read_results(file.as_deref())?;
            let stats = ResultsStats::from_results(&results).context("No results to summarize")?;
            print_stats(&stats);
        }
        Commands::Play => {
            let lists = load_lists()?;
            let answer = random_target(&lists).context("No target words to play with")?;
            play_game(
                &lists,
                answer,
                config.hard_mode,
                verbose,
                io::stdin().lock(),
                &mut io::stdout(),
            )?;
        }
        Commands::Hint { target, guess } => {
            let hint = derive_hint(parse_word(&target)?, parse_word(&guess)?);
            print_hint(&hint, verbose);
        }
        Commands::Check { guess, hint, words } => {
            let hint = Hint::new(parse_word(&guess)?, hint.parse()?);
            print_check_result(&check_words(hint, &parse_words(&words)?), verbose);
        }
        Commands::Filter { hints } => {
            let hints = parse_hints(&hints)?;
            let lists = load_lists()?;
            print_matches(&filter_targets(&lists, &hints), verbose);
        }
    }

    Ok(())
}

fn solver_config(cli: &Cli) -> Result<SolverConfig> {
    let opening = if cli.init.is_empty() {
        None
    } else {
        Some(parse_word(&cli.init).context("Bad initial guess")?)
    };
    Ok(SolverConfig::new(opening, cli.hard))
}

fn run_guess(
    hints: &[String],
    top: usize,
    load_lists: impl FnOnce() -> Result<WordLists>,
    config: SolverConfig,
    verbose: bool,
) -> Result<()> {
    let hints = parse_hints(hints)?;
    let lists = load_lists()?;
    let result = suggest_guess(&Solver::new(&lists, config), &hints, top)?;
    print_guess_result(&result, verbose);
    Ok(())
}

/// Built-in lists, with either half replaced by a file when one is given
fn load_word_lists(targets: Option<&Path>, guesses: Option<&Path>) -> Result<WordLists> {
    let targets = match targets {
        Some(path) => load_from_file(path)?,
        None => words_from_slice(embedded::TARGETS)?,
    };
    let extra = match guesses {
        Some(path) => load_from_file(path)?,
        None => words_from_slice(embedded::EXTRA_GUESSES)?,
    };
    if targets.is_empty() {
        bail!("The target word list is empty");
    }
    Ok(WordLists::new(targets, extra))
}

fn parse_words(words: &[String]) -> Result<Vec<Word>> {
    words.iter().map(|w| parse_word(w)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_before_subcommand() {
        let cli = parse(&["wordler", "-d", "solve", "angle"]);
        assert!(cli.hard);
        assert!(matches!(cli.command, Some(Commands::Solve { words }) if words == ["angle"]));

        let cli = parse(&["wordler", "-q", "hint", "angle", "apple"]);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Some(Commands::Hint { target, guess }) if target == "angle" && guess == "apple"
        ));

        let cli = parse(&["wordler", "-d", "play"]);
        assert!(cli.hard);
        assert!(matches!(cli.command, Some(Commands::Play)));
    }

    #[test]
    fn list_paths_before_subcommand() {
        let cli = parse(&[
            "wordler", "--targets", "t.txt", "--guesses", "g.txt", "solve", "angle",
        ]);
        assert_eq!(cli.targets.as_deref(), Some(Path::new("t.txt")));
        assert_eq!(cli.guesses.as_deref(), Some(Path::new("g.txt")));
        assert!(matches!(cli.command, Some(Commands::Solve { words }) if words == ["angle"]));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["wordler", "solve", "angle", "--targets", "t.txt"]);
        assert_eq!(cli.targets.as_deref(), Some(Path::new("t.txt")));
        assert!(matches!(cli.command, Some(Commands::Solve { words }) if words == ["angle"]));
    }

    #[test]
    fn bare_pairs_become_guess_hints() {
        let cli = parse(&["wordler", "raise", "y.gy."]);
        assert!(matches!(cli.command, Some(Commands::Pairs(args)) if args == ["raise", "y.gy."]));

        let cli = parse(&["wordler", "-d", "-i", "crane", "raise", "-y--g"]);
        assert!(cli.hard);
        assert_eq!(cli.init, "crane");
        assert!(matches!(cli.command, Some(Commands::Pairs(args)) if args == ["raise", "-y--g"]));
    }

    #[test]
    fn no_arguments_asks_for_opening() {
        let cli = parse(&["wordler"]);
        assert!(cli.command.is_none());
        assert!(!cli.hard);
        assert_eq!(cli.init, "raise");
    }

    #[test]
    fn guess_subcommand_with_trailing_flags() {
        let cli = parse(&["wordler", "guess", "raise", "y.gy.", "-q", "--top", "3"]);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Some(Commands::Guess { hints, top: 3 }) if hints == ["raise", "y.gy."]
        ));

        let cli = parse(&["wordler", "guess", "--", "raise", "-----"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Guess { hints, top: 0 }) if hints == ["raise", "-----"]
        ));
    }

    #[test]
    fn builtin_lists_load_without_files() {
        let lists = load_word_lists(None, None).unwrap();
        assert_eq!(lists.targets().len(), embedded::TARGETS.len());
        assert!(lists.is_guess(&Word::new("raise").unwrap()));
    }

    #[test]
    fn missing_list_file_is_an_error() {
        let error = load_word_lists(Some(Path::new("/nonexistent/targets.txt")), None).unwrap_err();
        assert!(error.to_string().contains("/nonexistent/targets.txt"));
    }
}

//! Statistics over a results file
//!
//! A results file is the output of the solve-all command: one `word, N` line
//! per target, giving the number of guesses the solver needed.

use crate::core::Word;
use crate::solver::HARD_MODE_MAX_GUESSES;
use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Summary of a set of solve results
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsStats {
    pub count: usize,
    /// Fewest guesses, with the first word that needed them
    pub min: (Word, u32),
    /// Most guesses, with the first word that needed them
    pub max: (Word, u32),
    pub mean: f64,
    /// `histogram[n]` is the number of words solved in `n` guesses, for `0..=max`
    pub histogram: Vec<usize>,
}

impl ResultsStats {
    /// Summarize results, or `None` if there are none
    #[must_use]
    pub fn from_results(results: &[(Word, u32)]) -> Option<Self> {
        let (&first, rest) = results.split_first()?;

        let (min, max) = rest.iter().fold((first, first), |(min, max), &next| {
            (
                if next.1 < min.1 { next } else { min },
                if next.1 > max.1 { next } else { max },
            )
        });

        let total: u64 = results.iter().map(|(_, n)| u64::from(*n)).sum();
        let mut histogram = vec![0; max.1 as usize + 1];
        for (_, n) in results {
            histogram[*n as usize] += 1;
        }

        Some(Self {
            count: results.len(),
            min,
            max,
            mean: total as f64 / results.len() as f64,
            histogram,
        })
    }
}

/// Parse `word, N` result lines
///
/// Blank lines are skipped; anything else malformed is an error naming the
/// offending line. No solve takes more than `HARD_MODE_MAX_GUESSES` guesses,
/// so larger counts are malformed too.
///
/// # Errors
///
/// Returns an error on read failure or bad data.
///
/// # Examples
/// ```
/// use wordler::commands::parse_results;
///
/// let results = parse_results("atlas, 3\ncrane, 4\n".as_bytes()).unwrap();
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[1].1, 4);
/// ```
pub fn parse_results<R: BufRead>(reader: R) -> Result<Vec<(Word, u32)>> {
    let mut results = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let Some((word, count)) = line.split_once(',') else {
            bail!("Bad results data: \"{line}\"");
        };
        let word =
            Word::new(word.trim()).with_context(|| format!("Bad results data: \"{line}\""))?;
        let count: u32 = count
            .trim()
            .parse()
            .with_context(|| format!("Bad results data: \"{line}\""))?;
        if count > HARD_MODE_MAX_GUESSES {
            bail!("Bad results data: \"{line}\"");
        }
        results.push((word, count));
    }

    Ok(results)
}

/// Read results from a file, or from stdin when no path is given
///
/// # Errors
///
/// Returns an error if the file cannot be opened or holds bad data.
pub fn read_results(path: Option<&Path>) -> Result<Vec<(Word, u32)>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open file {}", path.display()))?;
            parse_results(BufReader::new(file))
        }
        None => parse_results(io::stdin().lock()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(text: &str) -> Vec<(Word, u32)> {
        parse_results(text.as_bytes()).unwrap()
    }

    #[test]
    fn parses_lines() {
        let parsed = results("atlas, 3\ncrane,4\n\n  slate ,  2\n");
        let words: Vec<(&str, u32)> = parsed.iter().map(|(w, n)| (w.as_str(), *n)).collect();
        assert_eq!(words, [("atlas", 3), ("crane", 4), ("slate", 2)]);
    }

    #[test]
    fn rejects_bad_lines() {
        assert!(parse_results("atlas 3\n".as_bytes()).is_err());
        assert!(parse_results("atlas, three\n".as_bytes()).is_err());
        assert!(parse_results("atla, 3\n".as_bytes()).is_err());
        assert!(parse_results("atlas, -1\n".as_bytes()).is_err());

        let error = parse_results("atlas, 3\noops\n".as_bytes()).unwrap_err();
        assert_eq!(error.to_string(), "Bad results data: \"oops\"");
    }

    #[test]
    fn rejects_counts_beyond_any_solve() {
        let parsed = results("atlas, 99\n");
        assert_eq!(ResultsStats::from_results(&parsed).unwrap().histogram.len(), 100);

        let error = parse_results("atlas, 3\ncrane, 4000000000\n".as_bytes()).unwrap_err();
        assert_eq!(error.to_string(), "Bad results data: \"crane, 4000000000\"");
        assert!(parse_results("atlas, 100\n".as_bytes()).is_err());
    }

    #[test]
    fn stats_summarize_results() {
        let parsed = results("atlas, 3\ncrane, 4\nslate, 2\nirate, 4\ngrate, 2\n");
        let stats = ResultsStats::from_results(&parsed).unwrap();

        assert_eq!(stats.count, 5);
        assert_eq!(stats.min, (Word::new("slate").unwrap(), 2));
        assert_eq!(stats.max, (Word::new("crane").unwrap(), 4));
        assert!((stats.mean - 3.0).abs() < 1e-9);
        assert_eq!(stats.histogram, [0, 0, 2, 1, 2]);
    }

    #[test]
    fn stats_single_result() {
        let parsed = results("atlas, 1\n");
        let stats = ResultsStats::from_results(&parsed).unwrap();

        assert_eq!(stats.min, stats.max);
        assert_eq!(stats.histogram, [0, 1]);
    }

    #[test]
    fn stats_empty() {
        assert!(ResultsStats::from_results(&[]).is_none());
    }

    #[test]
    fn read_results_missing_file() {
        assert!(read_results(Some(Path::new("/nonexistent/results.txt"))).is_err());
    }
}

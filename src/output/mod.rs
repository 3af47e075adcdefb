//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_check_result, print_guess_result, print_hint, print_matches, print_solve_all_summary,
    print_solve_report, print_stats,
};

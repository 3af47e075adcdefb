//! Wordler
//!
//! A Wordle solver: given the hints seen so far, pick the guess expected to
//! narrow the remaining answers the most.
//!
//! # Quick Start
//!
//! ```rust
//! use wordler::core::{Hint, Word};
//!
//! let target = Word::new("speed").unwrap();
//! let guess = Word::new("sheep").unwrap();
//!
//! let hint = Hint::derive(&target, &guess);
//! assert_eq!(hint.feedback().to_string(), "g.ggy");
//! assert!(hint.matches(&target));
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

//! Word Scramble
//!
//! Find as many words as possible hidden in an 8-letter root word before the
//! clock runs out. This crate holds the game core: enumerating every word a
//! root can produce, validating guesses and running timed rounds.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{RootWord, word_score};
//! use word_scramble::dictionary::WordListValidator;
//! use word_scramble::enumerate::{CancelToken, collect_possible_words};
//!
//! let root = RootWord::new("drinking").unwrap();
//! let validator = WordListValidator::new("en", ["drink", "grin", "king"]);
//!
//! let possible = collect_possible_words(&root, &validator, "en", &CancelToken::new());
//! assert_eq!(possible.of_length(4), ["grin", "king"]);
//! assert_eq!(word_score(5), 6);
//! ```

// Core domain types
pub mod core;

// Dictionary oracle
pub mod dictionary;

// Candidate enumeration
pub mod enumerate;

// Round state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

//! Core domain types for Word Scramble
//!
//! Pure types with no I/O: the root word, letter multisets and scoring.

mod letters;
mod root_word;
mod score;

pub use letters::{LetterCounts, is_possible};
pub use root_word::{RootWord, WordError};
pub use score::word_score;

/// Number of letters in every root word
pub const ROOT_LEN: usize = 8;

/// Shortest word a player may submit
pub const MIN_WORD_LEN: usize = 3;

/// Longest derivable word
pub const MAX_WORD_LEN: usize = ROOT_LEN;

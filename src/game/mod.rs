//! Game session core
//!
//! Owns everything that belongs to a round: the root word, accepted words,
//! score, timer and the background enumeration of possible answers.

mod error;
mod high_score;
mod session;
mod summary;

pub use error::GuessError;
pub use high_score::{FileHighScore, HighScoreError, HighScoreStore, MemoryHighScore};
pub use session::{GameSession, RESET_COMMAND, Submission, validate_guess};
pub use summary::{AnswerEntry, AnswerGroup, RoundSummary, group_by_length};

use crate::core::word_score;
use crate::dictionary::DEFAULT_LOCALE;

/// Default round length in seconds
pub const DEFAULT_ROUND_SECONDS: u32 = 90;

/// Round lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    NotStarted,
    InProgress,
    Over,
}

/// An accepted guess and the points it earned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsedWord {
    pub word: String,
    pub score: u32,
}

impl UsedWord {
    /// Score `word` by its length
    pub fn new(word: impl Into<String>) -> Self {
        let word = word.into();
        let score = word_score(word.len());
        Self { word, score }
    }
}

/// Per-session settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Length of a round in seconds
    pub round_seconds: u32,
    /// Locale passed to every dictionary lookup
    pub locale: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            round_seconds: DEFAULT_ROUND_SECONDS,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

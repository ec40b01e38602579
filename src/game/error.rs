//! Rejected guesses

use thiserror::Error;

/// Why a guess was not accepted
///
/// Each variant corresponds to one validation rule, checked in declaration
/// order. The `Display` text is the alert message; [`GuessError::title`] is
/// the alert title.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    /// Guess was already accepted this round, or is the root word itself
    #[error("{word} was used already.")]
    Repeated { word: String },

    /// Guess needs letters the root word does not have
    #[error("Word cannot be made from \"{root}\".")]
    Unmakeable { word: String, root: String },

    #[error("Word must be at least three letters long.")]
    TooShort { word: String },

    /// Guess was rejected by the dictionary
    #[error("{word} does not occur in Word Scramble's dictionary")]
    NotReal { word: String },

    /// No round is being played
    #[error("Start a new game to keep playing.")]
    NotInProgress,
}

impl GuessError {
    /// Short alert title naming the failed rule
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Repeated { .. } => "Repeated word",
            Self::Unmakeable { .. } => "Unmakeable",
            Self::TooShort { .. } => "Word too short",
            Self::NotReal { .. } => "Invalid word",
            Self::NotInProgress => "Round over",
        }
    }

    /// Alert message echoing the offending word or root word
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// The normalized guess that failed, when there was one
    #[must_use]
    pub fn word(&self) -> Option<&str> {
        match self {
            Self::Repeated { word }
            | Self::Unmakeable { word, .. }
            | Self::TooShort { word }
            | Self::NotReal { word } => Some(word),
            Self::NotInProgress => None,
        }
    }
}

//! Root word representation
//!
//! A `RootWord` stores the 8-letter word a round is based on together with
//! its letter multiset, so guesses can be checked without re-scanning text.

use super::letters::LetterCounts;
use super::ROOT_LEN;
use std::fmt;
use thiserror::Error;

/// An 8-letter root word with its letter counts
///
/// Immutable once built; every round owns exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RootWord {
    text: String,
    letters: LetterCounts,
}

/// Error type for invalid root words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Root word must be exactly 8 letters, got {0}")]
    InvalidLength(usize),
    #[error("Root word must contain only ASCII letters")]
    NonAscii,
    #[error("Root word contains invalid characters")]
    InvalidCharacters,
}

impl RootWord {
    /// Create a new `RootWord` from a string
    ///
    /// Input is trimmed and lowercased first.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 8
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RootWord;
    ///
    /// let root = RootWord::new("Drinking").unwrap();
    /// assert_eq!(root.text(), "drinking");
    ///
    /// assert!(RootWord::new("short").is_err());
    /// assert!(RootWord::new("drink1ng").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != ROOT_LEN {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letters = LetterCounts::from_word(&text);
        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Letter multiset of the root word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterCounts {
        &self.letters
    }

    /// Check whether `word` can be spelled from this root's letters
    #[inline]
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        self.letters.can_spell(word)
    }
}

impl fmt::Display for RootWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for RootWord {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

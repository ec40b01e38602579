//! Word-list backed validator

use super::{WordValidator, same_language};
use crate::wordlists::{DICTIONARY, WordListError};
use log::debug;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Validator backed by an in-memory set of words for one locale
///
/// Construction pays the whole cost up front; lookups are a hash probe.
#[derive(Debug, Clone)]
pub struct WordListValidator {
    locale: String,
    words: FxHashSet<String>,
}

impl WordListValidator {
    /// Build a validator from any collection of words
    ///
    /// Words are trimmed and lowercased; blank entries are skipped.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{WordListValidator, WordValidator};
    ///
    /// let validator = WordListValidator::new("en", ["Drink", "king"]);
    /// assert!(validator.is_real("drink", "en_US"));
    /// assert!(!validator.is_real("drink", "de"));
    /// ```
    pub fn new<I, S>(locale: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: FxHashSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self {
            locale: locale.into(),
            words,
        }
    }

    /// Validator over the dictionary compiled into the binary
    #[must_use]
    pub fn embedded(locale: impl Into<String>) -> Self {
        Self::new(locale, DICTIONARY.iter().copied())
    }

    /// Load a newline-delimited dictionary file
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Unreadable` if the file cannot be read and
    /// `WordListError::Empty` if it contains no words.
    pub fn load_from_file<P: AsRef<Path>>(
        locale: impl Into<String>,
        path: P,
    ) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| WordListError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;

        let validator = Self::new(locale, content.lines());
        if validator.is_empty() {
            return Err(WordListError::Empty {
                source_name: path.display().to_string(),
            });
        }

        debug!(
            "Loaded {} dictionary words from {}",
            validator.len(),
            path.display()
        );
        Ok(validator)
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordValidator for WordListValidator {
    fn is_real(&self, word: &str, locale: &str) -> bool {
        same_language(&self.locale, locale) && self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_entries() {
        let validator = WordListValidator::new("en", ["  Drink ", "", "KING"]);
        assert_eq!(validator.len(), 2);
        assert!(validator.is_real("drink", "en"));
        assert!(validator.is_real("king", "en"));
    }

    #[test]
    fn lookups_are_exact() {
        let validator = WordListValidator::new("en", ["drink"]);
        assert!(!validator.is_real("drinks", "en"));
        assert!(!validator.is_real("dringk", "en"));
        assert!(!validator.is_real("", "en"));
    }

    #[test]
    fn locale_must_match() {
        let validator = WordListValidator::new("en_GB", ["drink"]);
        assert!(validator.is_real("drink", "en"));
        assert!(validator.is_real("drink", "en-US"));
        assert!(!validator.is_real("drink", "fr"));
    }

    #[test]
    fn deterministic_across_calls() {
        let validator = WordListValidator::new("en", ["ring", "grin"]);
        for _ in 0..100 {
            assert!(validator.is_real("ring", "en"));
            assert!(!validator.is_real("rign", "en"));
        }
    }

    #[test]
    fn embedded_dictionary_has_common_words() {
        let validator = WordListValidator::embedded("en");
        assert!(!validator.is_empty());
        assert!(validator.is_real("drink", "en"));
        assert!(validator.is_real("king", "en"));
        assert!(!validator.is_real("dringk", "en"));
    }

    #[test]
    fn missing_file_is_unreadable() {
        let result = WordListValidator::load_from_file("en", "/definitely/not/here.txt");
        assert!(matches!(result, Err(WordListError::Unreadable { .. })));
    }
}

//! Root word list loading
//!
//! Provides the list a round's root word is drawn from, loaded from a file or
//! from the embedded constants.

use super::{ROOT_WORDS, WordListError};
use crate::core::RootWord;
use log::{debug, warn};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs;
use std::path::Path;

/// Non-empty list of candidate root words
#[derive(Debug, Clone)]
pub struct RootWordList {
    words: Vec<RootWord>,
}

impl RootWordList {
    /// Build a list from newline-delimited text
    ///
    /// Blank lines are ignored and entries that are not 8-letter words are
    /// skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Empty` if no usable root word remains.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::wordlists::loader::RootWordList;
    ///
    /// let list = RootWordList::from_lines("drinking\nshort\n\nkeyboard\n".lines(), "inline").unwrap();
    /// assert_eq!(list.len(), 2);
    /// assert!(RootWordList::from_lines("\n\n".lines(), "inline").is_err());
    /// ```
    pub fn from_lines<'a, I>(lines: I, source_name: &str) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut skipped = 0usize;
        let words: Vec<RootWord> = lines
            .into_iter()
            .filter_map(|line| {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    return None;
                }
                match RootWord::new(trimmed) {
                    Ok(word) => Some(word),
                    Err(e) => {
                        skipped += 1;
                        debug!("Skipping root word {trimmed:?} from {source_name}: {e}");
                        None
                    }
                }
            })
            .collect();

        if skipped > 0 {
            warn!("Skipped {skipped} unusable entries in {source_name}");
        }

        if words.is_empty() {
            return Err(WordListError::Empty {
                source_name: source_name.to_string(),
            });
        }

        debug!("Loaded {} root words from {source_name}", words.len());
        Ok(Self { words })
    }

    /// Load root words from a file
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Unreadable` if the file cannot be read and
    /// `WordListError::Empty` if it holds no usable root word.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| WordListError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_lines(content.lines(), &path.display().to_string())
    }

    /// Root words compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Empty` if the embedded list holds no usable
    /// root word, which means the binary was packaged without its data.
    pub fn embedded() -> Result<Self, WordListError> {
        Self::from_lines(ROOT_WORDS.iter().copied(), "embedded start list")
    }

    /// Pick a root word uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &RootWord {
        // The constructor guarantees at least one entry
        self.words.choose(rng).unwrap_or(&self.words[0])
    }

    #[must_use]
    pub fn words(&self) -> &[RootWord] {
        &self.words
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

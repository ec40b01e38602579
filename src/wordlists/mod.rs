//! Word lists for Word Scramble
//!
//! Provides the embedded root word list and dictionary, plus loading from
//! files. A missing or empty root word list is fatal: a round cannot start
//! without a root word.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, ROOT_WORDS, ROOT_WORDS_COUNT};
pub use loader::RootWordList;

use thiserror::Error;

/// Fatal word list conditions
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("Could not load {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("List of words from {source_name} appears to be empty.")]
    Empty { source_name: String },
}

impl WordListError {
    /// Alert title shown before the session halts
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Unreadable { .. } | Self::Empty { .. } => "Fatal Error",
        }
    }
}

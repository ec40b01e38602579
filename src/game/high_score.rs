//! High score persistence
//!
//! The session only needs to read one integer at startup and write it back
//! when it changes; where it lives is up to the caller.

use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HighScoreError {
    #[error("Could not write high score to {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Storage for the persisted high score
pub trait HighScoreStore: Send {
    /// Stored high score, 0 when nothing was stored yet
    fn load(&self) -> u32;

    /// Replace the stored high score
    ///
    /// # Errors
    ///
    /// Returns `HighScoreError` if the value could not be persisted.
    fn save(&mut self, score: u32) -> Result<(), HighScoreError>;
}

/// High score kept only for the lifetime of the process
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScore {
    score: u32,
}

impl MemoryHighScore {
    #[must_use]
    pub const fn new(score: u32) -> Self {
        Self { score }
    }
}

impl HighScoreStore for MemoryHighScore {
    fn load(&self) -> u32 {
        self.score
    }

    fn save(&mut self, score: u32) -> Result<(), HighScoreError> {
        self.score = score;
        Ok(())
    }
}

/// High score stored as a decimal number in a text file
///
/// A missing or malformed file reads as 0.
#[derive(Debug, Clone)]
pub struct FileHighScore {
    path: PathBuf,
}

impl FileHighScore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileHighScore {
    fn load(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(text) => text.trim().parse().unwrap_or_else(|_| {
                debug!("Ignoring malformed high score in {}", self.path.display());
                0
            }),
            Err(_) => 0,
        }
    }

    fn save(&mut self, score: u32) -> Result<(), HighScoreError> {
        fs::write(&self.path, format!("{score}\n")).map_err(|source| HighScoreError::Write {
            path: self.path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryHighScore::new(12);
        assert_eq!(store.load(), 12);
        store.save(40).unwrap();
        assert_eq!(store.load(), 40);
    }

    #[test]
    fn file_store_missing_reads_zero() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = FileHighScore::new(temp_dir.path().join("missing"));
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn file_store_persists() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("high_score");
        let mut store = FileHighScore::new(&path);
        store.save(57).unwrap();

        let reopened = FileHighScore::new(&path);
        assert_eq!(reopened.load(), 57);
        assert_eq!(fs::read_to_string(&path).unwrap(), "57\n");
    }

    #[test]
    fn file_store_malformed_reads_zero() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("high_score");
        fs::write(&path, "not a number").unwrap();

        let store = FileHighScore::new(&path);
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn file_store_unwritable_reports_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut store = FileHighScore::new(temp_dir.path().join("no_such_dir").join("high_score"));
        assert!(matches!(store.save(1), Err(HighScoreError::Write { .. })));
    }
}

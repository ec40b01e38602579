//! End-of-round answer listing

use super::UsedWord;
use crate::core::{MAX_WORD_LEN, MIN_WORD_LEN, word_score};
use crate::enumerate::PossibleWordSet;

/// One possible word and whether the player found it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerEntry {
    pub word: String,
    pub guessed: bool,
}

/// All possible words of one length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerGroup {
    pub length: usize,
    /// Points each word of this length is worth
    pub score: u32,
    pub entries: Vec<AnswerEntry>,
}

impl AnswerGroup {
    #[must_use]
    pub fn guessed_count(&self) -> usize {
        self.entries.iter().filter(|e| e.guessed).count()
    }
}

/// What the player sees once a round is over
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub possible: PossibleWordSet,
    pub used_words: Vec<UsedWord>,
    pub score: u32,
    pub high_score: u32,
}

impl RoundSummary {
    /// Possible words grouped by length 3 through 8, sorted within a group
    #[must_use]
    pub fn groups(&self) -> Vec<AnswerGroup> {
        group_by_length(&self.possible, &self.used_words)
    }

    /// Accepted guesses the enumeration pass did not reach
    ///
    /// Only non-empty when the pass was stopped before completing.
    #[must_use]
    pub fn unlisted_guesses(&self) -> Vec<&str> {
        self.used_words
            .iter()
            .map(|u| u.word.as_str())
            .filter(|w| !self.possible.contains(w))
            .collect()
    }

    /// Fraction of possible words the player found
    #[must_use]
    pub fn coverage(&self) -> f64 {
        if self.possible.is_empty() {
            return 0.0;
        }
        let found = self
            .possible
            .iter()
            .filter(|w| self.was_guessed(w))
            .count();
        found as f64 / self.possible.len() as f64
    }

    fn was_guessed(&self, word: &str) -> bool {
        was_guessed(&self.used_words, word)
    }
}

/// Group `possible` by length 3 through 8, flagging words in `used_words`
///
/// Every length appears even when it has no words.
#[must_use]
pub fn group_by_length(possible: &PossibleWordSet, used_words: &[UsedWord]) -> Vec<AnswerGroup> {
    (MIN_WORD_LEN..=MAX_WORD_LEN)
        .map(|length| AnswerGroup {
            length,
            score: word_score(length),
            entries: possible
                .of_length(length)
                .into_iter()
                .map(|word| AnswerEntry {
                    guessed: was_guessed(used_words, word),
                    word: word.to_string(),
                })
                .collect(),
        })
        .collect()
}

fn was_guessed(used_words: &[UsedWord], word: &str) -> bool {
    used_words.iter().any(|u| u.word == word)
}

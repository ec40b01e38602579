//! Set of validated words for one root word

use crate::core::RootWord;
use rustc_hash::FxHashSet;

/// All real words derivable from a root word, excluding the root itself
///
/// Built once per round by the enumeration pass and read-only afterwards.
/// `complete` is false when the pass was stopped before it finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PossibleWordSet {
    root: RootWord,
    words: FxHashSet<String>,
    complete: bool,
}

impl PossibleWordSet {
    #[must_use]
    pub const fn new(root: RootWord, words: FxHashSet<String>, complete: bool) -> Self {
        Self {
            root,
            words,
            complete,
        }
    }

    /// An empty, unfinished set for `root`
    #[must_use]
    pub fn empty(root: RootWord) -> Self {
        Self::new(root, FxHashSet::default(), false)
    }

    /// Root word the set was enumerated for
    #[must_use]
    pub const fn root(&self) -> &RootWord {
        &self.root
    }

    /// Whether enumeration ran to the end
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Words of exactly `len` letters, sorted
    #[must_use]
    pub fn of_length(&self, len: usize) -> Vec<&str> {
        let mut words: Vec<&str> = self.iter().filter(|w| w.len() == len).collect();
        words.sort_unstable();
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PossibleWordSet {
        let root = RootWord::new("drinking").unwrap();
        let words = ["king", "drink", "ring", "grin", "din"]
            .into_iter()
            .map(String::from)
            .collect();
        PossibleWordSet::new(root, words, true)
    }

    #[test]
    fn of_length_is_sorted() {
        let set = sample();
        assert_eq!(set.of_length(4), ["grin", "king", "ring"]);
        assert_eq!(set.of_length(3), ["din"]);
        assert!(set.of_length(8).is_empty());
    }

    #[test]
    fn membership() {
        let set = sample();
        assert!(set.contains("drink"));
        assert!(!set.contains("drinking"));
        assert_eq!(set.len(), 5);
        assert!(set.is_complete());
    }

    #[test]
    fn empty_set_is_incomplete() {
        let set = PossibleWordSet::empty(RootWord::new("drinking").unwrap());
        assert!(set.is_empty());
        assert!(!set.is_complete());
        assert_eq!(set.root().text(), "drinking");
    }
}

//! Letter multisets
//!
//! Derivability of a guess from a root word is multiset subtraction: every
//! letter of the guess must be taken, one for one, from the root's letters.

/// Count of each lowercase ASCII letter in a word
///
/// Characters outside `a..=z` are never counted, so a word containing one
/// can never be spelled from a `LetterCounts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterCounts {
    counts: [u8; 26],
}

impl LetterCounts {
    /// Build the multiset of lowercase letters in `word`
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut counts = [0u8; 26];
        for b in word.bytes() {
            if b.is_ascii_lowercase() {
                let slot = &mut counts[usize::from(b - b'a')];
                *slot = slot.saturating_add(1);
            }
        }
        Self { counts }
    }

    /// How many times `letter` occurs
    #[inline]
    #[must_use]
    pub const fn count(&self, letter: u8) -> u8 {
        if letter.is_ascii_lowercase() {
            self.counts[(letter - b'a') as usize]
        } else {
            0
        }
    }

    /// Total number of letters
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.iter().map(|&c| usize::from(c)).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Distinct letters with their counts, alphabetically
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(i, &count)| (b'a' + i as u8, count))
    }

    /// Check whether `word` can be formed from these letters
    ///
    /// Consumes a working copy letter by letter and fails on the first
    /// letter that is no longer available.
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut remaining = self.counts;
        word.bytes().all(|b| {
            if !b.is_ascii_lowercase() {
                return false;
            }
            let slot = &mut remaining[usize::from(b - b'a')];
            if *slot == 0 {
                false
            } else {
                *slot -= 1;
                true
            }
        })
    }
}

/// Check whether `word` can be made from the letters of `root`
///
/// Works for roots of any length; both strings are expected to be normalized
/// to lowercase already.
///
/// # Examples
/// ```
/// use word_scramble::core::is_possible;
///
/// assert!(is_possible("aab", "aabbcc"));
/// assert!(!is_possible("aaa", "aabbcc"));
/// ```
#[must_use]
pub fn is_possible(word: &str, root: &str) -> bool {
    LetterCounts::from_word(root).can_spell(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeated_letters() {
        let counts = LetterCounts::from_word("aabbcc");
        assert_eq!(counts.count(b'a'), 2);
        assert_eq!(counts.count(b'b'), 2);
        assert_eq!(counts.count(b'c'), 2);
        assert_eq!(counts.count(b'd'), 0);
        assert_eq!(counts.len(), 6);
    }

    #[test]
    fn ignores_non_letters() {
        let counts = LetterCounts::from_word("a-b c!");
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.count(b'-'), 0);
    }

    #[test]
    fn iter_is_alphabetical() {
        let counts = LetterCounts::from_word("drinking");
        let letters: Vec<(u8, u8)> = counts.iter().collect();
        assert_eq!(
            letters,
            vec![(b'd', 1), (b'g', 1), (b'i', 2), (b'k', 1), (b'n', 2), (b'r', 1)]
        );
    }

    #[test]
    fn possible_respects_multiplicity() {
        assert!(is_possible("aab", "aabbcc"));
        assert!(!is_possible("aaa", "aabbcc"));
        assert!(is_possible("cabbac", "aabbcc"));
    }

    #[test]
    fn possible_is_not_substring_matching() {
        // Letters may come from anywhere in the root, in any order
        assert!(is_possible("grind", "drinking"));
        assert!(!is_possible("drinkk", "drinking"));
    }

    #[test]
    fn possible_rejects_foreign_characters() {
        assert!(!is_possible("dr nk", "drinking"));
        assert!(!is_possible("Drink", "drinking"));
    }

    #[test]
    fn empty_word_is_always_possible() {
        assert!(is_possible("", "drinking"));
        assert!(LetterCounts::default().is_empty());
    }
}

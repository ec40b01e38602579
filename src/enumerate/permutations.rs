//! Multiset permutation enumerator
//!
//! Walks every distinct arrangement of a word's letters, shortest first.
//! Each depth of the walk picks a distinct letter that still has copies
//! left, so repeated letters never produce the same string twice and no
//! deduplication pass is needed.

use super::CancelToken;
use crate::core::{LetterCounts, MAX_WORD_LEN, MIN_WORD_LEN, RootWord};
use std::iter::FusedIterator;
use std::ops::RangeInclusive;

/// Lazy iterator over distinct sub-permutations of a word
///
/// Yields strings ordered by length, then alphabetically. The source word
/// itself is never yielded.
///
/// # Examples
/// ```
/// use word_scramble::enumerate::SubPermutations;
///
/// let words: Vec<String> = SubPermutations::with_lengths("aab", 2..=3).collect();
/// assert_eq!(words, ["aa", "ab", "ba", "aba", "baa"]);
/// ```
#[derive(Debug, Clone)]
pub struct SubPermutations {
    letters: Vec<u8>,
    remaining: Vec<u8>,
    source: String,
    len: usize,
    max_len: usize,
    /// Index into `letters` chosen at each depth
    path: Vec<usize>,
    /// Next letter index to try at depth `path.len()`
    cursor: usize,
    cancel: Option<CancelToken>,
    done: bool,
}

impl SubPermutations {
    /// All distinct candidates of length 3..=8 for a root word
    #[must_use]
    pub fn new(root: &RootWord) -> Self {
        Self::with_lengths(root.text(), MIN_WORD_LEN..=MAX_WORD_LEN)
    }

    /// Distinct arrangements of `word`'s letters with lengths in `lengths`
    ///
    /// Lengths longer than `word` yield nothing. Characters outside `a..=z`
    /// are ignored.
    #[must_use]
    pub fn with_lengths(word: &str, lengths: RangeInclusive<usize>) -> Self {
        let counts = LetterCounts::from_word(word);
        let (letters, remaining): (Vec<u8>, Vec<u8>) = counts.iter().unzip();

        let min_len = (*lengths.start()).max(1);
        let max_len = (*lengths.end()).min(counts.len());

        Self {
            letters,
            remaining,
            source: word.to_string(),
            len: min_len,
            max_len,
            path: Vec::with_capacity(max_len),
            cursor: 0,
            cancel: None,
            done: min_len > max_len,
        }
    }

    /// Stop yielding as soon as `token` is cancelled
    #[must_use]
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    fn current(&self) -> String {
        self.path
            .iter()
            .map(|&i| char::from(self.letters[i]))
            .collect()
    }

    /// Undo the deepest choice and move on to the next letter at that depth
    fn backtrack(&mut self) {
        if let Some(i) = self.path.pop() {
            self.remaining[i] += 1;
            self.cursor = i + 1;
        }
    }
}

impl Iterator for SubPermutations {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if self.done {
                return None;
            }
            if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
                self.done = true;
                return None;
            }

            if self.path.len() == self.len {
                let word = self.current();
                self.backtrack();
                if word != self.source {
                    return Some(word);
                }
                continue;
            }

            let next = (self.cursor..self.letters.len()).find(|&i| self.remaining[i] > 0);
            if let Some(i) = next {
                self.remaining[i] -= 1;
                self.path.push(i);
                self.cursor = 0;
            } else if self.path.is_empty() {
                self.len += 1;
                self.cursor = 0;
                self.done = self.len > self.max_len;
            } else {
                self.backtrack();
            }
        }
    }
}

impl FusedIterator for SubPermutations {}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn brute_force(word: &str, lengths: RangeInclusive<usize>) -> FxHashSet<String> {
        fn walk(
            chars: &[char],
            used: &mut Vec<bool>,
            prefix: &mut String,
            lengths: &RangeInclusive<usize>,
            out: &mut FxHashSet<String>,
        ) {
            if lengths.contains(&prefix.len()) {
                out.insert(prefix.clone());
            }
            if prefix.len() == *lengths.end() {
                return;
            }
            for i in 0..chars.len() {
                if !used[i] {
                    used[i] = true;
                    prefix.push(chars[i]);
                    walk(chars, used, prefix, lengths, out);
                    prefix.pop();
                    used[i] = false;
                }
            }
        }

        let chars: Vec<char> = word.chars().collect();
        let mut used = vec![false; chars.len()];
        let mut out = FxHashSet::default();
        walk(&chars, &mut used, &mut String::new(), &lengths, &mut out);
        out.remove(word);
        out
    }

    #[test]
    fn distinct_letters_count() {
        let root = RootWord::new("abcdefgh").unwrap();
        // 336 + 1680 + 6720 + 20160 + 40320 + 40320, minus the root itself
        assert_eq!(SubPermutations::new(&root).count(), 109_535);
    }

    #[test]
    fn repeated_letters_are_not_duplicated() {
        let words: Vec<String> = SubPermutations::with_lengths("aabb", 1..=4).collect();
        let unique: FxHashSet<&String> = words.iter().collect();

        assert_eq!(words.len(), unique.len());
        // 2 + 4 + 6 + 6 arrangements, minus "aabb"
        assert_eq!(words.len(), 17);
    }

    #[test]
    fn matches_brute_force_with_repeats() {
        for word in ["aabb", "abcab", "drink", "aaab"] {
            let expected = brute_force(word, 2..=word.len());
            let actual: FxHashSet<String> =
                SubPermutations::with_lengths(word, 2..=word.len()).collect();
            assert_eq!(actual, expected, "mismatch for {word}");
        }
    }

    #[test]
    fn respects_multiplicity_and_range() {
        let root = RootWord::new("drinking").unwrap();
        for word in SubPermutations::new(&root) {
            assert!((MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.len()));
            assert!(root.can_spell(&word), "{word} not derivable");
            assert_ne!(word, "drinking");
        }
    }

    #[test]
    fn root_is_excluded_but_anagrams_are_kept() {
        let words: Vec<String> = SubPermutations::with_lengths("abc", 3..=3).collect();
        assert_eq!(words, ["acb", "bac", "bca", "cab", "cba"]);
    }

    #[test]
    fn ordered_by_length_then_alphabetically() {
        let words: Vec<String> = SubPermutations::with_lengths("cab", 1..=2).collect();
        assert_eq!(words, ["a", "b", "c", "ab", "ac", "ba", "bc", "ca", "cb"]);
    }

    #[test]
    fn enumeration_is_repeatable() {
        let root = RootWord::new("keyboard").unwrap();
        let first: FxHashSet<String> = SubPermutations::new(&root).collect();
        let second: FxHashSet<String> = SubPermutations::new(&root).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn lengths_beyond_word_yield_nothing() {
        assert_eq!(SubPermutations::with_lengths("ab", 3..=8).count(), 0);
        assert_eq!(SubPermutations::with_lengths("", 1..=8).count(), 0);
    }

    #[test]
    fn single_letter_word_yields_only_shorter() {
        let words: Vec<String> = SubPermutations::with_lengths("aaa", 1..=3).collect();
        assert_eq!(words, ["a", "aa"]);
    }

    #[test]
    fn cancelled_iterator_stops() {
        let root = RootWord::new("abcdefgh").unwrap();
        let token = CancelToken::new();
        let mut iter = SubPermutations::new(&root).with_cancel(token.clone());

        assert!(iter.next().is_some());
        token.cancel();
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }
}

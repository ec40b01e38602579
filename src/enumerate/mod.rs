//! Enumeration of every possible answer for a root word
//!
//! [`SubPermutations`] generates candidates lazily; [`collect_possible_words`]
//! filters them through a [`WordValidator`]; [`EnumerationTask`] runs that
//! pass in the background for a live round.

mod cancel;
mod permutations;
mod possible;
mod task;

pub use cancel::CancelToken;
pub use permutations::SubPermutations;
pub use possible::PossibleWordSet;
pub use task::EnumerationTask;

use crate::core::RootWord;
use crate::dictionary::WordValidator;
use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::time::Instant;

/// Run the full enumeration pass for `root` on the calling thread
///
/// Validator calls are spread over the rayon pool. If `token` is cancelled
/// the pass stops early and the returned set is marked incomplete.
///
/// # Examples
/// ```
/// use word_scramble::core::RootWord;
/// use word_scramble::dictionary::WordListValidator;
/// use word_scramble::enumerate::{CancelToken, collect_possible_words};
///
/// let root = RootWord::new("drinking").unwrap();
/// let validator = WordListValidator::new("en", ["drink", "king", "drinking"]);
///
/// let words = collect_possible_words(&root, &validator, "en", &CancelToken::new());
/// assert!(words.is_complete());
/// assert_eq!(words.len(), 2);
/// ```
pub fn collect_possible_words<V>(
    root: &RootWord,
    validator: &V,
    locale: &str,
    token: &CancelToken,
) -> PossibleWordSet
where
    V: WordValidator + ?Sized,
{
    let start = Instant::now();

    let words: FxHashSet<String> = SubPermutations::new(root)
        .with_cancel(token.clone())
        .par_bridge()
        .filter(|candidate| validator.is_real(candidate, locale))
        .collect();

    let complete = !token.is_cancelled();
    debug!(
        "Enumerated {} words for {root} in {:.2?} ({})",
        words.len(),
        start.elapsed(),
        if complete { "complete" } else { "stopped early" }
    );

    PossibleWordSet::new(root.clone(), words, complete)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListValidator;

    #[test]
    fn filters_through_validator() {
        let root = RootWord::new("drinking").unwrap();
        let validator = WordListValidator::new(
            "en",
            ["drink", "king", "ring", "grin", "rink", "dig", "drinking", "zebra"],
        );

        let words = collect_possible_words(&root, &validator, "en", &CancelToken::new());

        assert!(words.is_complete());
        assert_eq!(words.of_length(3), ["dig"]);
        assert_eq!(words.of_length(4), ["grin", "king", "ring", "rink"]);
        assert_eq!(words.of_length(5), ["drink"]);
        assert!(!words.contains("drinking"));
    }

    #[test]
    fn every_member_is_derivable_and_in_range() {
        let root = RootWord::new("keyboard").unwrap();
        let validator = WordListValidator::embedded("en");

        let words = collect_possible_words(&root, &validator, "en", &CancelToken::new());

        assert!(!words.is_empty());
        for word in words.iter() {
            assert!((3..=8).contains(&word.len()));
            assert!(root.can_spell(word));
            assert_ne!(word, root.text());
        }
    }

    #[test]
    fn repeated_runs_agree() {
        let root = RootWord::new("lemonade").unwrap();
        let validator = WordListValidator::embedded("en");

        let first = collect_possible_words(&root, &validator, "en", &CancelToken::new());
        let second = collect_possible_words(&root, &validator, "en", &CancelToken::new());
        assert_eq!(first, second);
    }

    #[test]
    fn wrong_locale_finds_nothing() {
        let root = RootWord::new("drinking").unwrap();
        let validator = WordListValidator::new("en", ["drink"]);

        let words = collect_possible_words(&root, &validator, "de", &CancelToken::new());
        assert!(words.is_empty());
    }

    #[test]
    fn pre_cancelled_pass_is_incomplete() {
        let root = RootWord::new("drinking").unwrap();
        let validator = WordListValidator::new("en", ["drink"]);
        let token = CancelToken::new();
        token.cancel();

        let words = collect_possible_words(&root, &validator, "en", &token);
        assert!(!words.is_complete());
        assert!(words.is_empty());
    }
}

//! Answers command
//!
//! Lists every possible word for a root word, as shown at the end of a round.

use crate::core::RootWord;
use crate::dictionary::WordValidator;
use crate::enumerate::{CancelToken, PossibleWordSet, collect_possible_words};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Result of enumerating one root word
pub struct AnswersResult {
    pub possible: PossibleWordSet,
    pub duration: Duration,
}

/// Enumerate all possible words for `root`
///
/// Shows a spinner on stderr while the pass runs.
pub fn list_answers<V: WordValidator + ?Sized>(
    root: &RootWord,
    validator: &V,
    locale: &str,
) -> AnswersResult {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Finding words in {}", root.text().to_uppercase()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let start = Instant::now();
    let possible = collect_possible_words(root, validator, locale, &CancelToken::new());
    let duration = start.elapsed();

    spinner.finish_and_clear();

    AnswersResult { possible, duration }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListValidator;

    #[test]
    fn lists_complete_answers() {
        let root = RootWord::new("drinking").unwrap();
        let validator = WordListValidator::new("en", ["drink", "ring", "drinking"]);

        let result = list_answers(&root, &validator, "en");

        assert!(result.possible.is_complete());
        assert_eq!(result.possible.len(), 2);
        assert!(result.possible.contains("ring"));
    }
}

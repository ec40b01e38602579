//! Check command
//!
//! Runs the guess rules for a single word against a root word, outside of a
//! timed round.

use crate::core::RootWord;
use crate::dictionary::WordValidator;
use crate::game::{GuessError, UsedWord, validate_guess};

/// Validate `guess` against `root` and score it
///
/// # Errors
///
/// Returns the first guess rule that fails.
pub fn check_word<V: WordValidator + ?Sized>(
    root: &RootWord,
    guess: &str,
    validator: &V,
    locale: &str,
) -> Result<UsedWord, GuessError> {
    validate_guess(guess, root, &[], validator, locale).map(UsedWord::new)
}

//! Dictionary oracle
//!
//! The game never decides on its own whether a string is a word. It asks a
//! [`WordValidator`], which may be backed by an in-memory word list, a trie,
//! a platform spell checker or a remote service.
//!
//! A single validator instance is shared by the interactive guess path and
//! the background enumeration pass, so implementations must be `Send + Sync`.
//! Lookups that need `&mut self` can be adapted with [`Serialized`].

mod serialized;
mod wordlist;

pub use serialized::{ExclusiveValidator, Serialized};
pub use wordlist::WordListValidator;

use std::sync::Arc;

/// Locale used when none is configured
pub const DEFAULT_LOCALE: &str = "en";

/// Decides whether a candidate string is a real word in a locale
///
/// Implementations must be deterministic for a fixed dictionary snapshot and
/// cheap enough to call tens of thousands of times per round.
pub trait WordValidator: Send + Sync {
    /// Check whether `word` is a real word of `locale`
    fn is_real(&self, word: &str, locale: &str) -> bool;
}

impl<V: WordValidator + ?Sized> WordValidator for Arc<V> {
    fn is_real(&self, word: &str, locale: &str) -> bool {
        (**self).is_real(word, locale)
    }
}

impl<V: WordValidator + ?Sized> WordValidator for &V {
    fn is_real(&self, word: &str, locale: &str) -> bool {
        (**self).is_real(word, locale)
    }
}

/// Primary language subtag of a locale (`en_US` and `en-GB` both give `en`)
#[must_use]
pub fn language_of(locale: &str) -> &str {
    locale
        .split(['_', '-', '.'])
        .next()
        .unwrap_or(locale)
        .trim()
}

/// Whether two locales name the same dictionary language
#[must_use]
pub fn same_language(a: &str, b: &str) -> bool {
    language_of(a).eq_ignore_ascii_case(language_of(b))
}

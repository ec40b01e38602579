//! Adapter for validators that cannot be called concurrently

use super::WordValidator;
use std::sync::{Mutex, PoisonError};

/// A dictionary lookup that needs exclusive access
///
/// Typical for wrappers around spell-checker handles that keep scratch state.
pub trait ExclusiveValidator: Send {
    fn is_real(&mut self, word: &str, locale: &str) -> bool;
}

/// Serializes every lookup through a mutex
///
/// Calls from the interactive path may wait behind the background pass, but
/// each answer is still computed by exactly one caller at a time.
///
/// # Examples
/// ```
/// use word_scramble::dictionary::{ExclusiveValidator, Serialized, WordValidator};
///
/// struct Counting(usize);
///
/// impl ExclusiveValidator for Counting {
///     fn is_real(&mut self, word: &str, _locale: &str) -> bool {
///         self.0 += 1;
///         word == "king"
///     }
/// }
///
/// let validator = Serialized::new(Counting(0));
/// assert!(validator.is_real("king", "en"));
/// assert_eq!(validator.into_inner().0, 1);
/// ```
#[derive(Debug, Default)]
pub struct Serialized<V> {
    inner: Mutex<V>,
}

impl<V: ExclusiveValidator> Serialized<V> {
    pub const fn new(inner: V) -> Self {
        Self {
            inner: Mutex::new(inner),
        }
    }

    /// Take back the wrapped validator
    pub fn into_inner(self) -> V {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<V: ExclusiveValidator> WordValidator for Serialized<V> {
    fn is_real(&self, word: &str, locale: &str) -> bool {
        // A panic inside a lookup leaves no partial state worth rejecting
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.is_real(word, locale)
    }
}

//! Word scoring
//!
//! Score depends only on word length:
//!
//! | Length | Score |
//! |--------|-------|
//! | 3      | 3     |
//! | 4      | 4     |
//! | 5      | 6     |
//! | 6      | 8     |
//! | 7      | 13    |
//! | 8      | 18    |

/// Score for a word of `len` letters
///
/// Lengths outside 3..=8 score 0.
///
/// # Examples
/// ```
/// use word_scramble::core::word_score;
///
/// assert_eq!(word_score(5), 6);
/// assert_eq!(word_score(8), 18);
/// assert_eq!(word_score(2), 0);
/// ```
#[must_use]
pub const fn word_score(len: usize) -> u32 {
    match len {
        3 => 3,
        4 => 4,
        5 => 6,
        6 => 8,
        7 => 13,
        8 => 18,
        _ => 0,
    }
}

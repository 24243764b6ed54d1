//! Word scoring
//!
//! Points are a step function of the word's character count.

/// Points for words of up to 3 letters
pub const SHORT_WORD_POINTS: u32 = 1;

/// Points for words of 4 or 5 letters
pub const MEDIUM_WORD_POINTS: u32 = 3;

/// Points for words of 6 letters or more
pub const LONG_WORD_POINTS: u32 = 5;

/// Score an accepted word
///
/// # Examples
/// ```
/// use word_scramble::core::score;
///
/// assert_eq!(score("cat"), 1);
/// assert_eq!(score("worm"), 3);
/// assert_eq!(score("chairs"), 5);
/// ```
#[must_use]
pub fn score(word: &str) -> u32 {
    match word.chars().count() {
        0..=3 => SHORT_WORD_POINTS,
        4..=5 => MEDIUM_WORD_POINTS,
        _ => LONG_WORD_POINTS,
    }
}

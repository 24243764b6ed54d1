//! Letter multiset used by the possibility check
//!
//! A word is spellable from a root word when, for every letter, the word needs
//! no more copies than the root provides.

use rustc_hash::FxHashMap;

/// Count of each letter in a word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts(FxHashMap<char, usize>);

impl LetterCounts {
    /// Count the letters of `word`
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterCounts;
    ///
    /// let counts = LetterCounts::of("letter");
    /// assert_eq!(counts.count('t'), 2);
    /// assert_eq!(counts.count('z'), 0);
    /// ```
    #[must_use]
    pub fn of(word: &str) -> Self {
        let mut counts = FxHashMap::default();
        for letter in word.chars() {
            *counts.entry(letter).or_insert(0) += 1;
        }
        Self(counts)
    }

    /// Number of times `letter` occurs
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.0.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters counted
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// Number of distinct letters
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.0.len()
    }

    /// Check whether `word` can be spelled using these letters
    ///
    /// Each letter of `word` consumes one occurrence from a working copy of the
    /// counts. Fails as soon as a letter is unavailable. The empty word is
    /// always spellable.
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut available = self.0.clone();

        for letter in word.chars() {
            match available.get_mut(&letter) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
        }

        true
    }
}

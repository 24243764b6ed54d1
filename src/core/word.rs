//! Word normalization and root word representation
//!
//! Candidates, root words and word-list entries are all compared in one
//! canonical form: surrounding whitespace removed, lowercased.

use super::letters::LetterCounts;
use std::fmt;

/// Root word used when no word source can supply one
pub const DEFAULT_ROOT_WORD: &str = "silkworm";

/// Normalize raw user input into the canonical word form
///
/// Trims leading and trailing whitespace (including newlines) and lowercases.
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Worm\n"), "worm");
/// assert_eq!(normalize(" \t "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// The word a session is played against
///
/// Stores the normalized text along with its letter counts for the
/// possibility check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootWord {
    text: String,
    letters: LetterCounts,
}

/// Error type for invalid root words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootWordError {
    Empty,
}

impl fmt::Display for RootWordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Root word must contain at least one letter"),
        }
    }
}

impl std::error::Error for RootWordError {}

impl RootWord {
    /// Create a root word from raw text
    ///
    /// # Errors
    /// Returns `RootWordError::Empty` if nothing is left after normalization.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RootWord;
    ///
    /// let root = RootWord::new("Silkworm").unwrap();
    /// assert_eq!(root.text(), "silkworm");
    ///
    /// assert!(RootWord::new("   ").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, RootWordError> {
        let text = normalize(text.as_ref());
        if text.is_empty() {
            return Err(RootWordError::Empty);
        }
        Ok(Self::from_normalized(text))
    }

    /// The fixed fallback root word
    #[must_use]
    pub fn fallback() -> Self {
        Self::from_normalized(DEFAULT_ROOT_WORD.to_string())
    }

    fn from_normalized(text: String) -> Self {
        let letters = LetterCounts::of(&text);
        Self { text, letters }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.letters.total()
    }

    /// Letter counts available for spelling answers
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterCounts {
        &self.letters
    }
}

impl fmt::Display for RootWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("Worm"), "worm");
        assert_eq!(normalize("  SILK  "), "silk");
        assert_eq!(normalize("milk\n"), "milk");
        assert_eq!(normalize("\r\n\tOwl \n"), "owl");
    }

    #[test]
    fn normalize_keeps_inner_whitespace() {
        assert_eq!(normalize(" Ice Cream "), "ice cream");
    }

    #[test]
    fn normalize_blank_is_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("\n\n"), "");
    }

    #[test]
    fn root_word_normalized() {
        let root = RootWord::new("  SilkWorm\n").unwrap();
        assert_eq!(root.text(), "silkworm");
        assert_eq!(root.char_len(), 8);
    }

    #[test]
    fn root_word_rejects_blank() {
        assert_eq!(RootWord::new(""), Err(RootWordError::Empty));
        assert_eq!(RootWord::new(" \n "), Err(RootWordError::Empty));
    }

    #[test]
    fn root_word_letters() {
        let root = RootWord::new("balloon").unwrap();
        assert_eq!(root.letters().count('l'), 2);
        assert_eq!(root.letters().count('z'), 0);
    }

    #[test]
    fn fallback_is_silkworm() {
        let root = RootWord::fallback();
        assert_eq!(root.text(), "silkworm");
        assert_eq!(root, RootWord::new("Silkworm").unwrap());
    }

    #[test]
    fn root_word_display() {
        let root = RootWord::new("Airplane").unwrap();
        assert_eq!(format!("{root}"), "airplane");
    }
}

//! Validation predicates
//!
//! Each check answers one question about an already-normalized candidate.
//! None of them has side effects beyond the dictionary lookup in
//! [`is_real`].

use crate::core::RootWord;
use crate::dictionary::{Dictionary, ENGLISH};

/// Number of leading characters compared by [`is_start`]
pub const PREFIX_LENGTH: usize = 3;

/// Check that `word` has not been accepted before
///
/// # Examples
/// ```
/// use word_scramble::rules::is_original;
///
/// assert!(is_original("silk", ["worm"]));
/// assert!(!is_original("worm", ["worm"]));
/// ```
#[must_use]
pub fn is_original<'a, I>(word: &str, used_words: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    !used_words.into_iter().any(|used| used == word)
}

/// Check that `word` can be spelled from the letters of `root`
///
/// Each letter of the root may be used at most as often as it occurs there.
#[must_use]
pub fn is_possible(word: &str, root: &RootWord) -> bool {
    root.letters().can_spell(word)
}

/// Check that the dictionary recognizes `word` as English
#[must_use]
pub fn is_real<D: Dictionary + ?Sized>(word: &str, dictionary: &D) -> bool {
    dictionary.is_valid_word(word, ENGLISH)
}

/// Check that `word` does not just reuse the beginning of `root`
///
/// Words shorter than [`PREFIX_LENGTH`] pass, as do all words when the root is
/// that short. Otherwise the first [`PREFIX_LENGTH`] characters must differ.
/// The root word itself fails here.
///
/// # Examples
/// ```
/// use word_scramble::core::RootWord;
/// use word_scramble::rules::is_start;
///
/// let root = RootWord::new("silkworm").unwrap();
/// assert!(!is_start("silkworm", &root));
/// assert!(!is_start("silk", &root));
/// assert!(is_start("sit", &root));
/// ```
#[must_use]
pub fn is_start(word: &str, root: &RootWord) -> bool {
    if root.char_len() < PREFIX_LENGTH || word.chars().count() < PREFIX_LENGTH {
        return true;
    }

    let root_prefix = root.text().chars().take(PREFIX_LENGTH);
    let word_prefix = word.chars().take(PREFIX_LENGTH);

    !root_prefix.eq(word_prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn silkworm() -> RootWord {
        RootWord::new("silkworm").unwrap()
    }

    #[test]
    fn original_when_unused() {
        assert!(is_original("worm", std::iter::empty()));
        assert!(is_original("worm", ["silk", "milk"]));
    }

    #[test]
    fn not_original_on_exact_repeat() {
        assert!(!is_original("worm", ["worm"]));
        assert!(!is_original("milk", ["silk", "milk"]));
    }

    #[test]
    fn originality_is_exact_match() {
        // Case is normalized before checks run
        assert!(is_original("worm", ["Worm"]));
        assert!(is_original("worm", ["worms"]));
    }

    #[test]
    fn possible_words() {
        let root = silkworm();
        assert!(is_possible("worm", &root));
        assert!(is_possible("milk", &root));
        assert!(is_possible("swirl", &root));
        assert!(is_possible("silkworm", &root));
    }

    #[test]
    fn impossible_words() {
        let root = silkworm();
        assert!(!is_possible("word", &root));
        assert!(!is_possible("mill", &root)); // Only one 'l'
        assert!(!is_possible("silkworms", &root));
    }

    #[test]
    fn empty_word_is_possible() {
        assert!(is_possible("", &silkworm()));
    }

    #[test]
    fn real_words_use_english() {
        let dictionary = |word: &str, language: &str| language == ENGLISH && word == "worm";
        assert!(is_real("worm", &dictionary));
        assert!(!is_real("wrom", &dictionary));
    }

    #[test]
    fn start_rejects_root_word() {
        assert!(!is_start("silkworm", &silkworm()));
    }

    #[test]
    fn start_rejects_shared_prefix() {
        let root = silkworm();
        assert!(!is_start("silk", &root));
        assert!(!is_start("sil", &root));
    }

    #[test]
    fn start_accepts_different_prefix() {
        let root = silkworm();
        assert!(is_start("sit", &root));
        assert!(is_start("worm", &root));
        assert!(is_start("milk", &root));
    }

    #[test]
    fn start_exempts_short_words() {
        let root = silkworm();
        assert!(is_start("si", &root));
        assert!(is_start("s", &root));
        assert!(is_start("", &root));
    }

    #[test]
    fn start_exempts_short_roots() {
        let root = RootWord::new("ox").unwrap();
        assert!(is_start("ox", &root));
        assert!(is_start("oxen", &root));
    }

    #[test]
    fn start_compares_characters() {
        let root = RootWord::new("café").unwrap();
        assert!(!is_start("caf", &root));
        assert!(is_start("cab", &root));
    }
}

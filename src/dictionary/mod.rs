//! Dictionary oracle
//!
//! The reality check asks a [`Dictionary`] whether a word is real. Anything
//! that can answer that question plugs in: the bundled word list, a word list
//! loaded from a file, or a plain closure in tests.

mod word_list;

pub use word_list::WordListDictionary;

/// Language tag the reality check asks about
pub const ENGLISH: &str = "en";

/// A source of truth for which words exist in a language
pub trait Dictionary {
    /// Check whether `word` is a recognized word in `language`
    ///
    /// `word` is already normalized. Returns true only if no part of the word
    /// is misspelled.
    fn is_valid_word(&self, word: &str, language: &str) -> bool;
}

impl<F> Dictionary for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_valid_word(&self, word: &str, language: &str) -> bool {
        self(word, language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_is_a_dictionary() {
        let only_worm = |word: &str, language: &str| language == ENGLISH && word == "worm";

        assert!(only_worm.is_valid_word("worm", ENGLISH));
        assert!(!only_worm.is_valid_word("silk", ENGLISH));
        assert!(!only_worm.is_valid_word("worm", "fr"));
    }
}

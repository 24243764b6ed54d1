//! Word-list backed dictionary

use super::{Dictionary, ENGLISH};
use crate::core::normalize;
use crate::wordlists::DICTIONARY;
use crate::wordlists::loader::load_from_file;
use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;

/// Dictionary backed by an in-memory set of known words for one language
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build a dictionary for `language` from a list of words
    ///
    /// Entries are normalized; blank entries are skipped.
    pub fn new<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| normalize(word.as_ref()))
            .filter(|word| !word.is_empty())
            .collect();

        Self {
            language: language.into(),
            words,
        }
    }

    /// Build an English dictionary from a list of words
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{Dictionary, ENGLISH, WordListDictionary};
    ///
    /// let dictionary = WordListDictionary::english(["silk", "Worm"]);
    /// assert!(dictionary.is_valid_word("worm", ENGLISH));
    /// assert!(!dictionary.is_valid_word("wrom", ENGLISH));
    /// ```
    pub fn english<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(ENGLISH, words)
    }

    /// The English word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::english(DICTIONARY)
    }

    /// Load an English dictionary from a file with one word per line
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self::english(load_from_file(path)?))
    }

    /// Resolve a `--dictionary` argument: `embedded` or a file path
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a file path is given and cannot be read.
    pub fn from_arg(arg: &str) -> io::Result<Self> {
        match arg {
            "embedded" => Ok(Self::embedded()),
            path => Self::from_file(path),
        }
    }

    /// Language tag this dictionary answers for
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Number of known words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check a single normalized word
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Iterate over all known words in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Dictionary for WordListDictionary {
    fn is_valid_word(&self, word: &str, language: &str) -> bool {
        if language != self.language {
            return false;
        }

        // Every token must be known, and there must be at least one
        let mut tokens = word.split_whitespace().peekable();
        tokens.peek().is_some() && tokens.all(|token| self.words.contains(token))
    }
}

//! Word list loading utilities
//!
//! Provides the [`WordSource`] seam that supplies root words, plus helpers to
//! load word lists from files or use the embedded constants.

use super::START_WORDS;
use crate::core::normalize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Supplier of candidate root words
///
/// Consulted at the start of every session. A failed or empty load makes the
/// game fall back to the default root word.
pub trait WordSource {
    /// Load the candidate root words
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the underlying list is unavailable.
    fn load(&self) -> io::Result<Vec<String>>;
}

/// Root words selected by the `--start-words` flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartWords {
    /// The list compiled into the binary
    Embedded,
    /// A file with one word per line
    File(PathBuf),
}

impl StartWords {
    /// Resolve a `--start-words` argument: `embedded` or a file path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

impl WordSource for StartWords {
    fn load(&self) -> io::Result<Vec<String>> {
        match self {
            Self::Embedded => Ok(words_from_slice(START_WORDS)),
            Self::File(path) => load_from_file(path),
        }
    }
}

impl WordSource for Vec<String> {
    fn load(&self) -> io::Result<Vec<String>> {
        Ok(self.clone())
    }
}

/// Load words from a file
///
/// Returns normalized words, skipping blank lines.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = normalize_list(content.lines());

    info!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Convert embedded string slice to owned, normalized words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    normalize_list(slice)
}

/// Normalize every entry and drop the ones that end up blank
pub fn normalize_list<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|word| normalize(word.as_ref()))
        .filter(|word| !word.is_empty())
        .collect()
}

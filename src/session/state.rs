//! Session state value object

use crate::core::RootWord;

/// An accepted word and the points it earned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    pub word: String,
    pub score: u32,
}

impl ScoredWord {
    /// Number of letters in the word
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.word.chars().count()
    }
}

/// State of one game session
///
/// Accepted words are stored most recent first, each paired with its score,
/// and the running total is only changed together with the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    root: RootWord,
    entries: Vec<ScoredWord>,
    total_score: u32,
}

impl SessionState {
    /// Start an empty session for `root`
    #[must_use]
    pub const fn new(root: RootWord) -> Self {
        Self {
            root,
            entries: Vec::new(),
            total_score: 0,
        }
    }

    /// The word every answer must be spelled from
    #[must_use]
    pub const fn root(&self) -> &RootWord {
        &self.root
    }

    /// Accepted words with their scores, most recent first
    #[must_use]
    pub fn entries(&self) -> &[ScoredWord] {
        &self.entries
    }

    /// Accepted words, most recent first
    pub fn used_words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.word.as_str())
    }

    /// Per-word scores, aligned with [`used_words`](Self::used_words)
    pub fn scores(&self) -> impl Iterator<Item = u32> {
        self.entries.iter().map(|entry| entry.score)
    }

    /// Sum of all per-word scores
    #[must_use]
    pub const fn total_score(&self) -> u32 {
        self.total_score
    }

    /// The most recently accepted word
    #[must_use]
    pub fn latest(&self) -> Option<&ScoredWord> {
        self.entries.first()
    }

    /// Number of accepted words
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Prepend an accepted word and add its score to the total
    pub(crate) fn record(&mut self, word: String, score: u32) {
        self.entries.insert(0, ScoredWord { word, score });
        self.total_score += score;
    }
}

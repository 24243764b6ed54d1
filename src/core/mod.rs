//! Core domain types for the word game
//!
//! Normalization, root words, letter counting and scoring. Everything here is
//! pure and has no knowledge of sessions or dictionaries.

mod letters;
mod scoring;
mod word;

pub use letters::LetterCounts;
pub use scoring::{LONG_WORD_POINTS, MEDIUM_WORD_POINTS, SHORT_WORD_POINTS, score};
pub use word::{DEFAULT_ROOT_WORD, RootWord, RootWordError, normalize};

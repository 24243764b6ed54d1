//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary for zero-cost access:
//! the root words a session may start from and the English dictionary.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};
pub use loader::{StartWords, WordSource};

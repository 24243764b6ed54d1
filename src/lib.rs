//! Word Scramble
//!
//! A word anagram game: spell as many words as you can from the letters of a
//! random root word. Every word must be new, spellable from the root, a real
//! dictionary word, and must not simply reuse the root's first letters.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use word_scramble::dictionary::WordListDictionary;
//! use word_scramble::session::{Game, SubmitResult};
//! use word_scramble::wordlists::StartWords;
//!
//! let game = Game::new(WordListDictionary::embedded(), StartWords::Embedded);
//! let session = game.start_session(&mut StdRng::seed_from_u64(1));
//!
//! match game.submit("zzzz", &session) {
//!     SubmitResult::Rejected(rejection) => println!("{rejection}"),
//!     other => println!("{other:?}"),
//! }
//! ```

// Core domain types
pub mod core;

// Validation checks and scoring
pub mod rules;

// Dictionary oracle
pub mod dictionary;

// Session state and transitions
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

//! Formatting utilities for terminal output

use crate::session::ScoredWord;

/// Format a word's letter count as a badge, e.g. `(4)`
#[must_use]
pub fn letter_badge(count: usize) -> String {
    format!("({count})")
}

/// Format an accepted word as a list row: badge, word and points
#[must_use]
pub fn format_entry(entry: &ScoredWord) -> String {
    format!(
        "{} {:<12} + {}",
        letter_badge(entry.letter_count()),
        entry.word,
        entry.score
    )
}

/// Uppercase a word with spaces between letters for banners
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pluralize `word` for a count
#[must_use]
pub fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

//! Answer finder command
//!
//! Lists every dictionary word a fresh session would accept for a root word.

use crate::core::{RootWord, normalize};
use crate::dictionary::Dictionary;
use crate::rules::validate;
use crate::session::ScoredWord;
use rayon::prelude::*;

/// Result of searching the dictionary for answers
pub struct AnswersResult {
    pub root: String,
    pub answers: Vec<ScoredWord>,
    pub max_score: u32,
    pub words_scanned: usize,
}

/// Find all words in `word_list` that the game accepts for `root`
///
/// Every candidate goes through the same ordered checks as a real
/// submission against an empty session. Results are sorted by score, highest
/// first, then alphabetically.
///
/// # Errors
///
/// Returns an error if `root` is blank.
pub fn find_answers<D: Dictionary + Sync>(
    root: &str,
    word_list: &[&str],
    dictionary: &D,
) -> Result<AnswersResult, String> {
    let root_word = RootWord::new(root).map_err(|e| format!("Invalid root word: {e}"))?;
    let no_used_words: [&str; 0] = [];

    let mut answers: Vec<ScoredWord> = word_list
        .par_iter()
        .filter_map(|&candidate| {
            let word = normalize(candidate);
            if word.is_empty() {
                return None;
            }
            validate(&word, &root_word, no_used_words, dictionary)
                .ok()
                .map(|score| ScoredWord { word, score })
        })
        .collect();

    answers.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.word.cmp(&b.word)));
    answers.dedup_by(|a, b| a.word == b.word);

    let max_score = answers.iter().map(|entry| entry.score).sum();

    Ok(AnswersResult {
        root: root_word.text().to_string(),
        answers,
        max_score,
        words_scanned: word_list.len(),
    })
}

//! Rule explainer command
//!
//! Plays a sequence of words against a fixed root word and reports the verdict
//! for each, exactly as a session would.

use crate::core::RootWord;
use crate::dictionary::Dictionary;
use crate::rules::Rejection;
use crate::session::{Game, ScoredWord, SessionState, SubmitResult};
use crate::wordlists::WordSource;

/// Verdict for one submitted word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Accepted(ScoredWord),
    Rejected(Rejection),
    Ignored,
}

/// One input and its verdict
pub struct CheckStep {
    pub input: String,
    pub outcome: CheckOutcome,
}

/// Result of checking a sequence of words
pub struct CheckResult {
    pub root: String,
    pub steps: Vec<CheckStep>,
    pub total_score: u32,
}

/// Submit `words` in order to a session rooted at `root`
///
/// Accepted words stay in the session, so a later repeat is rejected.
///
/// # Errors
///
/// Returns an error if `root` is blank.
pub fn check_words<D, W, S>(
    game: &Game<D, W>,
    root: &str,
    words: &[S],
) -> Result<CheckResult, String>
where
    D: Dictionary,
    W: WordSource,
    S: AsRef<str>,
{
    let root_word = RootWord::new(root).map_err(|e| format!("Invalid root word: {e}"))?;
    let mut session = SessionState::new(root_word);
    let mut steps = Vec::with_capacity(words.len());

    for input in words {
        let input = input.as_ref();
        let outcome = match game.submit(input, &session) {
            SubmitResult::Accepted(next) => {
                let outcome = next
                    .latest()
                    .cloned()
                    .map_or(CheckOutcome::Ignored, CheckOutcome::Accepted);
                session = next;
                outcome
            }
            SubmitResult::Rejected(rejection) => CheckOutcome::Rejected(rejection),
            SubmitResult::Ignored => CheckOutcome::Ignored,
        };

        steps.push(CheckStep {
            input: input.to_string(),
            outcome,
        });
    }

    Ok(CheckResult {
        root: session.root().text().to_string(),
        steps,
        total_score: session.total_score(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;

    fn game() -> Game<WordListDictionary, Vec<String>> {
        Game::new(
            WordListDictionary::english(["silk", "worm", "milk", "owl", "word"]),
            Vec::new(),
        )
    }

    #[test]
    fn reports_each_verdict() {
        let result = check_words(
            &game(),
            "SILKWORM",
            &["worm", "Worm", "word", "wolm", "silk", " ", "owl"],
        )
        .unwrap();

        assert_eq!(result.root, "silkworm");
        let outcomes: Vec<&CheckOutcome> = result.steps.iter().map(|s| &s.outcome).collect();
        assert_eq!(
            outcomes,
            vec![
                &CheckOutcome::Accepted(ScoredWord {
                    word: "worm".to_string(),
                    score: 3
                }),
                &CheckOutcome::Rejected(Rejection::AlreadyUsed),
                &CheckOutcome::Rejected(Rejection::NotPossible {
                    root: "silkworm".to_string()
                }),
                &CheckOutcome::Rejected(Rejection::NotRecognized),
                &CheckOutcome::Rejected(Rejection::SharesPrefix),
                &CheckOutcome::Ignored,
                &CheckOutcome::Accepted(ScoredWord {
                    word: "owl".to_string(),
                    score: 1
                }),
            ]
        );
        assert_eq!(result.total_score, 4);
    }

    #[test]
    fn keeps_raw_input() {
        let result = check_words(&game(), "silkworm", &[" Milk "]).unwrap();
        assert_eq!(result.steps[0].input, " Milk ");
        assert_eq!(
            result.steps[0].outcome,
            CheckOutcome::Accepted(ScoredWord {
                word: "milk".to_string(),
                score: 3
            })
        );
    }

    #[test]
    fn blank_root_is_an_error() {
        let words: [&str; 0] = [];
        assert!(check_words(&game(), "", &words).is_err());
    }
}

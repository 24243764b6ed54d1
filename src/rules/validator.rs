//! Ordered validation of a candidate word

use super::checks::{is_original, is_possible, is_real, is_start};
use super::rejection::Rejection;
use crate::core::{RootWord, score};
use crate::dictionary::Dictionary;

/// Run all checks on a normalized candidate and score it
///
/// Checks run in a fixed order and stop at the first failure: originality,
/// possibility, reality, then start prefix. The dictionary is only consulted
/// for words that pass the first two.
///
/// # Errors
///
/// Returns the [`Rejection`] for the first check that fails.
///
/// # Examples
/// ```
/// use word_scramble::core::RootWord;
/// use word_scramble::rules::{Rejection, validate};
///
/// let root = RootWord::new("silkworm").unwrap();
/// let dictionary = |word: &str, _: &str| ["worm", "silk"].contains(&word);
///
/// assert_eq!(validate("worm", &root, ["silk"], &dictionary), Ok(3));
/// assert_eq!(
///     validate("worm", &root, ["worm"], &dictionary),
///     Err(Rejection::AlreadyUsed)
/// );
/// ```
pub fn validate<'a, I, D>(
    word: &str,
    root: &RootWord,
    used_words: I,
    dictionary: &D,
) -> Result<u32, Rejection>
where
    I: IntoIterator<Item = &'a str>,
    D: Dictionary + ?Sized,
{
    if !is_original(word, used_words) {
        return Err(Rejection::AlreadyUsed);
    }

    if !is_possible(word, root) {
        return Err(Rejection::NotPossible {
            root: root.text().to_string(),
        });
    }

    if !is_real(word, dictionary) {
        return Err(Rejection::NotRecognized);
    }

    if !is_start(word, root) {
        return Err(Rejection::SharesPrefix);
    }

    Ok(score(word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const NONE: [&str; 0] = [];

    fn known(word: &str, _language: &str) -> bool {
        ["silkworm", "silk", "worm", "milk", "owl", "word", "swirl"].contains(&word)
    }

    fn silkworm() -> RootWord {
        RootWord::new("silkworm").unwrap()
    }

    #[test]
    fn accepts_and_scores() {
        let root = silkworm();
        assert_eq!(validate("owl", &root, NONE, &known), Ok(1));
        assert_eq!(validate("worm", &root, NONE, &known), Ok(3));
        assert_eq!(validate("swirl", &root, NONE, &known), Ok(3));
    }

    #[test]
    fn rejects_repeat() {
        assert_eq!(
            validate("worm", &silkworm(), ["milk", "worm"], &known),
            Err(Rejection::AlreadyUsed)
        );
    }

    #[test]
    fn rejects_impossible() {
        assert_eq!(
            validate("word", &silkworm(), NONE, &known),
            Err(Rejection::NotPossible {
                root: "silkworm".to_string()
            })
        );
    }

    #[test]
    fn rejects_unknown() {
        assert_eq!(
            validate("wolm", &silkworm(), NONE, &known),
            Err(Rejection::NotRecognized)
        );
    }

    #[test]
    fn rejects_shared_prefix() {
        let root = silkworm();
        assert_eq!(
            validate("silk", &root, NONE, &known),
            Err(Rejection::SharesPrefix)
        );
        assert_eq!(
            validate("silkworm", &root, NONE, &known),
            Err(Rejection::SharesPrefix)
        );
    }

    #[test]
    fn originality_checked_before_possibility() {
        // Impossible and repeated: reported as repeated
        assert_eq!(
            validate("word", &silkworm(), ["word"], &known),
            Err(Rejection::AlreadyUsed)
        );
    }

    #[test]
    fn possibility_checked_before_reality() {
        // Impossible and unknown: reported as impossible
        assert!(matches!(
            validate("zzz", &silkworm(), NONE, &known),
            Err(Rejection::NotPossible { .. })
        ));
    }

    #[test]
    fn reality_checked_before_prefix() {
        // Shares the prefix and unknown: reported as unknown
        assert_eq!(
            validate("silo", &silkworm(), NONE, &known),
            Err(Rejection::NotRecognized)
        );
    }

    #[test]
    fn dictionary_skipped_for_impossible_words() {
        let lookups = Cell::new(0);
        let counting = |word: &str, language: &str| {
            lookups.set(lookups.get() + 1);
            known(word, language)
        };

        let root = silkworm();
        let _ = validate("word", &root, NONE, &counting);
        let _ = validate("worm", &root, ["worm"], &counting);
        assert_eq!(lookups.get(), 0);

        let _ = validate("worm", &root, NONE, &counting);
        assert_eq!(lookups.get(), 1);
    }
}

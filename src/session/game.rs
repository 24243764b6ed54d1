//! Session transitions
//!
//! [`Game`] wires the rules to the two external collaborators, a
//! [`Dictionary`] and a [`WordSource`], and exposes the only two operations
//! a front end needs: start a session and submit a word.

use super::state::SessionState;
use crate::core::{RootWord, normalize};
use crate::dictionary::Dictionary;
use crate::rules::{Rejection, validate};
use crate::wordlists::WordSource;
use crate::wordlists::loader::normalize_list;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, warn};

/// Outcome of submitting raw input to a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// The word passed every check; carries the updated session
    Accepted(SessionState),
    /// A check failed; the session is unchanged
    Rejected(Rejection),
    /// The input was blank after normalization; nothing to report
    Ignored,
}

/// Game engine
///
/// Holds the dictionary oracle and the root word source.
pub struct Game<D, W> {
    dictionary: D,
    source: W,
}

impl<D: Dictionary, W: WordSource> Game<D, W> {
    /// Create a new game from a dictionary and a root word source
    pub const fn new(dictionary: D, source: W) -> Self {
        Self { dictionary, source }
    }

    /// The dictionary used by the reality check
    pub const fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// Start a fresh session with a randomly chosen root word
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use word_scramble::session::Game;
    ///
    /// let game = Game::new(|_: &str, _: &str| true, vec!["airplane".to_string()]);
    /// let session = game.start_session(&mut StdRng::seed_from_u64(7));
    ///
    /// assert_eq!(session.root().text(), "airplane");
    /// assert_eq!(session.total_score(), 0);
    /// ```
    pub fn start_session<R: Rng + ?Sized>(&self, rng: &mut R) -> SessionState {
        SessionState::new(self.pick_root_word(rng))
    }

    /// Choose a root word uniformly from the word source
    ///
    /// Falls back to the default root word if the source fails or has no
    /// usable entries.
    pub fn pick_root_word<R: Rng + ?Sized>(&self, rng: &mut R) -> RootWord {
        let words = match self.source.load() {
            Ok(words) => normalize_list(words),
            Err(err) => {
                warn!(error = %err, "word source unavailable");
                Vec::new()
            }
        };

        if let Some(root) = words.choose(rng).and_then(|word| RootWord::new(word).ok()) {
            debug!(root = %root, candidates = words.len(), "selected root word");
            return root;
        }

        let root = RootWord::fallback();
        warn!(root = %root, "no root words available, using default");
        root
    }

    /// Submit raw player input against `session`
    ///
    /// The input is normalized first. Blank input is ignored. Otherwise the
    /// word is validated; on success the returned session has the word and
    /// its score prepended.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RootWord;
    /// use word_scramble::session::{Game, SessionState, SubmitResult};
    ///
    /// let game = Game::new(|word: &str, _: &str| word == "worm", Vec::<String>::new());
    /// let session = SessionState::new(RootWord::new("silkworm").unwrap());
    ///
    /// let SubmitResult::Accepted(next) = game.submit(" Worm\n", &session) else {
    ///     panic!("worm should be accepted");
    /// };
    /// assert_eq!(next.total_score(), 3);
    /// assert_eq!(game.submit("   ", &next), SubmitResult::Ignored);
    /// ```
    pub fn submit(&self, raw_input: &str, session: &SessionState) -> SubmitResult {
        let answer = normalize(raw_input);
        if answer.is_empty() {
            debug!("ignoring blank submission");
            return SubmitResult::Ignored;
        }

        match validate(
            &answer,
            session.root(),
            session.used_words(),
            &self.dictionary,
        ) {
            Ok(points) => {
                debug!(word = %answer, points, "accepted word");
                let mut next = session.clone();
                next.record(answer, points);
                SubmitResult::Accepted(next)
            }
            Err(rejection) => {
                debug!(word = %answer, reason = rejection.title(), "rejected word");
                SubmitResult::Rejected(rejection)
            }
        }
    }
}

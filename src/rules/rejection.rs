//! Rejection reasons surfaced to the player

use std::fmt;

/// Why a submitted word was not accepted
///
/// Each validation check maps to exactly one variant, and each variant to one
/// title/message pair shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The word was already accepted this session
    AlreadyUsed,
    /// The word needs letters the root word does not have
    NotPossible { root: String },
    /// The dictionary does not know the word
    NotRecognized,
    /// The word starts with the same letters as the root word
    SharesPrefix,
}

impl Rejection {
    /// Short alert title
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::AlreadyUsed => "Word used already",
            Self::NotPossible { .. } => "Word not possible",
            Self::NotRecognized => "Word not recognized",
            Self::SharesPrefix => "First letter of the word",
        }
    }

    /// Alert body
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::AlreadyUsed => "Be more original".to_string(),
            Self::NotPossible { root } => format!("You can't spell that word from '{root}'!"),
            Self::NotRecognized => "You can't just make them up, you know!".to_string(),
            Self::SharesPrefix => "You can't just take the first letters...".to_string(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

impl std::error::Error for Rejection {}

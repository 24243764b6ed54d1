//! Game sessions
//!
//! Session state and the transitions that start and advance it.

mod game;
mod state;

pub use game::{Game, SubmitResult};
pub use state::{ScoredWord, SessionState};

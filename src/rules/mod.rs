//! Game rules
//!
//! The four validation checks, the rejection each one produces, and the
//! ordered validator that combines them with scoring.

mod checks;
mod rejection;
mod validator;

pub use checks::{PREFIX_LENGTH, is_original, is_possible, is_real, is_start};
pub use rejection::Rejection;
pub use validator::validate;

//! Command implementations

pub mod answers;
pub mod check;
pub mod simple;

pub use answers::{AnswersResult, find_answers};
pub use check::{CheckOutcome, CheckResult, CheckStep, check_words};
pub use simple::run_simple;

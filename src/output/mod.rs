//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{
    print_accepted, print_answers_result, print_check_result, print_rejection,
    print_root_banner, print_session_words,
};

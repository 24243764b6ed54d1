//! Display functions for command results

use super::formatters::{format_entry, plural, spaced_letters};
use crate::commands::{AnswersResult, CheckOutcome, CheckResult};
use crate::rules::Rejection;
use crate::session::{ScoredWord, SessionState};
use colored::Colorize;

/// Print the root word banner for a new session
pub fn print_root_banner(session: &SessionState) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}",
        spaced_letters(session.root().text()).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());
}

/// Print an accepted word with the running score
pub fn print_accepted(entry: &ScoredWord, total_score: u32) {
    println!(
        "{} {}  {}",
        "✓".green().bold(),
        format_entry(entry).bright_white(),
        format!("Score: {total_score}").bright_cyan()
    );
}

/// Print a rejection as title and message
pub fn print_rejection(rejection: &Rejection) {
    println!(
        "{} {}",
        format!("✗ {}", rejection.title()).red().bold(),
        rejection.message()
    );
}

/// Print every accepted word, most recent first, and the total
pub fn print_session_words(session: &SessionState) {
    if session.is_empty() {
        println!("No words yet.");
        return;
    }

    for entry in session.entries() {
        println!("  {}", format_entry(entry));
    }
    println!(
        "\n{}",
        format!("Score: {}", session.total_score()).bright_cyan().bold()
    );
}

/// Print the result of the answer finder
pub fn print_answers_result(result: &AnswersResult, limit: Option<usize>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ANSWERS FOR".bright_cyan().bold(),
        spaced_letters(&result.root).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📖 Scanned {}, found {}",
        plural(result.words_scanned, "word"),
        plural(result.answers.len(), "answer")
    );

    let shown = limit.unwrap_or(result.answers.len());
    for entry in result.answers.iter().take(shown) {
        println!("  {}", format_entry(entry));
    }
    if shown < result.answers.len() {
        println!("  … {} more", result.answers.len() - shown);
    }

    println!(
        "\n{}",
        format!("Maximum score: {}", result.max_score)
            .bright_green()
            .bold()
    );
}

/// Print the verdict for each checked word
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Checking against: {}",
        spaced_letters(&result.root).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for step in &result.steps {
        match &step.outcome {
            CheckOutcome::Accepted(entry) => {
                println!("{} {}", "✓".green().bold(), format_entry(entry));
            }
            CheckOutcome::Rejected(rejection) => {
                println!(
                    "{} {:<12} {} {}",
                    "✗".red().bold(),
                    step.input.trim(),
                    rejection.title().red(),
                    rejection.message().bright_black()
                );
            }
            CheckOutcome::Ignored => {
                println!("{} {}", "·".bright_black(), "(blank, ignored)".bright_black());
            }
        }
    }

    println!(
        "\n{}",
        format!("Score: {}", result.total_score).bright_cyan().bold()
    );
}

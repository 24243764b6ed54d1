//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::dictionary::Dictionary;
use crate::output::{
    print_accepted, print_rejection, print_root_banner, print_session_words,
};
use crate::session::{Game, SubmitResult};
use crate::wordlists::WordSource;
use rand::Rng;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<D, W, R>(game: &Game<D, W>, rng: &mut R) -> Result<(), String>
where
    D: Dictionary,
    W: WordSource,
    R: Rng + ?Sized,
{
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Word Scramble - Simple Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Spell as many words as you can from the letters of the root word.");
    println!("  - 3 letters or fewer: 1 point");
    println!("  - 4 or 5 letters:     3 points");
    println!("  - 6 letters or more:  5 points\n");
    println!("Commands: ':new' for a new word, ':words' to list your words, ':quit' to exit");

    let mut session = game.start_session(rng);
    print_root_banner(&session);

    loop {
        let Some(input) = get_user_input("Your word")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match input.trim() {
            ":quit" | ":q" | ":exit" => {
                println!("\n👋 Final score: {}\n", session.total_score());
                return Ok(());
            }
            ":new" | ":n" => {
                session = game.start_session(rng);
                println!("\n🔄 New word!");
                print_root_banner(&session);
            }
            ":words" | ":w" => print_session_words(&session),
            _ => match game.submit(&input, &session) {
                SubmitResult::Accepted(next) => {
                    session = next;
                    if let Some(entry) = session.latest() {
                        print_accepted(entry, session.total_score());
                    }
                }
                SubmitResult::Rejected(rejection) => print_rejection(&rejection),
                SubmitResult::Ignored => {}
            },
        }
    }
}

/// Get user input with a prompt
///
/// Returns `None` at end of input.
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input))
}

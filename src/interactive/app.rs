//! TUI application state and logic

use crate::dictionary::Dictionary;
use crate::session::{Game, SessionState, SubmitResult};
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, D, W> {
    pub game: &'a Game<D, W>,
    pub session: SessionState,
    pub input_buffer: String,
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub rng: StdRng,
    pub should_quit: bool,
}

/// Modal error shown after a rejected word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, D: Dictionary, W: WordSource> App<'a, D, W> {
    /// Create the app and start the first session
    #[must_use]
    pub fn new(game: &'a Game<D, W>, mut rng: StdRng) -> Self {
        let session = game.start_session(&mut rng);

        Self {
            game,
            session,
            input_buffer: String::new(),
            alert: None,
            messages: vec![Message {
                text: "Spell words from the letters above. Enter to submit.".to_string(),
                style: MessageStyle::Info,
            }],
            rng,
            should_quit: false,
        }
    }

    /// Throw the current session away and start over with a new root word
    pub fn new_game(&mut self) {
        self.session = self.game.start_session(&mut self.rng);
        self.input_buffer.clear();
        self.alert = None;
        self.messages.clear();
        self.add_message(
            &format!("New word: {}", self.session.root().text().to_uppercase()),
            MessageStyle::Info,
        );
    }

    /// Submit the input buffer
    ///
    /// Accepted words clear the buffer. Rejected words open an alert and keep
    /// the buffer for correction. Blank input does nothing.
    pub fn submit_input(&mut self) {
        match self.game.submit(&self.input_buffer, &self.session) {
            SubmitResult::Accepted(next) => {
                self.session = next;
                self.input_buffer.clear();
                if let Some(entry) = self.session.latest() {
                    let text = format!("+{} for {}", entry.score, entry.word.to_uppercase());
                    self.add_message(&text, MessageStyle::Success);
                }
            }
            SubmitResult::Rejected(rejection) => {
                self.add_message(rejection.title(), MessageStyle::Error);
                self.alert = Some(Alert {
                    title: rejection.title().to_string(),
                    message: rejection.message(),
                });
            }
            SubmitResult::Ignored => {}
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Route a key press to the app
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // An open alert swallows input until dismissed
        if self.alert.is_some() {
            if matches!(code, KeyCode::Enter | KeyCode::Esc) {
                self.dismiss_alert();
            }
            return;
        }

        match code {
            KeyCode::Char('n') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_game();
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => {
                self.submit_input();
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<D: Dictionary, W: WordSource>(app: App<'_, D, W>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, D, W>(terminal: &mut Terminal<B>, mut app: App<'_, D, W>) -> Result<()>
where
    B: ratatui::backend::Backend,
    D: Dictionary,
    W: WordSource,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;
    use rand::SeedableRng;

    type TestGame = Game<WordListDictionary, Vec<String>>;

    fn game() -> TestGame {
        Game::new(
            WordListDictionary::english(["silk", "worm", "milk", "owl"]),
            vec!["silkworm".to_string()],
        )
    }

    fn app(game: &TestGame) -> App<'_, WordListDictionary, Vec<String>> {
        App::new(game, StdRng::seed_from_u64(1))
    }

    fn type_word<D: Dictionary, W: WordSource>(app: &mut App<'_, D, W>, word: &str) {
        for c in word.chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    #[test]
    fn starts_with_root_word() {
        let game = game();
        let app = app(&game);
        assert_eq!(app.session.root().text(), "silkworm");
        assert!(app.session.is_empty());
        assert!(app.alert.is_none());
    }

    #[test]
    fn accepted_word_clears_input() {
        let game = game();
        let mut app = app(&game);

        type_word(&mut app, "worm");
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.session.total_score(), 3);
        assert!(app.alert.is_none());
        assert_eq!(
            app.messages.last().map(|m| m.style.clone()),
            Some(MessageStyle::Success)
        );
    }

    #[test]
    fn rejected_word_keeps_input_and_opens_alert() {
        let game = game();
        let mut app = app(&game);

        type_word(&mut app, "silk");
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(app.input_buffer, "silk");
        assert_eq!(
            app.alert,
            Some(Alert {
                title: "First letter of the word".to_string(),
                message: "You can't just take the first letters...".to_string(),
            })
        );
        assert!(app.session.is_empty());
    }

    #[test]
    fn alert_swallows_keys_until_dismissed() {
        let game = game();
        let mut app = app(&game);

        type_word(&mut app, "wrom");
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert!(app.alert.is_some());

        type_word(&mut app, "xyz");
        assert_eq!(app.input_buffer, "wrom");

        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.alert.is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn blank_submission_does_nothing() {
        let game = game();
        let mut app = app(&game);
        let messages = app.messages.len();

        type_word(&mut app, "   ");
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);

        assert!(app.alert.is_none());
        assert_eq!(app.messages.len(), messages);
        assert_eq!(app.input_buffer, "   ");
    }

    #[test]
    fn new_game_resets_session() {
        let game = game();
        let mut app = app(&game);

        type_word(&mut app, "owl");
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        type_word(&mut app, "mi");
        assert_eq!(app.session.total_score(), 1);

        app.handle_key(KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert!(app.session.is_empty());
        assert_eq!(app.session.total_score(), 0);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn backspace_and_quit() {
        let game = game();
        let mut app = app(&game);

        type_word(&mut app, "ow");
        app.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(app.input_buffer, "o");

        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let game = game();
        let mut app = app(&game);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }
}

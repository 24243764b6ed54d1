//! TUI rendering with ratatui
//!
//! Single screen: root word, input field, accepted words and score.

use super::app::{Alert, App, MessageStyle};
use crate::output::formatters::{letter_badge, spaced_letters};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<D, W>(f: &mut Frame, app: &App<'_, D, W>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Root word
            Constraint::Length(3), // Input
            Constraint::Min(8),    // Words and messages
            Constraint::Length(3), // Score
            Constraint::Length(1), // Help
        ])
        .split(f.area());

    render_root_word(f, app, chunks[0]);
    render_input(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Used words
            Constraint::Percentage(40), // Messages
        ])
        .split(chunks[2]);

    render_words(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_score(f, app, chunks[3]);
    render_help(f, app, chunks[4]);

    if let Some(alert) = &app.alert {
        render_alert(f, alert);
    }
}

fn render_root_word<D, W>(f: &mut Frame, app: &App<'_, D, W>, area: Rect) {
    let header = Paragraph::new(spaced_letters(app.session.root().text()))
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word Scramble ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_input<D, W>(f: &mut Frame, app: &App<'_, D, W>, area: Rect) {
    let (content, style) = if app.input_buffer.is_empty() {
        (
            "Enter your word",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (
            app.input_buffer.as_str(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    };

    let input = Paragraph::new(content).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Yellow)),
    );

    f.render_widget(input, area);
}

fn render_words<D, W>(f: &mut Frame, app: &App<'_, D, W>, area: Rect) {
    let items: Vec<ListItem> = app
        .session
        .entries()
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>4} ", letter_badge(entry.letter_count())),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!("{:<14}", entry.word),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("+ {}", entry.score),
                    Style::default().fg(Color::Green),
                ),
            ]))
        })
        .collect();

    let title = format!(" Words ({}) ", app.session.len());
    let words = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(words, area);
}

fn render_messages<D, W>(f: &mut Frame, app: &App<'_, D, W>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_score<D, W>(f: &mut Frame, app: &App<'_, D, W>, area: Rect) {
    let score = Paragraph::new(format!("Score: {}", app.session.total_score()))
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(score, area);
}

fn render_help<D, W>(f: &mut Frame, app: &App<'_, D, W>, area: Rect) {
    let help_text = if app.alert.is_some() {
        "Enter/Esc: Dismiss | Ctrl+C: Quit"
    } else {
        "Enter: Submit | Ctrl+N: New Word | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn render_alert(f: &mut Frame, alert: &Alert) {
    let area = centered_rect(50, 7, f.area());

    let content = vec![
        Line::from(""),
        Line::from(alert.message.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let popup = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", alert.title))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .style(Style::default().fg(Color::Red)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// Rectangle of `percent_x` width and `height` rows centered in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

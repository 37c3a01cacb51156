//! TUI rendering with ratatui
//!
//! Guess grid, on-screen keyboard, and session panels for the name
//! guessing game.

use super::app::{App, InputMode, KEYBOARD_ROWS, MessageStyle};
use crate::core::LetterStatus;
use crate::round::MAX_TRIES;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                    // Header
            Constraint::Min(MAX_TRIES as u16 + 2),    // Main content
            Constraint::Length(5),                    // Keyboard
            Constraint::Length(3),                    // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Main content area - grid on the left, subject info on the right
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

const fn status_colors(status: LetterStatus) -> (Color, Color) {
    match status {
        LetterStatus::Correct => (Color::White, Color::Green),
        LetterStatus::Present => (Color::White, Color::Yellow),
        LetterStatus::Absent => (Color::White, Color::DarkGray),
        LetterStatus::None => (Color::Reset, Color::Reset),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🧩 NORDLE - who's behind the photo?")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let target_len = app.round.target().len();
    let grid = app.round.display_statuses();
    let guesses = app.round.guesses();
    let typed: Vec<char> = app.input.chars().collect();

    let mut lines = Vec::with_capacity(MAX_TRIES);
    for row_index in 0..app.round.max_tries() {
        let mut spans = vec![Span::raw(" ")];

        for col in 0..target_len {
            let (cell, status) = if row_index < guesses.len() {
                (guesses[row_index].chars()[col], grid[row_index][col])
            } else if row_index == guesses.len() && !app.round.is_over() {
                // Row being typed
                (
                    typed.get(col).copied().unwrap_or(' '),
                    LetterStatus::None,
                )
            } else {
                (' ', LetterStatus::None)
            };

            let (fg, bg) = status_colors(status);
            let style = if status == LetterStatus::None {
                Style::default().fg(Color::White).bg(Color::Black)
            } else {
                Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
            };

            spans.push(Span::styled(format!(" {cell} "), style));
            spans.push(Span::raw(" "));
        }

        lines.push(Line::from(spans));
        lines.push(Line::raw(""));
    }

    let grid_widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" Guesses ({target_len} letters) "))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(grid_widget, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);

    render_subject(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_subject(f: &mut Frame, app: &App, area: Rect) {
    let photo_line = if app.show_photo {
        Line::from(vec![
            Span::raw("Photo: "),
            Span::styled(
                app.current_subject().image_url.clone(),
                Style::default().fg(Color::Blue),
            ),
        ])
    } else {
        Line::from(Span::styled(
            "Photo hidden (TAB to show)",
            Style::default().fg(Color::DarkGray),
        ))
    };

    let content = vec![
        Line::from(format!("Round {}", app.round_number())),
        photo_line,
        Line::from(format!("Tries left: {}", app.round.tries_left())),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Who is this? ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let key_statuses = app.round.keyboard_statuses();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let mut spans = Vec::new();
            for key in row.chars() {
                let status = key_statuses
                    .get(&key)
                    .copied()
                    .unwrap_or(LetterStatus::None);
                let (fg, bg) = status_colors(status);
                let style = if status == LetterStatus::None {
                    Style::default().fg(Color::White)
                } else {
                    Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
                };
                spans.push(Span::styled(format!(" {key} "), style));
            }
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Keyboard ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let stats_text = format!(
        "Rounds: {} | Won: {}",
        app.stats.total_rounds, app.stats.rounds_won
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let score = Paragraph::new(format!("Score: {}", app.session_score))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    f.render_widget(score, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Guessing => "Type letters | Enter: Submit | TAB: Photo | Esc: Quit",
        InputMode::RoundOver => "n/Enter: Next person | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

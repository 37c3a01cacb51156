//! TUI application state and logic

use crate::core::{Guess, Target};
use crate::round::{GuessOutcome, MAX_TRIES, POINTS_PER_NAME, RoundOutcome, WordleRound};
use crate::roster::Subject;
use anyhow::{Context, Result, bail};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// On-screen keyboard rows, top to bottom.
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOPÅ", "ASDFGHJKLØÆ", "ZXCVBNM"];

/// Application state
pub struct App {
    roster: Vec<Subject>,
    targets: Vec<Target>,
    subject_index: usize,
    pub round: WordleRound,
    pub input: String,
    pub show_photo: bool,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub session_score: u32,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_rounds: usize,
    pub rounds_won: usize,
    pub guess_distribution: [usize; MAX_TRIES + 1],
}

impl App {
    /// Build a session over a roster.
    ///
    /// Every subject's target is constructed up front, so later round
    /// transitions cannot fail.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty roster or a subject without a
    /// usable first name.
    pub fn new(roster: Vec<Subject>) -> Result<Self> {
        if roster.is_empty() {
            bail!("Cannot start a game with an empty roster");
        }

        let targets: Vec<Target> = roster
            .iter()
            .map(|subject| {
                Target::new(subject.first_name())
                    .with_context(|| format!("Subject '{}' has no first name", subject.name))
            })
            .collect::<Result<_>>()?;

        let round = WordleRound::new(targets[0].clone());

        let mut app = Self {
            roster,
            targets,
            subject_index: 0,
            round,
            input: String::new(),
            show_photo: true,
            messages: Vec::new(),
            stats: Statistics::default(),
            session_score: 0,
            input_mode: InputMode::Guessing,
            should_quit: false,
        };
        app.add_message(
            "Guess the first name of the person in the photo!",
            MessageStyle::Info,
        );
        Ok(app)
    }

    #[must_use]
    pub fn current_subject(&self) -> &Subject {
        &self.roster[self.subject_index]
    }

    /// Round number within the session, 1-based.
    #[must_use]
    pub fn round_number(&self) -> usize {
        self.stats.total_rounds + 1
    }

    /// Whether a letter is on the on-screen keyboard.
    ///
    /// Input is restricted to the keyboard alphabet; the evaluator
    /// itself accepts anything, the restriction lives here.
    #[must_use]
    pub fn is_keyboard_letter(letter: char) -> bool {
        KEYBOARD_ROWS
            .iter()
            .any(|row| row.contains(letter))
    }

    pub fn push_letter(&mut self, letter: char) {
        if self.input_mode != InputMode::Guessing {
            return;
        }
        let upper: String = letter.to_uppercase().collect();
        let Some(upper) = upper.chars().next() else {
            return;
        };
        if !Self::is_keyboard_letter(upper) {
            return;
        }
        if self.input.chars().count() < self.round.target().len() {
            self.input.push(upper);
        }
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn submit_guess(&mut self) {
        if self.input_mode != InputMode::Guessing {
            return;
        }
        if self.input.chars().count() != self.round.target().len() {
            self.add_message("Complete the name first!", MessageStyle::Error);
            return;
        }

        let guess = Guess::new(&self.input);
        self.input.clear();

        match self.round.submit(guess) {
            Ok(GuessOutcome::Won) => {
                let tries = self.round.guesses().len();
                self.finish_round(RoundOutcome::Won, tries);
            }
            Ok(GuessOutcome::Lost) => {
                let tries = self.round.guesses().len();
                self.finish_round(RoundOutcome::Lost, tries);
            }
            Ok(GuessOutcome::Continue { tries_left }) => {
                self.add_message(
                    &format!(
                        "{tries_left} {} left",
                        if tries_left == 1 { "try" } else { "tries" }
                    ),
                    MessageStyle::Info,
                );
            }
            Err(err) => {
                // Unreachable through the TUI: mode and length are
                // checked above. Surface it anyway.
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    fn finish_round(&mut self, outcome: RoundOutcome, tries: usize) {
        self.stats.total_rounds += 1;
        self.input_mode = InputMode::RoundOver;

        let name = self.current_subject().name.clone();
        match outcome {
            RoundOutcome::Won => {
                self.stats.rounds_won += 1;
                if tries <= MAX_TRIES {
                    self.stats.guess_distribution[tries] += 1;
                }
                self.session_score += POINTS_PER_NAME;

                let celebration = match tries {
                    1 => "🎯 First try! Do you two share an office?",
                    2 => "🔥 Two guesses!",
                    3 => "✨ Three guesses!",
                    _ => "🎉 Got it!",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message(&format!("That was {name}."), MessageStyle::Success);
            }
            RoundOutcome::Lost => {
                self.add_message(
                    &format!("😅 Out of tries - that was {name}."),
                    MessageStyle::Error,
                );
            }
        }
        self.add_message("Press 'n' for the next person or 'q' to quit.", MessageStyle::Info);
    }

    /// Advance to the next subject and reset the round.
    pub fn next_round(&mut self) {
        self.subject_index = (self.subject_index + 1) % self.roster.len();
        self.round.reset(self.targets[self.subject_index].clone());
        self.input.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New round! Who is this?", MessageStyle::Info);
    }

    pub fn toggle_photo(&mut self) {
        self.show_photo = !self.show_photo;
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
}

/// Run the TUI application.
///
/// Returns the session score so the caller can record it in the ledger.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<u32> {
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

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<u32> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::Guessing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Tab => {
                        app.toggle_photo();
                    }
                    KeyCode::Char(c) => {
                        app.push_letter(c);
                    }
                    KeyCode::Backspace => {
                        app.backspace();
                    }
                    KeyCode::Enter => {
                        app.submit_guess();
                    }
                    _ => {}
                },
                InputMode::RoundOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') | KeyCode::Enter => {
                        app.next_round();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.session_score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_app() -> App {
        let roster = vec![
            Subject::new("Lisa Holm", "https://example.com/lisa.png"),
            Subject::new("Robin Andersen", "https://example.com/robin.png"),
        ];
        App::new(roster).unwrap()
    }

    #[test]
    fn empty_roster_is_rejected() {
        assert!(App::new(Vec::new()).is_err());
    }

    #[test]
    fn nameless_subject_is_rejected() {
        let roster = vec![Subject::new("  ", "url")];
        assert!(App::new(roster).is_err());
    }

    #[test]
    fn input_caps_at_target_length() {
        let mut app = demo_app();
        for c in "lisabet".chars() {
            app.push_letter(c);
        }
        assert_eq!(app.input, "LISA");
    }

    #[test]
    fn input_rejects_non_keyboard_characters() {
        let mut app = demo_app();
        app.push_letter('1');
        app.push_letter('!');
        app.push_letter('l');
        assert_eq!(app.input, "L");
    }

    #[test]
    fn keyboard_covers_norwegian_letters() {
        for letter in ['Å', 'Ø', 'Æ', 'A', 'Z'] {
            assert!(App::is_keyboard_letter(letter));
        }
        assert!(!App::is_keyboard_letter('1'));
    }

    #[test]
    fn incomplete_guess_is_not_submitted() {
        let mut app = demo_app();
        app.push_letter('l');
        app.submit_guess();

        assert!(app.round.guesses().is_empty());
        assert_eq!(app.input, "L");
    }

    #[test]
    fn winning_guess_finishes_the_round() {
        let mut app = demo_app();
        for c in "lisa".chars() {
            app.push_letter(c);
        }
        app.submit_guess();

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.stats.rounds_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
        assert_eq!(app.session_score, POINTS_PER_NAME);
    }

    #[test]
    fn letters_are_ignored_while_round_over() {
        let mut app = demo_app();
        for c in "lisa".chars() {
            app.push_letter(c);
        }
        app.submit_guess();

        app.push_letter('x');
        assert!(app.input.is_empty());
    }

    #[test]
    fn next_round_advances_subject_and_resets() {
        let mut app = demo_app();
        for c in "lisa".chars() {
            app.push_letter(c);
        }
        app.submit_guess();
        app.next_round();

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.current_subject().first_name(), "Robin");
        assert_eq!(app.round.target().text(), "ROBIN");
        assert!(app.round.guesses().is_empty());
    }

    #[test]
    fn roster_wraps_around() {
        let mut app = demo_app();
        app.next_round();
        app.next_round();
        assert_eq!(app.current_subject().first_name(), "Lisa");
    }

    #[test]
    fn losing_rounds_count_without_score() {
        let mut app = demo_app();
        for _ in 0..MAX_TRIES {
            for c in "sail".chars() {
                app.push_letter(c);
            }
            app.submit_guess();
        }

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.stats.total_rounds, 1);
        assert_eq!(app.stats.rounds_won, 0);
        assert_eq!(app.session_score, 0);
    }
}

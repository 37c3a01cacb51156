//! Formatting utilities for terminal output

use crate::core::{Guess, LetterStatus, StatusRow};
use colored::{ColoredString, Colorize};

/// Format a status row as an emoji string.
///
/// Unevaluated positions render as the dark square, matching the empty
/// grid cells in the interactive game.
#[must_use]
pub fn row_to_emoji(row: &[LetterStatus]) -> String {
    row.iter()
        .map(|status| match status {
            LetterStatus::Correct => '🟩',
            LetterStatus::Present => '🟨',
            LetterStatus::Absent => '⬜',
            LetterStatus::None => '⬛',
        })
        .collect()
}

/// Color one guessed letter cell for CLI printing.
#[must_use]
pub fn colored_letter(letter: char, status: LetterStatus) -> ColoredString {
    let cell = format!(" {letter} ");
    match status {
        LetterStatus::Correct => cell.white().bold().on_green(),
        LetterStatus::Present => cell.white().bold().on_yellow(),
        LetterStatus::Absent => cell.white().on_bright_black(),
        LetterStatus::None => cell.normal(),
    }
}

/// Format a full guess row as colored letter cells.
#[must_use]
pub fn format_guess_row(guess: &Guess, row: &StatusRow) -> String {
    guess
        .chars()
        .iter()
        .zip(row)
        .map(|(&letter, &status)| colored_letter(letter, status).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render remaining lives as hearts, spent ones hollow.
#[must_use]
pub fn lives_meter(lives: u8, starting: u8) -> String {
    let full = usize::from(lives.min(starting));
    let spent = usize::from(starting) - full;
    format!("{}{}", "♥".repeat(full), "♡".repeat(spent))
}

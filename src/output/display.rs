//! Display functions for command results

use super::formatters::{format_guess_row, row_to_emoji};
use crate::round::WordleRound;
use crate::scores::{GameKind, ScoreBoard};
use colored::Colorize;

/// Print a finished wordle round: every guess row with its coloring and
/// the revealed name.
pub fn print_round_summary(round: &WordleRound, full_name: &str) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "That was {} - guesses:",
        full_name.bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let grid = round.display_statuses();
    for (guess, row) in round.guesses().iter().zip(&grid) {
        println!("  {}   {}", format_guess_row(guess, row), row_to_emoji(row));
    }
    println!();
}

/// Print the score ledger with per-game bests.
pub fn print_scoreboard(board: &ScoreBoard) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SCOREBOARD".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if board.is_empty() {
        println!("\nNo games recorded yet. Go play!\n");
        return;
    }

    println!();
    for (i, entry) in board.entries().iter().enumerate() {
        println!(
            "  {:>3}. {:<12} {}",
            i + 1,
            entry.game.to_string(),
            entry.score.to_string().bright_yellow()
        );
    }

    println!();
    for game in [GameKind::Wordle, GameKind::Gibberish] {
        if let Some(best) = board.best(game) {
            println!(
                "  Best {}: {}",
                game,
                best.to_string().bright_green().bold()
            );
        }
    }
    println!();
}

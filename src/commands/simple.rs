//! Simple CLI wordle mode
//!
//! Text-based name guessing without TUI: same rounds as the interactive
//! game, printed as colored rows.

use crate::core::{Guess, Target};
use crate::output::formatters::{format_guess_row, row_to_emoji};
use crate::output::print_round_summary;
use crate::round::{GuessOutcome, MAX_TRIES, POINTS_PER_NAME, RoundError, WordleRound};
use crate::roster::Subject;
use std::io::{self, Write};

/// Run wordle rounds over the given subjects in plain CLI mode.
///
/// Returns the session score (fifty points per guessed name).
///
/// # Errors
///
/// Returns an error if reading user input fails or a subject has no
/// usable first name.
pub fn run_simple(subjects: Vec<Subject>) -> Result<u32, String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Nordle - guess the first name                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the first name of the person in the photo, {MAX_TRIES} tries per name.");
    println!("🟩 right spot, 🟨 in the name, ⬜ not in the name.");
    println!("Commands: 'quit' to exit\n");

    let mut session_score = 0;

    for subject in subjects {
        let target = Target::new(subject.first_name()).map_err(|e| e.to_string())?;
        let mut round = WordleRound::new(target);

        println!("────────────────────────────────────────────────────────────");
        println!("Photo: {}", subject.image_url);
        println!(
            "The first name has {} letters. Go!\n",
            round.target().len()
        );

        while !round.is_over() {
            let input = get_user_input(&format!("Guess ({} tries left)", round.tries_left()))?;

            if matches!(input.to_lowercase().as_str(), "quit" | "q" | "exit") {
                println!("\n👋 Thanks for playing!\n");
                return Ok(session_score);
            }

            match round.submit(Guess::new(&input)) {
                Ok(outcome) => {
                    let grid = round.display_statuses();
                    let row = grid.last().expect("a guess was just submitted");
                    let guess = round.guesses().last().expect("a guess was just submitted");
                    println!("\n  {}   {}\n", format_guess_row(guess, row), row_to_emoji(row));

                    match outcome {
                        GuessOutcome::Won => {
                            session_score += POINTS_PER_NAME;
                            println!("🎉 Yes! Score: {session_score}");
                            print_round_summary(&round, &subject.name);
                        }
                        GuessOutcome::Lost => {
                            println!("😅 Out of tries.");
                            print_round_summary(&round, &subject.name);
                        }
                        GuessOutcome::Continue { .. } => {}
                    }
                }
                Err(RoundError::WrongLength { expected, found }) => {
                    println!("❌ The name has {expected} letters, you typed {found}.\n");
                }
                Err(RoundError::Finished) => break,
            }
        }

        match get_user_input("Next person? (yes/no)")?.to_lowercase().as_str() {
            "no" | "n" | "quit" | "q" => break,
            _ => {}
        }
    }

    println!(
        "\nSession over - final score: {session_score}\n"
    );
    Ok(session_score)
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
